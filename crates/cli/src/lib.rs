//! Icon extraction and deck restoration pipelines behind the `extract` and
//! `restore` binaries.

pub mod extract;
pub mod restore;

use anyhow::{bail, Context, Result};
use icondeck_core::{Presentation, PresentationFormat};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

pub use extract::{extract_icons, ExtractOptions, ExtractReport};
pub use restore::{restore_deck, RestoreOptions, RestoreSummary};

/// Open and parse a presentation, detecting its format from magic bytes
/// with the file extension as a fallback.
pub fn open_presentation(path: &Path) -> Result<Presentation> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 8];
    reader
        .read_exact(&mut magic)
        .with_context(|| format!("Failed to read file header of {}", path.display()))?;
    reader.rewind()?;

    let format = PresentationFormat::from_magic(&magic)
        .or_else(|| {
            path.extension()
                .and_then(|e| e.to_str())
                .and_then(PresentationFormat::from_extension)
        })
        .ok_or_else(|| anyhow::anyhow!("Could not detect file format of {}", path.display()))?;

    if format != PresentationFormat::Pptx {
        bail!(
            "{} is a legacy PowerPoint file; only .pptx is supported",
            path.display()
        );
    }

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    log::debug!("Parsing {} as PPTX", path.display());
    icondeck_pptx::PptxParser::new()
        .parse(reader, filename)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
}

/// Initialize logging the same way for both binaries.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

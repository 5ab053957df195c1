//! Rebuild a deck from a directory of icon PNGs, each labelled with its
//! file stem and laid out on a staggered grid.

use anyhow::{bail, Context, Result};
use icondeck_core::{GridLayout, LABEL_FONT_SIZE_PT};
use icondeck_pptx::writer::image_content_type;
use icondeck_pptx::{Deck, DeckSlide, TextAlign, TextStyle};
use image::ImageReader;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Extension, matched case-sensitively, of files picked up from the source
/// directory.
pub const ICON_EXTENSION: &str = ".png";

/// Slide background, 50% gray.
pub const BACKGROUND_COLOR: &str = "808080";

/// Label text colour.
pub const LABEL_COLOR: &str = "000000";

/// Inputs of one restore run.
#[derive(Debug, Clone)]
pub struct RestoreOptions {
    /// Directory holding the icon files.
    pub directory: PathBuf,
    /// Presentation file to write.
    pub output: PathBuf,
    pub layout: GridLayout,
}

/// Outcome of a restore run.
#[derive(Debug, Clone, Default)]
pub struct RestoreSummary {
    pub placed: usize,
    pub slides: usize,
    /// Files left out, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// An icon file that has been read and measured.
struct IconImage {
    label: String,
    data: Vec<u8>,
    extension: &'static str,
    aspect_ratio: f64,
}

/// Build the deck and save it to `options.output`.
///
/// Fails without creating the output when the directory does not exist.
pub fn restore_deck(options: &RestoreOptions) -> Result<RestoreSummary> {
    if !options.directory.exists() {
        bail!(
            "The directory '{}' does not exist.",
            options.directory.display()
        );
    }

    let files = collect_icon_files(&options.directory)?;
    log::debug!(
        "Found {} icon files in {}",
        files.len(),
        options.directory.display()
    );

    let (deck, summary) = build_deck(&files, &options.layout);

    deck.save(&options.output)
        .with_context(|| format!("Failed to save {}", options.output.display()))?;

    Ok(summary)
}

/// Regular files in `directory` whose name ends in [`ICON_EXTENSION`],
/// sorted by file name.
pub fn collect_icon_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory {}", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", directory.display()))?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(ICON_EXTENSION) {
            continue;
        }
        if !entry.path().is_file() {
            log::debug!("Skipping {}: not a regular file", entry.path().display());
            continue;
        }
        files.push(entry.path());
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Lay out every readable icon on gray slides. Unreadable files are
/// skipped and do not take up a grid cell.
pub fn build_deck(files: &[PathBuf], layout: &GridLayout) -> (Deck, RestoreSummary) {
    let mut deck = Deck::with_slide_size(layout.slide_width, layout.slide_height);
    deck.set_title("Icons");
    add_gray_slide(&mut deck);

    let style = label_style();
    let mut summary = RestoreSummary::default();
    let mut cursor = layout.cursor();

    for path in files {
        let icon = match load_icon(path) {
            Ok(icon) => icon,
            Err(e) => {
                log::warn!("Skipping {}: {:#}", path.display(), e);
                summary.skipped.push((path.clone(), format!("{:#}", e)));
                continue;
            }
        };

        let placement = cursor.place(icon.aspect_ratio);
        while deck.slide_count() <= placement.slide {
            add_gray_slide(&mut deck);
        }

        let Some(slide) = deck.slide_mut(placement.slide) else {
            continue;
        };
        if let Err(e) = slide.add_picture(icon.data, icon.extension, placement.icon, &icon.label) {
            log::warn!("Skipping {}: {}", path.display(), e);
            summary.skipped.push((path.clone(), e.to_string()));
            continue;
        }
        slide.add_text_box(placement.label, &icon.label, &style);

        log::debug!(
            "Placed '{}' on slide {} at row {}, column {}",
            icon.label,
            placement.slide + 1,
            placement.row,
            placement.column
        );
        summary.placed += 1;
    }

    summary.slides = deck.slide_count();
    (deck, summary)
}

fn add_gray_slide(deck: &mut Deck) -> &mut DeckSlide {
    let slide = deck.add_slide();
    slide.set_background(BACKGROUND_COLOR);
    slide
}

fn label_style() -> TextStyle {
    TextStyle {
        size: Some(LABEL_FONT_SIZE_PT),
        bold: true,
        color: Some(LABEL_COLOR.to_string()),
        align: TextAlign::Center,
        word_wrap: true,
    }
}

/// Read an icon file and measure it without decoding the pixels.
fn load_icon(path: &Path) -> Result<IconImage> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let reader = ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .context("Failed to sniff image format")?;
    let Some(format) = reader.format() else {
        bail!("unrecognized image data");
    };
    let extension = format
        .extensions_str()
        .iter()
        .copied()
        .find(|ext| image_content_type(ext).is_some())
        .with_context(|| format!("{:?} images cannot be embedded", format))?;

    let (width, height) = reader.into_dimensions().context("Failed to read dimensions")?;
    if width == 0 || height == 0 {
        bail!("image has no pixels");
    }

    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(IconImage {
        label,
        data,
        extension,
        aspect_ratio: width as f64 / height as f64,
    })
}

//! Extract icons and their labels from a PowerPoint file as PNG images.

use anyhow::Result;
use clap::Parser;
use icondeck_cli::{extract_icons, init_logging, ExtractOptions};
use std::path::PathBuf;

/// Extract icons and labels from a PowerPoint file and save them as images.
#[derive(Parser, Debug)]
#[command(name = "extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filename of the PowerPoint (.pptx) file to process
    filename: PathBuf,

    /// Output folder to save extracted images
    #[arg(short = 'o', long = "output_folder", default_value = "out")]
    output_folder: PathBuf,

    /// Also write a JSON manifest of the extracted icons
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = ExtractOptions {
        input: args.filename,
        output_dir: args.output_folder,
    };

    let report = extract_icons(&options)?;

    if let Some(path) = &args.report {
        report.write_json(path)?;
        log::debug!("Report written to {}", path.display());
    }

    if !report.skipped.is_empty() {
        eprintln!("Skipped {} pictures without a usable image", report.skipped.len());
    }
    println!("Icon extraction complete!");

    Ok(())
}

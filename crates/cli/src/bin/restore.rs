//! Generate a slide deck of labelled icons from a directory of PNG files.

use anyhow::Result;
use clap::Parser;
use icondeck_cli::{init_logging, restore_deck, RestoreOptions};
use icondeck_core::GridLayout;
use std::path::PathBuf;

/// Generate a PowerPoint slide deck with icons and labels from a specified directory.
#[derive(Parser, Debug)]
#[command(name = "restore")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the icon images
    #[arg(short, long, default_value = "out")]
    directory: PathBuf,

    /// Filename for the output PowerPoint file
    #[arg(short, long, default_value = "alltheicons.pptx")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = RestoreOptions {
        directory: args.directory,
        output: args.output,
        layout: GridLayout::default(),
    };

    let summary = restore_deck(&options)?;

    if args.verbose {
        eprintln!(
            "Placed {} icons on {} slides ({} skipped)",
            summary.placed,
            summary.slides,
            summary.skipped.len()
        );
    }
    println!("Presentation saved as {}", options.output.display());

    Ok(())
}

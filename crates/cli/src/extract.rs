//! Extract every picture of a presentation as a PNG named after its nearest
//! text label.

use crate::open_presentation;
use anyhow::{Context, Result};
use icondeck_core::{icon_file_stem, nearest_label, Position, Shape, Slide};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Inputs of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Presentation to read.
    pub input: PathBuf,
    /// Directory the PNG files are written to. Created when missing.
    pub output_dir: PathBuf,
}

/// A picture written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct SavedIcon {
    pub slide: usize,
    pub shape_id: u32,
    /// Nearest label as authored, before sanitization.
    pub label: Option<String>,
    pub position: Position,
    pub path: PathBuf,
}

/// A picture that could not be written.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedIcon {
    pub slide: usize,
    pub shape_id: u32,
    pub reason: String,
}

/// Outcome of an extraction run, serializable as a manifest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractReport {
    pub source: String,
    pub saved: Vec<SavedIcon>,
    pub skipped: Vec<SkippedIcon>,
}

impl ExtractReport {
    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }
}

/// Extract all pictures of `options.input` into `options.output_dir`.
///
/// Prints `Saved <path>` for every file written. Pictures without an
/// embedded blob, or whose blob cannot be decoded, are skipped with a
/// warning; any other failure aborts the run.
pub fn extract_icons(options: &ExtractOptions) -> Result<ExtractReport> {
    if !options.output_dir.exists() {
        fs::create_dir_all(&options.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                options.output_dir.display()
            )
        })?;
    }

    let presentation = open_presentation(&options.input)?;
    let mut report = ExtractReport {
        source: presentation.filename.clone(),
        ..ExtractReport::default()
    };

    for (slide, picture) in presentation.pictures() {
        match save_picture(slide, picture, &options.output_dir)? {
            Ok(saved) => {
                println!("Saved {}", saved.path.display());
                report.saved.push(saved);
            }
            Err(reason) => {
                log::warn!(
                    "Skipping shape {} on slide {}: {}",
                    picture.id,
                    slide.number,
                    reason
                );
                report.skipped.push(SkippedIcon {
                    slide: slide.number,
                    shape_id: picture.id,
                    reason,
                });
            }
        }
    }

    Ok(report)
}

/// Decode one picture and write it as PNG.
///
/// The outer error is fatal; the inner one is a per-picture reason to skip.
fn save_picture(
    slide: &Slide,
    picture: &Shape,
    output_dir: &Path,
) -> Result<std::result::Result<SavedIcon, String>> {
    let Some(blob) = picture.image_blob() else {
        return Ok(Err("no embedded image".to_string()));
    };

    let image = match image::load_from_memory(&blob.data) {
        Ok(image) => image,
        Err(e) => return Ok(Err(format!("cannot decode {}: {}", blob.part_name, e))),
    };

    // PNG has no floating point pixel formats.
    let image = if matches!(
        image,
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_)
    ) {
        DynamicImage::ImageRgba16(image.to_rgba16())
    } else {
        image
    };

    let stem = icon_file_stem(slide.number, picture, &slide.shapes);
    let path = output_dir.join(format!("{}.png", stem));
    image
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Ok(SavedIcon {
        slide: slide.number,
        shape_id: picture.id,
        label: nearest_label(picture, &slide.shapes).map(str::to_string),
        position: picture.position(),
        path,
    }))
}

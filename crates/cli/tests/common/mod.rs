//! Shared fixtures for the CLI integration tests.

#![allow(dead_code)]

use icondeck_core::{Presentation, Rect};
use icondeck_pptx::{Deck, PptxParser, TextStyle};
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Encode a solid-colour PNG in memory.
pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode png");
    buffer.into_inner()
}

/// Write a solid-colour PNG to `dir/name`.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    std::fs::write(dir.join(name), png_bytes(width, height, [200, 30, 30, 255]))
        .expect("write png");
}

pub fn read_deck(path: &Path) -> Presentation {
    let file = File::open(path).expect("open deck");
    PptxParser::new()
        .parse(BufReader::new(file), "deck.pptx")
        .expect("parse deck")
}

/// Add a picture and a label box under it, the way a hand-made icon sheet
/// is laid out.
pub fn add_labelled_icon(deck: &mut Deck, slide: usize, left: i64, top: i64, label: &str) {
    let slide = deck.slide_mut(slide).expect("slide exists");
    slide
        .add_picture(
            png_bytes(16, 16, [0, 0, 255, 255]),
            "png",
            Rect::new(left, top, 457_200, 457_200),
            label,
        )
        .expect("add picture");
    slide.add_text_box(
        Rect::new(left - 457_200, top + 548_640, 1_371_600, 457_200),
        label,
        &TextStyle::default(),
    );
}

//! Matching pictures to their nearest text label and turning labels into
//! file names.
//!
//! A label is the text of the text-bearing shape whose top-left corner is
//! closest to the picture's top-left corner. The label becomes the stem of
//! the extracted icon file, and the stem becomes the label again when icons
//! are restored into a deck.

use crate::types::{Position, Shape};

/// Characters kept in a file stem besides alphanumerics.
const STEM_EXTRA_CHARS: &[char] = &[' ', '_', '-'];

/// Euclidean distance between two anchor points, in EMU.
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = (b.left - a.left) as f64;
    let dy = (b.top - a.top) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Find the label nearest to `picture` among `shapes`.
///
/// Only shapes with non-blank text are candidates. Ties keep the shape
/// encountered first. Returns the trimmed label text, or `None` when no
/// candidate exists.
pub fn nearest_label<'a>(picture: &Shape, shapes: &'a [Shape]) -> Option<&'a str> {
    let origin = picture.position();
    let mut closest: Option<&'a str> = None;
    let mut min_distance = f64::INFINITY;

    for shape in shapes {
        let Some(text) = shape.label_text() else {
            continue;
        };

        let d = distance(origin, shape.position());
        if d < min_distance {
            min_distance = d;
            closest = Some(text);
        }
    }

    closest
}

/// Strip every character that is not alphanumeric, a space, an underscore
/// or a hyphen.
pub fn sanitize_file_stem(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric() || STEM_EXTRA_CHARS.contains(c))
        .collect()
}

/// File stem used when a picture has no usable label.
pub fn fallback_stem(slide_number: usize, shape_id: u32) -> String {
    format!("icon_slide{}_{}", slide_number, shape_id)
}

/// Choose the file stem for a picture on the given slide.
///
/// Uses the sanitized nearest label, or the fallback when there is no label
/// or sanitization leaves nothing behind.
pub fn icon_file_stem(slide_number: usize, picture: &Shape, shapes: &[Shape]) -> String {
    let stem = nearest_label(picture, shapes)
        .map(sanitize_file_stem)
        .unwrap_or_default();

    if stem.is_empty() {
        log::debug!(
            "No usable label for shape {} on slide {}",
            picture.id,
            slide_number
        );
        return fallback_stem(slide_number, picture.id);
    }

    stem
}

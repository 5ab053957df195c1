//! Domain types for representing presentation content.

use serde::{Deserialize, Serialize};

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// Convert inches to EMU.
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

/// Represents an entire presentation with its shapes.
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Original filename (without path).
    pub filename: String,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a new, empty presentation.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            slides: Vec::new(),
        }
    }

    /// Add a slide to the presentation.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Iterate over every picture shape, paired with the slide it sits on.
    pub fn pictures(&self) -> impl Iterator<Item = (&Slide, &Shape)> {
        self.slides
            .iter()
            .flat_map(|slide| slide.pictures().map(move |shape| (slide, shape)))
    }
}

/// The format of the source presentation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationFormat {
    /// Modern PPTX (Office Open XML).
    Pptx,
    /// Legacy PPT (OLE/CFB binary). Detected only to be rejected.
    Ppt,
}

impl PresentationFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            "ppt" => Some(Self::Ppt),
            _ => None,
        }
    }

    /// Detect format from file magic bytes.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PPTX is a ZIP file (PK\x03\x04)
        if bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(Self::Pptx);
        }

        // PPT is an OLE/CFB file (D0 CF 11 E0 A1 B1 1A E1)
        if bytes.len() >= 8
            && bytes.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        {
            return Some(Self::Ppt);
        }

        None
    }
}

/// A single slide and its top-level shapes.
#[derive(Debug, Clone)]
pub struct Slide {
    /// 1-based slide number.
    pub number: usize,

    /// Shapes in document order.
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create a new, empty slide with the given number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            shapes: Vec::new(),
        }
    }

    /// Add a shape to this slide.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Picture shapes on this slide, in document order.
    pub fn pictures(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_picture())
    }
}

/// Top-left anchor of a shape, in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub left: i64,
    pub top: i64,
}

impl Position {
    pub fn new(left: i64, top: i64) -> Self {
        Self { left, top }
    }
}

/// Axis-aligned rectangle, in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }
}

/// Raw bytes of an embedded image and the package part they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    /// Package part name, e.g. `ppt/media/image1.png`.
    pub part_name: String,

    /// Undecoded image bytes.
    pub data: Vec<u8>,
}

/// What a shape is, with the payload that kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    /// A picture. The blob is absent when the image is linked rather than
    /// embedded, or its relationship could not be resolved.
    Picture { image: Option<ImageBlob> },

    /// An autoshape or text box. Paragraphs are joined with `\n`.
    TextFrame { text: String },

    /// Anything else: graphic frames, connectors, group shapes.
    Other,
}

/// A positioned element on a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Shape id from the non-visual properties, unique within a slide.
    pub id: u32,

    /// Shape name as authored.
    pub name: String,

    /// Top-left anchor. Placeholders without an explicit offset take their
    /// layout's; other shapes without one sit at the origin.
    pub position: Position,

    pub kind: ShapeKind,
}

impl Shape {
    pub fn picture(id: u32, position: Position, image: Option<ImageBlob>) -> Self {
        Self {
            id,
            name: format!("Picture {}", id),
            position,
            kind: ShapeKind::Picture { image },
        }
    }

    pub fn text_frame(id: u32, position: Position, text: impl Into<String>) -> Self {
        Self {
            id,
            name: format!("TextBox {}", id),
            position,
            kind: ShapeKind::TextFrame { text: text.into() },
        }
    }

    pub fn other(id: u32, position: Position) -> Self {
        Self {
            id,
            name: format!("Shape {}", id),
            position,
            kind: ShapeKind::Other,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_picture(&self) -> bool {
        matches!(self.kind, ShapeKind::Picture { .. })
    }

    /// Text content, if this shape has a text frame.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::TextFrame { text } => Some(text),
            _ => None,
        }
    }

    /// Trimmed text, if this shape has a text frame with non-blank content.
    pub fn label_text(&self) -> Option<&str> {
        self.text().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Embedded image bytes, if this shape is a picture with an embedded blob.
    pub fn image_blob(&self) -> Option<&ImageBlob> {
        match &self.kind {
            ShapeKind::Picture { image } => image.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_magic() {
        assert_eq!(
            PresentationFormat::from_magic(b"PK\x03\x04rest"),
            Some(PresentationFormat::Pptx)
        );
        assert_eq!(
            PresentationFormat::from_magic(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
            Some(PresentationFormat::Ppt)
        );
        assert_eq!(PresentationFormat::from_magic(b"%PDF-1.7"), None);
        assert_eq!(PresentationFormat::from_magic(b"PK"), None);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            PresentationFormat::from_extension("PPTX"),
            Some(PresentationFormat::Pptx)
        );
        assert_eq!(PresentationFormat::from_extension("key"), None);
    }

    #[test]
    fn test_shape_capabilities() {
        let blob = ImageBlob {
            part_name: "ppt/media/image1.png".to_string(),
            data: vec![1, 2, 3],
        };
        let pic = Shape::picture(4, Position::new(10, 20), Some(blob.clone()));
        assert!(pic.is_picture());
        assert_eq!(pic.text(), None);
        assert_eq!(pic.image_blob(), Some(&blob));

        let label = Shape::text_frame(5, Position::default(), "  Router \n");
        assert!(!label.is_picture());
        assert_eq!(label.label_text(), Some("Router"));
        assert_eq!(label.image_blob(), None);

        let blank = Shape::text_frame(6, Position::default(), " \n ");
        assert_eq!(blank.text(), Some(" \n "));
        assert_eq!(blank.label_text(), None);

        assert_eq!(Shape::other(7, Position::default()).text(), None);
    }

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(0.5), 457_200);
        assert_eq!(inches(1.2), 1_097_280);
    }

    #[test]
    fn test_presentation_pictures() {
        let mut slide = Slide::new(1);
        slide.add_shape(Shape::text_frame(2, Position::default(), "A"));
        slide.add_shape(Shape::picture(3, Position::default(), None));
        let mut presentation = Presentation::new("deck.pptx");
        presentation.add_slide(slide);

        let ids: Vec<u32> = presentation.pictures().map(|(_, s)| s.id).collect();
        assert_eq!(ids, vec![3]);
    }
}

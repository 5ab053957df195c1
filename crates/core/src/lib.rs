//! Core domain types, label matching, and grid layout for extracting icons
//! from presentations and restoring them into a deck.

pub mod error;
pub mod labels;
pub mod layout;
pub mod types;

pub use error::{Error, Result};
pub use labels::{icon_file_stem, nearest_label, sanitize_file_stem};
pub use layout::{GridCursor, GridLayout, Placement, LABEL_FONT_SIZE_PT};
pub use types::{
    inches, ImageBlob, Position, Presentation, PresentationFormat, Rect, Shape, ShapeKind, Slide,
    EMU_PER_INCH,
};

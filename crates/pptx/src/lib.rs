//! PPTX (Office Open XML) backend for icon extraction and deck restoration.
//!
//! Reads .pptx files, which are ZIP archives of XML parts, into slides and
//! shapes, and writes new decks of pictures and text boxes.

pub mod package;
pub mod parser;
mod templates;
pub mod writer;

pub use parser::PptxParser;
pub use writer::{Deck, DeckSlide, TextAlign, TextStyle};

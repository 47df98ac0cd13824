//! Glyph cells and exact template recognition.
//!
//! This crate focuses on:
//! - slicing one digit cell out of a three-row entry,
//! - matching a cell against the fixed digit templates,
//! - rendering digits back into glyph rows.
//!
//! It does **not** split batches or classify checksums. Entry-level decoding
//! lives in `glyph-accounts-entry`.

mod cell;
mod recognizer;
mod render;

pub use cell::{char_window, CellGrid, GlyphCell};
pub use recognizer::{match_glyph, recognize};
pub use render::{render_digits, render_entry};

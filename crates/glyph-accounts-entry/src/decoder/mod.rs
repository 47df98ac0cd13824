//! Entry decoding pipeline.
//!
//! This module wires together cell slicing and glyph recognition for one
//! three-row entry, plus the configured decoder used for whole batches.

mod error;
mod params;
mod pipeline;

pub use error::{BatchError, DecodeError};
pub use params::{DecoderParams, DEFAULT_ENTRY_WIDTH};
pub use pipeline::{decode, EntryDecoder};

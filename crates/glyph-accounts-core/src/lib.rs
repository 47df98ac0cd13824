//! Core types for glyph account number decoding.
//!
//! This crate is intentionally small. It defines the digit alphabet with its
//! fixed three-row glyphs, the decoded symbol type (digit or unknown) and the
//! ordered sequence produced for one entry. It does *not* slice text or
//! classify checksums; see `glyph-accounts-glyph` and `glyph-accounts-entry`.

mod digit;
mod logger;
mod sequence;
mod symbol;

pub use digit::{parse_digits, Digit, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use sequence::{parse_symbols, DecodedSequence};
pub use symbol::{Symbol, SymbolError, UNKNOWN_CHAR};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{format_record, init, init_with_level, LoggerConfig, WORKSPACE_TARGET};

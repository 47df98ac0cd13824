//! High-level facade crate for the `glyph-accounts-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - file-level helpers that read a batch, decode it and build a report
//! - (feature `cli`) the `glyph-accounts` command-line tool.
//!
//! ## Quickstart
//!
//! ```no_run
//! use glyph_accounts::scan;
//! use glyph_accounts::entry::DecoderParams;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = scan::decode_file("accounts.txt", DecoderParams::default())?;
//! println!("{}", glyph_accounts::entry::render_results(&entries));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `glyph_accounts::core`: digits, symbols, decoded sequences, logger.
//! - `glyph_accounts::glyph`: glyph cells, template matching, rendering.
//! - `glyph_accounts::entry`: entry decoding, batches, checksum classification.
//! - `glyph_accounts::scan`: end-to-end helpers from files on disk.
//! - `glyph_accounts::init_logging`: stderr logging (or `tracing`, by feature).

pub use glyph_accounts_core as core;
pub use glyph_accounts_entry as entry;
pub use glyph_accounts_glyph as glyph;

pub use glyph_accounts_core::{parse_symbols, DecodedSequence, Digit, Symbol};
pub use glyph_accounts_entry::{classify, Classification, DecoderParams, EntryDecoder};

mod io;
mod logging;
pub mod scan;

pub use io::{GlyphIoError, ScanConfig, ScanReport};
pub use logging::{init_logging, LoggingError};

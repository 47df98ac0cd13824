//! Account-number entry decoding.
//!
//! Current focus:
//! - slicing a three-row entry into digit cells and recognizing each,
//! - splitting a multi-entry batch into 4-line groups (fail-fast on bad shape),
//! - checksum classification into `OK` / `ILL` / `ERR`,
//! - text rendering and serializable per-entry reports.
//!
//! Glyph templates and cell matching live in `glyph-accounts-glyph`.

mod batch;
mod checksum;
mod decoder;
mod output;
mod report;

pub use batch::{
    decode_batch, decode_batch_text, entry_blocks, render_batch, split_lines, LINES_PER_ENTRY,
};
pub use checksum::{checksum, checksum_residue, classify, Classification, CHECKSUM_MODULUS};
pub use decoder::{
    decode, BatchError, DecodeError, DecoderParams, EntryDecoder, DEFAULT_ENTRY_WIDTH,
};
pub use output::{format_line, render_result, render_results};
pub use report::{EntryReport, ReportSummary};

pub use glyph_accounts_core::{parse_symbols, DecodedSequence, Digit, Symbol};

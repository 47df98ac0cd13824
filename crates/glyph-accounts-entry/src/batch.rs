//! Multi-entry batches: 3 glyph rows plus one separator line per entry.

use crate::decoder::{decode, BatchError};
use glyph_accounts_core::{DecodedSequence, Digit};
use glyph_accounts_glyph::render_entry;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Lines occupied by one entry in a batch (3 glyph rows + separator).
pub const LINES_PER_ENTRY: usize = 4;

/// Split raw batch text into lines on `\n`, stripping a trailing `\r`.
///
/// A final `\n` produces a trailing empty line, which is how the last
/// entry's separator is represented.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Group batch lines into per-entry row blocks, dropping separators.
///
/// Fails before yielding anything when the line count is not a multiple of
/// [`LINES_PER_ENTRY`].
pub fn entry_blocks<S: AsRef<str>>(lines: &[S]) -> Result<Vec<&[S]>, BatchError> {
    if lines.len() % LINES_PER_ENTRY != 0 {
        log::warn!(
            "rejecting batch of {} lines (not a multiple of {})",
            lines.len(),
            LINES_PER_ENTRY
        );
        return Err(BatchError::MalformedBatch { lines: lines.len() });
    }
    Ok(lines
        .chunks_exact(LINES_PER_ENTRY)
        .map(|group| &group[..LINES_PER_ENTRY - 1])
        .collect())
}

/// Decode every entry of a batch, preserving input order.
///
/// The batch shape is validated first; a malformed batch yields no entries.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(lines), fields(lines = lines.len()))
)]
pub fn decode_batch<S: AsRef<str>>(
    lines: &[S],
    width: usize,
) -> Result<Vec<DecodedSequence>, BatchError> {
    let blocks = entry_blocks(lines)?;
    let entries = blocks
        .into_iter()
        .map(|rows| decode(rows, width))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("decoded {} entries of width {}", entries.len(), width);
    Ok(entries)
}

/// Render entries as batch text, the inverse of [`decode_batch_text`].
pub fn render_batch<D: AsRef<[Digit]>>(entries: &[D]) -> String {
    entries
        .iter()
        .map(|digits| render_entry(digits.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split `content` into lines and decode it as a batch.
pub fn decode_batch_text(content: &str, width: usize) -> Result<Vec<DecodedSequence>, BatchError> {
    decode_batch(&split_lines(content), width)
}

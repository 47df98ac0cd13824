use super::{BatchError, DecodeError, DecoderParams};
use crate::batch::{decode_batch, decode_batch_text};
use glyph_accounts_core::DecodedSequence;
use glyph_accounts_glyph::{recognize, CellGrid};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Decode one entry: exactly 3 rows, `width` digit cells.
///
/// Cell `i` covers character columns `3*i .. 3*i + 3` of every row. Rows
/// shorter than that yield truncated cells which decode as unknown, so the
/// result always has exactly `width` symbols.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(rows), fields(rows = rows.len()))
)]
pub fn decode<S: AsRef<str>>(rows: &[S], width: usize) -> Result<DecodedSequence, DecodeError> {
    let [top, mid, bot] = rows else {
        return Err(DecodeError::WrongRowCount { got: rows.len() });
    };
    let grid = CellGrid::new([top.as_ref(), mid.as_ref(), bot.as_ref()]);

    let seq: DecodedSequence = (0..width).map(|i| recognize(&grid.cell(i))).collect();

    log::debug!(
        "decoded entry {} ({} unknown of {})",
        seq,
        seq.unknown_count(),
        width
    );
    Ok(seq)
}

/// Entry decoder with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct EntryDecoder {
    params: DecoderParams,
}

impl EntryDecoder {
    pub fn new(params: DecoderParams) -> Self {
        Self { params }
    }

    /// Decoder parameters.
    #[inline]
    pub fn params(&self) -> &DecoderParams {
        &self.params
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.params.width
    }

    /// Decode one three-row entry.
    pub fn decode<S: AsRef<str>>(&self, rows: &[S]) -> Result<DecodedSequence, DecodeError> {
        decode(rows, self.params.width)
    }

    /// Decode a batch of lines (4 per entry).
    pub fn decode_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> Result<Vec<DecodedSequence>, BatchError> {
        decode_batch(lines, self.params.width)
    }

    /// Decode raw batch text (lines separated by `\n`).
    pub fn decode_text(&self, content: &str) -> Result<Vec<DecodedSequence>, BatchError> {
        decode_batch_text(content, self.params.width)
    }
}

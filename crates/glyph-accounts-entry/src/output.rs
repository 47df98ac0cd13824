//! Plain-text rendering of decoded entries.

use crate::checksum::{classify, Classification};
use glyph_accounts_core::DecodedSequence;

/// One output line: the account text, then ` ILL` / ` ERR` unless it is valid.
pub fn format_line(account: &str, classification: Classification) -> String {
    match classification {
        Classification::Ok => account.to_string(),
        other => format!("{account} {other}"),
    }
}

/// Render one entry through [`format_line`].
pub fn render_result(seq: &DecodedSequence) -> String {
    format_line(&seq.to_string(), classify(seq))
}

/// Render entries one per line, in input order.
pub fn render_results(seqs: &[DecodedSequence]) -> String {
    seqs.iter()
        .map(render_result)
        .collect::<Vec<_>>()
        .join("\n")
}

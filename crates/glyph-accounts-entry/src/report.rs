//! Serializable per-entry results.

use crate::checksum::{checksum, classify, Classification};
use glyph_accounts_core::DecodedSequence;
use serde::{Deserialize, Serialize};

/// Decoding result for one entry of a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryReport {
    /// Zero-based position of the entry in its batch.
    pub index: usize,
    /// Decoded symbols, unknown positions rendered as `?`.
    pub account: String,
    pub classification: Classification,
    /// Weighted checksum; `None` when the entry is illegible.
    #[serde(default)]
    pub checksum: Option<u64>,
    /// Zero-based positions that decoded as unknown.
    #[serde(default)]
    pub unknown_positions: Vec<usize>,
}

impl EntryReport {
    pub fn new(index: usize, seq: &DecodedSequence) -> Self {
        Self {
            index,
            account: seq.to_string(),
            classification: classify(seq),
            checksum: seq.digits().map(|digits| checksum(&digits)),
            unknown_positions: seq
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_unknown())
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Reports for a whole batch, indexed in order.
    pub fn from_sequences(seqs: &[DecodedSequence]) -> Vec<Self> {
        seqs.iter()
            .enumerate()
            .map(|(i, seq)| Self::new(i, seq))
            .collect()
    }
}

/// Counts per classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub ok: usize,
    pub ill: usize,
    pub err: usize,
}

impl ReportSummary {
    pub fn from_entries(entries: &[EntryReport]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            summary.total += 1;
            match entry.classification {
                Classification::Ok => summary.ok += 1,
                Classification::Ill => summary.ill += 1,
                Classification::Err => summary.err += 1,
            }
        }
        summary
    }
}

//! Positional checksum and entry classification.

use glyph_accounts_core::{DecodedSequence, Digit};
use serde::{Deserialize, Serialize};

/// A readable account number is valid when its checksum is divisible by this.
pub const CHECKSUM_MODULUS: u64 = 11;

/// Outcome of classifying a decoded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    /// Readable and the checksum holds.
    Ok,
    /// At least one position is unknown.
    Ill,
    /// Readable but the checksum fails.
    Err,
}

impl Classification {
    /// Short tag used in rendered output.
    pub fn tag(self) -> &'static str {
        match self {
            Classification::Ok => "OK",
            Classification::Ill => "ILL",
            Classification::Err => "ERR",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Weighted checksum of a readable number, most significant digit first.
///
/// The rightmost digit has weight 1, the next weight 2, and so on:
/// for `d9 d8 .. d1` this is `1*d1 + 2*d2 + .. + 9*d9`. Exact in `u64` for
/// any sequence that fits in memory.
pub fn checksum(digits: &[Digit]) -> u64 {
    digits
        .iter()
        .rev()
        .zip(1u64..)
        .map(|(d, weight)| u64::from(d.value()) * weight)
        .sum()
}

/// [`checksum`] reduced modulo [`CHECKSUM_MODULUS`], folded term by term so
/// it never overflows.
pub fn checksum_residue(digits: &[Digit]) -> u64 {
    digits
        .iter()
        .rev()
        .zip(1u64..)
        .fold(0, |acc, (d, weight)| {
            (acc + u64::from(d.value()) * (weight % CHECKSUM_MODULUS)) % CHECKSUM_MODULUS
        })
}

/// Classify a decoded sequence.
///
/// Unknown positions short-circuit to [`Classification::Ill`] before any
/// checksum is computed.
pub fn classify(seq: &DecodedSequence) -> Classification {
    let Some(digits) = seq.digits() else {
        return Classification::Ill;
    };
    if checksum_residue(&digits) == 0 {
        Classification::Ok
    } else {
        Classification::Err
    }
}

//! Exact template matching for single glyph cells.

use crate::GlyphCell;
use glyph_accounts_core::{Digit, Symbol};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Find the digit whose template equals `rows` exactly.
///
/// Comparison is case- and whitespace-sensitive. Templates are tried in
/// ascending digit order; they are mutually exclusive, so the order only
/// matters as a tie-break that never fires.
pub fn match_glyph(rows: [&str; 3]) -> Option<Digit> {
    Digit::ALL.into_iter().find(|d| d.glyph() == rows)
}

/// Recognize one cell, yielding [`Symbol::Unknown`] when no template matches.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(cell)))]
pub fn recognize(cell: &GlyphCell<'_>) -> Symbol {
    match match_glyph(cell.rows()) {
        Some(d) => Symbol::Digit(d),
        None => {
            log::trace!("no template matches cell {:?}", cell.rows());
            Symbol::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_recognizes_its_digit() {
        for d in Digit::ALL {
            let cell = GlyphCell::new(d.glyph());
            assert_eq!(recognize(&cell), Symbol::Digit(d));
        }
    }

    #[test]
    fn single_character_perturbations_are_unknown() {
        let alphabet = [' ', '_', '|', 'x'];
        for d in Digit::ALL {
            let glyph = d.glyph();
            for r in 0..3 {
                for c in 0..3 {
                    for &ch in &alphabet {
                        let mut row: Vec<char> = glyph[r].chars().collect();
                        if row[c] == ch {
                            continue;
                        }
                        row[c] = ch;
                        let row: String = row.into_iter().collect();
                        let mut rows: [&str; 3] = glyph;
                        rows[r] = &row;
                        let got = match_glyph(rows);
                        // Flipping one segment can land on another digit's
                        // template; it must never land on the original.
                        assert_ne!(got, Some(d), "digit {d} row {r} col {c} -> {ch:?}");
                        if let Some(other) = got {
                            assert_eq!(other.glyph(), rows);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn matching_is_case_and_whitespace_exact() {
        assert_eq!(match_glyph([" _ ", "| |", "|_|"]), Some(Digit::Zero));
        assert_eq!(match_glyph([" _ ", "| |", "|_| "]), None);
        assert_eq!(match_glyph([" _", "| |", "|_|"]), None);
        assert_eq!(match_glyph(["\t_ ", "| |", "|_|"]), None);
        assert_eq!(match_glyph(["", "", ""]), None);
    }

    #[test]
    fn blank_cell_is_unknown() {
        let cell = GlyphCell::new(["   ", "   ", "   "]);
        assert_eq!(recognize(&cell), Symbol::Unknown);
    }
}

//! Ordered symbol sequences for one entry.

use crate::{Digit, Symbol};

/// Symbols decoded from one entry, most significant first.
///
/// The sequence carries no classification of its own; derive it on demand so
/// it can never go stale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodedSequence {
    symbols: Vec<Symbol>,
}

impl DecodedSequence {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Number of positions that decoded to [`Symbol::Unknown`].
    pub fn unknown_count(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_unknown()).count()
    }

    /// True when every position holds a digit.
    pub fn is_readable(&self) -> bool {
        self.symbols.iter().all(|s| !s.is_unknown())
    }

    /// All digits, or `None` if any position is unknown.
    pub fn digits(&self) -> Option<Vec<Digit>> {
        self.symbols.iter().map(|s| s.digit()).collect()
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }
}

impl FromIterator<Symbol> for DecodedSequence {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Digit>> for DecodedSequence {
    fn from(digits: Vec<Digit>) -> Self {
        digits.into_iter().map(Symbol::Digit).collect()
    }
}

impl<'a> IntoIterator for &'a DecodedSequence {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl std::fmt::Display for DecodedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in &self.symbols {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Build a sequence from plain text, one symbol per character.
///
/// Digits map to themselves and every other character maps to
/// [`Symbol::Unknown`], so `"86110??36"` yields two unknown positions.
pub fn parse_symbols(input: &str) -> DecodedSequence {
    input.chars().map(Symbol::from_char).collect()
}

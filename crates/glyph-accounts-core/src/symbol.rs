//! Decoded symbols: a known digit or the unknown marker.

use crate::Digit;

/// Character used to render [`Symbol::Unknown`].
pub const UNKNOWN_CHAR: char = '?';

/// Errors from strict symbol and digit parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("expected exactly one character, got {len}")]
    NotSingleChar { len: usize },
    #[error("not a decimal digit: {ch:?}")]
    NotADigit { ch: char },
    #[error("digit value out of range: {value}")]
    DigitOutOfRange { value: u8 },
}

/// One decoded glyph position.
///
/// `Unknown` is a regular value meaning "no template matched", not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit(Digit),
    Unknown,
}

impl Symbol {
    /// Map one character: ASCII digits become [`Symbol::Digit`], anything
    /// else becomes [`Symbol::Unknown`]. Total over `char`.
    pub fn from_char(ch: char) -> Self {
        Digit::from_char(ch).map_or(Symbol::Unknown, Symbol::Digit)
    }

    /// Map a token that must hold exactly one character.
    ///
    /// Only the arity is checked; the content never fails.
    pub fn from_token(token: &str) -> Result<Self, SymbolError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Self::from_char(ch)),
            _ => Err(SymbolError::NotSingleChar {
                len: token.chars().count(),
            }),
        }
    }

    #[inline]
    pub fn digit(self) -> Option<Digit> {
        match self {
            Symbol::Digit(d) => Some(d),
            Symbol::Unknown => None,
        }
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        matches!(self, Symbol::Unknown)
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit(d) => d.as_char(),
            Symbol::Unknown => UNKNOWN_CHAR,
        }
    }
}

impl From<Digit> for Symbol {
    fn from(d: Digit) -> Self {
        Symbol::Digit(d)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

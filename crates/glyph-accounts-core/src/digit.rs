//! Decimal digits and their fixed glyph templates.

use serde::{Deserialize, Serialize};

use crate::SymbolError;

/// Number of character columns in one glyph.
pub const GLYPH_WIDTH: usize = 3;
/// Number of text rows in one glyph.
pub const GLYPH_HEIGHT: usize = 3;

/// Three rows of exactly [`GLYPH_WIDTH`] characters, top to bottom.
pub type Glyph = [&'static str; GLYPH_HEIGHT];

/// A decimal digit `0..=9`.
///
/// Every variant carries its rendered glyph (see [`Digit::glyph`]); the match
/// there is exhaustive, so a digit without a template cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Digit {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl Digit {
    /// All digits in ascending order. This is also the template priority order.
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    /// Numeric value `0..=9`.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Digit for a numeric value, `None` above 9.
    pub fn from_value(value: u32) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|v| Self::ALL.get(v))
            .copied()
    }

    /// Digit for an ASCII character `'0'..='9'`.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).and_then(Self::from_value)
    }

    /// ASCII character for this digit.
    #[inline]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.value())
    }

    /// The fixed three-row rendering of this digit.
    pub const fn glyph(self) -> Glyph {
        match self {
            Digit::Zero => [" _ ", "| |", "|_|"],
            Digit::One => ["   ", "  |", "  |"],
            Digit::Two => [" _ ", " _|", "|_ "],
            Digit::Three => [" _ ", " _|", " _|"],
            Digit::Four => ["   ", "|_|", "  |"],
            Digit::Five => [" _ ", "|_ ", " _|"],
            Digit::Six => [" _ ", "|_ ", "|_|"],
            Digit::Seven => [" _ ", "  |", "  |"],
            Digit::Eight => [" _ ", "|_|", "|_|"],
            Digit::Nine => [" _ ", "|_|", " _|"],
        }
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.value()
    }
}

impl TryFrom<u8> for Digit {
    type Error = SymbolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(u32::from(value)).ok_or(SymbolError::DigitOutOfRange { value })
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a string made only of ASCII digits.
///
/// Unlike [`crate::parse_symbols`], this is strict: any other character is an
/// error. Used where the caller must supply a fully legible number.
pub fn parse_digits(input: &str) -> Result<Vec<Digit>, SymbolError> {
    input
        .chars()
        .map(|ch| Digit::from_char(ch).ok_or(SymbolError::NotADigit { ch }))
        .collect()
}

//! Rendering digits back into glyph rows.

use glyph_accounts_core::{Digit, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Render `digits` left to right as three glyph rows.
pub fn render_digits(digits: &[Digit]) -> [String; GLYPH_HEIGHT] {
    let mut rows: [String; GLYPH_HEIGHT] =
        std::array::from_fn(|_| String::with_capacity(digits.len() * GLYPH_WIDTH));
    for d in digits {
        for (row, part) in rows.iter_mut().zip(d.glyph()) {
            row.push_str(part);
        }
    }
    rows
}

/// Render one entry as text: three glyph rows, each terminated by `\n`.
///
/// Split on `\n`, this is the 4-line group of a single-entry batch (the
/// final empty line is the separator).
pub fn render_entry(digits: &[Digit]) -> String {
    let mut out = String::new();
    for row in render_digits(digits) {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

//! One digit cell sliced from a three-row entry.

use glyph_accounts_core::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Three row fragments for one digit position.
///
/// Fragments borrow from the entry rows. A fragment is at most
/// [`GLYPH_WIDTH`] characters and may be shorter (or empty) when the source
/// row ends early; such a cell simply fails every template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphCell<'a> {
    rows: [&'a str; GLYPH_HEIGHT],
}

impl<'a> GlyphCell<'a> {
    pub fn new(rows: [&'a str; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Slice the cell at digit position `index` (character offset `index * 3`).
    pub fn slice(rows: [&'a str; GLYPH_HEIGHT], index: usize) -> Self {
        let start = index.saturating_mul(GLYPH_WIDTH);
        Self {
            rows: rows.map(|row| char_window(row, start, GLYPH_WIDTH)),
        }
    }

    #[inline]
    pub fn rows(&self) -> [&'a str; GLYPH_HEIGHT] {
        self.rows
    }

    /// True when every fragment has the full glyph width.
    pub fn is_complete(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.chars().count() == GLYPH_WIDTH)
    }
}

/// Three entry rows with their character boundaries indexed once.
///
/// [`GlyphCell::slice`] walks a row from the start for every cell, so decoding
/// a whole entry that way is quadratic in its width. A grid pays one pass per
/// row and then hands out each cell in constant time.
#[derive(Clone, Debug)]
pub struct CellGrid<'a> {
    rows: [&'a str; GLYPH_HEIGHT],
    bounds: [Vec<usize>; GLYPH_HEIGHT],
}

impl<'a> CellGrid<'a> {
    pub fn new(rows: [&'a str; GLYPH_HEIGHT]) -> Self {
        Self {
            rows,
            bounds: rows.map(char_bounds),
        }
    }

    /// The cell at digit position `index`; same fragments as [`GlyphCell::slice`].
    pub fn cell(&self, index: usize) -> GlyphCell<'a> {
        let start = index.saturating_mul(GLYPH_WIDTH);
        let mut rows = [""; GLYPH_HEIGHT];
        for (k, slot) in rows.iter_mut().enumerate() {
            *slot = window(self.rows[k], &self.bounds[k], start, GLYPH_WIDTH);
        }
        GlyphCell::new(rows)
    }
}

/// Byte offset of every char in `s`, followed by `s.len()`.
fn char_bounds(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect()
}

fn window<'s>(s: &'s str, bounds: &[usize], start: usize, len: usize) -> &'s str {
    let chars = bounds.len().saturating_sub(1);
    if len == 0 || start >= chars {
        return "";
    }
    let end = start.saturating_add(len).min(chars);
    &s[bounds[start]..bounds[end]]
}

/// Up to `len` characters of `s` starting at character offset `start`.
///
/// Returns the available substring when `s` is shorter than requested, and
/// an empty string when `start` is past the end. Never panics on multi-byte
/// text.
pub fn char_window(s: &str, start: usize, len: usize) -> &str {
    window(s, &char_bounds(s), start, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_inside_row() {
        assert_eq!(char_window("abcdefghi", 3, 3), "def");
        assert_eq!(char_window("abcdefghi", 0, 3), "abc");
        assert_eq!(char_window("abcdefghi", 6, 3), "ghi");
    }

    #[test]
    fn window_degrades_past_the_end() {
        assert_eq!(char_window("abcde", 3, 3), "de");
        assert_eq!(char_window("abc", 3, 3), "");
        assert_eq!(char_window("", 0, 3), "");
        assert_eq!(char_window("abc", usize::MAX, 3), "");
        assert_eq!(char_window("abc", 1, 0), "");
    }

    #[test]
    fn window_counts_chars_not_bytes() {
        assert_eq!(char_window("ééé|_|", 3, 3), "|_|");
        assert_eq!(char_window("aé", 1, 3), "é");
    }

    #[test]
    fn slice_takes_the_same_columns_from_each_row() {
        let rows = ["    _ ", "  | _|", "  ||_ "];
        let cell = GlyphCell::slice(rows, 1);
        assert_eq!(cell.rows(), [" _ ", " _|", "|_ "]);
        assert!(cell.is_complete());
    }

    #[test]
    fn short_rows_make_incomplete_cells() {
        let rows = ["    _", "  | _|", ""];
        let cell = GlyphCell::slice(rows, 1);
        assert_eq!(cell.rows(), [" _", " _|", ""]);
        assert!(!cell.is_complete());
    }

    #[test]
    fn grid_cells_match_sliced_cells() {
        let inputs = [
            [" _  _  _ ", "|_||_ | |", " _||_||_|"],
            ["    _", "  | _|", ""],
            ["ééé _ ", "é|_|", "|_|  |x"],
            ["", "", ""],
        ];
        for rows in inputs {
            let grid = CellGrid::new(rows);
            for index in 0..5 {
                assert_eq!(grid.cell(index), GlyphCell::slice(rows, index), "{rows:?} @ {index}");
            }
            assert_eq!(grid.cell(usize::MAX).rows(), ["", "", ""]);
        }
    }
}

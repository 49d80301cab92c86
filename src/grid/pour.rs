//! Content pouring: width-aware placement of free-form text into a grid.
//!
//! Content is tokenized once per render pass (the scrollbar needs the line
//! count from the same tokens) and then walked with a wrapping cursor.
//! Wrapping happens at whatever column the region runs out of room —
//! word boundaries are not considered.

use super::cell::Cell;
use super::grid::Grid;
use crate::ruler::SymbolRuler;

/// One unit of pourable content.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Token {
    /// A line break in the source content.
    Newline,
    /// A symbol with its display width as classified by the ruler.
    Glyph {
        /// The symbol to place.
        symbol: char,
        /// Display width in columns (0, 1 or 2).
        width: u8,
    },
}

/// Split content into newline and glyph tokens.
///
/// Width classification is entirely the ruler's: the engine does not
/// interpret escape sequences or merge grapheme clusters itself.
pub(crate) fn parse_content(content: &str, ruler: SymbolRuler) -> Vec<Token> {
    content
        .chars()
        .map(|symbol| {
            if symbol == '\n' {
                Token::Newline
            } else {
                Token::Glyph { symbol, width: ruler(symbol) }
            }
        })
        .collect()
}

/// Count the content rows the tokens span before any wrapping.
pub(crate) fn total_lines(tokens: &[Token]) -> usize {
    tokens.iter().filter(|token| **token == Token::Newline).count() + 1
}

/// Pour tokens into the grid with a wrapping cursor.
///
/// The cursor starts at the top-left. Newlines move it to the start of the
/// next row. A glyph that no longer fits on the current row wraps first,
/// then is placed if its row is in bounds; a width-2 glyph also forces the
/// cell to its right to a continuation marker. Zero-width glyphs are placed
/// at the cursor without advancing it. Tokens whose row falls below the
/// grid are dropped silently — overflow is not an error.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn pour_content(grid: &mut Grid, tokens: &[Token]) {
    let max_width = grid.width();
    let mut x: usize = 0;
    let mut y: usize = 0;

    for token in tokens {
        match *token {
            Token::Newline => {
                y += 1;
                x = 0;
            }
            Token::Glyph { symbol, width: 0 } => {
                grid.set(x as i32, y as i32, Cell::glyph(symbol));
            }
            Token::Glyph { symbol, width } => {
                let width = width as usize;
                if x + width > max_width {
                    y += 1;
                    x = 0;
                }
                grid.set(x as i32, y as i32, Cell::glyph(symbol));
                if width == 2 {
                    grid.set(x as i32 + 1, y as i32, Cell::continuation());
                }
                x += width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruler::default_symbol_ruler;

    fn poured(width: usize, height: usize, content: &str) -> String {
        let mut grid = Grid::new(width, height).unwrap();
        let tokens = parse_content(content, default_symbol_ruler);
        pour_content(&mut grid, &tokens);
        grid.render('.')
    }

    #[test]
    fn test_parse_classifies_widths() {
        let tokens = parse_content("a\n日\u{0301}", default_symbol_ruler);
        assert_eq!(
            tokens,
            vec![
                Token::Glyph { symbol: 'a', width: 1 },
                Token::Newline,
                Token::Glyph { symbol: '日', width: 2 },
                Token::Glyph { symbol: '\u{0301}', width: 0 },
            ]
        );
    }

    #[test]
    fn test_total_lines_counts_breaks() {
        assert_eq!(total_lines(&parse_content("", default_symbol_ruler)), 1);
        assert_eq!(total_lines(&parse_content("ab", default_symbol_ruler)), 1);
        assert_eq!(total_lines(&parse_content("a\nb\nc", default_symbol_ruler)), 3);
    }

    #[test]
    fn test_pour_plain_lines() {
        assert_eq!(poured(3, 2, "ab\ncd"), "ab.\ncd.");
    }

    #[test]
    fn test_pour_wraps_at_any_column() {
        // No word-boundary logic: "ab" into a 1-wide region wraps per char.
        assert_eq!(poured(1, 3, "ab"), "a\nb\n.");
        assert_eq!(poured(2, 2, "abcd"), "ab\ncd");
    }

    #[test]
    fn test_pour_wide_glyph_takes_two_columns() {
        let mut grid = Grid::new(4, 1).unwrap();
        let tokens = parse_content("日x", default_symbol_ruler);
        pour_content(&mut grid, &tokens);
        // The wide glyph consumes one display cell plus one continuation
        // cell, so the next glyph lands at column 2.
        assert_eq!(grid.render('.'), "日x.");
        assert_eq!(grid.get(2, 0).unwrap().as_glyph(), Some('x'));
    }

    #[test]
    fn test_pour_wide_glyph_wraps_instead_of_splitting() {
        assert_eq!(poured(3, 2, "ab日"), "ab.\n日.");
    }

    #[test]
    fn test_pour_overflow_is_dropped() {
        assert_eq!(poured(2, 1, "ab\ncd"), "ab");
        // Overflow must not wrap back around or panic.
        assert_eq!(poured(2, 1, "abcdef"), "ab");
    }

    #[test]
    fn test_pour_zero_width_glyph_holds_cursor() {
        let mut grid = Grid::new(3, 1).unwrap();
        let tokens = parse_content("a\u{0301}", default_symbol_ruler);
        pour_content(&mut grid, &tokens);
        // The combining mark lands on the cursor cell without advancing it.
        assert_eq!(grid.get(0, 0).unwrap().as_glyph(), Some('a'));
        assert_eq!(grid.get(1, 0).unwrap().as_glyph(), Some('\u{0301}'));

        // A following glyph takes the same cell, overwriting the mark.
        let mut grid = Grid::new(3, 1).unwrap();
        let tokens = parse_content("a\u{0301}b", default_symbol_ruler);
        pour_content(&mut grid, &tokens);
        assert_eq!(grid.get(1, 0).unwrap().as_glyph(), Some('b'));
    }

    #[test]
    fn test_pour_empty_content_is_noop() {
        assert_eq!(poured(2, 2, ""), "..\n..");
    }
}

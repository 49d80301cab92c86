//! Symbol ruler: pluggable on-screen width classification.
//!
//! Every width-aware operation in the engine (content pouring, grid
//! overwrites) measures symbols through a ruler instead of consulting width
//! tables directly. The default ruler delegates to the `unicode-width`
//! crate; an embedding application that needs different rules (ANSI-wrapped
//! symbols, private-use glyphs, terminal quirks) injects its own.

use unicode_width::UnicodeWidthChar;

/// Classifies the on-screen display width of a symbol.
///
/// Returns 0 (combining marks, control characters), 1 (most characters) or
/// 2 (East-Asian wide characters). A plain function pointer so panels stay
/// `Clone` and `Send`; custom rulers are ordinary `fn` items:
///
/// ```
/// use gridloom::SymbolRuler;
///
/// fn everything_narrow(_symbol: char) -> u8 {
///     1
/// }
///
/// let ruler: SymbolRuler = everything_narrow;
/// assert_eq!(ruler('日'), 1);
/// ```
pub type SymbolRuler = fn(char) -> u8;

/// The default ruler: East-Asian-width classification via `unicode-width`.
///
/// Control characters measure 0. Widths above 2 never occur for a single
/// `char`, but the result is clamped anyway so the 0/1/2 contract holds for
/// any table the upstream crate ships.
pub fn default_symbol_ruler(symbol: char) -> u8 {
    let width = UnicodeWidthChar::width(symbol).unwrap_or(0).min(2);
    // Single-char widths fit in u8 after the clamp above.
    #[allow(clippy::cast_possible_truncation)]
    {
        width as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_single_width() {
        assert_eq!(default_symbol_ruler('a'), 1);
        assert_eq!(default_symbol_ruler(' '), 1);
        assert_eq!(default_symbol_ruler('~'), 1);
    }

    #[test]
    fn test_cjk_is_double_width() {
        assert_eq!(default_symbol_ruler('日'), 2);
        assert_eq!(default_symbol_ruler('あ'), 2);
        assert_eq!(default_symbol_ruler('한'), 2);
    }

    #[test]
    fn test_combining_mark_is_zero_width() {
        assert_eq!(default_symbol_ruler('\u{0301}'), 0);
    }

    #[test]
    fn test_control_is_zero_width() {
        assert_eq!(default_symbol_ruler('\u{0007}'), 0);
    }
}

//! Cell: the atomic unit of the text grid.
//!
//! A cell is one character position. Its symbol is a three-state value:
//! a glyph to print, a blank resolved against the caller's background
//! symbol at render time, or a continuation marker for the second column
//! of a double-width glyph. The marker renders as the empty string so the
//! printed width of a row matches its visual width.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A bare style record carried alongside a symbol.
///
/// The engine transports styles untouched through crops, blits and
/// composition; flattening to a string prints symbols only. Emitting the
/// styles is the embedding widget layer's job.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Style {
    /// Foreground color, if any.
    pub fg: Option<Rgb>,
    /// Background color, if any.
    pub bg: Option<Rgb>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

/// The three-state contents of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    /// A display symbol occupying this cell.
    Glyph(char),
    /// No symbol; rendered with the caller-supplied background symbol.
    Blank,
    /// Second column consumed by a double-width glyph in the cell
    /// immediately to the left; rendered as the empty string.
    ///
    /// Only ever produced as a side effect of placing a width-2 glyph.
    Continuation,
}

impl Symbol {
    /// Check if this is a printable glyph.
    #[inline]
    pub const fn is_glyph(&self) -> bool {
        matches!(self, Self::Glyph(_))
    }
}

/// A single grid cell: a symbol plus its style record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    /// The cell's symbol state.
    pub symbol: Symbol,
    /// The cell's style record.
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// An unset cell with the default style.
    pub const BLANK: Self = Self {
        symbol: Symbol::Blank,
        style: Style {
            fg: None,
            bg: None,
            modifiers: Modifiers::empty(),
        },
    };

    /// Create a glyph cell with the default style.
    #[inline]
    pub const fn glyph(symbol: char) -> Self {
        Self {
            symbol: Symbol::Glyph(symbol),
            style: Style {
                fg: None,
                bg: None,
                modifiers: Modifiers::empty(),
            },
        }
    }

    /// Create a wide-glyph continuation cell.
    ///
    /// Placed after a width-2 glyph by the grid's blit and pour paths.
    #[inline]
    pub(crate) const fn continuation() -> Self {
        Self {
            symbol: Symbol::Continuation,
            style: Style {
                fg: None,
                bg: None,
                modifiers: Modifiers::empty(),
            },
        }
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.style.fg = Some(fg);
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.style.bg = Some(bg);
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.style.modifiers = modifiers;
        self
    }

    /// Get the glyph, if this cell holds one.
    #[inline]
    pub const fn as_glyph(&self) -> Option<char> {
        match self.symbol {
            Symbol::Glyph(symbol) => Some(symbol),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.symbol, Symbol::Blank);
        assert_eq!(cell.style, Style::default());
    }

    #[test]
    fn test_glyph_cell() {
        let cell = Cell::glyph('A');
        assert_eq!(cell.as_glyph(), Some('A'));
        assert!(cell.symbol.is_glyph());
    }

    #[test]
    fn test_continuation_is_not_glyph() {
        let cell = Cell::continuation();
        assert_eq!(cell.as_glyph(), None);
        assert!(!cell.symbol.is_glyph());
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::glyph('X')
            .with_fg(Rgb::new(255, 0, 0))
            .with_bg(Rgb::BLACK)
            .with_modifiers(Modifiers::BOLD | Modifiers::UNDERLINE);

        assert_eq!(cell.style.fg, Some(Rgb::new(255, 0, 0)));
        assert_eq!(cell.style.bg, Some(Rgb::BLACK));
        assert!(cell.style.modifiers.contains(Modifiers::BOLD));
        assert!(!cell.style.modifiers.contains(Modifiers::ITALIC));
    }

    #[test]
    fn test_cell_equality_includes_style() {
        let plain = Cell::glyph('A');
        let styled = Cell::glyph('A').with_fg(Rgb::WHITE);
        assert_ne!(plain, styled);
        assert_eq!(plain, Cell::glyph('A'));
    }
}

//! Panel: a positioned, bordered, content-bearing node in a layout tree.
//!
//! A panel owns its grid and its children outright — the tree is strict,
//! with no parent back-references and no shared ownership, so composition
//! is a plain bounded recursion. Rendering never mutates a panel: the
//! compositor works on private copies and returns a freshly composed grid,
//! flattened to a string for the caller.

mod compose;

use crate::border::Borders;
use crate::error::Error;
use crate::grid::{Cell, Grid};
use crate::layout::Rect;
use crate::ruler::{default_symbol_ruler, SymbolRuler};

/// Vertical scroll state and optional bar appearance.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Scroll {
    /// Scroll offset in content rows.
    pub y: usize,
    /// Track cell; the engine default is `|`.
    pub track: Option<Cell>,
    /// Thumb cell; the engine default is `#`.
    pub thumb: Option<Cell>,
}

impl Scroll {
    /// Scroll state at the given offset with default bar appearance.
    #[inline]
    pub const fn new(y: usize) -> Self {
        Self { y, track: None, thumb: None }
    }

    /// Set the track cell (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_track(mut self, track: Cell) -> Self {
        self.track = Some(track);
        self
    }

    /// Set the thumb cell (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_thumb(mut self, thumb: Cell) -> Self {
        self.thumb = Some(thumb);
        self
    }
}

/// A node in the layout tree: a grid plus its decorations and children.
///
/// # Example
///
/// ```
/// use gridloom::{Borders, Panel, Rect};
///
/// let panel = Panel::new(Rect::from_size(5, 3))
///     .unwrap()
///     .with_borders(Borders::light())
///     .with_content("hi");
///
/// assert_eq!(panel.render(), "┌───┐\n│hi │\n└───┘");
/// ```
#[derive(Clone, Debug)]
pub struct Panel {
    /// Parent-relative column of the top-left corner.
    x: i32,
    /// Parent-relative row of the top-left corner.
    y: i32,
    /// This panel's own grid, not including descendants.
    grid: Grid,
    /// Border configuration.
    borders: Borders,
    /// Raw content poured into the interior after decorations.
    content: String,
    /// Child panels, exclusively owned.
    children: Vec<Panel>,
    /// Stacking order among siblings; ties keep insertion order.
    z_index: i32,
    /// Scroll state; `None` renders no scrollbar.
    scroll: Option<Scroll>,
    /// Width classification for this panel and its children's placement.
    ruler: SymbolRuler,
}

impl Panel {
    /// Create a panel of blank cells at `rect`'s position and size.
    ///
    /// Fails with [`Error::InvalidSize`] if either dimension is zero.
    pub fn new(rect: Rect) -> Result<Self, Error> {
        Ok(Self::from_grid(rect.x, rect.y, Grid::new(rect.width, rect.height)?))
    }

    /// Create a panel with every cell set to `fill`.
    ///
    /// Fails with [`Error::InvalidSize`] if either dimension is zero.
    pub fn filled(rect: Rect, fill: char) -> Result<Self, Error> {
        let grid = Grid::filled(rect.width, rect.height, Cell::glyph(fill))?;
        Ok(Self::from_grid(rect.x, rect.y, grid))
    }

    /// Create a panel auto-sized to the bounding box of `text`.
    ///
    /// Fails with [`Error::InvalidSize`] on empty or ragged input.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        Ok(Self::from_grid(0, 0, Grid::from_text(text)?))
    }

    fn from_grid(x: i32, y: i32, grid: Grid) -> Self {
        Self {
            x,
            y,
            grid,
            borders: Borders::default(),
            content: String::new(),
            children: Vec::new(),
            z_index: 0,
            scroll: None,
            ruler: default_symbol_ruler,
        }
    }

    /// Move the panel to a parent-relative position (builder pattern).
    #[must_use]
    pub const fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the stacking order among siblings (builder pattern).
    #[must_use]
    pub const fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Replace the border configuration (builder pattern).
    ///
    /// For a partial update, spread the previous value:
    /// `panel.borders().clone()` with struct-update syntax keeps every
    /// field not being changed.
    #[must_use]
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the content poured into the interior (builder pattern).
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Append a child panel (builder pattern).
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Enable the scrollbar with the given scroll state (builder pattern).
    #[must_use]
    pub const fn with_scroll(mut self, scroll: Scroll) -> Self {
        self.scroll = Some(scroll);
        self
    }

    /// Replace the width-classification ruler (builder pattern).
    #[must_use]
    pub const fn with_symbol_ruler(mut self, ruler: SymbolRuler) -> Self {
        self.ruler = ruler;
        self
    }

    /// Replace the content in place.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Update the scroll offset in place, enabling the scrollbar if needed.
    pub const fn set_scroll_y(&mut self, y: usize) {
        match self.scroll {
            Some(ref mut scroll) => scroll.y = y,
            None => self.scroll = Some(Scroll::new(y)),
        }
    }

    /// The panel's parent-relative column.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The panel's parent-relative row.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The panel's width in columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// The panel's height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// The current border configuration.
    #[inline]
    pub const fn borders(&self) -> &Borders {
        &self.borders
    }

    /// The current content.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Compose the panel tree and flatten it, blanks rendered as spaces.
    pub fn render(&self) -> String {
        self.render_with_background(' ')
    }

    /// Compose the panel tree and flatten it with an explicit background
    /// symbol for blank cells.
    pub fn render_with_background(&self, background: char) -> String {
        compose::compose(self).render(background)
    }
}

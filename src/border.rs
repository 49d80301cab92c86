//! Border drawing: band clears, symbol-cycled sides and corner rasters.
//!
//! A border side is a band of whole rows or columns along one grid edge.
//! Bands are cleared before they are drawn so stale content from a wider or
//! differently-styled previous decoration never bleeds through. Each side
//! and each corner carries its own symbol cycle, used round-robin with
//! index 0 at the outer edge; corners are drawn after sides and take
//! precedence where they overlap.

use crate::grid::{Cell, Grid};
use crate::layout::{Insets, Rect};

/// Per-panel border configuration.
///
/// Four band widths plus eight symbol cycles (one per side, one per
/// corner). An empty cycle leaves its band cleared. Partial updates use
/// struct-update syntax over the previous value:
///
/// ```
/// use gridloom::Borders;
///
/// let borders = Borders { top_width: 2, ..Borders::light() };
/// assert_eq!(borders.left_width, 1);
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Borders {
    /// Rows occupied by the top band.
    pub top_width: usize,
    /// Columns occupied by the right band.
    pub right_width: usize,
    /// Rows occupied by the bottom band.
    pub bottom_width: usize,
    /// Columns occupied by the left band.
    pub left_width: usize,
    /// Symbol cycle for the top side.
    pub top_symbols: Vec<char>,
    /// Symbol cycle for the right side.
    pub right_symbols: Vec<char>,
    /// Symbol cycle for the bottom side.
    pub bottom_symbols: Vec<char>,
    /// Symbol cycle for the left side.
    pub left_symbols: Vec<char>,
    /// Symbol cycle for the top-left corner.
    pub top_left_symbols: Vec<char>,
    /// Symbol cycle for the top-right corner.
    pub top_right_symbols: Vec<char>,
    /// Symbol cycle for the bottom-right corner.
    pub bottom_right_symbols: Vec<char>,
    /// Symbol cycle for the bottom-left corner.
    pub bottom_left_symbols: Vec<char>,
}

impl Borders {
    /// Light box-drawing border, one cell wide on every side.
    pub fn light() -> Self {
        Self::frame('─', '│', ['┌', '┐', '┘', '└'])
    }

    /// Double-line box-drawing border, one cell wide on every side.
    pub fn double() -> Self {
        Self::frame('═', '║', ['╔', '╗', '╝', '╚'])
    }

    /// Plain ASCII border ('-', '|', '+'), one cell wide on every side.
    pub fn ascii() -> Self {
        Self::frame('-', '|', ['+', '+', '+', '+'])
    }

    /// One-cell frame from horizontal/vertical symbols and corners given
    /// clockwise from the top-left.
    fn frame(horizontal: char, vertical: char, corners: [char; 4]) -> Self {
        Self {
            top_width: 1,
            right_width: 1,
            bottom_width: 1,
            left_width: 1,
            top_symbols: vec![horizontal],
            bottom_symbols: vec![horizontal],
            left_symbols: vec![vertical],
            right_symbols: vec![vertical],
            top_left_symbols: vec![corners[0]],
            top_right_symbols: vec![corners[1]],
            bottom_right_symbols: vec![corners[2]],
            bottom_left_symbols: vec![corners[3]],
        }
    }

    /// The content-area insets these borders occupy.
    pub(crate) const fn insets(&self) -> Insets {
        Insets::new(self.top_width, self.right_width, self.bottom_width, self.left_width)
    }
}

/// Reset the first `band` rows to blank.
pub(crate) fn clear_top_side(grid: &mut Grid, band: usize) {
    for y in 0..band.min(grid.height()) {
        clear_row(grid, y);
    }
}

/// Reset the last `band` rows to blank.
pub(crate) fn clear_bottom_side(grid: &mut Grid, band: usize) {
    let height = grid.height();
    for y in height.saturating_sub(band)..height {
        clear_row(grid, y);
    }
}

/// Reset the first `band` columns to blank.
pub(crate) fn clear_left_side(grid: &mut Grid, band: usize) {
    for x in 0..band.min(grid.width()) {
        clear_column(grid, x);
    }
}

/// Reset the last `band` columns to blank.
pub(crate) fn clear_right_side(grid: &mut Grid, band: usize) {
    let width = grid.width();
    for x in width.saturating_sub(band)..width {
        clear_column(grid, x);
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn clear_row(grid: &mut Grid, y: usize) {
    for x in 0..grid.width() {
        grid.set(x as i32, y as i32, Cell::BLANK);
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn clear_column(grid: &mut Grid, x: usize) {
    for y in 0..grid.height() {
        grid.set(x as i32, y as i32, Cell::BLANK);
    }
}

/// Draw the top band across columns `[x0, x1)`, cycling symbols by row.
///
/// Band row 0 is the outermost row. An empty cycle is a no-op, leaving the
/// cleared band in place.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn draw_top_side(grid: &mut Grid, band: usize, symbols: &[char], x0: usize, x1: usize) {
    if symbols.is_empty() {
        return;
    }
    for i in 0..band.min(grid.height()) {
        let symbol = symbols[i % symbols.len()];
        for x in x0..x1.min(grid.width()) {
            grid.set(x as i32, i as i32, Cell::glyph(symbol));
        }
    }
}

/// Draw the bottom band across columns `[x0, x1)`, cycling symbols by row.
///
/// Cycle index 0 falls on the outermost (bottom) row.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn draw_bottom_side(grid: &mut Grid, band: usize, symbols: &[char], x0: usize, x1: usize) {
    if symbols.is_empty() {
        return;
    }
    let height = grid.height();
    for i in 0..band.min(height) {
        let symbol = symbols[i % symbols.len()];
        let y = height - 1 - i;
        for x in x0..x1.min(grid.width()) {
            grid.set(x as i32, y as i32, Cell::glyph(symbol));
        }
    }
}

/// Draw the left band across rows `[y0, y1)`, cycling symbols by column.
///
/// Band column 0 is the outermost column.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn draw_left_side(grid: &mut Grid, band: usize, symbols: &[char], y0: usize, y1: usize) {
    if symbols.is_empty() {
        return;
    }
    for i in 0..band.min(grid.width()) {
        let symbol = symbols[i % symbols.len()];
        for y in y0..y1.min(grid.height()) {
            grid.set(i as i32, y as i32, Cell::glyph(symbol));
        }
    }
}

/// Draw the right band across rows `[y0, y1)`, cycling symbols by column.
///
/// Cycle index 0 falls on the outermost (rightmost) column.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn draw_right_side(grid: &mut Grid, band: usize, symbols: &[char], y0: usize, y1: usize) {
    if symbols.is_empty() {
        return;
    }
    let width = grid.width();
    for i in 0..band.min(width) {
        let symbol = symbols[i % symbols.len()];
        let x = width - 1 - i;
        for y in y0..y1.min(grid.height()) {
            grid.set(x as i32, y as i32, Cell::glyph(symbol));
        }
    }
}

/// Fill a corner rectangle in row-major raster order.
///
/// Raster position `i` takes `symbols[i mod len]`. An empty cycle leaves
/// the rectangle untouched; out-of-bounds cells are clipped.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn draw_corner(grid: &mut Grid, corner: Rect, symbols: &[char]) {
    if symbols.is_empty() {
        return;
    }
    for local_y in 0..corner.height {
        for local_x in 0..corner.width {
            let i = local_y * corner.width + local_x;
            let symbol = symbols[i % symbols.len()];
            grid.set(
                corner.x + local_x as i32,
                corner.y + local_y as i32,
                Cell::glyph(symbol),
            );
        }
    }
}

/// Clear and draw all four sides, then the four corners.
///
/// Sides span only the range between the two perpendicular bands; the
/// corner rasters cover the overlap areas and are drawn last so they win.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn draw_borders(grid: &mut Grid, borders: &Borders) {
    let width = grid.width();
    let height = grid.height();

    clear_top_side(grid, borders.top_width);
    clear_bottom_side(grid, borders.bottom_width);
    clear_left_side(grid, borders.left_width);
    clear_right_side(grid, borders.right_width);

    let x0 = borders.left_width;
    let x1 = width.saturating_sub(borders.right_width);
    let y0 = borders.top_width;
    let y1 = height.saturating_sub(borders.bottom_width);

    draw_top_side(grid, borders.top_width, &borders.top_symbols, x0, x1);
    draw_bottom_side(grid, borders.bottom_width, &borders.bottom_symbols, x0, x1);
    draw_left_side(grid, borders.left_width, &borders.left_symbols, y0, y1);
    draw_right_side(grid, borders.right_width, &borders.right_symbols, y0, y1);

    draw_corner(
        grid,
        Rect::new(0, 0, borders.left_width, borders.top_width),
        &borders.top_left_symbols,
    );
    draw_corner(
        grid,
        Rect::new(
            x1 as i32,
            0,
            borders.right_width,
            borders.top_width,
        ),
        &borders.top_right_symbols,
    );
    draw_corner(
        grid,
        Rect::new(
            x1 as i32,
            y1 as i32,
            borders.right_width,
            borders.bottom_width,
        ),
        &borders.bottom_right_symbols,
    );
    draw_corner(
        grid,
        Rect::new(0, y1 as i32, borders.left_width, borders.bottom_width),
        &borders.bottom_left_symbols,
    );
}

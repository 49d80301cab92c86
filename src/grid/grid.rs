//! Grid: a rectangular field of cells.
//!
//! Cells are stored in a contiguous `Vec` in row-major order, addressed as
//! `index = y * width + x`. Structural validity (positive dimensions, every
//! row the same length) is established at construction and holds for every
//! grid the engine produces after that.
//!
//! Grids behave like values: operations a caller can observe either take
//! `&self` and return a fresh grid, or mutate a working copy that the
//! compositor created for a single render pass. No grid a caller holds is
//! ever modified behind its back, and blits copy cells by value so a child
//! grid is never aliased into a composed parent.

use super::cell::{Cell, Symbol};
use crate::error::Error;
use crate::layout::Rect;
use crate::ruler::SymbolRuler;

/// A rectangular grid of cells.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: usize,
    /// Height in rows.
    height: usize,
}

impl Grid {
    /// Create a grid of blank cells.
    ///
    /// Fails with [`Error::InvalidSize`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        Self::filled(width, height, Cell::BLANK)
    }

    /// Create a grid with every cell set to `fill`.
    ///
    /// Fails with [`Error::InvalidSize`] if either dimension is zero.
    pub fn filled(width: usize, height: usize, fill: Cell) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize { width, height });
        }
        Ok(Self {
            cells: vec![fill; width * height],
            width,
            height,
        })
    }

    /// Create a grid from literal text, one row per line.
    ///
    /// Trailing newlines are trimmed first. Every line must have the same
    /// number of characters; ragged input fails with [`Error::InvalidSize`],
    /// as does empty input.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let lines: Vec<&str> = text.trim_end_matches('\n').split('\n').collect();
        let width = lines.first().map_or(0, |line| line.chars().count());
        let height = lines.len();

        if width == 0 {
            return Err(Error::InvalidSize { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for line in &lines {
            let start = cells.len();
            cells.extend(line.chars().map(Cell::glyph));
            if cells.len() - start != width {
                return Err(Error::InvalidSize { width, height });
            }
        }

        Ok(Self { cells, width, height })
    }

    /// Get the grid width in columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the grid height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the grid's bounding rectangle, anchored at the origin.
    #[inline]
    pub const fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Convert signed coordinates to a linear index.
    ///
    /// Returns `None` if the coordinates fall outside the grid.
    #[inline]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            Some((y as usize) * self.width + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Out-of-bounds coordinates are not an error: there is simply no cell
    /// there, and every caller treats that as "nothing to draw".
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y).
    ///
    /// Returns `false` if the coordinates are out of bounds.
    #[inline]
    pub(crate) fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Iterate over the grid's rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Extract the sub-grid covered by `region`.
    ///
    /// Coordinates outside the source are omitted, so a region hanging off
    /// the edge yields its in-bounds intersection. An empty intersection
    /// fails with [`Error::InvalidCrop`].
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn crop(&self, region: Rect) -> Result<Self, Error> {
        let x0 = region.x.max(0);
        let y0 = region.y.max(0);
        let x1 = region.right().min(self.width as i32);
        let y1 = region.bottom().min(self.height as i32);

        if x0 >= x1 || y0 >= y1 {
            return Err(Error::InvalidCrop { rect: region });
        }

        let width = (x1 - x0) as usize;
        let height = (y1 - y0) as usize;
        let mut cells = Vec::with_capacity(width * height);
        for y in y0..y1 {
            let start = (y as usize) * self.width + (x0 as usize);
            cells.extend_from_slice(&self.cells[start..start + width]);
        }

        Ok(Self { cells, width, height })
    }

    /// Blit every cell of `source` into this grid at `offset`.
    ///
    /// Placements outside the grid are clipped. A width-2 glyph (per the
    /// ruler) forces the cell to its right to a continuation marker,
    /// overwriting whatever was there; a width-2 glyph landing on the last
    /// column has no room for its continuation and is dropped rather than
    /// wrapped. Cells are copied by value, never shared.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub(crate) fn overwrite(&mut self, source: &Self, offset_x: i32, offset_y: i32, ruler: SymbolRuler) {
        for (sy, row) in source.rows().enumerate() {
            let ty = offset_y + sy as i32;
            for (sx, cell) in row.iter().enumerate() {
                let tx = offset_x + sx as i32;
                if let Symbol::Glyph(symbol) = cell.symbol {
                    if ruler(symbol) == 2 {
                        if tx == self.width as i32 - 1 {
                            continue;
                        }
                        if self.set(tx, ty, *cell) {
                            self.set(tx + 1, ty, Cell::continuation());
                        }
                        continue;
                    }
                }
                self.set(tx, ty, *cell);
            }
        }
    }

    /// Flatten the grid into printable lines.
    ///
    /// Glyph cells print their symbol, blank cells print `background`, and
    /// continuation cells print nothing so a row's printed width matches
    /// its visual width. Rows are joined with `\n`.
    pub fn render(&self, background: char) -> String {
        let mut out = String::with_capacity(self.width * self.height + self.height);
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for cell in row {
                match cell.symbol {
                    Symbol::Glyph(symbol) => out.push(symbol),
                    Symbol::Blank => out.push(background),
                    Symbol::Continuation => {}
                }
            }
        }
        out
    }
}

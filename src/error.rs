//! Error taxonomy for grid and panel construction.

use crate::layout::Rect;

/// Errors produced by grid and panel construction.
///
/// Structural validity (positive dimensions, rectangular rows) is checked
/// once at construction and trusted thereafter. Degenerate geometry that
/// shows up later at render time (border bands wider than the panel) is
/// absorbed by the compositor's degraded fallback instead of being
/// propagated, so `Panel::render` itself is infallible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A grid or panel was constructed with a non-positive dimension,
    /// or from text whose lines differ in width.
    #[error("invalid grid size: {width}x{height}")]
    InvalidSize {
        /// Requested width in columns.
        width: usize,
        /// Requested height in rows.
        height: usize,
    },

    /// A crop produced an empty region.
    #[error("crop region {rect:?} does not intersect the grid")]
    InvalidCrop {
        /// The requested crop region.
        rect: Rect,
    },
}

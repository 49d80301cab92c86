//! Scrollbar placement: proportional track/thumb geometry over one column.
//!
//! The bar reserves the rightmost column of the content area. The thumb's
//! height is the visible fraction of the total (unwrapped) content rows,
//! never less than one cell; its position distributes the scroll offset
//! over the leftover track cells.

use crate::grid::{Cell, Grid};
use crate::layout::Rect;

/// Default track appearance.
pub(crate) const DEFAULT_TRACK: Cell = Cell::glyph('|');
/// Default thumb appearance.
pub(crate) const DEFAULT_THUMB: Cell = Cell::glyph('#');

/// Reserve the rightmost column of `area` for a vertical scrollbar.
///
/// Fills the reserved column with `track`, overlays the proportional thumb
/// for `scroll_y`, and returns the content area narrowed by one column.
/// Returns `None` — leaving the grid untouched — when reserving a column
/// would leave no content width, or when the area has no row; the caller
/// skips the scrollbar for this render pass.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn place_scroll_bar(
    grid: &mut Grid,
    area: Rect,
    total_lines: usize,
    scroll_y: usize,
    track: Cell,
    thumb: Cell,
) -> Option<Rect> {
    if area.width < 2 || area.height < 1 {
        return None;
    }

    let narrowed = Rect::new(area.x, area.y, area.width - 1, area.height);
    let bar_x = narrowed.right();
    let visible = area.height;

    for y in area.y..area.bottom() {
        grid.set(bar_x, y, track);
    }

    let total = total_lines.max(1);
    let thumb_height = (((visible * visible) as f64 / total as f64).round() as usize)
        .max(1)
        .min(visible);

    let travel = visible - thumb_height;
    let hidden = total.saturating_sub(visible).max(1);
    let thumb_top = ((scroll_y as f64 * travel as f64 / hidden as f64).round() as usize).min(travel);

    for offset in thumb_top..thumb_top + thumb_height {
        grid.set(bar_x, area.y + offset as i32, thumb);
    }

    Some(narrowed)
}

//! The composition pipeline: borders, scrollbar, content, children.
//!
//! Composition is a pure bottom-up tree walk. Each panel clones its own
//! grid as the pass's working copy, decorates it, pours content and blits
//! recursively composed children into the content area, then stitches the
//! content area back into the full grid. Degenerate geometry never aborts
//! a render: a border too wide for its panel degrades to an undecorated
//! pass, and a scrollbar without room is skipped.

use tracing::debug;

use super::Panel;
use crate::border;
use crate::grid::pour::{parse_content, pour_content, total_lines};
use crate::grid::Grid;
use crate::scrollbar::{place_scroll_bar, DEFAULT_THUMB, DEFAULT_TRACK};

/// Compose a panel and its descendants into one grid.
pub(super) fn compose(panel: &Panel) -> Grid {
    let tokens = parse_content(&panel.content, panel.ruler);
    let mut grid = panel.grid.clone();
    let mut area = grid.rect();
    let mut degraded = false;

    // Border stage. Bands that leave no interior degrade the pass: no
    // decorations, content poured into the undecorated grid.
    let inner = area.shrink(&panel.borders.insets());
    if inner.is_empty() {
        debug!(area = ?area, "border bands leave no content area, rendering undecorated");
        degraded = true;
    } else {
        border::draw_borders(&mut grid, &panel.borders);
        area = inner;
    }

    // Scrollbar stage.
    if let Some(scroll) = panel.scroll {
        if !degraded {
            let track = scroll.track.unwrap_or(DEFAULT_TRACK);
            let thumb = scroll.thumb.unwrap_or(DEFAULT_THUMB);
            match place_scroll_bar(&mut grid, area, total_lines(&tokens), scroll.y, track, thumb) {
                Some(narrowed) => area = narrowed,
                None => debug!(area = ?area, "no room for a scrollbar, skipping"),
            }
        }
    }

    // The area is a non-empty sub-rectangle of the grid on every path
    // above, so the crop cannot fail; recover to the bare grid regardless.
    let Ok(mut content_grid) = grid.crop(area) else {
        return grid;
    };

    if !panel.content.is_empty() {
        pour_content(&mut content_grid, &tokens);
    }

    // Ascending z-index, stable so insertion order breaks ties; children
    // beyond the content area clip.
    let mut order: Vec<&Panel> = panel.children.iter().collect();
    order.sort_by_key(|child| child.z_index);
    for child in order {
        let child_grid = compose(child);
        content_grid.overwrite(&child_grid, child.x, child.y, panel.ruler);
    }

    grid.overwrite(&content_grid, area.x, area.y, panel.ruler);
    grid
}

#[cfg(test)]
mod tests {
    use crate::border::Borders;
    use crate::grid::Cell;
    use crate::layout::Rect;
    use crate::panel::{Panel, Scroll};

    fn blank(width: usize, height: usize) -> Panel {
        Panel::new(Rect::from_size(width, height)).unwrap()
    }

    #[test]
    fn test_content_pours_into_plain_panel() {
        let panel = blank(3, 2).with_content("ab\ncd");
        assert_eq!(panel.render_with_background('.'), "ab.\ncd.");
    }

    #[test]
    fn test_content_wraps_in_single_column_panel() {
        let panel = blank(1, 2).with_content("ab");
        assert_eq!(panel.render(), "a\nb");
    }

    #[test]
    fn test_content_pours_inside_borders() {
        let panel = blank(5, 4).with_borders(Borders::light()).with_content("ab");
        assert_eq!(panel.render(), "┌───┐\n│ab │\n│   │\n└───┘");
    }

    #[test]
    fn test_oversized_borders_degrade_to_undecorated_render() {
        // A light border needs two columns and two rows; a 2x2 panel has
        // no interior left, so the pass renders as if undecorated.
        let panel = blank(2, 2).with_borders(Borders::light()).with_content("hi");
        assert_eq!(panel.render_with_background('.'), "hi\n..");
    }

    #[test]
    fn test_degraded_pass_skips_scrollbar_too() {
        let panel = blank(2, 2)
            .with_borders(Borders::light())
            .with_scroll(Scroll::new(0))
            .with_content("hi");
        assert_eq!(panel.render_with_background('.'), "hi\n..");
    }

    #[test]
    fn test_scrollbar_reserves_rightmost_content_column() {
        let panel = blank(5, 4)
            .with_borders(Borders::light())
            .with_scroll(Scroll::new(0))
            .with_content("a\nb\nc\nd");
        // Four content lines, two visible: one-cell thumb at the top,
        // content wrapped into the remaining two columns.
        assert_eq!(panel.render(), "┌───┐\n│a #│\n│b |│\n└───┘");
    }

    #[test]
    fn test_scrollbar_without_room_is_skipped() {
        // The border leaves a single content column; reserving it would
        // leave none, so content gets the full interior.
        let panel = blank(3, 3)
            .with_borders(Borders::light())
            .with_scroll(Scroll::new(0))
            .with_content("z");
        assert_eq!(panel.render(), "┌─┐\n│z│\n└─┘");
    }

    #[test]
    fn test_scroll_offset_moves_thumb_only() {
        let panel = blank(4, 2)
            .with_scroll(Scroll::new(4))
            .with_content("a\nb\nc\nd\ne\nf");
        // Pouring always starts at the first content line; the offset only
        // positions the thumb.
        assert_eq!(panel.render_with_background('.'), "a..|\nb..#");
    }

    #[test]
    fn test_custom_scrollbar_cells() {
        let panel = blank(2, 2)
            .with_scroll(Scroll::new(0).with_track(Cell::glyph(':')).with_thumb(Cell::glyph('@')))
            .with_content("a\nb\nc\nd");
        assert_eq!(panel.render_with_background('.'), "a@\nb:");
    }

    #[test]
    fn test_child_overwrites_parent_content_area() {
        let child = Panel::filled(Rect::from_size(2, 1), 'C').unwrap().at(1, 1);
        let panel = blank(4, 3).with_child(child);
        assert_eq!(panel.render_with_background('.'), "....\n.CC.\n....");
    }

    #[test]
    fn test_child_coordinates_are_content_area_relative() {
        let child = Panel::filled(Rect::from_size(1, 1), 'C').unwrap();
        let panel = blank(4, 3).with_borders(Borders::light()).with_child(child);
        // Child (0, 0) is the first interior cell, not the corner.
        assert_eq!(panel.render(), "┌──┐\n│C │\n└──┘");
    }

    #[test]
    fn test_children_clip_at_content_area_edges() {
        let right = Panel::filled(Rect::from_size(3, 1), 'R').unwrap().at(2, 0);
        let above = Panel::filled(Rect::from_size(2, 3), 'A').unwrap().at(0, -1);
        let panel = blank(4, 2).with_child(right).with_child(above);
        assert_eq!(panel.render_with_background('.'), "AARR\nAA..");
    }

    #[test]
    fn test_higher_z_index_wins_overlap() {
        let low = Panel::filled(Rect::from_size(2, 2), 'A').unwrap().with_z_index(0);
        let high = Panel::filled(Rect::from_size(2, 2), 'B').unwrap().with_z_index(1);
        // Insertion order deliberately opposes stacking order.
        let panel = blank(2, 2).with_child(high).with_child(low);
        assert_eq!(panel.render(), "BB\nBB");
    }

    #[test]
    fn test_equal_z_index_keeps_insertion_order() {
        let first = Panel::filled(Rect::from_size(2, 2), 'A').unwrap();
        let second = Panel::filled(Rect::from_size(2, 2), 'B').unwrap();
        let panel = blank(2, 2).with_child(first).with_child(second);
        assert_eq!(panel.render(), "BB\nBB");
    }

    #[test]
    fn test_grandchildren_compose_recursively() {
        let grandchild = Panel::filled(Rect::from_size(1, 1), 'G').unwrap();
        let child = Panel::filled(Rect::from_size(3, 3), 'c')
            .unwrap()
            .with_borders(Borders::ascii())
            .with_child(grandchild)
            .at(1, 0);
        let panel = blank(5, 3).with_child(child);
        assert_eq!(panel.render_with_background('.'), ".+-+.\n.|G|.\n.+-+.");
    }

    #[test]
    fn test_child_blit_is_width_aware() {
        let child = Panel::from_text("日").unwrap().at(1, 0);
        let panel = blank(4, 1);
        let panel = panel.with_child(child);
        // The wide glyph consumes two columns of the parent.
        assert_eq!(panel.render_with_background('.'), ".日.");
    }

    #[test]
    fn test_content_beyond_height_is_dropped() {
        let panel = blank(2, 1).with_content("ab\ncd\nef");
        assert_eq!(panel.render(), "ab");
    }
}

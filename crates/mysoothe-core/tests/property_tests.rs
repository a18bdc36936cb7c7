//! Property-based tests for the layout model
//!
//! Uses proptest to check grid partitioning, visible windows and scroll
//! restorability over arbitrary inputs.

use mysoothe_core::layout::{grid_placement, partition_rows, Dp, GridCells};
use mysoothe_core::window::{visible_range, ItemGeometry, Viewport};
use mysoothe_core::ScrollState;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn geometry_strategy() -> impl Strategy<Value = ItemGeometry> {
    (1.0f32..300.0, 0.0f32..32.0, 0.0f32..48.0).prop_map(|(extent, spacing, lead)| {
        ItemGeometry {
            extent: Dp(extent),
            spacing: Dp(spacing),
            leading_padding: Dp(lead),
        }
    })
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (0.0f32..5_000.0, 1.0f32..2_000.0).prop_map(|(offset, extent)| Viewport::new(offset, extent))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A two-row grid always has two rows and loses nothing
    #[test]
    fn two_row_partition_is_total(len in 1usize..200) {
        let items: Vec<usize> = (0..len).collect();
        let rows = partition_rows(&items, GridCells::Fixed(2));
        prop_assert_eq!(rows.len(), 2);

        let total: usize = rows.iter().map(Vec::len).sum();
        prop_assert_eq!(total, len);

        // Row sizes differ by at most one
        prop_assert!(rows[0].len() >= rows[1].len());
        prop_assert!(rows[0].len() - rows[1].len() <= 1);
    }

    /// Each slot in a horizontal grid holds exactly one index
    #[test]
    fn grid_slots_are_unique(len in 1usize..100, rows in 1usize..6) {
        let cells = GridCells::Fixed(rows);
        let mut seen = std::collections::HashSet::new();
        for index in 0..len {
            let slot = grid_placement(index, cells);
            prop_assert!(slot.row < rows);
            prop_assert!(seen.insert((slot.row, slot.column)));
        }
    }

    /// The visible range holds exactly the items intersecting the viewport
    #[test]
    fn visible_range_matches_intersection(
        count in 0usize..64,
        geometry in geometry_strategy(),
        viewport in viewport_strategy(),
    ) {
        let range = visible_range(count, geometry, viewport);
        prop_assert!(range.end <= count);
        for index in 0..count {
            let expected = geometry.intersects(index, viewport);
            // Allow float rounding right at an item edge
            let start = geometry.start_of(index);
            let end = start + geometry.extent.value();
            let on_edge = (end - viewport.offset).abs() < 1e-2
                || (start - viewport.end()).abs() < 1e-2;
            if !on_edge {
                prop_assert_eq!(range.contains(&index), expected, "index {}", index);
            }
        }
    }

    /// Scrolling to X and re-deriving the window is idempotent
    #[test]
    fn scroll_window_is_restorable(x in 0.0f32..10_000.0, extent in 1.0f32..2_000.0) {
        let geometry = ItemGeometry::body_row();

        let mut first = ScrollState::new();
        first.scroll_to(x);
        let mut second = ScrollState::new();
        second.scroll_by(x / 2.0);
        second.scroll_to(x);

        prop_assert_eq!(first, second);
        prop_assert_eq!(
            visible_range(64, geometry, first.viewport(extent)),
            visible_range(64, geometry, second.viewport(extent))
        );
        prop_assert_eq!(
            visible_range(64, geometry, first.viewport(extent)),
            visible_range(64, geometry, first.viewport(extent))
        );
    }
}

proptest! {
    /// Spacers around a visible window always add up to the full content extent
    #[test]
    fn spacers_preserve_content_extent(
        count in 1usize..200,
        offset in 0.0f32..20_000.0,
        extent in 1.0f32..2_000.0,
    ) {
        let geometry = ItemGeometry::body_row();
        let range = visible_range(count, geometry, Viewport::new(offset, extent));
        let stride = geometry.extent.value() + geometry.spacing.value();
        let gap = geometry.spacing.value();

        let leading = geometry.leading_space(&range);
        let trailing = geometry.trailing_space(&range, count);
        let rendered = range.len() as f32 * stride - if range.is_empty() { 0.0 } else { gap };

        // Gaps the flex container inserts between non-empty children
        let children = [leading > 0.0, !range.is_empty(), trailing > 0.0]
            .iter()
            .filter(|present| **present)
            .count();
        let gaps = children.saturating_sub(1) as f32 * gap;

        let total = 2.0 * geometry.leading_padding.value() + leading + rendered + trailing + gaps;
        prop_assert!((total - geometry.content_extent(count)).abs() < 0.5);
    }
}

//! Visible windows over horizontally or vertically laid out sequences.
//!
//! Given item geometry along the main axis and a viewport, work out which
//! items intersect it. Short sequences skip this and render everything.

use std::ops::Range;

use crate::layout::{metrics, Dp};

/// Sequences at or below this length are rendered eagerly.
pub const EAGER_LIMIT: usize = 16;

/// Scroll window along the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub offset: f32,
    pub extent: f32,
}

impl Viewport {
    pub fn new(offset: f32, extent: f32) -> Self {
        Self { offset, extent }
    }

    pub fn end(&self) -> f32 {
        self.offset + self.extent
    }
}

/// Main-axis geometry of uniformly sized items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    pub extent: Dp,
    pub spacing: Dp,
    pub leading_padding: Dp,
}

impl ItemGeometry {
    /// The "align your body" row.
    pub fn body_row() -> Self {
        Self {
            extent: metrics::BODY_IMAGE_SIZE,
            spacing: metrics::ITEM_SPACING,
            leading_padding: metrics::EDGE_PADDING,
        }
    }

    /// Columns of the favorite collections grid.
    pub fn collection_columns() -> Self {
        Self {
            extent: metrics::CARD_WIDTH,
            spacing: metrics::ITEM_SPACING,
            leading_padding: metrics::EDGE_PADDING,
        }
    }

    fn stride(&self) -> f32 {
        self.extent.value() + self.spacing.value()
    }

    /// Main-axis start of item `index`.
    pub fn start_of(&self, index: usize) -> f32 {
        self.leading_padding.value() + index as f32 * self.stride()
    }

    pub fn intersects(&self, index: usize, viewport: Viewport) -> bool {
        let start = self.start_of(index);
        let end = start + self.extent.value();
        end > viewport.offset && start < viewport.end()
    }

    /// Full main-axis extent of `count` items, padding on both ends.
    pub fn content_extent(&self, count: usize) -> f32 {
        2.0 * self.leading_padding.value() + self.items_extent(count)
    }

    /// Space standing in for the items before `range`.
    ///
    /// The container still puts one `spacing` gap between this spacer and
    /// the first item, so that gap is not counted here.
    pub fn leading_space(&self, range: &Range<usize>) -> f32 {
        self.items_extent(range.start)
    }

    /// Space standing in for the items after `range`, gap excluded.
    pub fn trailing_space(&self, range: &Range<usize>, count: usize) -> f32 {
        self.items_extent(count.saturating_sub(range.end))
    }

    fn items_extent(&self, count: usize) -> f32 {
        if count == 0 {
            0.0
        } else {
            count as f32 * self.stride() - self.spacing.value()
        }
    }
}

/// Indices of the items intersecting `viewport`.
pub fn visible_range(count: usize, geometry: ItemGeometry, viewport: Viewport) -> Range<usize> {
    if count == 0 || viewport.extent <= 0.0 {
        return 0..0;
    }
    let stride = geometry.stride();
    if stride <= 0.0 {
        return 0..count;
    }

    let lead = geometry.leading_padding.value();
    let first = ((viewport.offset - lead - geometry.extent.value()) / stride).floor() + 1.0;
    let end = ((viewport.end() - lead) / stride).ceil();

    let end = end.clamp(0.0, count as f32) as usize;
    let first = (first.max(0.0) as usize).min(end);
    first..end
}

/// How a collection view materializes its items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPolicy {
    Eager,
    Virtualized,
}

impl RenderPolicy {
    pub fn for_len(len: usize) -> Self {
        if len <= EAGER_LIMIT {
            RenderPolicy::Eager
        } else {
            RenderPolicy::Virtualized
        }
    }

    /// Indices to materialize under this policy.
    pub fn window(&self, count: usize, geometry: ItemGeometry, viewport: Viewport) -> Range<usize> {
        match self {
            RenderPolicy::Eager => 0..count,
            RenderPolicy::Virtualized => visible_range(count, geometry, viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_row_on_a_phone_width() {
        let range = visible_range(6, ItemGeometry::body_row(), Viewport::new(0.0, 360.0));
        assert_eq!(range, 0..4);
    }

    #[test]
    fn scrolled_window_drops_leading_items() {
        // item 1 spans 112..200, item 2 spans 208..296
        let range = visible_range(6, ItemGeometry::body_row(), Viewport::new(200.0, 8.0));
        assert_eq!(range, 2..2);

        let range = visible_range(6, ItemGeometry::body_row(), Viewport::new(199.0, 10.0));
        assert_eq!(range, 1..3);
    }

    #[test]
    fn scrolled_past_the_end_is_empty() {
        let range = visible_range(6, ItemGeometry::body_row(), Viewport::new(10_000.0, 360.0));
        assert!(range.is_empty());
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(visible_range(0, ItemGeometry::body_row(), Viewport::new(0.0, 360.0)), 0..0);
        assert_eq!(visible_range(6, ItemGeometry::body_row(), Viewport::new(0.0, 0.0)), 0..0);
    }

    #[test]
    fn spacers_keep_items_in_place() {
        let geometry = ItemGeometry::body_row();
        let range = RenderPolicy::Virtualized.window(40, geometry, Viewport::new(1000.0, 360.0));
        assert_eq!(range, 10..14);

        // Leading padding, spacer, gap: the first rendered item sits where it would eagerly
        let leading = geometry.leading_space(&range);
        assert_eq!(16.0 + leading + 8.0, geometry.start_of(10));
        assert_eq!(geometry.start_of(10), 976.0);

        // Spacer, gap, items, gap, spacer adds up to the full content width
        let trailing = geometry.trailing_space(&range, 40);
        let rendered = 4.0 * 96.0 - 8.0;
        assert_eq!(16.0 + leading + 8.0 + rendered + 8.0 + trailing + 16.0, 3864.0);
        assert_eq!(geometry.content_extent(40), 3864.0);
    }

    #[test]
    fn no_spacers_at_the_edges() {
        let geometry = ItemGeometry::body_row();
        assert_eq!(geometry.leading_space(&(0..4)), 0.0);
        assert_eq!(geometry.trailing_space(&(2..6), 6), 0.0);
        assert_eq!(geometry.content_extent(0), 32.0);
    }

    #[test]
    fn small_catalogs_render_eagerly() {
        assert_eq!(RenderPolicy::for_len(6), RenderPolicy::Eager);
        assert_eq!(RenderPolicy::for_len(EAGER_LIMIT + 1), RenderPolicy::Virtualized);

        let viewport = Viewport::new(0.0, 360.0);
        assert_eq!(RenderPolicy::Eager.window(6, ItemGeometry::body_row(), viewport), 0..6);
        assert_eq!(
            RenderPolicy::Virtualized.window(6, ItemGeometry::body_row(), viewport),
            0..4
        );
    }
}

//! Scroll position of the home screen.
//!
//! The offset is the only runtime state on the screen. It lives as long as
//! the screen does and starts from zero on every re-creation.

use crate::window::Viewport;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    max: Option<f32>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max(&self) -> Option<f32> {
        self.max
    }

    /// Move to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f32) {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        self.offset = match self.max {
            Some(max) => offset.min(max),
            None => offset,
        };
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.offset + delta);
    }

    /// Record how far the content can scroll; re-clamps the offset.
    pub fn set_max(&mut self, max: f32) {
        self.max = Some(if max.is_finite() { max.max(0.0) } else { 0.0 });
        self.scroll_to(self.offset);
    }

    /// Apply a measured scroll position.
    ///
    /// `content` is the full scrollable extent and `viewport` the visible
    /// extent of the container, both along the scroll axis.
    pub fn sync(&mut self, offset: f32, content: f32, viewport: f32) {
        self.set_max(content - viewport);
        self.scroll_to(offset);
    }

    /// The window of content visible through a viewport of `extent`.
    pub fn viewport(&self, extent: f32) -> Viewport {
        Viewport::new(self.offset, extent)
    }
}

//! Scroll tracking for scrollable containers.
//!
//! The browser owns the real scroll position; this hook mirrors it into a
//! [`ScrollState`] signal so renders can derive visible windows from it.

use std::rc::Rc;

use dioxus::prelude::*;
use mysoothe_core::ScrollState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Handle returned by [`use_scroll_tracker`]. Wire `mounted` to
/// `onmounted` and `scrolled` to `onscroll` of the scrolling element.
#[derive(Clone, Copy)]
pub struct ScrollTracker {
    pub state: Signal<ScrollState>,
    element: Signal<Option<Rc<MountedData>>>,
    axis: ScrollAxis,
}

/// Scroll state owned by the calling component. Starts at zero.
pub fn use_scroll_tracker(axis: ScrollAxis) -> ScrollTracker {
    let state = use_signal(ScrollState::new);
    let element = use_signal(|| None);
    ScrollTracker {
        state,
        element,
        axis,
    }
}

impl ScrollTracker {
    pub fn offset(&self) -> f32 {
        self.state.read().offset()
    }

    pub fn mounted(self, event: MountedEvent) {
        let mut element = self.element;
        element.set(Some(event.data()));
    }

    pub fn scrolled(self) {
        let Some(element) = self.element.cloned() else {
            return;
        };
        let axis = self.axis;
        let mut state = self.state;
        spawn(async move {
            let offset = match element.get_scroll_offset().await {
                Ok(offset) => offset,
                Err(e) => {
                    tracing::debug!("Could not read scroll offset: {:?}", e);
                    return;
                }
            };
            let size = element.get_scroll_size().await;
            let rect = element.get_client_rect().await;

            let mut guard = state.write();
            match (size, rect) {
                (Ok(size), Ok(rect)) => {
                    let (offset, content, viewport) = match axis {
                        ScrollAxis::Horizontal => (offset.x, size.width, rect.size.width),
                        ScrollAxis::Vertical => (offset.y, size.height, rect.size.height),
                    };
                    guard.sync(offset as f32, content as f32, viewport as f32);
                }
                _ => {
                    let offset = match axis {
                        ScrollAxis::Horizontal => offset.x,
                        ScrollAxis::Vertical => offset.y,
                    };
                    guard.scroll_to(offset as f32);
                }
            }
        });
    }
}

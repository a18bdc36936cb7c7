//! Home screen - the only page.
//!
//! Search bar followed by the two catalog sections, in one vertically
//! scrolling column.

use dioxus::prelude::*;
use mysoothe_core::layout::metrics;
use mysoothe_core::resources::{ALIGN_YOUR_BODY_TITLE, FAVORITE_COLLECTIONS_TITLE};
use mysoothe_core::{LayoutHint, Padding};

use crate::components::{
    use_scroll_tracker, AlignYourBodyRow, FavoriteCollectionsGrid, HomeSection, ScrollAxis,
    SearchBar,
};

/// Home screen component.
///
/// Owns the vertical scroll position; it is not persisted and starts at the
/// top whenever the screen is created.
#[component]
pub fn HomeScreen(#[props(default)] hint: LayoutHint) -> Element {
    let scroll = use_scroll_tracker(ScrollAxis::Vertical);
    let offset = scroll.offset();
    let style = hint
        .padding(Padding::vertical(metrics::SCREEN_VERTICAL_PADDING))
        .to_style();
    let spacer_style = LayoutHint::new().height(metrics::SCREEN_SPACER).to_style();

    rsx! {
        div {
            class: "home-screen",
            style: "{style}",
            "data-scroll-offset": "{offset}",
            onmounted: move |e| scroll.mounted(e),
            onscroll: move |_| scroll.scrolled(),

            div { class: "spacer", style: "{spacer_style}" }
            SearchBar { hint: LayoutHint::new().padding(Padding::horizontal(metrics::EDGE_PADDING)) }
            HomeSection { title: ALIGN_YOUR_BODY_TITLE,
                AlignYourBodyRow {}
            }
            HomeSection { title: FAVORITE_COLLECTIONS_TITLE,
                FavoriteCollectionsGrid {}
            }
            div { class: "spacer", style: "{spacer_style}" }
        }
    }
}

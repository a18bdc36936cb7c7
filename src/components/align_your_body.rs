//! "Align your body" row and its circular elements.

use dioxus::prelude::*;
use mysoothe_core::catalog::Catalog;
use mysoothe_core::layout::metrics;
use mysoothe_core::window::{ItemGeometry, RenderPolicy, Viewport};
use mysoothe_core::{CatalogItem, Dp, ImageRef, LayoutHint, Padding, TextRef};

use super::scroll::{use_scroll_tracker, ScrollAxis};
use crate::context::use_app;
use crate::theme::baseline_padding;

/// Circular image above a centered label.
#[component]
pub fn AlignYourBodyElement(
    image: ImageRef,
    text: TextRef,
    #[props(default)] hint: LayoutHint,
) -> Element {
    let app = use_app();
    let src = app.image_src(image);
    let label = app.text(text);
    let style = hint.to_style();
    let image_style = LayoutHint::new().size(metrics::BODY_IMAGE_SIZE).to_style();
    let label_style = baseline_padding(
        metrics::BODY_LABEL_BASELINE_TOP,
        metrics::BODY_LABEL_BASELINE_BOTTOM,
    );

    rsx! {
        div { class: "align-body-element", style: "{style}",
            img {
                class: "align-body-image",
                src: "{src}",
                alt: "",
                style: "{image_style}",
            }
            span { class: "align-body-label text-h3", style: "{label_style}", "{label}" }
        }
    }
}

/// Horizontally scrolling row of every body-focus item, in catalog order.
#[component]
pub fn AlignYourBodyRow(#[props(default)] hint: LayoutHint) -> Element {
    rsx! {
        BodyFocusRow { items: Catalog::AlignYourBody.items(), hint }
    }
}

/// Row over any slice of items.
///
/// Long slices only materialize the items in view. Spacers stand in for
/// the rest so items keep their positions and the row keeps its full
/// scroll width.
#[component]
fn BodyFocusRow(items: &'static [CatalogItem], hint: LayoutHint) -> Element {
    let app = use_app();
    let scroll = use_scroll_tracker(ScrollAxis::Horizontal);
    let geometry = ItemGeometry::body_row();
    let policy = RenderPolicy::for_len(items.len());
    let virtualized = policy == RenderPolicy::Virtualized;

    // Eager rows never read the offset, so scrolling them does not re-render
    let viewport = if virtualized {
        scroll.state.read().viewport(app.viewport_width)
    } else {
        Viewport::default()
    };
    let window = policy.window(items.len(), geometry, viewport);
    let leading = geometry.leading_space(&window);
    let trailing = geometry.trailing_space(&window, items.len());
    let first = window.start;
    let leading_style = spacer_style(leading);
    let trailing_style = spacer_style(trailing);

    let style = format!(
        "gap: {}; {}",
        metrics::ITEM_SPACING,
        hint.padding(Padding::horizontal(metrics::EDGE_PADDING)).to_style()
    );

    rsx! {
        div {
            class: "align-body-row",
            style: "{style}",
            onmounted: move |e| scroll.mounted(e),
            onscroll: move |_| {
                if virtualized {
                    scroll.scrolled();
                }
            },
            if leading > 0.0 {
                div { class: "row-spacer", style: "{leading_style}" }
            }
            for (offset, item) in items[window].iter().enumerate() {
                {
                    let key = format!("{}-{}", first + offset, item.image.key());
                    rsx! {
                        AlignYourBodyElement {
                            key: "{key}",
                            image: item.image,
                            text: item.text,
                        }
                    }
                }
            }
            if trailing > 0.0 {
                div { class: "row-spacer", style: "{trailing_style}" }
            }
        }
    }
}

fn spacer_style(width: f32) -> String {
    format!("width: {}; flex-shrink: 0;", Dp(width))
}

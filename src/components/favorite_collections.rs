//! Favorite collections grid and cards.

use dioxus::prelude::*;
use mysoothe_core::catalog::Catalog;
use mysoothe_core::layout::{grid_columns, grid_placement, metrics, GridCells};
use mysoothe_core::window::{ItemGeometry, RenderPolicy, Viewport};
use mysoothe_core::{CatalogItem, ImageRef, LayoutHint, Padding, TextRef};

use super::scroll::{use_scroll_tracker, ScrollAxis};
use crate::context::use_app;

/// Fixed-width card: square image followed by the collection name.
#[component]
pub fn FavoriteCollectionCard(
    image: ImageRef,
    text: TextRef,
    #[props(default)] hint: LayoutHint,
) -> Element {
    let app = use_app();
    let src = app.image_src(image);
    let label = app.text(text);
    let style = format!(
        "border-radius: {}; {}",
        app.theme.shapes.small,
        hint.then(&LayoutHint::new().width(metrics::CARD_WIDTH))
            .to_style()
    );
    let image_style = LayoutHint::new().size(metrics::CARD_IMAGE_SIZE).to_style();
    let label_style = LayoutHint::new()
        .padding(Padding::horizontal(metrics::CARD_TEXT_PADDING))
        .to_style();

    rsx! {
        div { class: "collection-card", style: "{style}",
            img {
                class: "collection-card-image",
                src: "{src}",
                alt: "",
                style: "{image_style}",
            }
            span { class: "collection-card-label text-h3", style: "{label_style}", "{label}" }
        }
    }
}

/// Two-row horizontal grid of every favorite collection.
#[component]
pub fn FavoriteCollectionsGrid(#[props(default)] hint: LayoutHint) -> Element {
    rsx! {
        CollectionGrid { items: Catalog::FavoriteCollections.items(), hint }
    }
}

/// Two-row grid over any slice of items.
///
/// Cards stay in catalog order in the DOM; each one is pinned to its
/// column-major cell with explicit `grid-row` / `grid-column`. The column
/// template always spans every column, so a long grid that only
/// materializes the columns in view keeps its cards in place and its full
/// scroll width.
#[component]
fn CollectionGrid(items: &'static [CatalogItem], hint: LayoutHint) -> Element {
    let app = use_app();
    let scroll = use_scroll_tracker(ScrollAxis::Horizontal);
    let cells = GridCells::Fixed(metrics::GRID_ROWS);
    let policy = RenderPolicy::for_len(items.len());
    let virtualized = policy == RenderPolicy::Virtualized;

    // The grid scrolls by column, so window over columns and expand to items
    let columns = grid_columns(items.len(), cells);
    let viewport = if virtualized {
        scroll.state.read().viewport(app.viewport_width)
    } else {
        Viewport::default()
    };
    let visible_columns = policy.window(columns, ItemGeometry::collection_columns(), viewport);
    let first = visible_columns.start * cells.count();
    let last = (visible_columns.end * cells.count()).min(items.len());

    let style = format!(
        "grid-template-rows: repeat({}, {}); grid-template-columns: repeat({}, {}); gap: {}; {}",
        cells.count(),
        metrics::CARD_HEIGHT,
        columns,
        metrics::CARD_WIDTH,
        metrics::ITEM_SPACING,
        hint.then(
            &LayoutHint::new()
                .height(metrics::GRID_HEIGHT)
                .padding(Padding::horizontal(metrics::EDGE_PADDING))
        )
        .to_style()
    );

    rsx! {
        div {
            class: "collections-grid",
            style: "{style}",
            onmounted: move |e| scroll.mounted(e),
            onscroll: move |_| {
                if virtualized {
                    scroll.scrolled();
                }
            },
            for index in first..last {
                {
                    let item = items[index];
                    let key = format!("{}-{}", index, item.image.key());
                    let slot = grid_placement(index, cells);
                    let cell_style = format!(
                        "grid-row: {}; grid-column: {};",
                        slot.row + 1,
                        slot.column + 1
                    );
                    rsx! {
                        div { key: "{key}", class: "collections-grid-cell", style: "{cell_style}",
                            FavoriteCollectionCard {
                                image: item.image,
                                text: item.text,
                                hint: LayoutHint::new().height(metrics::CARD_HEIGHT),
                            }
                        }
                    }
                }
            }
        }
    }
}

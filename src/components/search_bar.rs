//! Search Bar Component
//!
//! Presentational only: the value is always empty and typed input is
//! dropped. Each input event re-keys the field, so the webview replaces it
//! with a fresh empty one.

use dioxus::prelude::*;
use mysoothe_core::layout::metrics;
use mysoothe_core::resources::PLACEHOLDER_SEARCH;
use mysoothe_core::LayoutHint;

use super::icons::icon;
use crate::context::use_app;

/// Tracks discarded input; the generation keys the `input` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct InputReset {
    generation: u32,
}

impl InputReset {
    fn discard(&mut self, typed: &str) {
        if typed.is_empty() {
            return;
        }
        tracing::trace!("Search input discarded: {:?}", typed);
        self.generation = self.generation.wrapping_add(1);
    }

    fn key(&self) -> String {
        format!("search-input-{}", self.generation)
    }
}

/// Full-width search field with a leading search icon.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SearchBar { hint: LayoutHint::new().padding(Padding::horizontal(Dp(16.0))) }
/// }
/// ```
#[component]
pub fn SearchBar(#[props(default)] hint: LayoutHint) -> Element {
    let app = use_app();
    let placeholder = app.text(PLACEHOLDER_SEARCH);
    let mut reset = use_signal(InputReset::default);
    let input_key = reset.read().key();
    let outer_style = hint.then(&LayoutHint::new().fill_max_width()).to_style();
    let field_style = format!(
        "background-color: {}; {}",
        app.theme.colors.surface,
        LayoutHint::new()
            .min_height(metrics::SEARCH_MIN_HEIGHT)
            .to_style()
    );

    rsx! {
        div { class: "search-bar", style: "{outer_style}",
            label { class: "search-field", style: "{field_style}",
                span { class: "search-icon", {icon("search")} }
                for key in std::iter::once(input_key) {
                    input {
                        key: "{key}",
                        class: "search-input",
                        r#type: "search",
                        value: "",
                        placeholder: "{placeholder}",
                        oninput: move |e| reset.write().discard(&e.value()),
                    }
                }
            }
        }
    }
}

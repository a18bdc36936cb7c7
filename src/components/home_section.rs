//! Home Section Component
//!
//! Titled block around arbitrary content.

use dioxus::prelude::*;
use mysoothe_core::layout::metrics;
use mysoothe_core::{LayoutHint, Padding, TextRef};

use crate::context::use_app;
use crate::theme::baseline_padding;

/// Renders the uppercased `title` followed by `children`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HomeSection { title: ALIGN_YOUR_BODY_TITLE,
///         AlignYourBodyRow {}
///     }
/// }
/// ```
#[component]
pub fn HomeSection(
    title: TextRef,
    #[props(default)] hint: LayoutHint,
    children: Element,
) -> Element {
    let app = use_app();
    let heading = app.locale.uppercase(&app.text(title));
    let style = hint.to_style();
    let title_style = format!(
        "{} {}",
        baseline_padding(metrics::SECTION_BASELINE_TOP, metrics::SECTION_BASELINE_BOTTOM),
        LayoutHint::new()
            .padding(Padding::horizontal(metrics::EDGE_PADDING))
            .to_style()
    );

    rsx! {
        section { class: "home-section", style: "{style}",
            h2 { class: "home-section-title text-h2", style: "{title_style}", "{heading}" }
            {children}
        }
    }
}

//! Bottom Navigation Component
//!
//! Home and Profile. Only Home has a screen; selection stays on Home.

use dioxus::prelude::*;
use mysoothe_core::layout::metrics;
use mysoothe_core::{BottomNavState, LayoutHint, NavDestination};

use super::icons::icon;
use crate::context::use_app;

/// Bottom bar with one button per [`NavDestination`].
///
/// Clicking Profile goes through [`BottomNavState::select`], which keeps
/// Home selected since no profile screen exists.
#[component]
pub fn SootheBottomNavigation(#[props(default)] hint: LayoutHint) -> Element {
    let app = use_app();
    let mut selection = use_signal(BottomNavState::new);
    let style = format!(
        "background-color: {}; {}",
        app.theme.colors.background,
        hint.then(&LayoutHint::new().fill_max_width().height(metrics::NAV_BAR_HEIGHT))
            .to_style()
    );

    rsx! {
        nav { class: "bottom-nav", style: "{style}",
            for destination in NavDestination::ALL {
                {
                    let id = destination.id();
                    let selected = selection.read().is_selected(destination);
                    let class = if selected {
                        format!("bottom-nav-item bottom-nav-{id} selected")
                    } else {
                        format!("bottom-nav-item bottom-nav-{id}")
                    };
                    let label = app.text(destination.label());
                    rsx! {
                        button {
                            key: "{id}",
                            class: "{class}",
                            "aria-selected": if selected { "true" } else { "false" },
                            onclick: move |_| selection.write().select(destination),
                            span { class: "bottom-nav-icon", {icon(destination.icon())} }
                            span { class: "bottom-nav-label text-caption", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestApp;

    #[test]
    fn shows_two_destinations_with_home_selected() {
        let html = dioxus_ssr::render_element(rsx! {
            TestApp { SootheBottomNavigation {} }
        });
        assert_eq!(html.matches(r#"class="bottom-nav-item "#).count(), 2);
        assert!(html.contains(r#"class="bottom-nav-item bottom-nav-home selected""#));
        assert!(html.contains(r#"class="bottom-nav-item bottom-nav-profile""#));
        assert_eq!(html.matches(" selected\"").count(), 1);
        assert!(html.contains(">Home<"));
        assert!(html.contains(">Profile<"));
    }
}

use dioxus::prelude::*;
use mysoothe_core::layout::metrics;
use mysoothe_core::{AppConfig, LayoutHint, Padding};

use crate::components::SootheBottomNavigation;
use crate::context::AppContext;
use crate::pages::HomeScreen;
use crate::theme::global_styles;

/// Root component launched by the desktop runtime.
///
/// Picks up the [`AppConfig`] handed to the launcher, or defaults.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    rsx! {
        MySootheApp { config }
    }
}

/// Application shell.
///
/// Provides the app context and global styles, then lays out the home
/// screen above the bottom navigation. The body is padded by the bar's
/// height so the last section is never hidden behind it.
#[component]
pub fn MySootheApp(#[props(default)] config: AppConfig) -> Element {
    let app = use_context_provider(|| AppContext::from_config(&config));
    let styles = global_styles(&app.theme);
    let body_hint = LayoutHint::new().padding(Padding::bottom(metrics::NAV_BAR_HEIGHT));

    rsx! {
        style { {styles} }
        div { class: "scaffold",
            main { class: "scaffold-body",
                HomeScreen { hint: body_hint }
            }
            footer { class: "scaffold-bottom-bar",
                SootheBottomNavigation {}
            }
        }
    }
}

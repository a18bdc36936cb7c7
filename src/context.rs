//! App context provider for MySoothe.
//!
//! Provides the theme, locale and resources to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the app shell
//! use_context_provider(|| AppContext::from_config(&config));
//!
//! // In child components
//! let app = use_app();
//! let label = app.text(item.text);
//! ```

use dioxus::prelude::*;
use mysoothe_core::{AppConfig, ImageRef, Locale, Resources, TextRef, Theme};

/// Read-only values every component renders against.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    pub theme: Theme,
    pub locale: Locale,
    pub resources: Resources,
    /// Width of the window, used as the horizontal viewport of lazy rows
    pub viewport_width: f32,
}

impl AppContext {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            theme: config.theme(),
            locale: config.locale.clone(),
            resources: config.resources(),
            viewport_width: config.window.width as f32,
        }
    }

    /// Localized string for `text`, or the raw key if it cannot be resolved.
    pub fn text(&self, text: TextRef) -> String {
        match self.resources.text(text, &self.locale) {
            Ok(value) => value.to_string(),
            Err(e) => {
                tracing::warn!("{}, rendering raw key", e);
                text.key().to_string()
            }
        }
    }

    /// `img` source for `image`, or an empty source if it cannot be resolved.
    pub fn image_src(&self, image: ImageRef) -> String {
        match self.resources.image(image) {
            Ok(source) => source.uri,
            Err(e) => {
                tracing::warn!("{}, rendering without image", e);
                String::new()
            }
        }
    }
}

/// Hook to access the app context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Wraps `children` in a default app context for rendering tests.
#[cfg(test)]
#[component]
pub fn TestApp(children: Element) -> Element {
    use_context_provider(|| AppContext::from_config(&AppConfig::default()));
    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysoothe_core::catalog::ALIGN_YOUR_BODY;

    #[test]
    fn unresolved_text_falls_back_to_key() {
        let app = AppContext::from_config(&AppConfig::default());
        assert_eq!(app.text(ALIGN_YOUR_BODY[4].text), "HIIT");
        assert_eq!(app.text(TextRef("missing_key")), "missing_key");
    }

    #[test]
    fn unresolved_image_is_empty() {
        let app = AppContext::from_config(&AppConfig::default());
        assert!(app.image_src(ALIGN_YOUR_BODY[0].image).starts_with("data:image/svg+xml"));
        assert_eq!(app.image_src(ImageRef("missing")), "");
    }
}

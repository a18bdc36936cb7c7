//! Application configuration assembled from the command line.

use std::path::PathBuf;

use crate::locale::Locale;
use crate::resources::Resources;
use crate::theme::{Theme, ThemeMode};

/// Initial window size in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub locale: Locale,
    pub theme_mode: ThemeMode,
    /// Directory holding drawables named after their resource keys
    pub assets_dir: Option<PathBuf>,
    pub window: WindowSize,
}

impl AppConfig {
    pub fn theme(&self) -> Theme {
        Theme::new(self.theme_mode)
    }

    pub fn resources(&self) -> Resources {
        match &self.assets_dir {
            Some(dir) => Resources::with_assets_dir(dir),
            None => Resources::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_phone_screen() {
        let config = AppConfig::default();
        assert_eq!(config.window, WindowSize { width: 360.0, height: 640.0 });
        assert_eq!(config.locale.to_string(), "en");
        assert_eq!(config.theme().mode, ThemeMode::Light);
        assert_eq!(config.resources(), Resources::bundled());
    }

    #[test]
    fn assets_dir_flows_into_resources() {
        let config = AppConfig {
            assets_dir: Some(PathBuf::from("/tmp/drawable")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resources().assets_dir(),
            Some(std::path::Path::new("/tmp/drawable"))
        );
    }
}

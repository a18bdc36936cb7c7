//! MySoothe visual theme: colors, typography and shapes.
//!
//! The theme is read-only once built. The shell hands it to every component
//! through context and renders it into CSS custom properties.

use std::str::FromStr;

use crate::error::SootheError;
use crate::layout::Dp;

// === TAUPE / RUST / GRAY ===
pub const TAUPE_100: &str = "#F0EAE2";
pub const TAUPE_800: &str = "#655454";
pub const RUST_300: &str = "#E1AFAF";
pub const RUST_600: &str = "#886363";
pub const GRAY_900: &str = "#333333";
pub const WHITE: &str = "#FFFFFF";
pub const WHITE_150: &str = "rgba(255, 255, 255, 0.15)";
pub const WHITE_800: &str = "rgba(255, 255, 255, 0.8)";
pub const WHITE_850: &str = "rgba(255, 255, 255, 0.85)";

/// Light or dark palette
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl FromStr for ThemeMode {
    type Err = SootheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(SootheError::InvalidThemeMode(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub on_primary: &'static str,
    pub on_secondary: &'static str,
    pub on_background: &'static str,
    pub on_surface: &'static str,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            primary: GRAY_900,
            secondary: RUST_600,
            background: TAUPE_100,
            surface: WHITE_850,
            on_primary: WHITE,
            on_secondary: WHITE,
            on_background: TAUPE_800,
            on_surface: GRAY_900,
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: WHITE,
            secondary: RUST_300,
            background: GRAY_900,
            surface: WHITE_150,
            on_primary: GRAY_900,
            on_secondary: GRAY_900,
            on_background: TAUPE_100,
            on_surface: WHITE_800,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: &'static str,
    pub weight: u16,
    pub size: Dp,
    pub letter_spacing: Dp,
}

impl TextStyle {
    const fn new(family: &'static str, weight: u16, size: f32, letter_spacing: f32) -> Self {
        Self {
            family,
            weight,
            size: Dp(size),
            letter_spacing: Dp(letter_spacing),
        }
    }
}

const KULIM_PARK: &str = "'Kulim Park', 'Helvetica Neue', sans-serif";
const LATO: &str = "'Lato', 'Helvetica Neue', sans-serif";

#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub body1: TextStyle,
    pub button: TextStyle,
    pub caption: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            h1: TextStyle::new(KULIM_PARK, 300, 28.0, 1.15),
            h2: TextStyle::new(KULIM_PARK, 400, 15.0, 1.15),
            h3: TextStyle::new(LATO, 700, 14.0, 0.0),
            body1: TextStyle::new(LATO, 400, 14.0, 0.0),
            button: TextStyle::new(LATO, 700, 14.0, 1.15),
            caption: TextStyle::new(KULIM_PARK, 400, 12.0, 1.15),
        }
    }
}

/// Corner radii
#[derive(Clone, Debug, PartialEq)]
pub struct Shapes {
    pub small: Dp,
    pub medium: Dp,
    pub large: Dp,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            small: Dp(4.0),
            medium: Dp(4.0),
            large: Dp(0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: Palette,
    pub typography: Typography,
    pub shapes: Shapes,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        };
        Self {
            mode,
            colors,
            typography: Typography::default(),
            shapes: Shapes::default(),
        }
    }

    /// Render every token as a CSS custom property on `:root`.
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        let mut css = String::from(":root {\n");
        for (name, value) in [
            ("primary", c.primary),
            ("secondary", c.secondary),
            ("background", c.background),
            ("surface", c.surface),
            ("on-primary", c.on_primary),
            ("on-secondary", c.on_secondary),
            ("on-background", c.on_background),
            ("on-surface", c.on_surface),
        ] {
            css.push_str(&format!("  --color-{name}: {value};\n"));
        }

        let t = &self.typography;
        for (name, style) in [
            ("h1", &t.h1),
            ("h2", &t.h2),
            ("h3", &t.h3),
            ("body1", &t.body1),
            ("button", &t.button),
            ("caption", &t.caption),
        ] {
            css.push_str(&format!(
                "  --font-{name}-family: {};\n  --font-{name}-weight: {};\n  --font-{name}-size: {};\n  --font-{name}-spacing: {};\n",
                style.family, style.weight, style.size, style.letter_spacing
            ));
        }

        for (name, radius) in [
            ("small", &self.shapes.small),
            ("medium", &self.shapes.medium),
            ("large", &self.shapes.large),
        ] {
            css.push_str(&format!("  --shape-{name}: {radius};\n"));
        }
        css.push_str("}\n");
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_parses() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!(" Dark ".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(SootheError::InvalidThemeMode(_))
        ));
    }

    #[test]
    fn palettes_differ_by_mode() {
        let light = Theme::new(ThemeMode::Light);
        let dark = Theme::new(ThemeMode::Dark);
        assert_eq!(light.colors.background, TAUPE_100);
        assert_eq!(dark.colors.background, GRAY_900);
        assert_eq!(light.typography, dark.typography);
    }

    #[test]
    fn css_variables_cover_tokens() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-surface: rgba(255, 255, 255, 0.85);"));
        assert!(css.contains("--font-h2-size: 15px;"));
        assert!(css.contains("--font-h3-weight: 700;"));
        assert!(css.contains("--shape-small: 4px;"));
        assert!(css.ends_with("--shape-large: 0px;\n}\n"));
        // 8 colors, 6 text styles with 4 properties each, 3 shapes
        assert_eq!(css.matches(": ").count(), 8 + 6 * 4 + 3);
    }
}

//! Bundled resources: string tables and drawables.
//!
//! Text lookups try the locale's language first and fall back to English.
//! Images come from an optional assets directory; keys with no file on disk
//! get a generated SVG placeholder so the layout still renders.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::catalog::{ImageRef, TextRef, ALIGN_YOUR_BODY, FAVORITE_COLLECTIONS};
use crate::error::{Result, SootheError};
use crate::locale::Locale;

pub const DEFAULT_LANGUAGE: &str = "en";

pub const PLACEHOLDER_SEARCH: TextRef = TextRef("placeholder_search");
pub const ALIGN_YOUR_BODY_TITLE: TextRef = TextRef("align_your_body");
pub const FAVORITE_COLLECTIONS_TITLE: TextRef = TextRef("favorite_collections");
pub const BOTTOM_NAVIGATION_HOME: TextRef = TextRef("bottom_navigation_home");
pub const BOTTOM_NAVIGATION_PROFILE: TextRef = TextRef("bottom_navigation_profile");

const STRINGS_EN: &[(&str, &str)] = &[
    ("app_name", "MySoothe"),
    ("placeholder_search", "Search"),
    ("align_your_body", "Align your body"),
    ("favorite_collections", "Favorite collections"),
    ("bottom_navigation_home", "Home"),
    ("bottom_navigation_profile", "Profile"),
    ("ab1_inversions", "Inversions"),
    ("ab2_quick_yoga", "Quick yoga"),
    ("ab3_stretching", "Stretching"),
    ("ab4_tabata", "Tabata"),
    ("ab5_hiit", "HIIT"),
    ("ab6_pre_natal_yoga", "Pre-natal yoga"),
    ("fc1_short_mantras", "Short mantras"),
    ("fc2_nature_meditations", "Nature meditations"),
    ("fc3_stress_and_anxiety", "Stress and anxiety"),
    ("fc4_self_massage", "Self-massage"),
    ("fc5_overwhelmed", "Overwhelmed"),
    ("fc6_nightly_wind_down", "Nightly wind down"),
];

const STRING_TABLES: &[(&str, &[(&str, &str)])] = &[(DEFAULT_LANGUAGE, STRINGS_EN)];

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
];

/// A resolved drawable, ready to drop into an `img` `src`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    pub uri: String,
    /// True when no file was found and a generated placeholder is used
    pub placeholder: bool,
}

/// Resolves opaque text and image references to concrete assets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resources {
    assets_dir: Option<PathBuf>,
}

impl Resources {
    /// Resources with no drawables on disk; every image is a placeholder.
    pub fn bundled() -> Self {
        Self::default()
    }

    pub fn with_assets_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: Some(dir.into()),
        }
    }

    pub fn assets_dir(&self) -> Option<&Path> {
        self.assets_dir.as_deref()
    }

    /// Look up the localized string for `text`.
    pub fn text(&self, text: TextRef, locale: &Locale) -> Result<&'static str> {
        lookup(locale.language(), text.key())
            .or_else(|| lookup(DEFAULT_LANGUAGE, text.key()))
            .ok_or_else(|| SootheError::UnknownText(text.key().to_string()))
    }

    /// Resolve `image` to a data URI.
    pub fn image(&self, image: ImageRef) -> Result<ImageSource> {
        let key = image.key();
        if !is_known_image(key) {
            return Err(SootheError::UnknownImage(key.to_string()));
        }

        if let Some(dir) = &self.assets_dir {
            for (ext, mime) in IMAGE_EXTENSIONS {
                let path = dir.join(format!("{key}.{ext}"));
                if path.is_file() {
                    let bytes = std::fs::read(&path)?;
                    tracing::debug!("Loaded drawable {} from {:?}", key, path);
                    return Ok(ImageSource {
                        uri: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
                        placeholder: false,
                    });
                }
            }
        }

        Ok(ImageSource {
            uri: placeholder_uri(key),
            placeholder: true,
        })
    }
}

fn lookup(language: &str, key: &str) -> Option<&'static str> {
    STRING_TABLES
        .iter()
        .find(|(lang, _)| *lang == language)
        .and_then(|(_, table)| table.iter().find(|(k, _)| *k == key))
        .map(|(_, value)| *value)
}

fn is_known_image(key: &str) -> bool {
    ALIGN_YOUR_BODY
        .iter()
        .chain(FAVORITE_COLLECTIONS.iter())
        .any(|item| item.image.key() == key)
}

/// FNV-1a, used only to pick a stable placeholder hue per key
fn key_hash(key: &str) -> u32 {
    key.bytes().fold(0x811c_9dc5, |hash, b| {
        (hash ^ u32::from(b)).wrapping_mul(0x0100_0193)
    })
}

fn placeholder_uri(key: &str) -> String {
    let hue = key_hash(key) % 360;
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid slice">"#,
            r#"<rect width="100" height="100" fill="hsl({hue}, 28%, 72%)"/>"#,
            r#"<circle cx="50" cy="62" r="30" fill="hsl({hue}, 24%, 58%)"/>"#,
            r#"</svg>"#
        ),
        hue = hue
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn every_catalog_label_resolves() {
        let resources = Resources::bundled();
        let locale = Locale::default();
        for catalog in [Catalog::AlignYourBody, Catalog::FavoriteCollections] {
            for item in catalog.items() {
                assert!(resources.text(item.text, &locale).is_ok(), "{:?}", item);
            }
        }
    }

    #[test]
    fn falls_back_to_english() {
        let resources = Resources::bundled();
        let de = Locale::parse("de-DE").unwrap();
        assert_eq!(resources.text(PLACEHOLDER_SEARCH, &de).unwrap(), "Search");
        assert_eq!(
            resources.text(ALIGN_YOUR_BODY_TITLE, &de).unwrap(),
            "Align your body"
        );
    }

    #[test]
    fn unknown_text_is_an_error() {
        let resources = Resources::bundled();
        let err = resources
            .text(TextRef("does_not_exist"), &Locale::default())
            .unwrap_err();
        assert!(matches!(err, SootheError::UnknownText(key) if key == "does_not_exist"));
    }

    #[test]
    fn unknown_image_is_an_error() {
        let err = Resources::bundled().image(ImageRef("nope")).unwrap_err();
        assert!(matches!(err, SootheError::UnknownImage(_)));
    }

    #[test]
    fn placeholder_is_deterministic() {
        let resources = Resources::bundled();
        let a = resources.image(ALIGN_YOUR_BODY[0].image).unwrap();
        let b = resources.image(ALIGN_YOUR_BODY[0].image).unwrap();
        assert!(a.placeholder);
        assert!(a.uri.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(a, b);
    }

    #[test]
    fn loads_drawable_from_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fc4_self_massage.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let resources = Resources::with_assets_dir(dir.path());
        let found = resources.image(FAVORITE_COLLECTIONS[3].image).unwrap();
        assert!(!found.placeholder);
        assert_eq!(found.uri, "data:image/png;base64,iVBORw==");

        let missing = resources.image(FAVORITE_COLLECTIONS[0].image).unwrap();
        assert!(missing.placeholder);
    }
}

//! Locale tags and locale-sensitive casing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SootheError};

/// A language with an optional region, e.g. `en` or `en-US`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Parse a tag such as `en`, `en-US` or `tr_TR`.
    pub fn parse(tag: &str) -> Result<Self> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(SootheError::InvalidLocale(tag.to_string()));
        }

        let region = match parts.next() {
            Some(r) if !r.is_empty() && r.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Some(r.to_ascii_uppercase())
            }
            Some(_) => return Err(SootheError::InvalidLocale(tag.to_string())),
            None => None,
        };

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Uppercase `text` following this locale's casing rules.
    ///
    /// Turkic languages map dotted `i` to `İ` instead of `I`.
    pub fn uppercase(&self, text: &str) -> String {
        match self.language.as_str() {
            "tr" | "az" => text
                .chars()
                .map(|c| match c {
                    'i' => "İ".to_string(),
                    other => other.to_uppercase().collect(),
                })
                .collect(),
            _ => text.to_uppercase(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: None,
        }
    }
}

impl FromStr for Locale {
    type Err = SootheError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_and_region() {
        let locale = Locale::parse("en_us").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), Some("US"));
        assert_eq!(locale.to_string(), "en-US");

        let locale: Locale = "FR".parse().unwrap();
        assert_eq!(locale.language(), "fr");
        assert_eq!(locale.region(), None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(Locale::parse(""), Err(SootheError::InvalidLocale(_))));
        assert!(Locale::parse("e").is_err());
        assert!(Locale::parse("english").is_err());
        assert!(Locale::parse("e1").is_err());
        assert!(Locale::parse("en-").is_err());
    }

    #[test]
    fn uppercases_section_title() {
        let en = Locale::default();
        assert_eq!(en.uppercase("align your body"), "ALIGN YOUR BODY");
        assert_eq!(en.uppercase("Favorite collections"), "FAVORITE COLLECTIONS");
    }

    #[test]
    fn turkish_uppercase_keeps_the_dot() {
        let tr = Locale::parse("tr-TR").unwrap();
        assert_eq!(tr.uppercase("istanbul"), "İSTANBUL");
        assert_eq!(Locale::default().uppercase("istanbul"), "ISTANBUL");
    }
}

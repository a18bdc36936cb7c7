//! Static catalogs backing the home screen.
//!
//! Both lists are fixed at six entries and defined once; nothing in the
//! application mutates them.

/// Opaque reference to a bundled drawable, resolved by [`crate::Resources`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(pub &'static str);

/// Opaque reference to a localized string, resolved by [`crate::Resources`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRef(pub &'static str);

impl ImageRef {
    pub fn key(&self) -> &'static str {
        self.0
    }
}

impl TextRef {
    pub fn key(&self) -> &'static str {
        self.0
    }
}

/// An immutable (image, label) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CatalogItem {
    pub image: ImageRef,
    pub text: TextRef,
}

impl CatalogItem {
    pub const fn new(image: &'static str, text: &'static str) -> Self {
        Self {
            image: ImageRef(image),
            text: TextRef(text),
        }
    }
}

/// Body-focus items shown in the "align your body" row.
pub static ALIGN_YOUR_BODY: [CatalogItem; 6] = [
    CatalogItem::new("ab1_inversions", "ab1_inversions"),
    CatalogItem::new("ab2_quick_yoga", "ab2_quick_yoga"),
    CatalogItem::new("ab3_stretching", "ab3_stretching"),
    CatalogItem::new("ab4_tabata", "ab4_tabata"),
    CatalogItem::new("ab5_hiit", "ab5_hiit"),
    CatalogItem::new("ab6_pre_natal_yoga", "ab6_pre_natal_yoga"),
];

/// Collections shown in the "favorite collections" grid.
pub static FAVORITE_COLLECTIONS: [CatalogItem; 6] = [
    CatalogItem::new("fc1_short_mantras", "fc1_short_mantras"),
    CatalogItem::new("fc2_nature_meditations", "fc2_nature_meditations"),
    CatalogItem::new("fc3_stress_and_anxiety", "fc3_stress_and_anxiety"),
    CatalogItem::new("fc4_self_massage", "fc4_self_massage"),
    CatalogItem::new("fc5_overwhelmed", "fc5_overwhelmed"),
    CatalogItem::new("fc6_nightly_wind_down", "fc6_nightly_wind_down"),
];

/// The two catalogs, by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalog {
    AlignYourBody,
    FavoriteCollections,
}

impl Catalog {
    pub fn items(&self) -> &'static [CatalogItem] {
        match self {
            Catalog::AlignYourBody => &ALIGN_YOUR_BODY,
            Catalog::FavoriteCollections => &FAVORITE_COLLECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogs_have_six_entries() {
        assert_eq!(Catalog::AlignYourBody.items().len(), 6);
        assert_eq!(Catalog::FavoriteCollections.items().len(), 6);
    }

    #[test]
    fn catalog_entries_are_unique() {
        for catalog in [Catalog::AlignYourBody, Catalog::FavoriteCollections] {
            let keys: HashSet<_> = catalog.items().iter().map(|i| i.image).collect();
            assert_eq!(keys.len(), catalog.items().len());
        }
    }

    #[test]
    fn catalog_order_is_stable() {
        let keys: Vec<_> = ALIGN_YOUR_BODY.iter().map(|i| i.text.key()).collect();
        assert_eq!(keys.first(), Some(&"ab1_inversions"));
        assert_eq!(keys.last(), Some(&"ab6_pre_natal_yoga"));
        assert_eq!(FAVORITE_COLLECTIONS[2].image.key(), "fc3_stress_and_anxiety");
    }
}

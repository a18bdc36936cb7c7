//! MySoothe Core Library
//!
//! Toolkit-independent model behind the MySoothe home screen.
//!
//! ## Overview
//!
//! Everything the UI renders comes from here: two static catalogs of
//! (image, label) pairs, the resource tables that resolve those references,
//! the theme tokens, and the layout arithmetic (fixed metrics, horizontal
//! grid placement, visible windows, scroll state).
//!
//! ## Quick Start
//!
//! ```
//! use mysoothe_core::{catalog::ALIGN_YOUR_BODY, Locale, Resources};
//!
//! let resources = Resources::bundled();
//! let locale = Locale::default();
//! let first = ALIGN_YOUR_BODY[0];
//! assert_eq!(resources.text(first.text, &locale).unwrap(), "Inversions");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod locale;
pub mod nav;
pub mod resources;
pub mod scroll;
pub mod theme;
pub mod window;

// Re-exports
pub use catalog::{Catalog, CatalogItem, ImageRef, TextRef};
pub use config::{AppConfig, WindowSize};
pub use error::{Result, SootheError};
pub use layout::{Dp, GridCells, GridSlot, LayoutHint, Padding};
pub use locale::Locale;
pub use nav::{BottomNavState, NavDestination};
pub use resources::{ImageSource, Resources};
pub use scroll::ScrollState;
pub use theme::{Theme, ThemeMode};
pub use window::{ItemGeometry, RenderPolicy, Viewport};

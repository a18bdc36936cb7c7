//! UI components for the MySoothe home screen.
//!
//! Leaf elements render a single catalog entry; collection views map a
//! catalog onto leaves; the section wrapper adds a title above any content.

mod align_your_body;
mod bottom_nav;
mod favorite_collections;
mod home_section;
mod icons;
mod scroll;
mod search_bar;

pub use align_your_body::AlignYourBodyRow;
pub use bottom_nav::SootheBottomNavigation;
pub use favorite_collections::FavoriteCollectionsGrid;
pub use home_section::HomeSection;
pub use scroll::{use_scroll_tracker, ScrollAxis};
pub use search_bar::SearchBar;

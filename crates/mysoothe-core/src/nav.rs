//! Bottom navigation destinations.
//!
//! Only the home screen exists. Selecting profile is accepted and ignored,
//! so home stays selected for the lifetime of the app.

use crate::catalog::TextRef;
use crate::resources::{BOTTOM_NAVIGATION_HOME, BOTTOM_NAVIGATION_PROFILE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavDestination {
    #[default]
    Home,
    Profile,
}

impl NavDestination {
    /// All destinations in display order
    pub const ALL: [NavDestination; 2] = [NavDestination::Home, NavDestination::Profile];

    pub fn label(&self) -> TextRef {
        match self {
            NavDestination::Home => BOTTOM_NAVIGATION_HOME,
            NavDestination::Profile => BOTTOM_NAVIGATION_PROFILE,
        }
    }

    /// Icon name used by the navigation bar
    pub fn icon(&self) -> &'static str {
        match self {
            NavDestination::Home => "spa",
            NavDestination::Profile => "account-circle",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            NavDestination::Home => "home",
            NavDestination::Profile => "profile",
        }
    }
}

/// Selection state of the bottom bar, pinned to [`NavDestination::Home`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BottomNavState {
    selected: NavDestination,
}

impl BottomNavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> NavDestination {
        self.selected
    }

    pub fn is_selected(&self, destination: NavDestination) -> bool {
        self.selected == destination
    }

    /// No navigation is wired up; the selection never moves.
    pub fn select(&mut self, destination: NavDestination) {
        if destination != self.selected {
            tracing::debug!(
                "Navigation to '{}' is not wired, staying on '{}'",
                destination.id(),
                self.selected.id()
            );
        }
    }
}

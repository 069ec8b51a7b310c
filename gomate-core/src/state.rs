//! Application state: the four slices composed into one tree.
//!
//! Every [`Action`] targets exactly one slice. There are no cross-slice
//! transitions, so reducing an action never touches the other three slices.

use crate::auth::{AuthAction, AuthState};
use crate::destinations::{DestinationsAction, DestinationsState};
use crate::favorites::{FavoritesAction, FavoritesState};
use crate::theme::{ThemeAction, ThemeState};

/// The whole application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Session slice.
    pub auth: AuthState,
    /// Favorites slice.
    pub favorites: FavoritesState,
    /// Theme slice.
    pub theme: ThemeState,
    /// Fetched destinations slice.
    pub destinations: DestinationsState,
}

/// An action routed to one slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Auth slice action.
    Auth(AuthAction),
    /// Favorites slice action.
    Favorites(FavoritesAction),
    /// Theme slice action.
    Theme(ThemeAction),
    /// Destinations slice action.
    Destinations(DestinationsAction),
}

impl AppState {
    /// Create the initial state of every slice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an action to its slice and return the new state.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Auth(a) => Self {
                auth: self.auth.reduce(a),
                ..self
            },
            Action::Favorites(a) => Self {
                favorites: self.favorites.reduce(a),
                ..self
            },
            Action::Theme(a) => Self {
                theme: self.theme.reduce(a),
                ..self
            },
            Action::Destinations(a) => Self {
                destinations: self.destinations.reduce(a),
                ..self
            },
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<FavoritesAction> for Action {
    fn from(action: FavoritesAction) -> Self {
        Self::Favorites(action)
    }
}

impl From<ThemeAction> for Action {
    fn from(action: ThemeAction) -> Self {
        Self::Theme(action)
    }
}

impl From<DestinationsAction> for Action {
    fn from(action: DestinationsAction) -> Self {
        Self::Destinations(action)
    }
}

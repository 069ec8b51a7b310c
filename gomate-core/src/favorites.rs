//! Favorites slice.
//!
//! An ordered list of destinations with no duplicate ids. The list is the
//! user's own snapshot: entries are never re-resolved against a newer fetch.

use gomate_types::{Destination, DestinationId};

/// Favorites state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesState {
    /// Favorite destinations in insertion order.
    pub items: Vec<Destination>,
}

/// Transitions of the favorites slice.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesAction {
    /// Append a destination unless its id is already present.
    Added(Destination),
    /// Drop the destination with this id.
    Removed(DestinationId),
    /// Replace the whole list (restore from storage).
    Replaced(Vec<Destination>),
}

/// Result of computing a toggle: the full next list plus the action that
/// commits it.
#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    /// The list after the toggle, ready to persist.
    pub items: Vec<Destination>,
    /// The action that produces `items` from the current state.
    pub action: FavoritesAction,
    /// Whether the destination is a favorite after the toggle.
    pub favorited: bool,
}

impl FavoritesState {
    /// Create an empty favorites list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the new state.
    pub fn reduce(mut self, action: FavoritesAction) -> Self {
        match action {
            FavoritesAction::Added(destination) => {
                if !self.contains(&destination.id) {
                    self.items.push(destination);
                }
            }
            FavoritesAction::Removed(id) => {
                self.items.retain(|item| item.id != id);
            }
            FavoritesAction::Replaced(items) => {
                self.items = dedup_by_id(items);
            }
        }
        self
    }

    /// Check whether a destination id is in the list.
    pub fn contains(&self, id: &DestinationId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Compute the effect of toggling `destination` without applying it.
    ///
    /// Removes the entry if its id is present, otherwise appends it.
    pub fn toggle(&self, destination: &Destination) -> Toggle {
        if self.contains(&destination.id) {
            let items = self
                .items
                .iter()
                .filter(|item| item.id != destination.id)
                .cloned()
                .collect();
            Toggle {
                items,
                action: FavoritesAction::Removed(destination.id.clone()),
                favorited: false,
            }
        } else {
            let mut items = self.items.clone();
            items.push(destination.clone());
            Toggle {
                items,
                action: FavoritesAction::Added(destination.clone()),
                favorited: true,
            }
        }
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Keep the first occurrence of every id.
fn dedup_by_id(items: Vec<Destination>) -> Vec<Destination> {
    let mut kept: Vec<Destination> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.iter().any(|k| k.id == item.id) {
            kept.push(item);
        }
    }
    kept
}

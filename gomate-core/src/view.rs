//! Derived view logic.
//!
//! Plain functions over current state, recomputed on every call. Data
//! volumes are a handful of destinations, so linear scans are fine.

use gomate_types::{Destination, DestinationId, User};

/// Destinations whose name or region contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn filter_destinations<'a>(destinations: &'a [Destination], query: &str) -> Vec<&'a Destination> {
    let needle = query.to_lowercase();
    destinations
        .iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&needle) || d.region.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Check whether `id` is in the favorites list.
pub fn is_favorite(favorites: &[Destination], id: &DestinationId) -> bool {
    favorites.iter().any(|f| &f.id == id)
}

/// Find a destination by id.
pub fn find_destination<'a>(
    destinations: &'a [Destination],
    id: &DestinationId,
) -> Option<&'a Destination> {
    destinations.iter().find(|d| &d.id == id)
}

/// Find a destination by name, ignoring case.
pub fn find_by_name<'a>(destinations: &'a [Destination], name: &str) -> Option<&'a Destination> {
    let wanted = name.to_lowercase();
    destinations.iter().find(|d| d.name.to_lowercase() == wanted)
}

/// Name shown on the profile header.
///
/// `"First Last"` when both parts are set, otherwise the username, otherwise
/// `"User"`.
pub fn display_name(user: Option<&User>) -> String {
    match user {
        Some(u) if !u.first_name.is_empty() && !u.last_name.is_empty() => {
            format!("{} {}", u.first_name, u.last_name)
        }
        Some(u) if !u.username.is_empty() => u.username.clone(),
        _ => "User".to_string(),
    }
}

/// Upper-cased avatar letter: first name, then username, then `U`.
pub fn avatar_initial(user: Option<&User>) -> char {
    user.and_then(|u| {
        u.first_name
            .chars()
            .next()
            .or_else(|| u.username.chars().next())
    })
    .and_then(|c| c.to_uppercase().next())
    .unwrap_or('U')
}

//! Toggle and list favorites.

use anyhow::Result;
use gomate_client::{App, KeyValueStore, RemoteApi};
use gomate_core::view;

use super::auth::warn_if_unsaved;
use super::destinations::render_line;

/// Run the favorite command.
///
/// `name` is matched against the stored favorites first (by name, or by id
/// since stored ids are stable), and a match is removed without any lookup.
/// Otherwise the country is looked up directly and added. Batch ids from a
/// listing are only meaningful within that run, so they are never resolved
/// against a new fetch.
pub async fn toggle<S: KeyValueStore, A: RemoteApi>(app: &App<S, A>, name: &str) -> Result<()> {
    let favorites = app.favorites().await;
    let stored = view::find_by_name(&favorites, name)
        .or_else(|| favorites.iter().find(|d| d.id == name))
        .cloned();

    let destination = match stored {
        Some(destination) => destination,
        None if looks_like_id(name) => {
            anyhow::bail!(
                "'{}' is not a favorite; ids are only valid within one listing, use the name",
                name
            );
        }
        None => {
            let found = app.lookup_destination(name).await?;
            // Aliases such as "uk" resolve to a full name that may be stored.
            match view::find_by_name(&favorites, &found.name) {
                Some(existing) => existing.clone(),
                None => found,
            }
        }
    };

    let committed = app.toggle_favorite(&destination).await;
    if committed.value {
        println!("Added {} to favorites", destination.name);
    } else {
        println!("Removed {} from favorites", destination.name);
    }
    warn_if_unsaved(committed.persisted);
    Ok(())
}

fn looks_like_id(name: &str) -> bool {
    name.strip_prefix("dest-")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Run the favorites command.
pub async fn list<S: KeyValueStore, A: RemoteApi>(app: &App<S, A>) {
    let favorites = app.favorites().await;
    if favorites.is_empty() {
        println!("No favorites yet.");
        return;
    }

    for destination in &favorites {
        println!("{}", render_line(destination, true));
    }
}

//! Fetch and list destinations.

use anyhow::Result;
use gomate_client::{App, KeyValueStore, RemoteApi};
use gomate_types::Destination;

/// Run the destinations command.
pub async fn run<S: KeyValueStore, A: RemoteApi>(
    app: &App<S, A>,
    search: Option<&str>,
) -> Result<()> {
    app.fetch_destinations().await?;

    let shown = match search {
        Some(query) => app.search(query).await,
        None => app.destinations().await,
    };

    if shown.is_empty() {
        println!("No destinations match.");
        return Ok(());
    }

    let favorites = app.favorites().await;
    for destination in &shown {
        println!("{}", render_line(destination, is_starred(&favorites, destination)));
    }
    Ok(())
}

/// Favorite membership for a listing row.
///
/// Stored favorites keep the ids of the run that added them, so a fresh
/// batch may reuse an id for another country; the name must match too.
pub(crate) fn is_starred(favorites: &[Destination], destination: &Destination) -> bool {
    favorites
        .iter()
        .any(|f| f.id == destination.id && f.name == destination.name)
}

/// One summary line per destination; favorites carry a `*`.
pub(crate) fn render_line(destination: &Destination, starred: bool) -> String {
    let routes = destination
        .transport_options
        .iter()
        .map(|option| format!("{} {}", option.kind, option.routes))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {:<8} {:<22} {:<9} {:<12} {} {:>6}  [{}]",
        if starred { '*' } else { ' ' },
        destination.id,
        destination.name,
        destination.region,
        destination.status,
        destination.rating,
        destination.avg_price,
        routes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomate_client::{ClientConfig, MemoryStore, MockApi};
    use gomate_types::{DestinationId, DestinationStatus, TransportKind, TransportOption};

    #[tokio::test]
    async fn fetch_with_mock_api() {
        let api = MockApi::new();
        let app = App::new(MemoryStore::new(), api.clone(), ClientConfig::default().with_seed(3));

        run(&app, Some("asia")).await.unwrap();
        assert_eq!(api.country_calls(), 10);
    }

    #[tokio::test]
    async fn failed_fetch_is_an_error() {
        let api = MockApi::new();
        for name in &gomate_core::CANDIDATE_COUNTRIES[..6] {
            api.fail_country(name);
        }
        let app = App::new(MemoryStore::new(), api, ClientConfig::default());

        let err = run(&app, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch destinations");
    }

    #[tokio::test]
    async fn star_needs_matching_name() {
        let app = App::new(MemoryStore::new(), MockApi::new(), ClientConfig::default().with_seed(4));
        let batch = app.fetch_destinations().await.unwrap();

        let mut stale = batch[0].clone();
        stale.name = "Elsewhere".into();
        assert!(!is_starred(&[stale], &batch[0]));
        assert!(is_starred(&[batch[0].clone()], &batch[0]));
        assert!(!is_starred(&[batch[0].clone()], &batch[1]));
    }

    #[test]
    fn line_shows_star_and_routes() {
        let destination = Destination {
            id: DestinationId::new("dest-1"),
            name: "Japan".into(),
            capital: "Tokyo".into(),
            region: "Asia".into(),
            description: "Explore the beautiful Japan".into(),
            status: DestinationStatus::Trending,
            flag: String::new(),
            population: 1,
            languages: "Japanese".into(),
            currency: "Japanese yen".into(),
            timezone: "UTC+09:00".into(),
            area: None,
            transport_options: vec![
                TransportOption { kind: TransportKind::Bus, routes: 12 },
                TransportOption { kind: TransportKind::Metro, routes: 4 },
            ],
            avg_price: "$900".into(),
            rating: "4.5".into(),
        };

        let line = render_line(&destination, true);
        assert!(line.starts_with("* dest-1"));
        assert!(line.contains("Trending"));
        assert!(line.ends_with("[Bus 12, Metro 4]"));
        assert!(render_line(&destination, false).starts_with("  dest-1"));
    }
}

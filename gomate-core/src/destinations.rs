//! Destinations slice.
//!
//! Holds the latest fetched batch plus loading and error flags.

use gomate_types::Destination;

/// Message recorded when a batch fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch destinations";

/// Destination list state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationsState {
    /// The latest successfully fetched batch.
    pub destinations: Vec<Destination>,
    /// A fetch is in flight.
    pub loading: bool,
    /// Message from the last failed fetch.
    pub error: Option<String>,
}

/// Transitions of the destinations slice.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationsAction {
    /// A fetch started.
    Started,
    /// A fetch completed with a full batch.
    Loaded(Vec<Destination>),
    /// A fetch failed; the previous batch is kept.
    Failed(String),
}

impl DestinationsState {
    /// Create an empty, idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the new state.
    pub fn reduce(self, action: DestinationsAction) -> Self {
        match action {
            DestinationsAction::Started => Self {
                loading: true,
                ..self
            },
            DestinationsAction::Loaded(destinations) => Self {
                destinations,
                loading: false,
                error: None,
            },
            DestinationsAction::Failed(message) => Self {
                loading: false,
                error: Some(message),
                ..self
            },
        }
    }
}

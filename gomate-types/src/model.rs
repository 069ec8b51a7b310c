//! Domain records for GoMate.
//!
//! Field names serialize in camelCase so persisted snapshots stay readable
//! by the mobile client that shares the same storage keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DestinationId, TypesError};

/// An authenticated user as returned by the credential service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric user id.
    pub id: u64,
    /// Login name.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Serialize to the JSON stored under the `user` key.
    pub fn to_json(&self) -> Result<String, TypesError> {
        serde_json::to_string(self).map_err(TypesError::Serialization)
    }

    /// Deserialize from the JSON stored under the `user` key.
    pub fn from_json(json: &str) -> Result<Self, TypesError> {
        serde_json::from_str(json).map_err(TypesError::Deserialization)
    }
}

/// A user together with the opaque token that authenticates them.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// The signed-in user.
    pub user: User,
    /// Opaque bearer token.
    pub token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &format!("[{} chars REDACTED]", self.token.len()))
            .finish()
    }
}

/// Kind of public transport offered at a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportKind {
    /// City and intercity buses.
    Bus,
    /// Rail.
    Train,
    /// Underground / light rail.
    Metro,
}

impl TransportKind {
    /// All kinds, in display order.
    pub const ALL: [TransportKind; 3] = [Self::Bus, Self::Train, Self::Metro];
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Metro => "Metro",
        };
        f.pad(label)
    }
}

/// Illustrative transport data attached to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportOption {
    /// Transport kind.
    #[serde(rename = "type")]
    pub kind: TransportKind,
    /// Number of routes.
    pub routes: u32,
}

/// Status badge shown on a destination card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestinationStatus {
    /// Widely visited.
    Popular,
    /// Rising interest.
    Trending,
    /// Open for travel.
    Active,
    /// Editor's pick.
    Recommended,
}

impl DestinationStatus {
    /// All statuses, in badge order.
    pub const ALL: [DestinationStatus; 4] =
        [Self::Popular, Self::Trending, Self::Active, Self::Recommended];
}

impl fmt::Display for DestinationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Popular => "Popular",
            Self::Trending => "Trending",
            Self::Active => "Active",
            Self::Recommended => "Recommended",
        };
        f.pad(label)
    }
}

/// A country enriched with travel data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Batch-local id (`dest-N`).
    pub id: DestinationId,
    /// Common country name.
    pub name: String,
    /// First capital, or `N/A`.
    pub capital: String,
    /// Geographic region.
    pub region: String,
    /// Short blurb.
    pub description: String,
    /// Status badge.
    pub status: DestinationStatus,
    /// Flag image URI.
    pub flag: String,
    /// Population count.
    pub population: u64,
    /// Comma-separated language names.
    pub languages: String,
    /// Name of the first listed currency, or `N/A`.
    pub currency: String,
    /// First listed timezone, or `N/A`.
    pub timezone: String,
    /// Land area in square kilometres, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Synthesized transport data.
    pub transport_options: Vec<TransportOption>,
    /// Average trip price, e.g. `$840`.
    pub avg_price: String,
    /// Rating formatted with one decimal, e.g. `4.2`.
    pub rating: String,
}

impl Destination {
    /// Serialize a list of destinations to the JSON stored under `favorites`.
    pub fn list_to_json(items: &[Destination]) -> Result<String, TypesError> {
        serde_json::to_string(items).map_err(TypesError::Serialization)
    }

    /// Deserialize a list of destinations from the `favorites` JSON.
    pub fn list_from_json(json: &str) -> Result<Vec<Destination>, TypesError> {
        serde_json::from_str(json).map_err(TypesError::Deserialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_destination() -> Destination {
        Destination {
            id: DestinationId::new("dest-1"),
            name: "Japan".into(),
            capital: "Tokyo".into(),
            region: "Asia".into(),
            description: "Explore the beautiful Japan".into(),
            status: DestinationStatus::Trending,
            flag: "https://flagcdn.com/w320/jp.png".into(),
            population: 125_836_021,
            languages: "Japanese".into(),
            currency: "Japanese yen".into(),
            timezone: "UTC+09:00".into(),
            area: Some(377_930.0),
            transport_options: vec![
                TransportOption { kind: TransportKind::Bus, routes: 12 },
                TransportOption { kind: TransportKind::Train, routes: 30 },
                TransportOption { kind: TransportKind::Metro, routes: 7 },
            ],
            avg_price: "$920".into(),
            rating: "4.6".into(),
        }
    }

    #[test]
    fn user_uses_camel_case_keys() {
        let user = User {
            id: 1,
            username: "emilys".into(),
            email: "emily.johnson@x.dummyjson.com".into(),
            first_name: "Emily".into(),
            last_name: "Johnson".into(),
        };
        let json = user.to_json().unwrap();
        assert!(json.contains("\"firstName\":\"Emily\""));
        assert!(json.contains("\"lastName\":\"Johnson\""));
        assert_eq!(User::from_json(&json).unwrap(), user);
    }

    #[test]
    fn user_tolerates_missing_optional_fields() {
        let user = User::from_json(r#"{"id":7,"username":"sam"}"#).unwrap();
        assert_eq!(user.username, "sam");
        assert!(user.first_name.is_empty());
    }

    #[test]
    fn malformed_user_is_an_error() {
        assert!(matches!(
            User::from_json("{not json"),
            Err(TypesError::Deserialization(_))
        ));
    }

    #[test]
    fn transport_option_uses_type_key() {
        let option = TransportOption { kind: TransportKind::Metro, routes: 4 };
        let json = serde_json::to_string(&option).unwrap();
        assert_eq!(json, r#"{"type":"Metro","routes":4}"#);
    }

    #[test]
    fn destination_list_keeps_order() {
        let mut second = sample_destination();
        second.id = DestinationId::new("dest-2");
        second.name = "Italy".into();
        let items = vec![sample_destination(), second];

        let json = Destination::list_to_json(&items).unwrap();
        assert!(json.contains("\"transportOptions\""));
        assert!(json.contains("\"avgPrice\""));

        let back = Destination::list_from_json(&json).unwrap();
        assert_eq!(back, items);
    }

    #[test]
    fn session_debug_redacts_token() {
        let session = Session {
            user: User {
                id: 1,
                username: "emilys".into(),
                email: String::new(),
                first_name: String::new(),
                last_name: String::new(),
            },
            token: "secret-token".into(),
        };
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn status_display_matches_badge_text() {
        let labels: Vec<String> = DestinationStatus::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["Popular", "Trending", "Active", "Recommended"]);
    }
}

//! REST payloads exchanged with the credential and country services.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{Session, User};

/// Body of the credential exchange request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

impl LoginRequest {
    /// Build a request from borrowed credentials.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful credential exchange response.
///
/// Extra fields returned by the service (gender, image, refresh token) are
/// ignored. Newer deployments name the token `accessToken`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
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
    /// Opaque bearer token.
    #[serde(alias = "accessToken")]
    pub token: String,
}

impl LoginResponse {
    /// Split the response into the user record and its token.
    pub fn into_session(self) -> Session {
        Session {
            user: User {
                id: self.id,
                username: self.username,
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
            },
            token: self.token,
        }
    }
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Account details collected by the registration form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Chosen password.
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Error body returned by the credential service on 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    pub message: String,
}

/// One record from the country reference service.
///
/// Map-valued fields are keyed by ISO code, so iteration order is by code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Country names.
    pub name: CountryName,
    /// Capitals; some territories have none.
    #[serde(default)]
    pub capital: Vec<String>,
    /// Geographic region.
    #[serde(default)]
    pub region: String,
    /// Flag images.
    pub flags: CountryFlags,
    /// Population count.
    #[serde(default)]
    pub population: u64,
    /// Language code → language name.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Currency code → currency details.
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Timezones, e.g. `UTC+01:00`.
    #[serde(default)]
    pub timezones: Vec<String>,
    /// Land area in square kilometres.
    #[serde(default)]
    pub area: Option<f64>,
}

impl CountryRecord {
    /// First listed capital.
    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Language names joined with `", "`.
    pub fn language_list(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Name of the first listed currency.
    pub fn first_currency_name(&self) -> Option<&str> {
        self.currencies.values().next().map(|c| c.name.as_str())
    }

    /// First listed timezone.
    pub fn first_timezone(&self) -> Option<&str> {
        self.timezones.first().map(String::as_str)
    }
}

/// Country name block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common English name.
    pub common: String,
}

/// Flag image block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFlags {
    /// PNG flag URI.
    #[serde(default)]
    pub png: String,
}

/// Currency details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency name, e.g. `Euro`.
    pub name: String,
    /// Currency symbol, when provided.
    #[serde(default)]
    pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRANCE: &str = r#"{
        "name": {"common": "France", "official": "French Republic"},
        "capital": ["Paris"],
        "region": "Europe",
        "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"},
        "population": 67391582,
        "languages": {"fra": "French"},
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "timezones": ["UTC-10:00", "UTC+01:00"],
        "area": 551695.0
    }"#;

    #[test]
    fn parses_country_record_ignoring_extra_fields() {
        let record: CountryRecord = serde_json::from_str(FRANCE).unwrap();
        assert_eq!(record.name.common, "France");
        assert_eq!(record.first_capital(), Some("Paris"));
        assert_eq!(record.language_list(), "French");
        assert_eq!(record.first_currency_name(), Some("Euro"));
        assert_eq!(record.first_timezone(), Some("UTC-10:00"));
        assert_eq!(record.area, Some(551695.0));
    }

    #[test]
    fn country_record_optional_blocks_default_to_empty() {
        let json = r#"{"name":{"common":"Nowhere"},"flags":{"png":""}}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_capital(), None);
        assert_eq!(record.language_list(), "");
        assert_eq!(record.first_currency_name(), None);
        assert_eq!(record.first_timezone(), None);
    }

    #[test]
    fn languages_join_with_comma() {
        let json = r#"{"name":{"common":"Canada"},"flags":{"png":""},
            "languages":{"eng":"English","fra":"French"}}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.language_list(), "English, French");
    }

    #[test]
    fn login_response_accepts_access_token_alias() {
        let json = r#"{"id":1,"username":"emilys","email":"e@x.com",
            "firstName":"Emily","lastName":"Johnson","gender":"female",
            "accessToken":"abc","refreshToken":"def"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc");

        let session = response.into_session();
        assert_eq!(session.user.first_name, "Emily");
        assert_eq!(session.token, "abc");
    }

    #[test]
    fn login_response_accepts_token_field() {
        let json = r#"{"id":2,"username":"kminchelle","token":"xyz"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "xyz");
    }

    #[test]
    fn credentials_never_appear_in_debug() {
        let request = LoginRequest::new("emilys", "emilyspass");
        assert!(!format!("{:?}", request).contains("emilyspass"));
    }
}

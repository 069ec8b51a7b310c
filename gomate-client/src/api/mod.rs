//! Remote data sources for GoMate.
//!
//! Two services are involved:
//! - the credential service, which exchanges a username and password for a
//!   user record and token
//! - the country reference service, which returns facts about a country
//!
//! Each request is issued once. There is no retry, backoff or timeout
//! handling beyond what the HTTP client does by default.
//!
//! # Example
//!
//! ```ignore
//! let api = MockApi::new();
//! let response = api.login(&LoginRequest::new("emilys", "emilyspass")).await?;
//! let france = api.country("france").await?;
//! ```

mod http;
mod mock;

pub use http::HttpApi;
pub use mock::{MockApi, MOCK_PASSWORD, MOCK_USERNAME};

use async_trait::async_trait;
use gomate_types::{CountryRecord, LoginRequest, LoginResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message reported when a login fails without a server-provided reason.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Default credential service.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://dummyjson.com";

/// Default country reference service.
pub const DEFAULT_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Remote API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service refused the request and said why.
    #[error("rejected: {0}")]
    Rejected(String),

    /// Non-success HTTP status without a usable message.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Country lookup returned no records.
    #[error("no country matches {0:?}")]
    NoMatch(String),
}

impl ApiError {
    /// Message to show for a failed login: the server's reason when it
    /// gave one, otherwise [`LOGIN_FAILED_MESSAGE`].
    pub fn login_message(&self) -> &str {
        match self {
            ApiError::Rejected(message) => message,
            _ => LOGIN_FAILED_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Endpoints of the remote services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the credential service.
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,

    /// Base URL of the country reference service.
    #[serde(default = "default_countries_base_url")]
    pub countries_base_url: String,
}

fn default_auth_base_url() -> String {
    DEFAULT_AUTH_BASE_URL.to_string()
}

fn default_countries_base_url() -> String {
    DEFAULT_COUNTRIES_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base_url: default_auth_base_url(),
            countries_base_url: default_countries_base_url(),
        }
    }
}

/// Access to the credential and country services.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Exchange credentials for a user record and token.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Look up a country by name and return the first matching record.
    async fn country(&self, name: &str) -> Result<CountryRecord, ApiError>;
}

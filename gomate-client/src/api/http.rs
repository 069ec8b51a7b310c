//! HTTP implementation of [`RemoteApi`] over reqwest.

use super::{ApiConfig, ApiError, RemoteApi};
use async_trait::async_trait;
use gomate_types::{ApiErrorBody, CountryRecord, LoginRequest, LoginResponse};

/// reqwest-backed client for the credential and country services.
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpApi {
    /// Create a client for the given endpoints.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Endpoints in use.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// URL of the credential exchange.
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.config.auth_base_url.trim_end_matches('/'))
    }

    /// URL of the country lookup for `name`.
    pub fn country_url(&self, name: &str) -> String {
        format!(
            "{}/name/{}",
            self.config.countries_base_url.trim_end_matches('/'),
            name
        )
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.login_url();
        tracing::debug!(url = %url, username = %request.username, "credential exchange");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(error) if !error.message.is_empty() => ApiError::Rejected(error.message),
                _ => ApiError::Status {
                    url,
                    status: status.as_u16(),
                },
            });
        }

        Ok(response.json::<LoginResponse>().await?)
    }

    async fn country(&self, name: &str) -> Result<CountryRecord, ApiError> {
        let url = self.country_url(name);
        tracing::debug!(url = %url, "country lookup");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NoMatch(name.to_string()));
        }

        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let records = response.json::<Vec<CountryRecord>>().await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NoMatch(name.to_string()))
    }
}

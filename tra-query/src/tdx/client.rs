//! TDX HTTP client.
//!
//! Issues request descriptors against the TDX API. When client credentials
//! are configured, an OAuth2 access token is fetched and reused until it is
//! close to expiry; otherwise requests go out anonymously.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::request::{DEFAULT_BASE_URL, RequestBuilder, RequestDescriptor, ResolvedRoute};

use super::convert::{TrainService, convert_timetable};
use super::error::TdxError;
use super::types::DailyTimetableResponse;

/// Default OAuth2 token endpoint.
const DEFAULT_AUTH_URL: &str =
    "https://tdx.transportdata.tw/auth/realms/TDXConnect/protocol/openid-connect/token";

/// Refresh tokens this long before they expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Maximum response body kept in JSON error messages.
const ERROR_BODY_CHARS: usize = 500;

/// OAuth2 client credentials.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Configuration for the TDX client.
#[derive(Debug, Clone)]
pub struct TdxConfig {
    /// Root of the basic API
    pub base_url: String,
    /// OAuth2 token endpoint
    pub auth_url: String,
    /// Client credentials; `None` sends requests anonymously
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TdxConfig {
    /// Create a config for anonymous access to the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            credentials: None,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom token endpoint (for testing).
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Authenticate with client credentials.
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        });
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TdxConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + TOKEN_EXPIRY_MARGIN < self.expires_at
    }
}

/// TDX API client.
#[derive(Debug, Clone)]
pub struct TdxClient {
    http: reqwest::Client,
    base_url: String,
    auth_url: String,
    credentials: Option<Credentials>,
    token: Arc<Mutex<Option<AccessToken>>>,
}

impl TdxClient {
    /// Create a new TDX client with the given configuration.
    pub fn new(config: TdxConfig) -> Result<Self, TdxError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            auth_url: config.auth_url,
            credentials: config.credentials,
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// A request builder rooted at this client's base URL.
    pub fn request_builder(&self) -> RequestBuilder {
        RequestBuilder::new(self.base_url.clone())
    }

    /// Whether requests carry an access token.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Issue a timetable request and decode the response.
    pub async fn fetch_timetable(
        &self,
        request: &RequestDescriptor,
    ) -> Result<DailyTimetableResponse, TdxError> {
        let url = request.url();
        debug!(%url, "requesting daily timetable");

        let mut builder = self.http.get(&url);
        if let Some(token) = self.access_token().await? {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TdxError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TdxError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TdxError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TdxError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(ERROR_BODY_CHARS).collect()),
        })
    }

    /// Fetch and convert the trains running on a resolved route.
    pub async fn get_trains(&self, route: &ResolvedRoute) -> Result<Vec<TrainService>, TdxError> {
        let request = self.request_builder().build(route);
        let response = self.fetch_timetable(&request).await?;
        let trains = convert_timetable(&response, route);

        debug!(
            origin = %route.origin_code,
            destination = %route.destination_code,
            received = response.train_timetables.len(),
            converted = trains.len(),
            "converted timetable"
        );

        Ok(trains)
    }

    /// Current access token, fetching a new one if needed.
    async fn access_token(&self) -> Result<Option<String>, TdxError> {
        let Some(credentials) = &self.credentials else {
            return Ok(None);
        };

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(Some(token.value.clone()));
        }

        let token = self.request_token(credentials).await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(Some(value))
    }

    async fn request_token(&self, credentials: &Credentials) -> Result<AccessToken, TdxError> {
        let response = self
            .http
            .post(&self.auth_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(TdxError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TdxError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| TdxError::Json {
            message: e.to_string(),
            body: None,
        })?;

        let expires_at = Instant::now()
            .checked_add(Duration::from_secs(token.expires_in))
            .ok_or_else(|| TdxError::Json {
                message: format!("invalid expires_in: {}", token.expires_in),
                body: None,
            })?;

        info!(expires_in = token.expires_in, "obtained TDX access token");

        Ok(AccessToken {
            value: token.access_token,
            expires_at,
        })
    }
}

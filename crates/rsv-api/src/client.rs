use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use rsv_auth::CredentialStore;
use rsv_config::RsvConfig;

use crate::error::{ApiError, status_error};

/// Authenticated REST client for the ReservaT services.
///
/// Every outbound call carries `Authorization: Bearer <token>` with
/// whatever the credential store currently holds — an empty bearer when
/// nothing is stored. Calls are never blocked client-side on a missing
/// token; the remote service is the authority that rejects unauthenticated
/// requests.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<CredentialStore>,
    token_ttl_days: i64,
}

impl ApiClient {
    /// Build a client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        store: Arc<CredentialStore>,
        token_ttl_days: i64,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            token_ttl_days,
        })
    }

    /// Build a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the underlying HTTP client cannot
    /// be constructed.
    pub fn from_config(config: &RsvConfig, store: Arc<CredentialStore>) -> Result<Self, ApiError> {
        Self::new(
            &config.api.base_url,
            store,
            config.auth.token_ttl_days,
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    pub(crate) fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub(crate) const fn token_ttl_days(&self) -> i64 {
        self.token_ttl_days
    }

    /// Most recent stored credential, empty when absent.
    fn bearer(&self) -> String {
        rsv_auth::resolve_token(&self.store).unwrap_or_default()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue a request with the bearer header attached.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer()));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    /// Issue a request and decode the JSON body, mapping non-2xx responses
    /// to [`ApiError::Status`].
    pub(crate) async fn json(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let response = self.request(method, path, body).await?;
        Self::read_json(response).await
    }

    /// Decode a response body, mapping non-2xx statuses.
    ///
    /// An empty 2xx body reads as JSON `null` (delete endpoints respond
    /// with no content).
    pub(crate) async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &bytes));
        }
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

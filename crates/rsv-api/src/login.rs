use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, SET_COOKIE};
use serde::Deserialize;

use rsv_auth::{AUTH_TOKEN_KEY, DecodedIdentity, session};

use crate::client::ApiClient;
use crate::error::{ApiError, status_error};

/// Path of the admin login operation on the user service.
pub const LOGIN_PATH: &str = "/api/v1/usuarios/admin";

/// Pause between persisting the credential and the confirmation read, so
/// slow storage backends settle first. Not a concurrency mechanism.
const SETTLE_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
}

impl ApiClient {
    /// Authenticate an administrator against the user service.
    ///
    /// On success the issued credential is saved into every storage tier
    /// and the session is re-resolved from storage, returning the decoded
    /// identity. When the response body omits `access_token`, the
    /// credential is recovered from the response's `Set-Cookie` side
    /// effect; failing that, storage is re-read after a short settle delay.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` for a rejected login (401 bad credentials, 403
    /// insufficient role, ...), `ApiError::InvalidResponse` when no
    /// credential can be resolved from a 2xx response, `ApiError::Auth`
    /// when every storage tier rejected the credential.
    pub async fn login(&self, email: &str, password: &str) -> Result<DecodedIdentity, ApiError> {
        let body = serde_json::json!({ "email": email, "contraseña": password });
        let response = self.request(Method::POST, LOGIN_PATH, Some(&body)).await?;

        let status = response.status();
        // Captured before the body consumes the response.
        let cookie_token = extract_cookie_token(response.headers());
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &bytes));
        }

        let parsed = serde_json::from_slice::<LoginResponse>(&bytes).unwrap_or_default();
        if let Some(token_type) = parsed.token_type.as_deref() {
            tracing::debug!(token_type, "login accepted");
        }

        let issued = parsed
            .access_token
            .filter(|token| !token.is_empty())
            .or(cookie_token);
        if let Some(token) = issued {
            self.store()
                .save(AUTH_TOKEN_KEY, &token, Some(self.token_ttl_days()))?;
        }

        // Settle, then confirm through a storage read rather than trusting
        // the write: tiers do not report success synchronously.
        tokio::time::sleep(SETTLE_DELAY).await;
        session::resolve_current_user(self.store()).ok_or_else(|| {
            ApiError::InvalidResponse("la respuesta de acceso no incluyó credenciales válidas".into())
        })
    }

    /// Forget the session. Local-only: purges the credential from every
    /// tier; no network call is made.
    pub fn logout(&self) {
        rsv_auth::logout(self.store());
    }
}

/// Pull the `auth_token` value out of a response's `Set-Cookie` headers.
fn extract_cookie_token(headers: &HeaderMap) -> Option<String> {
    headers.get_all(SET_COOKIE).iter().find_map(|header| {
        let raw = header.to_str().ok()?;
        let name_value = raw.split(';').next()?;
        let (name, value) = name_value.split_once('=')?;
        (name.trim() == AUTH_TOKEN_KEY && !value.trim().is_empty())
            .then(|| value.trim().to_string())
    })
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;

use rsv_api::ApiClient;
use rsv_auth::{CredentialStore, SessionState};
use rsv_config::RsvConfig;

/// Shared state handed to every command handler.
pub struct AppContext {
    pub config: RsvConfig,
    pub store: Arc<CredentialStore>,
    pub client: ApiClient,
    /// Session state, resolved exactly once at startup. Login and logout
    /// handlers transition it; nothing re-checks expiry mid-run.
    pub session: SessionState,
}

impl AppContext {
    /// Build the credential store, API client, and initial session state.
    ///
    /// # Errors
    ///
    /// Fails when no credentials directory can be resolved or the HTTP
    /// client cannot be constructed.
    pub fn init(config: RsvConfig) -> anyhow::Result<Self> {
        let credentials_dir = Some(&config.auth.credentials_dir)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let store = Arc::new(
            rsv_auth::default_store(&config.auth.keyring_service, credentials_dir)
                .context("failed to initialize credential store")?,
        );
        let client = ApiClient::from_config(&config, Arc::clone(&store))
            .context("failed to initialize API client")?;
        let session = SessionState::resolve(&store);

        Ok(Self {
            config,
            store,
            client,
            session,
        })
    }
}

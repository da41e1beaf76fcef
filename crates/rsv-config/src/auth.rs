//! Credential storage configuration.

use serde::{Deserialize, Serialize};

const fn default_token_ttl_days() -> i64 {
    7
}

fn default_keyring_service() -> String {
    "reservat-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Service name used for the OS keyring tier.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Lifetime recorded for a saved credential, in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,

    /// Override for the credentials directory (empty = `~/.reservat`).
    #[serde(default)]
    pub credentials_dir: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            token_ttl_days: default_token_ttl_days(),
            credentials_dir: String::new(),
        }
    }
}

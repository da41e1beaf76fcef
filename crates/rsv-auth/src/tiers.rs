use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::store::CredentialTier;

const DEFAULT_KEYRING_SERVICE: &str = "reservat-cli";
const CREDENTIALS_DIR_NAME: &str = ".reservat";
const EXPIRES_SUFFIX: &str = "_expires";

/// Returns the keyring service name.
///
/// Defaults to `default`. Override via `RESERVAT_KEYRING_SERVICE` env var
/// for testing (e.g., `"reservat-cli-test"`) to avoid touching production
/// credentials.
fn keyring_service(default: &str) -> String {
    std::env::var("RESERVAT_KEYRING_SERVICE").unwrap_or_else(|_| default.to_string())
}

/// OS credential jar, the highest-priority tier.
///
/// The platform jar carries its own policies and may reject or lose writes
/// (locked keychains, headless sessions, missing secret services), so it is
/// never the only copy. It has no native expiry; the advisory timestamp is
/// ignored here and enforced by the lower tiers.
pub struct KeyringTier {
    service: String,
}

impl KeyringTier {
    #[must_use]
    pub fn new(service: &str) -> Self {
        Self {
            service: keyring_service(service),
        }
    }
}

impl Default for KeyringTier {
    fn default() -> Self {
        Self::new(DEFAULT_KEYRING_SERVICE)
    }
}

impl CredentialTier for KeyringTier {
    fn label(&self) -> &'static str {
        "keyring"
    }

    fn write(&self, key: &str, value: &str, _expires_at: DateTime<Utc>) -> Result<(), AuthError> {
        let entry = keyring::Entry::new(&self.service, key)
            .map_err(|e| AuthError::TokenStore(format!("keyring unavailable: {e}")))?;
        entry
            .set_password(value)
            .map_err(|e| AuthError::TokenStore(format!("keyring write: {e}")))
    }

    fn read(&self, key: &str) -> Option<String> {
        let entry = keyring::Entry::new(&self.service, key).ok()?;
        entry.get_password().ok().filter(|value| !value.is_empty())
    }

    fn clear(&self, key: &str) {
        // May not exist; ignore errors
        if let Ok(entry) = keyring::Entry::new(&self.service, key) {
            let _ = entry.delete_credential();
        }
    }
}

/// Durable file tier under a credentials directory.
///
/// The value lives in a file named by key, alongside a `<key>_expires`
/// companion holding the absolute expiry as epoch seconds. An expired entry
/// reads as absent and both files are removed on that read.
pub struct FileTier {
    dir: PathBuf,
}

impl FileTier {
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Default directory: `~/.reservat`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` when the home directory cannot be
    /// resolved.
    pub fn default_dir() -> Result<PathBuf, AuthError> {
        dirs::home_dir()
            .map(|home| home.join(CREDENTIALS_DIR_NAME))
            .ok_or_else(|| {
                AuthError::TokenStore(
                    "home directory not found — cannot store credentials".into(),
                )
            })
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn expires_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}{EXPIRES_SUFFIX}"))
    }
}

impl CredentialTier for FileTier {
    fn label(&self) -> &'static str {
        "file"
    }

    fn write(&self, key: &str, value: &str, expires_at: DateTime<Utc>) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        let path = self.value_path(key);
        fs::write(&path, value)
            .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
        }

        // The value survives without its companion; expiry just stops
        // being enforced by this tier.
        let expires = self.expires_path(key);
        if let Err(e) = fs::write(&expires, expires_at.timestamp().to_string()) {
            tracing::warn!("failed to record expiry {}: {e}", expires.display());
        }

        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        let value = fs::read_to_string(self.value_path(key))
            .ok()
            .filter(|s| !s.trim().is_empty())?;

        if let Ok(raw) = fs::read_to_string(self.expires_path(key)) {
            // An unparsable companion is treated as absent
            if let Ok(expires_at) = raw.trim().parse::<i64>() {
                if Utc::now().timestamp() >= expires_at {
                    self.clear(key);
                    return None;
                }
            }
        }

        Some(value)
    }

    fn clear(&self, key: &str) {
        let _ = fs::remove_file(self.value_path(key));
        let _ = fs::remove_file(self.expires_path(key));
    }
}

struct MemoryEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-process fallback tier, the last resort when neither the keyring nor
/// the filesystem accepted a write. Dies with the process.
#[derive(Default)]
pub struct MemoryTier {
    entries: Mutex<HashMap<String, MemoryEntry>>,
}

impl MemoryTier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, MemoryEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CredentialTier for MemoryTier {
    fn label(&self) -> &'static str {
        "memory"
    }

    fn write(&self, key: &str, value: &str, expires_at: DateTime<Utc>) -> Result<(), AuthError> {
        self.lock().insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        let mut entries = self.lock();
        let entry = entries.get(key)?;
        if Utc::now() >= entry.expires_at {
            entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn clear(&self, key: &str) {
        self.lock().remove(key);
    }
}

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::AuthError;

/// Storage key under which the session credential lives, in every tier.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Default credential lifetime when the caller does not pass one.
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// One physical credential backend.
///
/// Implementations must be safe to probe when empty and to clear twice.
/// Expiry handling is per-tier: backends without native expiry record the
/// timestamp themselves and report an expired entry as absent.
pub trait CredentialTier: Send + Sync {
    /// Short tier label for logs and `auth status`.
    fn label(&self) -> &'static str;

    /// Write `value` under `key` with an absolute expiry.
    fn write(&self, key: &str, value: &str, expires_at: DateTime<Utc>) -> Result<(), AuthError>;

    /// Read the value under `key`, honoring any recorded expiry.
    fn read(&self, key: &str) -> Option<String>;

    /// Remove `key`. Idempotent; clearing an absent key is not an error.
    fn clear(&self, key: &str);
}

/// Ordered collection of credential tiers.
///
/// Reads probe tiers in priority order and return the first non-empty hit.
/// Writes broadcast to every tier: a single accepting tier is enough,
/// because write success cannot be assumed on every platform (the OS
/// keyring may be locked or absent entirely on headless machines).
pub struct CredentialStore {
    tiers: Vec<Box<dyn CredentialTier>>,
}

impl CredentialStore {
    #[must_use]
    pub fn new(tiers: Vec<Box<dyn CredentialTier>>) -> Self {
        Self { tiers }
    }

    /// Persist `value` under `key` in every tier.
    ///
    /// `ttl_days` defaults to [`DEFAULT_TTL_DAYS`]. Per-tier rejections are
    /// logged and skipped; callers that need certainty confirm with
    /// [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` only when every tier rejected the
    /// write.
    pub fn save(&self, key: &str, value: &str, ttl_days: Option<i64>) -> Result<(), AuthError> {
        let ttl = ttl_days.unwrap_or(DEFAULT_TTL_DAYS);
        let expires_at = Utc::now() + TimeDelta::try_days(ttl).unwrap_or_else(TimeDelta::zero);

        let mut accepted = 0_usize;
        for tier in &self.tiers {
            match tier.write(key, value, expires_at) {
                Ok(()) => accepted += 1,
                Err(error) => {
                    tracing::warn!(tier = tier.label(), %error, "credential write rejected; continuing");
                }
            }
        }

        if accepted == 0 {
            return Err(AuthError::TokenStore(
                "every storage tier rejected the credential".into(),
            ));
        }
        Ok(())
    }

    /// First non-empty hit across tiers, in priority order.
    #[must_use]
    pub fn load(&self, key: &str) -> Option<String> {
        self.tiers
            .iter()
            .find_map(|tier| tier.read(key).filter(|value| !value.is_empty()))
    }

    /// Remove `key` from every tier. Idempotent.
    pub fn purge(&self, key: &str) {
        for tier in &self.tiers {
            tier.clear(key);
        }
    }

    /// Label of the tier currently holding `key` (for status display).
    #[must_use]
    pub fn source_of(&self, key: &str) -> Option<&'static str> {
        self.tiers
            .iter()
            .find(|tier| tier.read(key).is_some_and(|value| !value.is_empty()))
            .map(|tier| tier.label())
    }
}

//! # rsv-auth
//!
//! Session credential resolution for the ReservaT admin client.
//!
//! Provides the unverified JWT payload codec (`codec`), tiered credential
//! persistence across OS keyring / file / memory backends (`store`,
//! `tiers`), and the startup session resolver (`session`).
//!
//! Decoding never verifies token signatures — the remote user service is
//! the sole authority on whether a credential is accepted. Client-side
//! decoding exists only to show who is logged in and to drop credentials
//! that have already expired.

pub mod codec;
pub mod error;
pub mod session;
pub mod store;
pub mod tiers;

pub use codec::DecodedIdentity;
pub use error::AuthError;
pub use session::SessionState;
pub use store::{AUTH_TOKEN_KEY, CredentialStore};

use std::path::PathBuf;

use tiers::{FileTier, KeyringTier, MemoryTier};

/// Build the production store: keyring, then file, then memory.
///
/// `credentials_dir` overrides the default `~/.reservat` location when
/// non-empty.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` when no credentials directory can be
/// resolved.
pub fn default_store(
    keyring_service: &str,
    credentials_dir: Option<PathBuf>,
) -> Result<CredentialStore, AuthError> {
    let dir = match credentials_dir {
        Some(dir) => dir,
        None => FileTier::default_dir()?,
    };
    Ok(CredentialStore::new(vec![
        Box::new(KeyringTier::new(keyring_service)),
        Box::new(FileTier::new(dir)),
        Box::new(MemoryTier::new()),
    ]))
}

/// Resolve the best available credential without decoding it.
#[must_use]
pub fn resolve_token(store: &CredentialStore) -> Option<String> {
    store.load(AUTH_TOKEN_KEY)
}

/// Clear stored credentials from every tier. Local-only.
pub fn logout(store: &CredentialStore) {
    store.purge(AUTH_TOKEN_KEY);
}

use crate::codec::{self, DecodedIdentity};
use crate::store::{AUTH_TOKEN_KEY, CredentialStore};

/// Resolve the current session from the credential store.
///
/// Returns `Some(identity)` only when a credential is stored, decodes, and
/// has not expired. A credential that fails to decode or has expired is
/// purged from every tier before returning `None`; an absent credential is
/// left alone.
///
/// Called once at application start and again after a successful login.
/// There is no background re-check for mid-session expiry.
#[must_use]
pub fn resolve_current_user(store: &CredentialStore) -> Option<DecodedIdentity> {
    let token = store.load(AUTH_TOKEN_KEY)?;

    let Some(identity) = codec::decode(&token) else {
        tracing::warn!("stored credential did not decode; purging");
        store.purge(AUTH_TOKEN_KEY);
        return None;
    };

    if identity.is_expired() {
        tracing::warn!(
            expires_at = ?identity.expires_at(),
            "stored credential has expired; purging",
        );
        store.purge(AUTH_TOKEN_KEY);
        return None;
    }

    Some(identity)
}

/// Application session state.
///
/// `CheckingAuth` exists only between app mount and the single synchronous
/// [`resolve`](SessionState::resolve) call. Login moves
/// `Unauthenticated → Authenticated`; only an explicit
/// [`logout`](SessionState::logout) moves back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    CheckingAuth,
    Authenticated(DecodedIdentity),
    Unauthenticated,
}

impl SessionState {
    /// Exit `CheckingAuth` by resolving the stored credential once.
    #[must_use]
    pub fn resolve(store: &CredentialStore) -> Self {
        resolve_current_user(store).map_or(Self::Unauthenticated, Self::Authenticated)
    }

    /// Transition taken after a login call yields a resolved identity.
    #[must_use]
    pub fn login_succeeded(identity: DecodedIdentity) -> Self {
        Self::Authenticated(identity)
    }

    /// Explicit logout: purge the credential from every tier. Local-only,
    /// no network call.
    #[must_use]
    pub fn logout(store: &CredentialStore) -> Self {
        store.purge(AUTH_TOKEN_KEY);
        Self::Unauthenticated
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&DecodedIdentity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::CheckingAuth | Self::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::CredentialTier;
    use crate::tiers::MemoryTier;

    fn make_jwt(payload: &str) -> String {
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256"}"#),
            engine.encode(payload),
            engine.encode("fake_sig"),
        )
    }

    fn store_with_token(token: &str) -> CredentialStore {
        let tier = MemoryTier::new();
        tier.write(AUTH_TOKEN_KEY, token, Utc::now() + chrono::TimeDelta::hours(1))
            .expect("write");
        CredentialStore::new(vec![Box::new(tier)])
    }

    #[test]
    fn resolves_valid_session() {
        let exp = Utc::now().timestamp() + 3600;
        let store = store_with_token(&make_jwt(&format!(
            r#"{{"sub":"42","email":"alice@example.com","exp":{exp}}}"#
        )));

        let identity = resolve_current_user(&store).expect("should resolve");
        assert_eq!(identity.email.as_deref(), Some("alice@example.com"));
        // no side effect on the stored credential
        assert!(store.load(AUTH_TOKEN_KEY).is_some());
    }

    #[test]
    fn absent_credential_resolves_none_without_side_effect() {
        let store = CredentialStore::new(vec![Box::new(MemoryTier::new())]);
        assert_eq!(resolve_current_user(&store), None);
    }

    #[test]
    fn undecodable_credential_is_purged() {
        let store = store_with_token("not-a-jwt");
        assert_eq!(resolve_current_user(&store), None);
        assert_eq!(store.load(AUTH_TOKEN_KEY), None, "credential should be purged");
    }

    #[test]
    fn expired_credential_is_purged() {
        let exp = Utc::now().timestamp() - 3600;
        let store = store_with_token(&make_jwt(&format!(r#"{{"sub":"42","exp":{exp}}}"#)));
        assert_eq!(resolve_current_user(&store), None);
        assert_eq!(store.load(AUTH_TOKEN_KEY), None, "credential should be purged");
    }

    #[test]
    fn state_resolves_to_authenticated() {
        let exp = Utc::now().timestamp() + 3600;
        let store = store_with_token(&make_jwt(&format!(r#"{{"sub":"42","exp":{exp}}}"#)));

        let state = SessionState::resolve(&store);
        assert!(state.is_authenticated());
        assert_eq!(
            state.identity().and_then(|i| i.sub.as_deref()),
            Some("42")
        );
    }

    #[test]
    fn state_resolves_to_unauthenticated() {
        let store = CredentialStore::new(vec![Box::new(MemoryTier::new())]);
        assert_eq!(SessionState::resolve(&store), SessionState::Unauthenticated);
    }

    #[test]
    fn logout_purges_and_transitions() {
        let exp = Utc::now().timestamp() + 3600;
        let store = store_with_token(&make_jwt(&format!(r#"{{"sub":"42","exp":{exp}}}"#)));

        let state = SessionState::logout(&store);
        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(store.load(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn checking_auth_is_the_default_state() {
        assert_eq!(SessionState::default(), SessionState::CheckingAuth);
        assert!(!SessionState::CheckingAuth.is_authenticated());
        assert_eq!(SessionState::CheckingAuth.identity(), None);
    }
}

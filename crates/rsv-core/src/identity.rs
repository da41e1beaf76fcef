use serde::{Deserialize, Serialize};

/// Lightweight authenticated administrator identity for cross-crate passing.
///
/// Produced by `rsv-auth` from a decoded credential, consumed by `rsv-cli`
/// for display. Contains only data fields — no auth logic, no token access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    /// Subject ID (from the credential's `sub` claim).
    pub subject_id: Option<String>,
    /// Account email (from the `email` claim).
    pub email: Option<String>,
    /// Account role, e.g. `"admin"` (from the `user_type` claim).
    pub user_type: Option<String>,
}

impl AdminIdentity {
    /// Best label for a human-facing "logged in as" line.
    ///
    /// Prefers the email, then the subject ID.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.email.as_deref().or(self.subject_id.as_deref())
    }
}

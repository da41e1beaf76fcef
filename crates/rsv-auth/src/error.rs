use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// A storage tier (or all of them) rejected a credential operation.
    #[error("credential store error: {0}")]
    TokenStore(String),
}

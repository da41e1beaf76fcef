//! # rsv-api
//!
//! Authenticated REST client for the ReservaT services.
//!
//! Wraps `reqwest` with the request authenticator (bearer header sourced
//! from the credential store on every call), the admin login/logout flow,
//! generic CRUD over the admin resource collections, client-side listing
//! helpers, and the service error mapping (`{detail|message}` bodies plus
//! fixed Spanish explanations per status).

pub mod client;
pub mod error;
pub mod listing;
pub mod login;
pub mod resources;

pub use client::ApiClient;
pub use error::{ApiError, explain_status};
pub use login::LOGIN_PATH;

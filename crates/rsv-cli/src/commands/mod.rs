pub mod auth;
pub mod dispatch;
pub mod resource;

// Adapters layer: HTTP clients for the content and auth services.

pub mod auth_api;
pub mod content_api;
pub mod http;

pub use auth_api::AuthApiClient;
pub use content_api::ContentApiClient;

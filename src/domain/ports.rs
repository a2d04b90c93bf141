use crate::domain::model::{CompatibilityReading, CompatibilityRequest, LoginRequest, RegisterRequest};
use crate::domain::session::Session;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn content_api_url(&self) -> &str;
    fn auth_api_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// The content service that turns a score and two profiles into prose.
#[async_trait]
pub trait InterpretationService: Send + Sync {
    async fn compatibility_reading(
        &self,
        session: &Session,
        request: &CompatibilityRequest,
    ) -> Result<CompatibilityReading>;
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<Session>;
    async fn login(&self, request: &LoginRequest) -> Result<Session>;
    /// Builds a replacement session; `session` stays usable if the call fails.
    async fn refresh(&self, session: &Session) -> Result<Session>;
}

use crate::adapters::http::{build_client, join_url, remote_error};
use crate::domain::model::{
    AuthResponse, LoginRequest, RefreshRequest, RegisterRequest, TokenResponse,
};
use crate::domain::ports::{AuthService, ConfigProvider};
use crate::domain::session::Session;
use crate::utils::error::{MilanError, Result};
use crate::utils::validation::{validate_min_length, validate_non_empty_string};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REFRESH_PATH: &str = "/api/auth/refresh";
const SERVICE_NAME: &str = "auth API";
const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone)]
pub struct AuthApiClient {
    base_url: String,
    client: Client,
}

impl AuthApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self {
            base_url: config.auth_api_url().to_string(),
            client: build_client(config.request_timeout())?,
        })
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = join_url(&self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        tracing::debug!("Auth API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        Ok(response.json().await?)
    }

    // 400/401 是憑證或輸入問題，其餘視為服務錯誤
    async fn failure(response: Response) -> MilanError {
        let status = response.status();
        match remote_error(SERVICE_NAME, response).await {
            MilanError::RemoteError { message, .. }
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST =>
            {
                MilanError::AuthError { message }
            }
            other => other,
        }
    }
}

#[async_trait]
impl AuthService for AuthApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        validate_non_empty_string("email", &request.email)?;
        validate_non_empty_string("username", &request.username)?;
        validate_min_length("password", &request.password, MIN_PASSWORD_LENGTH)?;

        let response: AuthResponse = self.post(REGISTER_PATH, request).await?;
        tracing::info!("Registered {}", response.user.username);
        Ok(Session::established(response))
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        validate_non_empty_string("identifier", &request.identifier)?;
        validate_non_empty_string("password", &request.password)?;

        let response: AuthResponse = self.post(LOGIN_PATH, request).await?;
        tracing::info!("Logged in as {}", response.user.username);
        Ok(Session::established(response))
    }

    async fn refresh(&self, session: &Session) -> Result<Session> {
        let refresh_token = session
            .refresh_token()
            .ok_or_else(|| MilanError::AuthError {
                message: "No refresh token in the current session".to_string(),
            })?
            .to_string();

        let response: TokenResponse = self
            .post(REFRESH_PATH, &RefreshRequest { refresh_token })
            .await?;
        tracing::debug!("Access token refreshed");
        Ok(session.clone().refreshed(response))
    }
}

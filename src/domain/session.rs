use crate::domain::model::{AuthResponse, TokenResponse, User};
use chrono::{DateTime, Utc};

/// Who the caller is, as far as the remote services are concerned.
///
/// A session never changes in place. Logging in or registering builds one,
/// refreshing builds a replacement, and [`Session::end`] tears it down.
/// Callers pass it explicitly to whatever needs to authenticate a request.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<User>,
    tokens: Option<Tokens>,
    established_at: DateTime<Utc>,
}

#[derive(Clone)]
struct Tokens {
    access: String,
    refresh: String,
    token_type: String,
}

// 避免在日誌中洩漏 token
impl std::fmt::Debug for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokens")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            tokens: None,
            established_at: Utc::now(),
        }
    }

    pub fn established(response: AuthResponse) -> Self {
        Self {
            user: Some(response.user),
            tokens: Some(Tokens {
                access: response.access_token,
                refresh: response.refresh_token,
                token_type: response.token_type,
            }),
            established_at: Utc::now(),
        }
    }

    /// Replaces the token pair, keeping the user and the establishment time.
    pub fn refreshed(self, response: TokenResponse) -> Self {
        Self {
            user: self.user,
            tokens: Some(Tokens {
                access: response.access_token,
                refresh: response.refresh_token,
                token_type: response.token_type,
            }),
            established_at: self.established_at,
        }
    }

    #[must_use]
    pub fn end(self) -> Self {
        if let Some(user) = &self.user {
            tracing::info!("Session ended for {}", user.username);
        }
        Self::anonymous()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access.as_str())
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.refresh.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }

    /// Value for the `Authorization` header, if any.
    pub fn authorization(&self) -> Option<String> {
        self.tokens
            .as_ref()
            .map(|t| format!("{} {}", t.token_type, t.access))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

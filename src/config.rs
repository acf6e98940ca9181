/**
 * Session configuration
 *
 * Holds the OAuth token and API endpoint used for every request.
 * Built once at startup and never mutated afterwards.
 */

use reqwest::header::HeaderValue;
use thiserror::Error;

/// Environment variable holding the Yandex.Disk OAuth token
pub const TOKEN_ENV_VAR: &str = "YANDEX_DISK_TOKEN";

/// Public Yandex.Disk REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk";

/// Errors raised while building the session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingToken(&'static str),
    #[error("{0} contains characters not allowed in an HTTP header")]
    InvalidToken(&'static str),
}

/// Immutable credentials and endpoint for the API client
#[derive(Clone)]
pub struct DiskConfig {
    /// OAuth token sent as `Authorization: OAuth <token>`
    token: String,
    /// Base URL without a trailing slash
    base_url: String,
}

impl DiskConfig {
    /// Create a configuration pointing at the public endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Read the token from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_token(std::env::var(TOKEN_ENV_VAR).ok())
    }

    fn from_token(token: Option<String>) -> Result<Self, ConfigError> {
        let token = match token {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => return Err(ConfigError::MissingToken(TOKEN_ENV_VAR)),
        };
        // Same value the client sends as `Authorization`
        HeaderValue::from_str(&format!("OAuth {}", token))
            .map_err(|_| ConfigError::InvalidToken(TOKEN_ENV_VAR))?;
        Ok(Self::new(token))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keep the token out of debug output and logs.
impl std::fmt::Debug for DiskConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

//! REST API helpers for communicating with the evaluation backend.
//!
//! Every relative path is resolved against the configured base origin.
//! When credentials are enabled the client keeps a cookie store across
//! calls. The session token travels as a bearer header on `/me`.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses become [`ApiError::Rejected`] carrying the
//! backend's `message` text when it sent one.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::StatusCode;

use super::types::{Credentials, MessageResponse, TokenResponse, User};
use crate::config::AppConfig;
use crate::state::session::Session;

/// Errors produced by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("session has no token")]
    MissingToken,
}

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const ME_PATH: &str = "/api/auth/me";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the base URL is not http(s),
    /// or [`ApiError::Http`] if the underlying client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let base_url = crate::config::normalize_base_url(&config.api_base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(config.api_base_url.clone()));
        }
        let http = reqwest::Client::builder()
            .cookie_store(config.with_credentials)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` against the base origin.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        resolve_url(&self.base_url, path)
    }

    /// `POST /api/auth/register`. Returns the backend's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status
    /// (400 missing fields, 409 existing user).
    pub async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let resp = self.http.post(self.endpoint(REGISTER_PATH)).json(credentials).send().await?;
        let body: MessageResponse = Self::accept(resp).await?.json().await?;
        tracing::info!("account registered");
        Ok(body.message)
    }

    /// `POST /api/auth/login`. Returns the access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status
    /// (400 missing fields, 401 bad credentials).
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let resp = self.http.post(self.endpoint(LOGIN_PATH)).json(credentials).send().await?;
        let body: TokenResponse = Self::accept(resp).await?.json().await?;
        Ok(body.token)
    }

    /// `GET /api/auth/me` with the given bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        let resp = self.http.get(self.endpoint(ME_PATH)).bearer_auth(token).send().await?;
        Ok(Self::accept(resp).await?.json::<User>().await?)
    }

    /// Log in and populate `session` with the token and the user record.
    ///
    /// The session is left untouched if any step fails.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] from either the login or the `/me` call.
    pub async fn login_session(&self, session: &mut Session, credentials: &Credentials) -> Result<(), ApiError> {
        let token = self.login(credentials).await?;
        let user = self.me(&token).await?;
        tracing::info!(user_id = user.id, "logged in");
        session.set_token(token);
        session.set_user(user);
        Ok(())
    }

    /// Reload the user record for the token already held by `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] for an anonymous or empty-token session, or the
    /// `/me` call's error.
    pub async fn refresh_user(&self, session: &mut Session) -> Result<(), ApiError> {
        let token = session.token().filter(|t| !t.is_empty()).ok_or(ApiError::MissingToken)?;
        let user = self.me(token).await?;
        session.set_user(user);
        Ok(())
    }

    async fn accept(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let err = rejected(status, &body);
        tracing::warn!(status = status.as_u16(), error = %err, "backend rejected request");
        Err(err)
    }
}

/// Join `path` onto `base`. Absolute http(s) URLs pass through unchanged.
#[must_use]
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Map a non-success response to [`ApiError::Rejected`].
fn rejected(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<MessageResponse>(body).map_or_else(
        |_| status.canonical_reason().unwrap_or("request failed").to_owned(),
        |m| m.message,
    );
    ApiError::Rejected { status: status.as_u16(), message }
}

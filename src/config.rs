//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Path prefix the development server proxies to the backend origin.
pub const DEV_PROXY_PREFIX: &str = "/api";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Command-line values layered over [`AppConfig::from_env`]. `None` keeps
/// the env-derived value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub with_credentials: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin every relative backend path is resolved against.
    pub api_base_url: String,
    /// Send and store cookies on backend requests.
    pub with_credentials: bool,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            with_credentials: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PSYCH_EVAL_API_BASE_URL`: default `http://localhost:5000`
    /// - `PSYCH_EVAL_WITH_CREDENTIALS`: default `true`
    /// - `PSYCH_EVAL_REQUEST_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = std::env::var("PSYCH_EVAL_API_BASE_URL")
            .map_or_else(|_| DEFAULT_API_BASE_URL.to_owned(), |raw| normalize_base_url(&raw));

        let with_credentials = match std::env::var("PSYCH_EVAL_WITH_CREDENTIALS") {
            Ok(raw) => parse_bool(&raw)
                .ok_or(ConfigError::InvalidValue { var: "PSYCH_EVAL_WITH_CREDENTIALS", value: raw })?,
            Err(_) => true,
        };

        let request_timeout_secs = match std::env::var("PSYCH_EVAL_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue { var: "PSYCH_EVAL_REQUEST_TIMEOUT_SECS", value: raw })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self { api_base_url, with_credentials, request_timeout_secs })
    }

    /// Override the base URL, normalizing it the same way `from_env` does.
    #[must_use]
    pub fn with_api_base_url(mut self, raw: &str) -> Self {
        self.api_base_url = normalize_base_url(raw);
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base) = overrides.api_base_url.as_deref() {
            self = self.with_api_base_url(base);
        }
        if let Some(with_credentials) = overrides.with_credentials {
            self.with_credentials = with_credentials;
        }
        if let Some(secs) = overrides.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        self
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

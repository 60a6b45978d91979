/// Application configuration loaded from environment variables.
///
/// Everything has a sensible default so the app starts with no
/// configuration at all; a `.env` file or real environment variables
/// override individual values.
use std::env;
use std::time::Duration;

use crate::state::session::Credentials;

/// Fallback backend used when `GLOAM_API_URL` is not set.
const DEFAULT_API_URL: &str = "https://gloam-backend.vercel.app/api";

/// Product categories offered by the admin form. The backend does not
/// enforce this list, so it is configuration rather than a contract.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Shirt",
    "Pants",
    "Hoodies",
    "Jacket",
    "T-shirt",
    "Accessories",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_url: String,
    /// Fixed deadline applied to every gateway call.
    pub request_timeout: Duration,
    /// Credentials accepted by the admin login gate.
    pub credentials: Credentials,
    /// Category list offered by the product form.
    pub categories: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name} value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("GLOAM_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("GLOAM_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string());
        let timeout_secs: u64 = timeout_secs.parse().map_err(|_| ConfigError::InvalidValue {
            name: "GLOAM_REQUEST_TIMEOUT_SECS",
            value: timeout_secs.clone(),
        })?;

        let credentials = Credentials {
            username: env::var("GLOAM_ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),
            password: env::var("GLOAM_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "gloamingmistake".to_string()),
        };

        let categories = match env::var("GLOAM_CATEGORIES") {
            Ok(raw) => {
                let parsed: Vec<String> = raw
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect();
                if parsed.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        name: "GLOAM_CATEGORIES",
                        value: raw,
                    });
                }
                parsed
            }
            Err(_) => DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        };

        Ok(Self {
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            credentials,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only meaningful when the GLOAM_* variables are unset, which is
        // the case in CI.
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.categories.len(), 6);
    }
}

//! Connection settings for the NocoDB API

use crate::error::ProvisionError;
use std::fmt;

/// Environment variable holding the NocoDB instance URL
pub const BASE_URL_VAR: &str = "NOCODB_BASE_URL";
/// Environment variable holding the base (database) identifier
pub const BASE_ID_VAR: &str = "NOCODB_BASE_ID";
/// Environment variable holding the API token
pub const API_TOKEN_VAR: &str = "NOCODB_API_TOKEN";

/// Read-only credentials and location of the NocoDB base
#[derive(Clone)]
pub struct ApiConfig {
    /// Instance URL without trailing slash
    pub base_url: String,
    /// Base (database) identifier
    pub base_id: String,
    /// Token sent in the `xc-token` header
    pub api_token: String,
}

impl ApiConfig {
    /// Load configuration from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self, ProvisionError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProvisionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ProvisionError> {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ProvisionError::Configuration {
                    var: var.to_string(),
                })
        };

        let base_url = required(BASE_URL_VAR)?.trim_end_matches('/').to_string();
        let base_id = required(BASE_ID_VAR)?;
        let api_token = required(API_TOKEN_VAR)?;

        Ok(Self {
            base_url,
            base_id,
            api_token,
        })
    }

    /// Root of the v2 REST API
    pub fn api_root(&self) -> String {
        format!("{}/api/v2", self.base_url)
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("base_id", &self.base_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (BASE_URL_VAR, "https://app.nocodb.com/"),
            (BASE_ID_VAR, "p123"),
            (API_TOKEN_VAR, "secret-token"),
        ]
    }

    #[test]
    fn test_loads_all_variables() {
        let config = ApiConfig::from_lookup(lookup_from(&full_env())).unwrap();
        assert_eq!(config.base_url, "https://app.nocodb.com");
        assert_eq!(config.base_id, "p123");
        assert_eq!(config.api_token, "secret-token");
    }

    #[test]
    fn test_api_root() {
        let config = ApiConfig::from_lookup(lookup_from(&full_env())).unwrap();
        assert_eq!(config.api_root(), "https://app.nocodb.com/api/v2");
    }

    #[test]
    fn test_each_missing_variable_is_reported() {
        for missing in [BASE_URL_VAR, BASE_ID_VAR, API_TOKEN_VAR] {
            let env: Vec<_> = full_env().into_iter().filter(|(k, _)| *k != missing).collect();
            let err = ApiConfig::from_lookup(lookup_from(&env)).unwrap_err();
            match err {
                ProvisionError::Configuration { var } => assert_eq!(var, missing),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_variable_counts_as_missing() {
        let mut env = full_env();
        env[2] = (API_TOKEN_VAR, "  ");
        let err = ApiConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert!(matches!(err, ProvisionError::Configuration { var } if var == API_TOKEN_VAR));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ApiConfig::from_lookup(lookup_from(&full_env())).unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ApiConfig"));
        assert!(!debug_str.contains("secret-token"));
    }
}

use std::env;
use std::time::Duration;

use thiserror::Error;
use validator::Validate;

use crate::models::webhook::WebhookRequest;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_WEBHOOK_GENERATE_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("invalid candidate identity: {0}")]
    Identity(#[from] validator::ValidationErrors),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub bind_address: String,
    pub webhook_generate_url: String,
    pub identity: WebhookRequest,
    pub startup_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let startup_delay = match get("WEBHOOK_STARTUP_DELAY_SECS") {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                    name: "WEBHOOK_STARTUP_DELAY_SECS",
                    value: value.clone(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(2),
        };

        let identity = WebhookRequest {
            name: get("CANDIDATE_NAME").unwrap_or_else(|| "John Doe".to_string()),
            reg_no: get("REG_NO").unwrap_or_else(|| "REG12347".to_string()),
            email: get("CANDIDATE_EMAIL").unwrap_or_else(|| "john@example.com".to_string()),
        };
        identity.validate()?;

        Ok(Self {
            database_url: get("DATABASE_URL"),
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            webhook_generate_url: get("WEBHOOK_GENERATE_URL")
                .unwrap_or_else(|| DEFAULT_WEBHOOK_GENERATE_URL.to_string()),
            identity,
            startup_delay,
        })
    }

    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.webhook_generate_url, DEFAULT_WEBHOOK_GENERATE_URL);
        assert_eq!(config.identity.reg_no, "REG12347");
        assert_eq!(config.startup_delay, Duration::from_secs(2));
        assert!(matches!(config.require_database_url(), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/finserv"),
            ("REG_NO", "REG12300"),
            ("WEBHOOK_STARTUP_DELAY_SECS", "0"),
            ("BIND_ADDRESS", ""),
        ]))
        .unwrap();
        assert_eq!(config.require_database_url().unwrap(), "postgres://localhost/finserv");
        assert_eq!(config.identity.reg_no, "REG12300");
        assert!(config.startup_delay.is_zero());
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn test_invalid_delay() {
        let result = AppConfig::from_lookup(lookup(&[("WEBHOOK_STARTUP_DELAY_SECS", "soon")]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "WEBHOOK_STARTUP_DELAY_SECS", .. })));
    }

    #[test]
    fn test_invalid_email() {
        let result = AppConfig::from_lookup(lookup(&[("CANDIDATE_EMAIL", "nobody")]));
        assert!(matches!(result, Err(ConfigError::Identity(_))));
    }
}

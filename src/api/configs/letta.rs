use super::base::ClientConfig;
use anyhow::Result;
use std::env::VarError;
use std::time::Duration;

use crate::errors::ApiError;

pub const LETTA_API_KEY: &str = "LETTA_API_KEY";
pub const LETTA_BASE_URL: &str = "LETTA_BASE_URL";
pub const LETTA_TIMEOUT_SECS: &str = "LETTA_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.letta.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct LettaConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LettaConfig {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ClientConfig for LettaConfig {
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let api_key = Self::get_var(&lookup, LETTA_API_KEY, true, None)?
            .ok_or_else(|| ApiError::MissingEnv(LETTA_API_KEY.to_string()))?;

        let base_url = Self::get_var(
            &lookup,
            LETTA_BASE_URL,
            false,
            Some(DEFAULT_BASE_URL.to_string()),
        )?
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match Self::get_var(&lookup, LETTA_TIMEOUT_SECS, false, None)? {
            Some(value) => value.trim().parse::<u64>().map_err(|_| ApiError::InvalidEnv {
                key: LETTA_TIMEOUT_SECS.to_string(),
                value,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(api_key, base_url).with_timeout(Duration::from_secs(timeout_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_config_defaults() -> Result<()> {
        let config = LettaConfig::from_lookup(lookup_from(&[(LETTA_API_KEY, "secret")]))?;
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Ok(())
    }

    #[test]
    fn test_config_overrides() -> Result<()> {
        let config = LettaConfig::from_lookup(lookup_from(&[
            (LETTA_API_KEY, "secret"),
            (LETTA_BASE_URL, "http://localhost:8283"),
            (LETTA_TIMEOUT_SECS, "30"),
        ]))?;
        assert_eq!(config.base_url, "http://localhost:8283");
        assert_eq!(config.timeout, Duration::from_secs(30));
        Ok(())
    }

    #[test]
    fn test_missing_api_key() {
        let result = LettaConfig::from_lookup(lookup_from(&[]));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::MissingEnv(key)) if key == LETTA_API_KEY
        ));
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        let result = LettaConfig::from_lookup(lookup_from(&[(LETTA_API_KEY, "")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let result = LettaConfig::from_lookup(lookup_from(&[
            (LETTA_API_KEY, "secret"),
            (LETTA_TIMEOUT_SECS, "soon"),
        ]));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid value for LETTA_TIMEOUT_SECS"));
    }
}

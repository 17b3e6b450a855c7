use anyhow::Result;
use std::env::{self, VarError};

use crate::errors::ApiError;

pub trait ClientConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self>
    where
        Self: Sized,
    {
        Self::from_lookup(|key| env::var(key))
    }

    /// Load configuration from an arbitrary variable source
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
        Self: Sized;

    /// Helper function to get variables with error handling
    fn get_var<F>(
        lookup: &F,
        key: &str,
        required: bool,
        default: Option<String>,
    ) -> Result<Option<String>>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        match lookup(key) {
            Ok(value) if value.is_empty() && required => {
                Err(ApiError::MissingEnv(key.to_string()).into())
            }
            Ok(value) if value.is_empty() => Ok(default),
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) if !required => Ok(default),
            Err(VarError::NotPresent) => Err(ApiError::MissingEnv(key.to_string()).into()),
            Err(e) => Err(e.into()),
        }
    }
}

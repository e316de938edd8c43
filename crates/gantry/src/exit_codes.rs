//! Exit codes for the CLI

#![allow(dead_code)]

use gantry_core::{ConfigError, GantryError};
use gantry_signing::ResolveError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Credentials error (unreadable or incomplete source)
pub const CREDENTIALS_ERROR: i32 = 3;

/// Map an error chain to a process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ResolveError>().is_some() {
        return CREDENTIALS_ERROR;
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if let Some(GantryError::Config(_)) = err.downcast_ref::<GantryError>() {
        return CONFIG_ERROR;
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_error_maps_to_credentials_code() {
        let err = anyhow::Error::new(ResolveError::IncompleteCredentials {
            path: PathBuf::from("key.properties"),
            missing: vec!["keyPassword".to_string()],
        });
        assert_eq!(for_error(&err), CREDENTIALS_ERROR);
    }

    #[test]
    fn test_config_error_maps_to_config_code() {
        let err = anyhow::Error::new(GantryError::Config(ConfigError::MissingField(
            "signing".to_string(),
        )));
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }

    #[test]
    fn test_unknown_error_maps_to_general_code() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(for_error(&err), ERROR);
    }
}

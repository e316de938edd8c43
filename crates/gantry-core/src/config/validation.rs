//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_signing(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_signing(config: &Config) -> Result<()> {
    if config.signing.credentials_file.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "signing.credentials_file".to_string(),
            message: "cannot be empty".to_string(),
        }
        .into());
    }

    if config.signing.variants.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "signing.variants".to_string(),
            message: "at least one variant is required".to_string(),
        }
        .into());
    }

    for variant in &config.signing.variants {
        if variant.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "signing.variants".to_string(),
                message: "variant names cannot be empty".to_string(),
            }
            .into());
        }
    }

    // build.properties is opaque by contract; never validated here

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_credentials_file_rejected() {
        let mut config = Config::default();
        config.signing.credentials_file = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_variant_list_rejected() {
        let mut config = Config::default();
        config.signing.variants.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_blank_variant_name_rejected() {
        let mut config = Config::default();
        config.signing.variants.push("  ".to_string());
        assert!(validate_config(&config).is_err());
    }
}

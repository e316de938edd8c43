//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    /// Project name
    pub name: Option<String>,

    /// Signing resolution configuration
    pub signing: SigningConfig,

    /// Opaque build properties handed through to the surrounding toolchain
    #[serde(default)]
    pub build: BuildConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            name: None,
            signing: SigningConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

/// Signing resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningConfig {
    /// Credentials property file, relative to the config file's directory
    pub credentials_file: String,

    /// Build variants to resolve when none is given on the command line
    pub variants: Vec<String>,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            credentials_file: "key.properties".to_string(),
            variants: vec!["debug".to_string(), "release".to_string()],
        }
    }
}

/// Toolchain build settings carried as-is.
///
/// SDK versions, application identifier, namespace and the like live here.
/// Gantry never interprets these values; they belong to the build
/// toolchain that consumes the resolved assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Arbitrary key/value properties
    pub properties: HashMap<String, String>,
}

//! Build variant model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named build configuration supplied by the invoking toolchain.
///
/// `Debug` and `Release` are the two built-in variants every Android-style
/// project has; anything else (flavored variants such as `stagingRelease`)
/// is carried as `Custom` with its original name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildVariant {
    Debug,
    Release,
    Custom(String),
}

impl BuildVariant {
    /// Whether this variant produces a distributable release artifact.
    ///
    /// Custom variants follow the Gradle `<flavor>Release` naming
    /// convention: a name ending in "release" is release-class.
    pub fn is_release_class(&self) -> bool {
        match self {
            Self::Debug => false,
            Self::Release => true,
            Self::Custom(name) => name.to_lowercase().ends_with("release"),
        }
    }

    /// The variant name as the toolchain spells it
    pub fn name(&self) -> &str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
            Self::Custom(name) => name,
        }
    }
}

impl FromStr for BuildVariant {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "debug" => Self::Debug,
            "release" => Self::Release,
            _ => Self::Custom(s.to_string()),
        })
    }
}

impl From<String> for BuildVariant {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "debug" => Self::Debug,
            "release" => Self::Release,
            _ => Self::Custom(s),
        }
    }
}

impl From<BuildVariant> for String {
    fn from(v: BuildVariant) -> Self {
        v.name().to_string()
    }
}

impl std::fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtin_variants() {
        assert_eq!("debug".parse::<BuildVariant>().unwrap(), BuildVariant::Debug);
        assert_eq!("Release".parse::<BuildVariant>().unwrap(), BuildVariant::Release);
        assert_eq!(
            "stagingRelease".parse::<BuildVariant>().unwrap(),
            BuildVariant::Custom("stagingRelease".to_string())
        );
    }

    #[test]
    fn test_release_class() {
        assert!(BuildVariant::Release.is_release_class());
        assert!(!BuildVariant::Debug.is_release_class());
        assert!(BuildVariant::Custom("stagingRelease".to_string()).is_release_class());
        assert!(!BuildVariant::Custom("profile".to_string()).is_release_class());
    }

    #[test]
    fn test_display_round_trip() {
        let v = BuildVariant::Custom("stagingRelease".to_string());
        assert_eq!(v.to_string(), "stagingRelease");
        assert_eq!(BuildVariant::Release.to_string(), "release");
    }
}

//! Signing identity types

use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// A signing secret (keystore or key password).
///
/// `Debug`, `Display`, and serde output all redact the value; the raw
/// string is reachable only through [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw secret value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[redacted]")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[redacted]")
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str("[redacted]")
    }
}

/// The identity a build artifact is signed with.
///
/// A production identity can only be constructed with all four keystore
/// fields present; a partially-populated identity is unrepresentable.
/// The fallback is the build toolchain's own debug identity and carries
/// no credentials of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SigningIdentity {
    /// Identity built from a complete credentials source
    Production {
        store_file: PathBuf,
        store_password: Secret,
        key_alias: String,
        key_password: Secret,
    },
    /// The toolchain-provided debug identity
    DebugFallback,
}

impl SigningIdentity {
    /// Construct a production identity from the four keystore fields
    pub fn production(
        store_file: impl Into<PathBuf>,
        store_password: impl Into<String>,
        key_alias: impl Into<String>,
        key_password: impl Into<String>,
    ) -> Self {
        Self::Production {
            store_file: store_file.into(),
            store_password: Secret::new(store_password),
            key_alias: key_alias.into(),
            key_password: Secret::new(key_password),
        }
    }

    /// Whether this is the debug fallback identity
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::DebugFallback)
    }
}

impl std::fmt::Display for SigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production {
                store_file,
                key_alias,
                ..
            } => write!(f, "{} ({})", key_alias, store_file.display()),
            Self::DebugFallback => write!(f, "debug (toolchain fallback)"),
        }
    }
}

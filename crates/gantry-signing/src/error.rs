//! Error types for credential resolution

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Credential resolution errors.
///
/// An absent credentials source is not an error; it is the documented
/// fallback path and never reaches this enum.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Source exists but cannot be opened or parsed
    #[error("Credentials source unreadable: {}: {reason}", path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    /// Source exists and parses, but required fields are missing or empty
    #[error("Incomplete credentials in {}: missing {}", path.display(), missing.join(", "))]
    IncompleteCredentials {
        path: PathBuf,
        missing: Vec<String>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Gantry Signing - Build credential resolution
//!
//! This crate decides which signing identity a build variant receives:
//! a production identity built from an optional `key.properties`-style
//! credentials file, or the build toolchain's debug fallback when no
//! credentials are present. A credentials file that exists but is
//! incomplete fails resolution rather than silently degrading to the
//! debug identity.

pub mod error;
pub mod identity;
pub mod properties;
pub mod resolver;
pub mod source;

pub use error::{ResolveError, Result};
pub use identity::{Secret, SigningIdentity};
pub use resolver::{resolve, ResolvedSigningAssignment};
pub use source::{CredentialFields, CredentialsSource};

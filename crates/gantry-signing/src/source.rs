//! Optional credentials source

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::properties;

/// Keys a complete credentials source must populate
pub const REQUIRED_FIELDS: [&str; 4] = ["storeFile", "storePassword", "keyAlias", "keyPassword"];

/// An external credentials property file that exists on disk.
///
/// Construction via [`CredentialsSource::at`] performs the existence
/// check; an absent path yields `None`, the valid secret-less state that
/// resolution turns into the debug fallback. Anything that does exist is
/// a present source; a present path that cannot be read as a property
/// file (a directory, bad permissions) fails in [`CredentialsSource::read`]
/// instead of slipping onto the fallback path.
#[derive(Debug, Clone)]
pub struct CredentialsSource {
    path: PathBuf,
}

/// The parsed fields of a credentials source
#[derive(Debug, Clone)]
pub struct CredentialFields {
    path: PathBuf,
    fields: HashMap<String, String>,
}

impl CredentialsSource {
    /// Check for a credentials source at `path`
    pub fn at(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if path.exists() {
            debug!(path = %path.display(), "credentials source present");
            Some(Self { path })
        } else {
            debug!(path = %path.display(), "no credentials source");
            None
        }
    }

    /// The location of the credentials file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the property file.
    ///
    /// The file handle is scoped to this call; it is released on every
    /// path, including errors.
    pub fn read(&self) -> Result<CredentialFields> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ResolveError::SourceUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Ok(CredentialFields {
            path: self.path.clone(),
            fields: properties::parse(&content),
        })
    }
}

impl CredentialFields {
    /// The file these fields were parsed from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A single field, if present and non-empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Extract the four required fields, collecting every gap at once.
    ///
    /// Returns `(store_file, store_password, key_alias, key_password)` or
    /// an [`ResolveError::IncompleteCredentials`] naming all missing or
    /// empty fields rather than only the first one found.
    pub fn require_all(&self) -> Result<(String, String, String, String)> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|key| self.get(key).is_none())
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ResolveError::IncompleteCredentials {
                path: self.path.clone(),
                missing,
            });
        }

        Ok((
            self.fields["storeFile"].clone(),
            self.fields["storePassword"].clone(),
            self.fields["keyAlias"].clone(),
            self.fields["keyPassword"].clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source(temp: &TempDir, content: &str) -> CredentialsSource {
        let path = temp.path().join("key.properties");
        std::fs::write(&path, content).unwrap();
        CredentialsSource::at(path).unwrap()
    }

    #[test]
    fn test_absent_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(CredentialsSource::at(temp.path().join("key.properties")).is_none());
    }

    #[test]
    fn test_directory_is_present_but_unreadable() {
        // An existing non-file at the credentials path must not be
        // mistaken for "absent" and slip a build onto the debug fallback
        let temp = TempDir::new().unwrap();
        let source = CredentialsSource::at(temp.path()).unwrap();

        let err = source.read().unwrap_err();
        assert!(matches!(err, ResolveError::SourceUnreadable { .. }));
    }

    #[test]
    fn test_read_complete_source() {
        let temp = TempDir::new().unwrap();
        let source = write_source(
            &temp,
            "storeFile=/keys/app.jks\nstorePassword=p1\nkeyAlias=upload\nkeyPassword=p2\n",
        );

        let fields = source.read().unwrap();
        let (store_file, store_password, key_alias, key_password) =
            fields.require_all().unwrap();
        assert_eq!(store_file, "/keys/app.jks");
        assert_eq!(store_password, "p1");
        assert_eq!(key_alias, "upload");
        assert_eq!(key_password, "p2");
    }

    #[test]
    fn test_require_all_collects_every_gap() {
        let temp = TempDir::new().unwrap();
        let source = write_source(&temp, "keyAlias=upload\nkeyPassword=\n");

        let err = source.read().unwrap().require_all().unwrap_err();
        match err {
            ResolveError::IncompleteCredentials { missing, .. } => {
                assert_eq!(missing, vec!["storeFile", "storePassword", "keyPassword"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_field_treated_as_missing() {
        let temp = TempDir::new().unwrap();
        let source = write_source(
            &temp,
            "storeFile=/keys/app.jks\nstorePassword=p1\nkeyAlias=upload\nkeyPassword=\n",
        );

        let err = source.read().unwrap().require_all().unwrap_err();
        match err {
            ResolveError::IncompleteCredentials { missing, path } => {
                assert_eq!(missing, vec!["keyPassword"]);
                assert!(path.ends_with("key.properties"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unreadable_source_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("key.properties");
        std::fs::write(&path, "storeFile=/keys/app.jks\n").unwrap();
        let source = CredentialsSource::at(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let err = source.read().unwrap_err();
        match err {
            ResolveError::SourceUnreadable { path: p, .. } => {
                assert!(p.ends_with("key.properties"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

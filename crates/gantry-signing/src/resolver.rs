//! Signing resolution
//!
//! One decision, made once per build invocation: which identity does a
//! variant get. An absent credentials source falls back to the debug
//! identity so secret-less local and CI builds keep working; a source
//! that exists but is broken aborts the build instead of signing a
//! release artifact with the wrong key.

use gantry_core::BuildVariant;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::identity::SigningIdentity;
use crate::source::CredentialFields;

/// The final binding of a build variant to a signing identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSigningAssignment {
    pub variant: BuildVariant,
    pub identity: SigningIdentity,
}

/// Resolve the signing identity for `variant`.
///
/// `fields` is the single parse of the credentials source taken for this
/// invocation (see [`CredentialsSource::read`]); every variant of the
/// same invocation binds from that one parse, so the file is read at
/// most once and a mid-invocation change cannot produce inconsistent
/// identities across variants.
///
/// - `fields` absent (no credentials source): the assignment carries
///   `fallback`. This is a deliberate permissive default, not an error;
///   release-class variants log a warning.
/// - `fields` complete: a production identity built from the four
///   keystore fields.
/// - `fields` incomplete: resolution fails and the build must abort. A
///   broken credentials file never degrades to the debug identity.
///
/// Resolution is a pure function of its inputs; calling it again with
/// the same fields yields the same assignment.
///
/// [`CredentialsSource::read`]: crate::source::CredentialsSource::read
pub fn resolve(
    fields: Option<&CredentialFields>,
    variant: &BuildVariant,
    fallback: SigningIdentity,
) -> Result<ResolvedSigningAssignment> {
    let Some(fields) = fields else {
        if variant.is_release_class() {
            warn!(
                variant = %variant,
                "no credentials source; release-class variant will carry the debug identity"
            );
        } else {
            debug!(variant = %variant, "no credentials source, using fallback identity");
        }
        return Ok(ResolvedSigningAssignment {
            variant: variant.clone(),
            identity: fallback,
        });
    };

    let (store_file, store_password, key_alias, key_password) = fields.require_all()?;

    info!(
        variant = %variant,
        key_alias = %key_alias,
        source = %fields.path().display(),
        "resolved production signing identity"
    );

    Ok(ResolvedSigningAssignment {
        variant: variant.clone(),
        identity: SigningIdentity::production(store_file, store_password, key_alias, key_password),
    })
}

//! # Issuer Trust Policy
//!
//! Decides whether URLs embedded in a credential (issuer links, image
//! sources) should be treated as untrusted and disabled in the display
//! layer.
//!
//! Two independent signals are OR-combined: a direct registry lookup for
//! the credential's issuer, and a prior verification pass that itself
//! consulted registries. A caller holding only a cached verification
//! result still gets a correct answer without re-querying the registry
//! client; trusting a credential requires at least one of the two signals
//! to positively confirm membership.

use crate::credential::Credential;
use crate::provider::RegistryClient;
use crate::verify::VerificationResult;

/// Decide whether embedded URLs should be disabled, given pre-resolved
/// inputs.
///
/// `registry_match` is the registry lookup's answer for the credential's
/// issuer: `Some` non-empty names for a match, `Some` empty for
/// checked-but-absent, `None` for not checked or not found.
///
/// Returns `false` (URLs stay enabled) iff the lookup found at least one
/// registry name, or the verification log carries a passing
/// `registered_issuer` check with a non-empty `matchingIssuers` set. Every
/// other combination disables URLs: fail closed.
#[must_use]
pub fn urls_disabled(
    registry_match: Option<&[String]>, verification: Option<&VerificationResult>,
) -> bool {
    if registry_match.is_some_and(|names| !names.is_empty()) {
        return false;
    }
    if verification.is_some_and(VerificationResult::confirms_registered_issuer) {
        return false;
    }
    true
}

/// Query the registry client for the credential's issuer and decide
/// whether the credential's embedded URLs should be disabled.
///
/// A registry client failure is logged and treated as "not found": the
/// credential is never trusted on an inconclusive lookup. A supplied
/// `verification` result can still confirm membership on its own.
pub async fn should_disable_urls(
    credential: &Credential, registries: &impl RegistryClient,
    verification: Option<&VerificationResult>,
) -> bool {
    let names = match registries.issuer_in_registries(credential.issuer_id()).await {
        Ok(names) => names,
        Err(e) => {
            tracing::error!(target: "trust::should_disable_urls", ?e);
            None
        }
    };
    urls_disabled(names.as_deref(), verification)
}

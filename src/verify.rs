//! # Verification Status
//!
//! Types for the itemized check log a credential verification engine
//! produces, and the reduction of that log to the coarse status a wallet
//! displays for a credential.
//!
//! The reduction encodes a trust hierarchy: a failed signature or
//! revocation check disqualifies the credential outright, while a failed
//! expiration or issuer-registration check only raises a warning — an
//! expired or unregistered-issuer credential may still be legitimately held
//! and shown (historical records, for example).

use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Identifier of a single check performed against a credential.
///
/// The four known checks drive status derivation. Engines may log further
/// checks; these are carried as [`CheckId::Other`] and have no bearing on
/// the derived status.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum CheckId {
    /// Cryptographic proof integrity.
    ValidSignature,

    /// Temporal validity.
    Expiration,

    /// Issuer membership in a known registry.
    RegisteredIssuer,

    /// Credential has not been revoked by its issuer.
    RevocationStatus,

    /// A check this crate does not recognize.
    Other(String),
}

impl From<String> for CheckId {
    fn from(id: String) -> Self {
        match id.as_str() {
            "valid_signature" => Self::ValidSignature,
            "expiration" => Self::Expiration,
            "registered_issuer" => Self::RegisteredIssuer,
            "revocation_status" => Self::RevocationStatus,
            _ => Self::Other(id),
        }
    }
}

impl From<CheckId> for String {
    fn from(id: CheckId) -> Self {
        match id {
            CheckId::ValidSignature => "valid_signature".into(),
            CheckId::Expiration => "expiration".into(),
            CheckId::RegisteredIssuer => "registered_issuer".into(),
            CheckId::RevocationStatus => "revocation_status".into(),
            CheckId::Other(id) => id,
        }
    }
}

impl Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from(self.clone()))
    }
}

/// A registry entry matched while checking issuer registration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryEntry {
    /// Display name of the registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Location the registry is published at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One named check performed against a credential.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationLogEntry {
    /// Identifier of the check performed.
    pub id: CheckId,

    /// Outcome of the check.
    pub valid: bool,

    /// Registry entries the issuer was matched against. Only populated by
    /// the `registered_issuer` check; consumed by the trust policy, not by
    /// status derivation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_issuers: Option<Vec<RegistryEntry>>,
}

impl VerificationLogEntry {
    /// Create a log entry with no registry metadata.
    #[must_use]
    pub const fn new(id: CheckId, valid: bool) -> Self {
        Self { id, valid, matching_issuers: None }
    }
}

/// The aggregate output of the verification engine for one credential.
///
/// A result is an immutable value once produced: callers may cache it per
/// credential and re-derive status from it as often as needed.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct VerificationResult {
    /// Overall engine verdict. `None` (JSON `null`) signifies that no
    /// verification was attempted.
    #[serde(default)]
    pub verified: Option<bool>,

    /// One entry per check performed. Read as a set keyed by check id;
    /// order is irrelevant to status derivation.
    #[serde(default)]
    pub log: Vec<VerificationLogEntry>,
}

impl VerificationResult {
    /// Reduce this result to a display status. See [`derive_status`].
    #[must_use]
    pub fn status(&self, is_loading: bool) -> VerificationStatus {
        derive_status(Some(self), is_loading)
    }

    /// `true` when the log records a passing `registered_issuer` check that
    /// matched at least one registry entry.
    #[must_use]
    pub fn confirms_registered_issuer(&self) -> bool {
        self.log.iter().any(|entry| {
            entry.id == CheckId::RegisteredIssuer
                && entry.valid
                && entry.matching_issuers.as_ref().is_some_and(|matched| !matched.is_empty())
        })
    }
}

/// The coarse trust state displayed for a credential. Derived from a
/// [`VerificationResult`]; never persisted.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// A verification refresh is in flight for a previously-seen result.
    Verifying,

    /// All known checks passed.
    Verified,

    /// Expiration or issuer registration failed; integrity checks passed.
    Warning,

    /// Integrity or revocation failed, or verification has never run.
    #[default]
    NotVerified,
}

impl Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Verifying => "Verifying",
            Self::Verified => "Verified",
            Self::Warning => "Warning",
            Self::NotVerified => "Not Verified",
        };
        write!(f, "{label}")
    }
}

/// Checks that disqualify a credential when they fail.
const HARD_CHECKS: [CheckId; 2] = [CheckId::ValidSignature, CheckId::RevocationStatus];

/// Checks that raise a warning when they fail.
const SOFT_CHECKS: [CheckId; 2] = [CheckId::Expiration, CheckId::RegisteredIssuer];

/// Checks that must be present for a credential to be fully verified.
/// Missing checks are treated as failed.
static KNOWN_CHECKS: [CheckId; 4] = [
    CheckId::ValidSignature,
    CheckId::Expiration,
    CheckId::RegisteredIssuer,
    CheckId::RevocationStatus,
];

/// Reduce a verification result to the status a wallet should display.
///
/// Rules, in precedence order (each short-circuits):
///
/// 1. No result, or an empty log with no overall verdict, means
///    verification has never run: `NotVerified`.
/// 2. `is_loading` with a non-empty log means a refresh of a
///    previously-computed result is in flight: `Verifying`. An empty log is
///    a true first-time not-verified state and is not masked by loading.
/// 3. A failed (or missing) `valid_signature` or `revocation_status` check:
///    `NotVerified`.
/// 4. A failed (or missing) `expiration` or `registered_issuer` check:
///    `Warning`.
/// 5. Otherwise `Verified`.
///
/// Pure and total: never errors, safe to memoize on its inputs.
#[must_use]
pub fn derive_status(
    result: Option<&VerificationResult>, is_loading: bool,
) -> VerificationStatus {
    let Some(result) = result else {
        return VerificationStatus::NotVerified;
    };
    if result.log.is_empty() && result.verified.is_none() {
        return VerificationStatus::NotVerified;
    }
    if is_loading && !result.log.is_empty() {
        return VerificationStatus::Verifying;
    }

    // Overlay the log onto fail-closed defaults so a missing known check
    // reads as a failed one. Last entry wins on duplicate ids.
    let mut checks: HashMap<&CheckId, bool> =
        KNOWN_CHECKS.iter().map(|id| (id, false)).collect();
    for entry in &result.log {
        checks.insert(&entry.id, entry.valid);
    }

    let failed = |id: &CheckId| checks.get(id) == Some(&false);

    if HARD_CHECKS.iter().any(failed) {
        return VerificationStatus::NotVerified;
    }
    if SOFT_CHECKS.iter().any(failed) {
        return VerificationStatus::Warning;
    }
    VerificationStatus::Verified
}

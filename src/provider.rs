//! # Provider
//!
//! The provider traits exported by this module are used to inject the
//! wallet's external collaborators: the verification engine that produces a
//! check log for a credential, and the registry client that answers issuer
//! membership queries.
//!
//! Both operations may suspend on network or storage I/O; implementations
//! are transport agnostic. Callers resolve these futures first and hand the
//! settled values to the pure decision functions in [`crate::verify`] and
//! [`crate::trust`].

use std::future::Future;

use crate::credential::Credential;
use crate::verify::VerificationResult;

/// Produces the itemized verification log for a credential. Signature,
/// expiration, registry and revocation checks are all the engine's
/// responsibility; this crate only interprets the log.
pub trait VerifierEngine: Send + Sync {
    /// Verify a credential, producing a fresh [`VerificationResult`].
    ///
    /// `force_fresh` instructs the engine to bypass any engine-level cache
    /// it may keep.
    fn verify(
        &self, credential: &Credential, force_fresh: bool,
    ) -> impl Future<Output = anyhow::Result<VerificationResult>> + Send;
}

/// Answers whether an issuer is listed in the registries known to the
/// client.
pub trait RegistryClient: Send + Sync {
    /// Names of the known registries the issuer is listed in: `Some`
    /// non-empty for a match, `Some` empty for checked-but-absent, `None`
    /// for not checked or not found.
    ///
    /// If an error is returned, callers must treat the lookup as "not
    /// found" — never as a match.
    fn issuer_in_registries(
        &self, issuer: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Vec<String>>>> + Send;
}

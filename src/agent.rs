//! # Status Agent
//!
//! Caching orchestration over a verification engine. List screens re-read
//! the status of the same credentials on every refresh; the agent runs the
//! engine once per credential and answers subsequent reads from cache until
//! told to refresh.

use std::collections::HashMap;

use anyhow::anyhow;

use crate::credential::Credential;
use crate::provider::VerifierEngine;
use crate::verify::{derive_status, VerificationResult, VerificationStatus};

/// Caching front-end over a [`VerifierEngine`].
///
/// Results are keyed by credential id and held until replaced by a
/// `force_fresh` call or evicted. The agent performs no locking: callers
/// are expected to drive it from a single task.
#[derive(Debug)]
pub struct StatusAgent<P>
where
    P: VerifierEngine,
{
    provider: P,
    cache: HashMap<String, VerificationResult>,
}

impl<P> StatusAgent<P>
where
    P: VerifierEngine,
{
    /// Create a new `StatusAgent` with the provided verification engine.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider, cache: HashMap::new() }
    }

    /// The verification result for a credential: answered from cache unless
    /// no result is held or `force_fresh` is set, in which case the engine
    /// runs and its result replaces the cached value.
    ///
    /// # Errors
    ///
    /// Returns the engine's error when verification has to run and fails.
    /// Any previously cached value is left untouched in that case.
    pub async fn verification_result_for(
        &mut self, credential: &Credential, force_fresh: bool,
    ) -> anyhow::Result<&VerificationResult> {
        if force_fresh || !self.cache.contains_key(&credential.id) {
            let result = self.provider.verify(credential, force_fresh).await?;
            tracing::debug!(target: "StatusAgent::verification_result_for",
                credential = %credential.id, "caching verification result");
            self.cache.insert(credential.id.clone(), result);
        }
        let Some(result) = self.cache.get(&credential.id) else {
            // Unreachable: the entry was inserted above when absent.
            return Err(anyhow!("verification result missing after refresh"));
        };
        Ok(result)
    }

    /// Resolve a verification result (from cache where possible) and reduce
    /// it to a display status.
    ///
    /// An engine failure surfaces as the absent-result input shape: the
    /// status comes back [`VerificationStatus::NotVerified`] rather than an
    /// error, and the caller decides whether to retry.
    pub async fn status_for(&mut self, credential: &Credential) -> VerificationStatus {
        match self.verification_result_for(credential, false).await {
            Ok(result) => result.status(false),
            Err(e) => {
                tracing::error!(target: "StatusAgent::status_for", ?e);
                derive_status(None, false)
            }
        }
    }

    /// Drop the cached result for a credential, if any. The next read will
    /// run the engine again.
    pub fn evict(&mut self, credential_id: &str) {
        self.cache.remove(credential_id);
    }
}

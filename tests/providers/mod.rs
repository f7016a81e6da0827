//! Canned provider implementations shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use anyhow::anyhow;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wallet_trust::provider::{RegistryClient, VerifierEngine};
use wallet_trust::{
    CheckId, Credential, Kind, RegistryEntry, VerificationLogEntry, VerificationResult,
};

pub const ISSUER: &str = "did:example:123";

static INIT: Once = Once::new();

/// Initialise tracing once for all tests.
pub fn init_tracer() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
        tracing::subscriber::set_global_default(subscriber).expect("subscriber set");
    });
}

/// Test provider with canned registry and engine answers.
#[derive(Clone, Debug, Default)]
pub struct Provider {
    registry: Arc<Mutex<HashMap<String, Option<Vec<String>>>>>,
    results: Arc<Mutex<HashMap<String, VerificationResult>>>,
    verify_calls: Arc<AtomicUsize>,
    fail_registry: Arc<AtomicBool>,
    fail_engine: Arc<AtomicBool>,
}

impl Provider {
    #[must_use]
    pub fn new() -> Self {
        init_tracer();
        Self::default()
    }

    /// Set the registry lookup answer for an issuer.
    #[must_use]
    pub fn with_registry(self, issuer: &str, answer: Option<Vec<String>>) -> Self {
        self.registry.lock().expect("should lock").insert(issuer.into(), answer);
        self
    }

    /// Set the engine result for a credential id.
    #[must_use]
    pub fn with_result(self, credential_id: &str, result: VerificationResult) -> Self {
        self.results.lock().expect("should lock").insert(credential_id.into(), result);
        self
    }

    /// Make every registry lookup fail.
    #[must_use]
    pub fn failing_registry(self) -> Self {
        self.fail_registry.store(true, Ordering::SeqCst);
        self
    }

    /// Make every engine invocation fail.
    #[must_use]
    pub fn failing_engine(self) -> Self {
        self.fail_engine.store(true, Ordering::SeqCst);
        self
    }

    /// Toggle engine failure after construction.
    pub fn set_engine_failing(&self, failing: bool) {
        self.fail_engine.store(failing, Ordering::SeqCst);
    }

    /// Number of times the engine has been invoked.
    #[must_use]
    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

impl VerifierEngine for Provider {
    async fn verify(
        &self, credential: &Credential, _force_fresh: bool,
    ) -> anyhow::Result<VerificationResult> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_engine.load(Ordering::SeqCst) {
            return Err(anyhow!("verification engine unavailable"));
        }
        self.results
            .lock()
            .expect("should lock")
            .get(&credential.id)
            .cloned()
            .ok_or_else(|| anyhow!("no canned result for credential {}", credential.id))
    }
}

impl RegistryClient for Provider {
    async fn issuer_in_registries(&self, issuer: &str) -> anyhow::Result<Option<Vec<String>>> {
        if self.fail_registry.load(Ordering::SeqCst) {
            return Err(anyhow!("registry lookup failed"));
        }
        Ok(self.registry.lock().expect("should lock").get(issuer).cloned().flatten())
    }
}

#[must_use]
pub fn sample_credential() -> Credential {
    Credential {
        id: "urn:uuid:26b9b085-dfd4-4a69-9d74-ce08f1a8f4db".into(),
        issuer: Kind::Simple(ISSUER.into()),
        type_: vec!["VerifiableCredential".into(), "BachelorDegree".into()],
        ..Credential::default()
    }
}

#[must_use]
pub fn entry(id: CheckId, valid: bool) -> VerificationLogEntry {
    VerificationLogEntry::new(id, valid)
}

/// A result where every known check passed.
#[must_use]
pub fn all_passing_result() -> VerificationResult {
    VerificationResult {
        verified: Some(true),
        log: vec![
            entry(CheckId::ValidSignature, true),
            entry(CheckId::Expiration, true),
            VerificationLogEntry {
                id: CheckId::RegisteredIssuer,
                valid: true,
                matching_issuers: Some(vec![RegistryEntry {
                    name: Some("DCC Sandbox Registry".into()),
                    url: None,
                }]),
            },
            entry(CheckId::RevocationStatus, true),
        ],
    }
}

//! # Wallet Trust
//!
//! Derives the user-facing trust state for verifiable credentials held in a
//! wallet, and decides whether externally-hosted resources referenced by a
//! credential may be trusted.
//!
//! Two stateless decision functions form the core:
//!
//! - [`verify::derive_status`] reduces the itemized check log produced by a
//!   verification engine to one of four coarse statuses used for badges and
//!   iconography.
//! - [`trust::should_disable_urls`] decides whether URLs embedded in a
//!   credential (issuer links, image sources) should be rendered as live
//!   links or disabled, based on registry membership and a prior
//!   verification pass.
//!
//! Both are pure once their inputs are resolved: the crate performs no
//! cryptography and no network I/O of its own. The verification engine and
//! the registry lookup are injected through the traits in [`provider`], and
//! [`agent::StatusAgent`] provides per-credential caching over them for
//! callers that re-read the same credential's status repeatedly.

pub mod agent;
pub mod credential;
pub mod provider;
pub mod trust;
pub mod verify;

pub use agent::StatusAgent;
pub use credential::{Credential, Issuer, Kind};
pub use trust::{should_disable_urls, urls_disabled};
pub use verify::{
    derive_status, CheckId, RegistryEntry, VerificationLogEntry, VerificationResult,
    VerificationStatus,
};

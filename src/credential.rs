//! # Credential
//!
//! This module defines the wallet's view of a held credential: the subset of
//! the W3C data model the trust policy and status derivation need. The
//! credential as issued (JWT or JSON) is retained and interpreted by other
//! layers; this record only carries identity, typing and validity periods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wrap a property that may be serialized either as a bare string or as a
/// richer object, as JSON-LD allows for issuers and similar fields.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Kind<T> {
    /// Property is a plain string (typically a URI).
    Simple(String),

    /// Property is an object.
    Rich(T),
}

impl<T: Default> Default for Kind<T> {
    fn default() -> Self {
        Self::Simple(String::new())
    }
}

/// Information about a credential's issuer, when the issuer is recorded as
/// an object rather than a bare URI.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Issuer {
    /// The issuer's URI (commonly a DID).
    pub id: String,

    /// Human-readable issuer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The issuer's home page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// URL of the issuer's logo image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The Credential model contains information about a credential held by the
/// wallet.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Credential {
    /// Credential `id` is the credential's unique identifier (from the
    /// Verifiable Credential `id`, or generated if the credential has
    /// none). Cached verification results are keyed by this value.
    pub id: String,

    /// The credential issuer, as a bare URI or an [`Issuer`] object.
    pub issuer: Kind<Issuer>,

    /// The credential type. An unordered set of URIs identifying the set of
    /// claims the credential contains.
    #[serde(rename = "type")]
    pub type_: Vec<String>,

    /// The date the credential was issued.
    pub issuance_date: DateTime<Utc>,

    /// The date the credential ceases to be valid, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Credential {
    /// The issuer's URI, whether the issuer was recorded as a bare string
    /// or as an object.
    #[must_use]
    pub fn issuer_id(&self) -> &str {
        match &self.issuer {
            Kind::Simple(id) => id,
            Kind::Rich(issuer) => &issuer.id,
        }
    }
}

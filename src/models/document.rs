//! Document validation result types shared with the registration form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of Brazilian registry document, classified by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// 11-digit individual taxpayer ID
    Cpf,
    /// 14-digit legal-entity ID
    Cnpj,
}

impl DocumentKind {
    /// Canonical digit count for this kind
    pub fn digit_len(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Cpf => write!(f, "CPF"),
            DocumentKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// Why a document failed validation.
///
/// `Display` is the inline message the registration form renders, so the
/// UI can tell "wrong format" apart from "looks like a typo".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Digit count matches neither a CPF nor a CNPJ
    #[error("invalid length")]
    Length,

    /// Check digits do not match the recomputation
    #[error("checksum mismatch")]
    Checksum,

    /// Document validates but is not the kind this account role registers with
    #[error("expected a {expected} for this account role")]
    KindMismatch { expected: DocumentKind },
}

/// Outcome of validating raw document input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DocumentValidation {
    Valid {
        kind: DocumentKind,
        /// Canonical digit-only form
        digits: String,
        /// Display form (`XXX.XXX.XXX-XX` / `XX.XXX.XXX/XXXX-XX`)
        formatted: String,
    },
    Invalid {
        reason: InvalidReason,
    },
}

impl DocumentValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, DocumentValidation::Valid { .. })
    }

    /// Detected kind, when the document validated
    pub fn kind(&self) -> Option<DocumentKind> {
        match self {
            DocumentValidation::Valid { kind, .. } => Some(*kind),
            DocumentValidation::Invalid { .. } => None,
        }
    }
}

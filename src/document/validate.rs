//! Document validation orchestration for the registration form.

use tracing::debug;

use super::cnpj::{format_cnpj, is_valid_cnpj};
use super::cpf::{format_cpf, is_valid_cpf};
use super::digits::{classify, strip_non_digits};
use crate::models::{AccountRole, DocumentKind, DocumentValidation, InvalidReason};

/// Validate raw registration-form input.
///
/// Strips separators, classifies by length, recomputes the check digits
/// and produces the display form. Invalid input never panics; the caller
/// always receives a structured result carrying the reason to render
/// inline.
pub fn validate_document(raw: &str) -> DocumentValidation {
    let digits = strip_non_digits(raw);

    let kind = match classify(&digits) {
        Some(kind) => kind,
        None => {
            return DocumentValidation::Invalid {
                reason: InvalidReason::Length,
            }
        }
    };

    let valid = match kind {
        DocumentKind::Cpf => is_valid_cpf(&digits),
        DocumentKind::Cnpj => is_valid_cnpj(&digits),
    };

    if !valid {
        // Log the kind only, never the document itself
        debug!("{} rejected: checksum mismatch", kind);
        return DocumentValidation::Invalid {
            reason: InvalidReason::Checksum,
        };
    }

    let formatted = match kind {
        DocumentKind::Cpf => format_cpf(&digits),
        DocumentKind::Cnpj => format_cnpj(&digits),
    };

    DocumentValidation::Valid {
        kind,
        digits,
        formatted,
    }
}

/// Validate for a specific account role.
///
/// A structurally valid document of the wrong kind (a CNPJ on a citizen
/// registration, a CPF on an NGO one) blocks submission with a distinct
/// reason.
pub fn validate_for_role(raw: &str, role: AccountRole) -> DocumentValidation {
    let expected = role.expected_document_kind();

    match validate_document(raw) {
        DocumentValidation::Valid { kind, .. } if kind != expected => {
            debug!("{:?} registration sent a {}, expected a {}", role, kind, expected);
            DocumentValidation::Invalid {
                reason: InvalidReason::KindMismatch { expected },
            }
        }
        other => other,
    }
}

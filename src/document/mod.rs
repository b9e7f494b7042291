//! Brazilian registry document validation.
//!
//! Covers the two document kinds a registration can carry: CPF for
//! natural persons and CNPJ for organizations. Validation is purely
//! structural (length, repeated-digit blocklist, check digits) and
//! never consults an external registry.

mod cnpj;
mod cpf;
mod digits;
mod validate;

pub use cnpj::{format_cnpj, is_valid_cnpj};
pub use cpf::{format_cpf, is_valid_cpf};
pub use digits::{classify, strip_non_digits};
pub use validate::{validate_document, validate_for_role};

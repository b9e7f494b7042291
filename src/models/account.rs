//! Account roles and the document kind each registers with.

use serde::{Deserialize, Serialize};

use super::document::DocumentKind;

/// Role of a registered account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Individual reporting issues
    Citizen,
    /// Organisation managing responsibility areas
    Ngo,
    /// Moderator
    Admin,
}

impl AccountRole {
    /// Document kind this role must register with: individuals carry a
    /// CPF, organisations a CNPJ.
    pub fn expected_document_kind(&self) -> DocumentKind {
        match self {
            AccountRole::Citizen | AccountRole::Admin => DocumentKind::Cpf,
            AccountRole::Ngo => DocumentKind::Cnpj,
        }
    }
}

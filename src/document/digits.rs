//! Digit canonicalisation and document classification.

use crate::models::DocumentKind;

/// Strip every character that is not an ASCII decimal digit.
///
/// This is the canonical form documents are validated and stored in;
/// formatting separators and any other input noise are discarded.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Classify a digit string by length: 11 digits is a CPF candidate, 14 a
/// CNPJ candidate, anything else (including non-digit content) is `None`.
pub fn classify(digits: &str) -> Option<DocumentKind> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    [DocumentKind::Cpf, DocumentKind::Cnpj]
        .into_iter()
        .find(|kind| digits.len() == kind.digit_len())
}

/// True when every digit in the string is the same character.
///
/// All-equal sequences satisfy the mod-11 arithmetic (all zeros sum to
/// zero) but are never issued; both validators reject them up front.
pub(crate) fn all_same_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("111.444.777-35"), "11144477735");
        assert_eq!(strip_non_digits("11.222.333/0001-81"), "11222333000181");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits(""), "");
        // Only ASCII digits survive; other numerals are input noise
        assert_eq!(strip_non_digits("١٢٣45"), "45");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("11144477735"), Some(DocumentKind::Cpf));
        assert_eq!(classify("11222333000181"), Some(DocumentKind::Cnpj));
        assert_eq!(classify(""), None);
        assert_eq!(classify("123"), None);
        assert_eq!(classify("111444777350"), None);
        assert_eq!(classify("1114447773x"), None);
    }

    #[test]
    fn test_classify_matches_kind_lengths() {
        for kind in [DocumentKind::Cpf, DocumentKind::Cnpj] {
            let digits = "1".repeat(kind.digit_len());
            assert_eq!(classify(&digits), Some(kind));
        }
    }

    #[test]
    fn test_all_same_digit() {
        assert!(all_same_digit("11111111111"));
        assert!(all_same_digit("0"));
        assert!(all_same_digit(""));
        assert!(!all_same_digit("11111111112"));
    }
}

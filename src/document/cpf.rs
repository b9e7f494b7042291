//! CPF check-digit validation and display formatting.

use super::digits::all_same_digit;

/// Weighted mod-11 check digit over `digits`, weights descending from
/// `start` down to 2. Remainders 0 and 1 map to digit 0.
fn check_digit(digits: &[u8], start: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d - b'0') * (start - i as u32))
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Validate an 11-digit CPF string.
///
/// Returns false for anything that is not exactly 11 ASCII digits, for
/// repeated-digit sequences, and for check-digit mismatches. Never
/// panics.
pub fn is_valid_cpf(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    if bytes.len() != 11 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if all_same_digit(digits) {
        return false;
    }

    // First pass over 9 digits with weights 10..2, second over 10 with 11..2
    let dv1 = check_digit(&bytes[..9], 10);
    let dv2 = check_digit(&bytes[..10], 11);

    bytes[9] - b'0' == dv1 && bytes[10] - b'0' == dv2
}

/// Format CPF digits as `XXX.XXX.XXX-XX`.
///
/// Pure templating with no validation: partial input is masked as far as
/// it goes, digits beyond the 11th are ignored.
pub fn format_cpf(digits: &str) -> String {
    let mut out = String::with_capacity(14);
    for (i, c) in digits
        .chars()
        .filter(char::is_ascii_digit)
        .take(11)
        .enumerate()
    {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

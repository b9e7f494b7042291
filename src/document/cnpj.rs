//! CNPJ check-digit validation and display formatting.

use super::digits::all_same_digit;

/// Weighted mod-11 check digit with weights cycling 2..9.
///
/// Left to right the weight starts at `len - 7` (5 for the first pass,
/// 6 for the second), decrements each digit, and resets to 9 below 2.
/// Remainders 0 and 1 map to digit 0.
fn check_digit(digits: &[u8]) -> u8 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0u32;
    for &d in digits {
        sum += u32::from(d - b'0') * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Validate a 14-digit CNPJ string.
///
/// Returns false for anything that is not exactly 14 ASCII digits, for
/// repeated-digit sequences, and for check-digit mismatches. Never
/// panics.
pub fn is_valid_cnpj(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    if bytes.len() != 14 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if all_same_digit(digits) {
        return false;
    }

    let dv1 = check_digit(&bytes[..12]);
    let dv2 = check_digit(&bytes[..13]);

    bytes[12] - b'0' == dv1 && bytes[13] - b'0' == dv2
}

/// Format CNPJ digits as `XX.XXX.XXX/XXXX-XX`.
///
/// Pure templating with no validation: partial input is masked as far as
/// it goes, digits beyond the 14th are ignored.
pub fn format_cnpj(digits: &str) -> String {
    let mut out = String::with_capacity(18);
    for (i, c) in digits
        .chars()
        .filter(char::is_ascii_digit)
        .take(14)
        .enumerate()
    {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

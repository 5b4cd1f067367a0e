//! Input normalization (pre-classification).
//!
//! Every public operation runs its input through this module before any
//! checksum work: formatting separators (`.`, `-`, `/`, whitespace) are
//! stripped, the character set and length bounds are enforced, and the
//! result is a plain digit vector (plus, for IE, the São Paulo
//! rural-producer marker). Downstream code can then assume well-formed
//! digits and concentrate on classification and check digits.

use crate::error::{Result, ValidationError};

/// Normalized IE input: either a plain digit string (8–14 digits) or the
/// 12 digits following a rural-producer `P` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IeInput {
    Digits(Vec<u8>),
    Rural(Vec<u8>),
}

fn strip_separators(input: &str) -> String {
    regex!(r"[.\-/\s]+").replace_all(input, "").into_owned()
}

fn digit_values(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

/// Render a digit slice back into its canonical string form.
pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Numeric value of a digit run, used for the payload-band rules (AP, GO).
pub(crate) fn digits_to_u64(digits: &[u8]) -> u64 {
    digits.iter().fold(0u64, |acc, &d| acc * 10 + u64::from(d))
}

/// Sanitize boleto input: strip separators, then require one of the three
/// known digit counts (44 barcode, 47 banking line, 48 convenio line).
pub(crate) fn boleto_digits(input: &str) -> Result<Vec<u8>> {
    let cleaned = strip_separators(input);
    if cleaned.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }
    let digit_count = cleaned.bytes().filter(u8::is_ascii_digit).count();
    if !matches!(digit_count, 44 | 47 | 48) {
        return Err(ValidationError::InvalidLength);
    }
    if digit_count != cleaned.len() {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(digit_values(&cleaned))
}

/// Sanitize IE input: strip separators and uppercase. A single leading `P`
/// (rural producer) must be followed by exactly 12 digits; anything else
/// must be 8–14 pure digits.
pub(crate) fn ie_digits(input: &str) -> Result<IeInput> {
    let cleaned = strip_separators(input).to_ascii_uppercase();
    if cleaned.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }
    if let Some(rest) = cleaned.strip_prefix('P') {
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat);
        }
        if !regex!(r"^P\d{12}$").is_match(&cleaned) {
            return Err(ValidationError::InvalidLength);
        }
        return Ok(IeInput::Rural(digit_values(rest)));
    }
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }
    if !(8..=14).contains(&cleaned.len()) {
        return Err(ValidationError::InvalidLength);
    }
    Ok(IeInput::Digits(digit_values(&cleaned)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boleto_input_accepts_bank_formatting() {
        let line = "00191.23454 67890.123457 67890.123457 2 10000000015000";
        let digits = boleto_digits(line).unwrap();
        assert_eq!(digits.len(), 47);
        assert_eq!(digits_to_string(&digits), "00191234546789012345767890123457210000000015000");
    }

    #[test]
    fn boleto_input_error_taxonomy() {
        assert_eq!(boleto_digits(""), Err(ValidationError::InvalidFormat));
        assert_eq!(boleto_digits(" .-/ "), Err(ValidationError::InvalidFormat));
        assert_eq!(boleto_digits(&"1".repeat(43)), Err(ValidationError::InvalidLength));
        assert_eq!(boleto_digits(&"1".repeat(45)), Err(ValidationError::InvalidLength));
        // 44 digits plus a stray letter: length is fine, content is not.
        let mut with_letter = "1".repeat(44);
        with_letter.push('x');
        assert_eq!(boleto_digits(&with_letter), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn ie_input_accepts_punctuation_and_rural_marker() {
        assert_eq!(ie_digits("251.040.852").unwrap(), IeInput::Digits(vec![2, 5, 1, 0, 4, 0, 8, 5, 2]));
        match ie_digits("P-01100424.3/002").unwrap() {
            IeInput::Rural(digits) => assert_eq!(digits_to_string(&digits), "011004243002"),
            other => panic!("expected rural input, got {other:?}"),
        }
        // Lowercase marker is uppercased before the shape check.
        assert!(matches!(ie_digits("p011004243002").unwrap(), IeInput::Rural(_)));
    }

    #[test]
    fn ie_input_error_taxonomy() {
        assert_eq!(ie_digits(""), Err(ValidationError::InvalidFormat));
        assert_eq!(ie_digits("abc"), Err(ValidationError::InvalidFormat));
        assert_eq!(ie_digits("1234567"), Err(ValidationError::InvalidLength));
        assert_eq!(ie_digits(&"1".repeat(15)), Err(ValidationError::InvalidLength));
        assert_eq!(ie_digits("P123"), Err(ValidationError::InvalidLength));
        assert_eq!(ie_digits("P12345678901X"), Err(ValidationError::InvalidFormat));
        // The marker is only valid in leading position.
        assert_eq!(ie_digits("12P345678901"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn numeric_helpers() {
        assert_eq!(digits_to_u64(&[1, 0, 1, 0, 3, 1, 0, 5]), 10_103_105);
        assert_eq!(digits_to_string(&[0, 9, 5]), "095");
    }
}

//! Check-digit runners for the state rule table.
//!
//! Most states fit one of the generic shapes (`single`, `double`,
//! `times_ten`, Mod9); the rest publish genuinely irregular algorithms and
//! get their own function here, referenced from the table as
//! `Check::Custom`. Everything is built on the parameterized Mod11 core in
//! `crate::checksum`.

use crate::checksum::{self, Remap};
use crate::error::{Result, ValidationError};
use crate::sanitize::digits_to_u64;

/// The descending 9..2 run most single-digit states share.
pub(crate) const W9_2: [u8; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

const W_SP_FIRST: [u8; 8] = [1, 3, 4, 5, 6, 7, 8, 10];
const W_SP_SECOND: [u8; 11] = [3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const W_MG_SECOND: [u8; 12] = [3, 2, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

fn ensure(matched: bool) -> Result<()> {
    if matched { Ok(()) } else { Err(ValidationError::InvalidChecksum) }
}

pub(crate) fn has_prefix(digits: &[u8], prefix: &str) -> bool {
    digits.len() >= prefix.len() && prefix.bytes().zip(digits).all(|(p, &d)| d == p - b'0')
}

/// One trailing check digit over the whole payload.
pub(crate) fn single(digits: &[u8], weights: &[u8], remap: Remap) -> Result<()> {
    ensure(checksum::mod11_valid(digits, weights, remap))
}

/// Two trailing check digits; the second one covers payload plus first.
pub(crate) fn double(digits: &[u8], first: &[u8], second: &[u8], remap: Remap) -> Result<()> {
    let n = digits.len();
    if n < 2 {
        return Err(ValidationError::InvalidChecksum);
    }
    ensure(
        checksum::mod11(&digits[..n - 2], first, remap) == Some(digits[n - 2])
            && checksum::mod11(&digits[..n - 1], second, remap) == Some(digits[n - 1]),
    )
}

/// Weighted sum multiplied by ten before the remainder is taken; a result
/// of 10 maps to 0 (Alagoas and Rio Grande do Norte).
pub(crate) fn times_ten(digits: &[u8], weights: &[u8]) -> Result<()> {
    let Some((&dv, payload)) = digits.split_last() else {
        return Err(ValidationError::InvalidChecksum);
    };
    let Some(sum) = checksum::weighted(payload, weights) else {
        return Err(ValidationError::InvalidChecksum);
    };
    let r = (sum * 10) % 11;
    let digit = if r == 10 { 0 } else { r as u8 };
    ensure(digit == dv)
}

pub(crate) fn mod9_state(digits: &[u8]) -> Result<()> {
    ensure(checksum::mod9_valid(digits))
}

/// Bahia: 8 or 9 digits with two check digits. The last digit is computed
/// first over the plain payload; the second-to-last then covers payload
/// plus that digit. The modulus is picked by a routing digit (first digit
/// for 8-digit numbers, second for 9-digit): 6, 7 and 9 select Mod11,
/// everything else Mod10.
pub(crate) fn bahia(digits: &[u8]) -> Result<()> {
    let n = digits.len();
    let routing = if n == 8 { digits[0] } else { digits[1] };
    let payload = &digits[..n - 2];
    let dv1 = digits[n - 2];
    let dv2 = digits[n - 1];
    let (inner_weights, outer_weights): (&[u8], &[u8]) = if n == 8 {
        (&[7, 6, 5, 4, 3, 2], &[8, 7, 6, 5, 4, 3, 2])
    } else {
        (&[8, 7, 6, 5, 4, 3, 2], &[9, 8, 7, 6, 5, 4, 3, 2])
    };
    let digit = |sum: u32| -> u8 {
        if matches!(routing, 6 | 7 | 9) {
            let r = sum % 11;
            if r <= 1 { 0 } else { (11 - r) as u8 }
        } else {
            let r = sum % 10;
            if r == 0 { 0 } else { (10 - r) as u8 }
        }
    };
    let Some(inner_sum) = checksum::weighted(payload, inner_weights) else {
        return Err(ValidationError::InvalidChecksum);
    };
    if digit(inner_sum) != dv2 {
        return Err(ValidationError::InvalidChecksum);
    }
    let mut chained = payload.to_vec();
    chained.push(dv2);
    let Some(outer_sum) = checksum::weighted(&chained, outer_weights) else {
        return Err(ValidationError::InvalidChecksum);
    };
    ensure(digit(outer_sum) == dv1)
}

/// São Paulo: check digits at positions 9 and 12, both the units digit of
/// the remainder rather than its complement.
pub(crate) fn sao_paulo(digits: &[u8]) -> Result<()> {
    ensure(
        checksum::mod11(&digits[..8], &W_SP_FIRST, Remap::Units) == Some(digits[8])
            && checksum::mod11(&digits[..11], &W_SP_SECOND, Remap::Units) == Some(digits[11]),
    )
}

/// Rural-producer registrations only carry the first São Paulo check digit.
pub(crate) fn sao_paulo_rural(digits: &[u8]) -> Result<()> {
    if digits.len() != 12 {
        return Err(ValidationError::InvalidLength);
    }
    ensure(checksum::mod11(&digits[..8], &W_SP_FIRST, Remap::Units) == Some(digits[8]))
}

/// Minas Gerais: the first check digit pads a zero after the municipality
/// code, weights the twelve digits alternately 1/2 with digit-summed
/// products, and takes the distance to the next multiple of ten; the second
/// is a regular Mod11 over all twelve preceding digits.
pub(crate) fn minas_gerais(digits: &[u8]) -> Result<()> {
    let mut padded = Vec::with_capacity(12);
    padded.extend_from_slice(&digits[..3]);
    padded.push(0);
    padded.extend_from_slice(&digits[3..11]);
    let mut total = 0u32;
    for (i, &d) in padded.iter().enumerate() {
        let product = u32::from(d) * if i % 2 == 0 { 1 } else { 2 };
        total += product / 10 + product % 10;
    }
    if ((10 - total % 10) % 10) as u8 != digits[11] {
        return Err(ValidationError::InvalidChecksum);
    }
    single(digits, &W_MG_SECOND, Remap::Zero)
}

/// Amapá: the weighted sum starts from a constant `p` and a remainder of 11
/// maps to a constant `d`, both picked by the numeric band the payload
/// falls in.
pub(crate) fn amapa(digits: &[u8]) -> Result<()> {
    let n = digits_to_u64(&digits[..8]);
    let (p, d) = if (3_000_001..=3_017_000).contains(&n) {
        (5u32, 0u8)
    } else if (3_017_001..=3_019_022).contains(&n) {
        (9, 1)
    } else {
        (0, 0)
    };
    let Some(sum) = checksum::weighted(&digits[..8], &W9_2) else {
        return Err(ValidationError::InvalidChecksum);
    };
    let expected = match 11 - (p + sum) % 11 {
        10 => 0,
        11 => d,
        dv => dv as u8,
    };
    ensure(expected == digits[8])
}

/// Goiás: remainder 1 yields check digit 1 only inside a published
/// registration band, 0 everywhere else.
pub(crate) fn goias(digits: &[u8]) -> Result<()> {
    let Some(sum) = checksum::weighted(&digits[..8], &W9_2) else {
        return Err(ValidationError::InvalidChecksum);
    };
    let expected = match sum % 11 {
        0 => 0u8,
        1 => {
            let n = digits_to_u64(&digits[..8]);
            if (10_103_105..=10_119_997).contains(&n) { 1 } else { 0 }
        }
        r => (11 - r) as u8,
    };
    ensure(expected == digits[8])
}

/// Tocantins: positions 3-4 are a registration category and stay out of the
/// weighted sum.
pub(crate) fn tocantins(digits: &[u8]) -> Result<()> {
    if !matches!((digits[2], digits[3]), (0, 1) | (0, 2) | (0, 3) | (9, 9)) {
        return Err(ValidationError::InvalidPrefix);
    }
    single(digits, &[9, 8, 0, 0, 7, 6, 5, 4, 3, 2], Remap::Zero)
}

/// Alagoas: the third digit encodes the registrant class; only published
/// classes are accepted.
pub(crate) fn alagoas(digits: &[u8]) -> Result<()> {
    if !matches!(digits[2], 0 | 3 | 5 | 7 | 8) {
        return Err(ValidationError::InvalidPrefix);
    }
    times_ten(digits, &W9_2)
}

pub(crate) fn rio_grande_do_norte(digits: &[u8]) -> Result<()> {
    match digits.len() {
        9 => times_ten(digits, &W9_2),
        10 => times_ten(digits, &[10, 9, 8, 7, 6, 5, 4, 3, 2]),
        _ => Err(ValidationError::InvalidLength),
    }
}

pub(crate) fn pernambuco(digits: &[u8]) -> Result<()> {
    match digits.len() {
        // eFisco format: seven payload digits and two chained check digits.
        9 => double(digits, &[8, 7, 6, 5, 4, 3, 2], &W9_2, Remap::ZeroTen),
        // Legacy fourteen-digit format with a single check digit.
        14 => single(digits, &[5, 4, 3, 2, 1, 9, 8, 7, 6, 5, 4, 3, 2], Remap::MinusTen),
        _ => Err(ValidationError::InvalidLength),
    }
}

pub(crate) fn rondonia(digits: &[u8]) -> Result<()> {
    match digits.len() {
        // Old format: a three-digit municipality code that stays out of the
        // sum, a five-digit number and the check digit.
        9 => single(digits, &[0, 0, 0, 6, 5, 4, 3, 2], Remap::MinusTen),
        14 => single(digits, &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2], Remap::MinusTen),
        _ => Err(ValidationError::InvalidLength),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching() {
        assert!(has_prefix(&[0, 6, 1, 2], "06"));
        assert!(!has_prefix(&[1, 6, 1, 2], "06"));
        assert!(!has_prefix(&[0], "06"));
    }

    #[test]
    fn generic_runners_reject_degenerate_input() {
        assert!(single(&[], &W9_2, Remap::Zero).is_err());
        assert!(double(&[1], &W9_2, &W9_2, Remap::Zero).is_err());
        assert!(times_ten(&[], &W9_2).is_err());
    }
}

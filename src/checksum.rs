//! Check-digit algorithms.
//!
//! Three base algorithms cover every document in the crate:
//!
//! - **Mod9**: positional weighting (digit i times i), remainder is the
//!   check digit. Only Roraima uses it.
//! - **Mod10**: Luhn-style doubling from the right with digit-summed
//!   products. Boleto field check digits and the Mod10 convenio variants.
//! - **Mod11**: weighted sum, check digit derived from `11 - (sum % 11)`.
//!   One parameterized function: callers supply the weight sequence and a
//!   [`Remap`] policy for the degenerate results 10 and 11. The boleto
//!   variants use a cyclic 2..9 weight run from the right; IE states supply
//!   their own fixed weight vectors.
//!
//! All functions are pure and total over `&[u8]` digit slices: out-of-range
//! bytes or empty input yield `None` rather than panicking.

/// Policy for the degenerate Mod11 results (`11 - remainder` of 10 or 11).
///
/// Published state algorithms disagree on what those results mean, so the
/// mapping is data, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Remap {
    /// 10 and 11 both map to 0.
    Zero,
    /// 10 maps to 0, 11 maps to 1.
    MinusTen,
    /// 10 and 11 mean "no valid check digit exists".
    Reject,
    /// 10 maps to 0, 11 is rejected.
    ZeroTen,
    /// The check digit is the units digit of the remainder itself (São
    /// Paulo; a remainder of 10 gives 0).
    Units,
}

/// Weighted digit sum; `None` if lengths differ or a byte is not 0..=9.
pub(crate) fn weighted(digits: &[u8], weights: &[u8]) -> Option<u32> {
    if digits.len() != weights.len() || digits.is_empty() {
        return None;
    }
    let mut sum = 0u32;
    for (&d, &w) in digits.iter().zip(weights) {
        if d > 9 {
            return None;
        }
        sum += u32::from(d) * u32::from(w);
    }
    Some(sum)
}

/// Mod9 check digit: weight digit i (1-indexed, left to right) by i, the
/// check digit is the sum mod 9. No degenerate cases.
pub(crate) fn mod9(payload: &[u8]) -> Option<u8> {
    if payload.is_empty() || payload.iter().any(|&d| d > 9) {
        return None;
    }
    let sum: u32 = payload.iter().enumerate().map(|(i, &d)| (i as u32 + 1) * u32::from(d)).sum();
    Some((sum % 9) as u8)
}

pub(crate) fn mod9_valid(digits: &[u8]) -> bool {
    matches!(digits.split_last(), Some((&dv, payload)) if mod9(payload) == Some(dv))
}

/// Mod10 check digit: from the rightmost digit, multiply alternately by 2
/// and 1, digit-sum any product of 10 or more, then take the distance to the
/// next multiple of ten.
pub(crate) fn mod10(payload: &[u8]) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }
    let mut sum = 0u32;
    for (i, &d) in payload.iter().rev().enumerate() {
        if d > 9 {
            return None;
        }
        let product = u32::from(d) * if i % 2 == 0 { 2 } else { 1 };
        // Products never exceed 18, so one digit-sum step is enough.
        sum += product / 10 + product % 10;
    }
    Some(((10 - sum % 10) % 10) as u8)
}

pub(crate) fn mod10_valid(digits: &[u8]) -> bool {
    matches!(digits.split_last(), Some((&dv, payload)) if mod10(payload) == Some(dv))
}

/// Parameterized Mod11: weighted sum over `payload` (weights aligned left to
/// right, same length), remainder mod 11, check digit per `remap`.
///
/// Returns `None` for malformed input or when the remap policy rejects the
/// degenerate result, meaning no digit can make the number valid.
pub(crate) fn mod11(payload: &[u8], weights: &[u8], remap: Remap) -> Option<u8> {
    let sum = weighted(payload, weights)?;
    let r = sum % 11;
    if let Remap::Units = remap {
        return Some((r % 10) as u8);
    }
    match (remap, 11 - r) {
        (Remap::Zero, 10 | 11) => Some(0),
        (Remap::MinusTen, 10) => Some(0),
        (Remap::MinusTen, 11) => Some(1),
        (Remap::ZeroTen, 10) => Some(0),
        (Remap::ZeroTen, 11) => None,
        (Remap::Reject, 10 | 11) => None,
        (_, dv) => Some(dv as u8),
    }
}

pub(crate) fn mod11_valid(digits: &[u8], weights: &[u8], remap: Remap) -> bool {
    matches!(digits.split_last(), Some((&dv, payload)) if mod11(payload, weights, remap) == Some(dv))
}

/// Weighted sum with the cyclic 2..9 run starting from the rightmost digit,
/// as FEBRABAN specifies for boleto general check digits.
fn mod11_cyclic_raw(payload: &[u8]) -> Option<u32> {
    if payload.is_empty() {
        return None;
    }
    let mut sum = 0u32;
    let mut weight = 2u32;
    for &d in payload.iter().rev() {
        if d > 9 {
            return None;
        }
        sum += u32::from(d) * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }
    Some(11 - sum % 11)
}

/// Banking boleto general check digit: degenerate results 0, 1, 10 and 11
/// all collapse to 1, so the output range is 1..=9.
pub(crate) fn mod11_banking(payload: &[u8]) -> Option<u8> {
    match mod11_cyclic_raw(payload)? {
        0 | 1 | 10 | 11 => Some(1),
        dv => Some(dv as u8),
    }
}

/// Convenio general check digit: degenerate results collapse to 0, output
/// range 0..=9.
pub(crate) fn mod11_convenio(payload: &[u8]) -> Option<u8> {
    match mod11_cyclic_raw(payload)? {
        0 | 10 | 11 => Some(0),
        dv => Some(dv as u8),
    }
}

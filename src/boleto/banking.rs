//! Banking boleto codec.
//!
//! Line form (47 digits):
//!
//! ```text
//! field 1: bank(3) currency(1) free[0..5](5)  DV(1)   Mod10
//! field 2: free[5..15](10)                    DV(1)   Mod10
//! field 3: free[15..25](10)                   DV(1)   Mod10
//! general DV(1)                                       Mod11 banking
//! field 5: due factor(4) amount(10)
//! ```
//!
//! Barcode form (44 digits): bank(3) currency(1) generalDV(1) factor(4)
//! amount(10) free(25). The general check digit covers the other 43 digits
//! with the Mod11 banking variant; the three field check digits exist only
//! in the line form.

use super::{Form, due_date};
use crate::checksum;
use crate::document::{Amount, Boleto, BoletoKind};
use crate::error::{Result, ValidationError};
use crate::sanitize::{digits_to_string, digits_to_u64};
use chrono::NaiveDate;

pub(crate) fn decode(digits: &[u8], form: Form, reference: NaiveDate) -> Result<Boleto> {
    let barcode = match form {
        Form::Line => barcode_from_line(digits)?,
        Form::Barcode => {
            verify_general(digits)?;
            digits.to_vec()
        }
    };
    let factor = digits_to_u64(&barcode[5..9]) as u32;
    let cents = digits_to_u64(&barcode[9..19]);
    Ok(Boleto {
        kind: BoletoKind::Banking { bank_code: digits_to_string(&barcode[..3]), currency_code: barcode[3] },
        raw: digits_to_string(digits),
        amount: (cents != 0).then(|| Amount::from_cents(cents)),
        due_date: due_date::decode(factor, reference),
        free_field: digits_to_string(&barcode[19..]),
        barcode: digits_to_string(&barcode),
    })
}

/// Validate the three Mod10 field check digits in line order (first failure
/// wins), rebuild the 44-digit barcode, then verify its general check digit.
pub(crate) fn barcode_from_line(line: &[u8]) -> Result<Vec<u8>> {
    for (index, field) in [&line[0..10], &line[10..21], &line[21..32]].into_iter().enumerate() {
        if !checksum::mod10_valid(field) {
            return Err(ValidationError::InvalidFieldChecksum(index as u8 + 1));
        }
    }
    let mut barcode = Vec::with_capacity(44);
    barcode.extend_from_slice(&line[0..4]); // bank + currency
    barcode.push(line[32]); // general check digit
    barcode.extend_from_slice(&line[33..47]); // factor + amount
    barcode.extend_from_slice(&line[4..9]); // free field, split across fields 1-3
    barcode.extend_from_slice(&line[10..20]);
    barcode.extend_from_slice(&line[21..31]);
    verify_general(&barcode)?;
    Ok(barcode)
}

fn verify_general(barcode: &[u8]) -> Result<()> {
    let mut payload = Vec::with_capacity(43);
    payload.extend_from_slice(&barcode[..4]);
    payload.extend_from_slice(&barcode[5..]);
    if checksum::mod11_banking(&payload) == Some(barcode[4]) {
        Ok(())
    } else {
        Err(ValidationError::InvalidChecksum)
    }
}

/// Rebuild the line form from a valid barcode, recomputing the field check
/// digits that the barcode does not carry.
pub(crate) fn line_from_barcode(barcode: &[u8]) -> String {
    let mut line = Vec::with_capacity(47);
    let mut push_field = |content: &[u8]| {
        line.extend_from_slice(content);
        line.push(checksum::mod10(content).unwrap_or(0));
    };
    let field1: Vec<u8> = barcode[..4].iter().chain(&barcode[19..24]).copied().collect();
    push_field(&field1);
    push_field(&barcode[24..34]);
    push_field(&barcode[34..44]);
    line.push(barcode[4]);
    line.extend_from_slice(&barcode[5..19]);
    digits_to_string(&line)
}

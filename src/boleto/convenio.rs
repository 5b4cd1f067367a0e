//! Convenio boleto codec.
//!
//! Line form (48 digits): four fields of 11 payload digits plus one check
//! digit each. Barcode form (44 digits): the four 11-digit payloads
//! concatenated. The value-type digit (third position of either form)
//! selects the checksum family for every check digit in the document:
//! value types 6 and 7 use Mod10, everything else the Mod11 convenio
//! variant. The general check digit sits at barcode position 3 and covers
//! the remaining 43 digits.
//!
//! Barcode layout: product(1, always 8) segment(1) value-type(1) DV(1)
//! amount(11) company(8) free(21).

use super::Form;
use crate::checksum;
use crate::document::{Amount, Boleto, BoletoKind};
use crate::error::{Result, ValidationError};
use crate::sanitize::{digits_to_string, digits_to_u64};

fn check_digit(content: &[u8], value_type: u8) -> Option<u8> {
    if matches!(value_type, 6 | 7) { checksum::mod10(content) } else { checksum::mod11_convenio(content) }
}

pub(crate) fn decode(digits: &[u8], form: Form) -> Result<Boleto> {
    let barcode = match form {
        Form::Line => barcode_from_line(digits)?,
        Form::Barcode => {
            verify_general(digits)?;
            digits.to_vec()
        }
    };
    let cents = digits_to_u64(&barcode[4..15]);
    Ok(Boleto {
        kind: BoletoKind::Convenio { segment: barcode[1], company_id: digits_to_string(&barcode[15..23]) },
        raw: digits_to_string(digits),
        amount: (cents != 0).then(|| Amount::from_cents(cents)),
        due_date: None,
        free_field: digits_to_string(&barcode[23..]),
        barcode: digits_to_string(&barcode),
    })
}

/// Validate the four field check digits in order (first failure wins), then
/// strip them and verify the general check digit embedded in field 1.
pub(crate) fn barcode_from_line(line: &[u8]) -> Result<Vec<u8>> {
    let value_type = line[2];
    let mut barcode = Vec::with_capacity(44);
    for index in 0..4 {
        let field = &line[index * 12..(index + 1) * 12];
        if check_digit(&field[..11], value_type) != Some(field[11]) {
            return Err(ValidationError::InvalidFieldChecksum(index as u8 + 1));
        }
        barcode.extend_from_slice(&field[..11]);
    }
    verify_general(&barcode)?;
    Ok(barcode)
}

fn verify_general(barcode: &[u8]) -> Result<()> {
    let mut payload = Vec::with_capacity(43);
    payload.extend_from_slice(&barcode[..3]);
    payload.extend_from_slice(&barcode[4..]);
    if check_digit(&payload, barcode[2]) == Some(barcode[3]) {
        Ok(())
    } else {
        Err(ValidationError::InvalidChecksum)
    }
}

/// Rebuild the line form by re-inserting the four field check digits.
pub(crate) fn line_from_barcode(barcode: &[u8]) -> String {
    let value_type = barcode[2];
    let mut line = Vec::with_capacity(48);
    for chunk in barcode.chunks(11) {
        line.extend_from_slice(chunk);
        line.push(check_digit(chunk, value_type).unwrap_or(0));
    }
    digits_to_string(&line)
}

//! Boleto classification and codecs.
//!
//! Decoding an input is a short pipeline:
//!
//! ```text
//! digits ── classify ──┬─ banking  ── banking::decode  (banking.rs)
//!   (length + first    │
//!    digit only)       └─ convenio ── convenio::decode (convenio.rs)
//!                                        │
//!                                        v
//!                          field checks → barcode → general check
//!                                        │
//!                                        v
//!                                 Boleto record
//! ```
//!
//! Unlike the IE resolver there is no ambiguity here: length plus leading
//! digit picks exactly one family and form, or the input is of no known
//! type. Both codecs convert between the line and barcode forms in both
//! directions; the barcode is the canonical representation stored on the
//! decoded record.

pub(crate) mod banking;
pub(crate) mod banks;
pub(crate) mod convenio;
pub(crate) mod due_date;


use crate::document::Boleto;
use crate::error::{Result, ValidationError};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    Line,
    Barcode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Banking,
    Convenio,
}

/// Detect family and form from length and leading digit alone.
///
/// The normalizer restricts lengths to {44, 47, 48}, so the only reachable
/// error here is a 48-digit string that does not start with 8; the catch-all
/// arm keeps the function total over arbitrary digit slices.
pub(crate) fn classify(digits: &[u8]) -> Result<(Family, Form)> {
    match (digits.len(), digits.first().copied()) {
        (44, Some(8)) => Ok((Family::Convenio, Form::Barcode)),
        (44, Some(_)) => Ok((Family::Banking, Form::Barcode)),
        (47, Some(_)) => Ok((Family::Banking, Form::Line)),
        (48, Some(8)) => Ok((Family::Convenio, Form::Line)),
        _ => Err(ValidationError::UnknownType),
    }
}

pub(crate) fn decode(digits: &[u8], reference: NaiveDate) -> Result<Boleto> {
    match classify(digits)? {
        (Family::Banking, form) => banking::decode(digits, form, reference),
        (Family::Convenio, form) => convenio::decode(digits, form),
    }
}

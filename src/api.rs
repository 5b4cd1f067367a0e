use crate::document::{Boleto, Ie, State};
use crate::error::Result;
use crate::{boleto, ie, sanitize};
use chrono::{Local, NaiveDate};

/// Decoding context.
///
/// This holds the environment needed to resolve time-dependent values, for
/// now only the reference date against which boleto due-date factors are
/// interpreted. The FEBRABAN factor range was exhausted in February 2025
/// and restarted against a new base date, so the same factor can mean two
/// different dates; the decoder keeps the old-epoch reading unless it lands
/// more than five years before `reference_date`. Supply an explicit context
/// when decoding historical documents or pinning tests.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference date used to resolve due-date factors.
    pub reference_date: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { reference_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap() }
        } else {
            Self { reference_date: Local::now().date_naive() }
        }
    }
}

/// Check a boleto in either form without building the decoded record.
///
/// # Example
/// ```
/// use fiscalia::{ValidationError, validate_boleto};
///
/// assert!(validate_boleto("00191.23454 67890.123457 67890.123457 2 10000000015000").is_ok());
/// assert_eq!(validate_boleto("123"), Err(ValidationError::InvalidLength));
/// ```
pub fn validate_boleto(input: &str) -> Result<()> {
    parse_boleto(input).map(|_| ())
}

/// Decode a boleto line or barcode using the default [`Context`].
///
/// # Example
/// ```
/// use fiscalia::parse_boleto;
///
/// let boleto = parse_boleto("00191234546789012345767890123457210000000015000").unwrap();
/// assert_eq!(boleto.barcode, "00192100000000150001234567890123456789012345");
/// assert_eq!(boleto.amount.unwrap().to_string(), "150.00");
/// ```
pub fn parse_boleto(input: &str) -> Result<Boleto> {
    parse_boleto_with(input, &Context::default())
}

/// Decode a boleto with an explicit reference date.
///
/// Use this when due dates must be deterministic; the epoch-rollover
/// policy otherwise reads the current date.
pub fn parse_boleto_with(input: &str, context: &Context) -> Result<Boleto> {
    let digits = sanitize::boleto_digits(input)?;
    boleto::decode(&digits, context.reference_date)
}

/// Check a state registration against every candidate state.
pub fn validate_ie(input: &str) -> Result<()> {
    detect_states(input).map(|_| ())
}

/// Every state whose published algorithm accepts the input, in code order.
/// The list is never empty on success; more than one entry means the input
/// is genuinely ambiguous.
///
/// # Example
/// ```
/// use fiscalia::{State, detect_states};
///
/// assert_eq!(detect_states("820000000").unwrap(), vec![State::Am, State::Sc, State::Se]);
/// ```
pub fn detect_states(input: &str) -> Result<Vec<State>> {
    let normalized = sanitize::ie_digits(input)?;
    ie::detect(&normalized)
}

/// Decode a state registration into one formatted record per matching
/// state.
///
/// # Example
/// ```
/// use fiscalia::parse_ie;
///
/// let records = parse_ie("110.042.490.114").unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].formatted, "110.042.490.114");
/// ```
pub fn parse_ie(input: &str) -> Result<Vec<Ie>> {
    let normalized = sanitize::ie_digits(input)?;
    ie::parse(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn default_context_is_pinned_under_test() {
        let ctx = Context::default();
        assert_eq!(ctx.reference_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn boleto_entry_points_agree() {
        let line = "00191234546789012345767890123457210000000015000";
        assert!(validate_boleto(line).is_ok());
        let parsed = parse_boleto(line).unwrap();
        let pinned = parse_boleto_with(line, &Context::default()).unwrap();
        assert_eq!(parsed, pinned);
    }

    #[test]
    fn ie_entry_points_agree() {
        let input = "251.040.852";
        let states = detect_states(input).unwrap();
        let records = parse_ie(input).unwrap();
        assert_eq!(states, records.iter().map(|r| r.state).collect::<Vec<_>>());
        assert!(validate_ie(input).is_ok());
        assert_eq!(validate_ie("x"), Err(ValidationError::InvalidFormat));
    }
}

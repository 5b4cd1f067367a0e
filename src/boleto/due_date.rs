//! Due-date factor decoding.
//!
//! The four-digit factor counts days since a base date. FEBRABAN's original
//! base (1997-10-07) ran out of range in February 2025, when the factor
//! restarted at 1000 against a new base (2022-05-29). Both epochs remain in
//! circulation, so decoding is relative to a reference date: the factor is
//! read against the old base first, and only reinterpreted against the new
//! base when the old reading lands more than five years before the
//! reference. The reference comes from [`crate::Context`], never from the
//! wall clock directly, so callers and tests can pin it.

use chrono::{Days, Months, NaiveDate};

fn old_base() -> NaiveDate {
    NaiveDate::from_ymd_opt(1997, 10, 7).unwrap()
}

fn new_base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 5, 29).unwrap()
}

/// Decode a due-date factor; `0` means "no due date".
pub(crate) fn decode(factor: u32, reference: NaiveDate) -> Option<NaiveDate> {
    if factor == 0 {
        return None;
    }
    let days = Days::new(u64::from(factor));
    let old = old_base().checked_add_days(days)?;
    let Some(cutoff) = reference.checked_sub_months(Months::new(60)) else {
        return Some(old);
    };
    if old < cutoff { new_base().checked_add_days(days) } else { Some(old) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn factor_zero_means_no_due_date() {
        assert_eq!(decode(0, date(2024, 1, 1)), None);
    }

    #[test]
    fn recent_reference_keeps_old_epoch() {
        // Factor 1000 against the old base is 2000-07-03.
        assert_eq!(decode(1000, date(2002, 1, 1)), Some(date(2000, 7, 3)));
        // Late old-range factors stay on the old base even today.
        assert_eq!(decode(9999, date(2026, 3, 1)), Some(date(2025, 2, 21)));
    }

    #[test]
    fn stale_old_reading_rolls_over_to_new_epoch() {
        // Seen from 2026, a factor-1000 boleto cannot be from 2000; the new
        // base puts it at 2025-02-22, the documented restart date.
        assert_eq!(decode(1000, date(2026, 3, 1)), Some(date(2025, 2, 22)));
    }

    #[test]
    fn rollover_cutoff_is_exactly_five_years() {
        // Old reading 2000-07-03; exactly five years later is not yet "more
        // than five years before", one day later is.
        assert_eq!(decode(1000, date(2005, 7, 3)), Some(date(2000, 7, 3)));
        assert_eq!(decode(1000, date(2005, 7, 4)), Some(date(2025, 2, 22)));
    }
}

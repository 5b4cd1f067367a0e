//! IE (Inscrição Estadual) candidate resolution.
//!
//! Twenty-seven state formats share a handful of digit lengths, and length
//! plus prefix is not always enough to pick a unique state. Resolution is
//! therefore a two-stage pipeline:
//!
//! ```text
//! digits ── candidates ──── StateSet            (length + prefix routing)
//!              │
//!              v
//!        rules::TABLE ── run every candidate    (rules.rs / checks.rs)
//!              │
//!              v
//!     every state whose check digits match      (0, 1 or many)
//! ```
//!
//! The resolver never picks a "best" state: when several candidates accept
//! the same digits (common, since many states publish the identical
//! weight/remap pair), all of them are returned, in code order. Zero
//! matches collapse to `InvalidChecksum`, including the case where a
//! candidate failed only its internal prefix constraint.
//!
//! The São Paulo rural-producer form (`P` + 12 digits) is routed before the
//! table: the marker alone already identifies the state.

pub(crate) mod checks;
pub(crate) mod format;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

use crate::document::{Ie, State};
use crate::error::{Result, ValidationError};
use crate::sanitize::{IeInput, digits_to_string};
use bitflags::bitflags;

bitflags! {
    /// Candidate mask over the 27 state validators.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct StateSet: u32 {
        const AC = 1 << 0;
        const AL = 1 << 1;
        const AM = 1 << 2;
        const AP = 1 << 3;
        const BA = 1 << 4;
        const CE = 1 << 5;
        const DF = 1 << 6;
        const ES = 1 << 7;
        const GO = 1 << 8;
        const MA = 1 << 9;
        const MG = 1 << 10;
        const MS = 1 << 11;
        const MT = 1 << 12;
        const PA = 1 << 13;
        const PB = 1 << 14;
        const PE = 1 << 15;
        const PI = 1 << 16;
        const PR = 1 << 17;
        const RJ = 1 << 18;
        const RN = 1 << 19;
        const RO = 1 << 20;
        const RR = 1 << 21;
        const RS = 1 << 22;
        const SC = 1 << 23;
        const SE = 1 << 24;
        const SP = 1 << 25;
        const TO = 1 << 26;

        /// Nine-digit states reachable without a dedicated prefix route.
        const GENERIC_NINE = Self::GO.bits()
            | Self::BA.bits()
            | Self::AM.bits()
            | Self::CE.bits()
            | Self::ES.bits()
            | Self::PB.bits()
            | Self::PI.bits()
            | Self::SC.bits()
            | Self::SE.bits()
            | Self::PE.bits()
            | Self::RO.bits();
    }
}

pub(crate) fn state_flag(state: State) -> StateSet {
    match state {
        State::Ac => StateSet::AC,
        State::Al => StateSet::AL,
        State::Am => StateSet::AM,
        State::Ap => StateSet::AP,
        State::Ba => StateSet::BA,
        State::Ce => StateSet::CE,
        State::Df => StateSet::DF,
        State::Es => StateSet::ES,
        State::Go => StateSet::GO,
        State::Ma => StateSet::MA,
        State::Mg => StateSet::MG,
        State::Ms => StateSet::MS,
        State::Mt => StateSet::MT,
        State::Pa => StateSet::PA,
        State::Pb => StateSet::PB,
        State::Pe => StateSet::PE,
        State::Pi => StateSet::PI,
        State::Pr => StateSet::PR,
        State::Rj => StateSet::RJ,
        State::Rn => StateSet::RN,
        State::Ro => StateSet::RO,
        State::Rr => StateSet::RR,
        State::Rs => StateSet::RS,
        State::Sc => StateSet::SC,
        State::Se => StateSet::SE,
        State::Sp => StateSet::SP,
        State::To => StateSet::TO,
    }
}

/// Candidate set by length and, where a length is shared, by prefix.
fn candidates(digits: &[u8]) -> StateSet {
    // The normalizer guarantees 8..=14 digits here, so indexing the first
    // two is safe for every arm that uses them.
    match digits.len() {
        8 => StateSet::BA | StateSet::RJ,
        9 => match (digits[0], digits[1]) {
            (2, 4) => StateSet::RR | StateSet::AL,
            (2, 8) => StateSet::MS,
            (0, 3) => StateSet::AP,
            (1, 2) => StateSet::MA,
            (1, 5) | (7, 5..=9) => StateSet::PA,
            (2, 0) => StateSet::RN,
            _ => StateSet::GENERIC_NINE,
        },
        10 => StateSet::RS | StateSet::PR | StateSet::RN,
        11 => StateSet::MT | StateSet::TO,
        12 => StateSet::SP,
        13 => match (digits[0], digits[1]) {
            (0, 1) => StateSet::AC,
            (0, 7) => StateSet::DF,
            _ => StateSet::MG | StateSet::AC | StateSet::DF,
        },
        14 => StateSet::RO | StateSet::PE,
        _ => StateSet::empty(),
    }
}

fn matching_rules(digits: &[u8]) -> Vec<&'static rules::StateRule> {
    let set = candidates(digits);
    rules::TABLE
        .iter()
        .filter(|rule| set.contains(state_flag(rule.state)))
        .filter(|rule| rules::run(rule, digits).is_ok())
        .collect()
}

/// Every state whose algorithm accepts the input, in code order.
pub(crate) fn detect(input: &IeInput) -> Result<Vec<State>> {
    match input {
        IeInput::Rural(digits) => {
            checks::sao_paulo_rural(digits)?;
            Ok(vec![State::Sp])
        }
        IeInput::Digits(digits) => {
            let matched: Vec<State> = matching_rules(digits).iter().map(|rule| rule.state).collect();
            if matched.is_empty() { Err(ValidationError::InvalidChecksum) } else { Ok(matched) }
        }
    }
}

const RURAL_MASK: &str = "P-########.#/###";

/// One formatted record per matching state.
pub(crate) fn parse(input: &IeInput) -> Result<Vec<Ie>> {
    match input {
        IeInput::Rural(digits) => {
            checks::sao_paulo_rural(digits)?;
            Ok(vec![Ie {
                state: State::Sp,
                raw: format!("P{}", digits_to_string(digits)),
                formatted: format::apply(digits, RURAL_MASK),
            }])
        }
        IeInput::Digits(digits) => {
            let records: Vec<Ie> = matching_rules(digits)
                .iter()
                .map(|rule| Ie {
                    state: rule.state,
                    raw: digits_to_string(digits),
                    formatted: format::with_masks(digits, rule.masks),
                })
                .collect();
            if records.is_empty() { Err(ValidationError::InvalidChecksum) } else { Ok(records) }
        }
    }
}

//! The per-state algorithm table.
//!
//! Twenty-seven near-identical validators differ only in accepted lengths,
//! weight vector, prefix constraint, degenerate-remainder policy and output
//! mask, so the table is data consumed by one generic runner. States whose
//! published algorithm is genuinely irregular (chained digits over a
//! routing modulus, payload bands, skipped positions) plug in through
//! `Check::Custom`.
//!
//! Weight vectors and remainder policies follow each state's published
//! Sintegra specification.

use super::checks::{self, W9_2};
use crate::checksum::Remap;
use crate::document::State;
use crate::error::{Result, ValidationError};

#[derive(Clone, Copy)]
pub(crate) enum Check {
    /// One trailing check digit.
    Single { weights: &'static [u8], remap: Remap },
    /// Two trailing check digits, the second covering payload plus first.
    Double { first: &'static [u8], second: &'static [u8], remap: Remap },
    /// Positional Mod9 (Roraima).
    Mod9,
    Custom(fn(&[u8]) -> Result<()>),
}

pub(crate) struct StateRule {
    pub state: State,
    pub lengths: &'static [usize],
    /// Digit prefixes the state publishes for its registrations; empty
    /// means unconstrained.
    pub prefixes: &'static [&'static str],
    pub check: Check,
    /// `(length, mask)` pairs for output formatting.
    pub masks: &'static [(usize, &'static str)],
}

const W_CHAIN_FIRST: [u8; 11] = [4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const W_CHAIN_SECOND: [u8; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const W_PR_FIRST: [u8; 8] = [3, 2, 7, 6, 5, 4, 3, 2];
const W_PR_SECOND: [u8; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];
const W_RJ: [u8; 7] = [2, 7, 6, 5, 4, 3, 2];
const W_RS: [u8; 9] = [2, 9, 8, 7, 6, 5, 4, 3, 2];
const W_MT: [u8; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// All state rules in code order; resolver output follows this ordering.
pub(crate) static TABLE: [StateRule; 27] = [
    StateRule {
        state: State::Ac,
        lengths: &[13],
        prefixes: &["01"],
        check: Check::Double { first: &W_CHAIN_FIRST, second: &W_CHAIN_SECOND, remap: Remap::Zero },
        masks: &[(13, "##.###.###/###-##")],
    },
    StateRule {
        state: State::Al,
        lengths: &[9],
        prefixes: &["24"],
        check: Check::Custom(checks::alagoas),
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Am,
        lengths: &[9],
        prefixes: &[],
        check: Check::Single { weights: &W9_2, remap: Remap::Zero },
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Ap,
        lengths: &[9],
        prefixes: &["03"],
        check: Check::Custom(checks::amapa),
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Ba,
        lengths: &[8, 9],
        prefixes: &[],
        check: Check::Custom(checks::bahia),
        masks: &[(8, "######-##"), (9, "#######-##")],
    },
    StateRule {
        state: State::Ce,
        lengths: &[9],
        prefixes: &["06"],
        check: Check::Single { weights: &W9_2, remap: Remap::Zero },
        masks: &[(9, "########-#")],
    },
    StateRule {
        state: State::Df,
        lengths: &[13],
        prefixes: &["07"],
        check: Check::Double { first: &W_CHAIN_FIRST, second: &W_CHAIN_SECOND, remap: Remap::Zero },
        masks: &[(13, "##.###.###/###-##")],
    },
    StateRule {
        state: State::Es,
        lengths: &[9],
        prefixes: &[],
        check: Check::Single { weights: &W9_2, remap: Remap::Reject },
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Go,
        lengths: &[9],
        prefixes: &["10", "11", "15"],
        check: Check::Custom(checks::goias),
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Ma,
        lengths: &[9],
        prefixes: &["12"],
        check: Check::Single { weights: &W9_2, remap: Remap::Zero },
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Mg,
        lengths: &[13],
        prefixes: &[],
        check: Check::Custom(checks::minas_gerais),
        masks: &[(13, "###.###.###/####")],
    },
    StateRule {
        state: State::Ms,
        lengths: &[9],
        prefixes: &["28"],
        check: Check::Single { weights: &W9_2, remap: Remap::Zero },
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Mt,
        lengths: &[11],
        prefixes: &[],
        check: Check::Single { weights: &W_MT, remap: Remap::Zero },
        masks: &[(11, "##########-#")],
    },
    StateRule {
        state: State::Pa,
        lengths: &[9],
        prefixes: &["15", "75", "76", "77", "78", "79"],
        check: Check::Single { weights: &W9_2, remap: Remap::Zero },
        masks: &[(9, "##-######-#")],
    },
    StateRule {
        state: State::Pb,
        lengths: &[9],
        prefixes: &[],
        check: Check::Single { weights: &W9_2, remap: Remap::Reject },
        masks: &[(9, "########-#")],
    },
    StateRule {
        state: State::Pe,
        lengths: &[9, 14],
        prefixes: &[],
        check: Check::Custom(checks::pernambuco),
        masks: &[(9, "#######-##"), (14, "##.#.###.#######-#")],
    },
    StateRule {
        state: State::Pi,
        lengths: &[9],
        prefixes: &[],
        check: Check::Single { weights: &W9_2, remap: Remap::Reject },
        masks: &[(9, "##.###.###-#")],
    },
    StateRule {
        state: State::Pr,
        lengths: &[10],
        prefixes: &[],
        check: Check::Double { first: &W_PR_FIRST, second: &W_PR_SECOND, remap: Remap::Zero },
        masks: &[(10, "###.#####-##")],
    },
    StateRule {
        state: State::Rj,
        lengths: &[8],
        prefixes: &[],
        check: Check::Single { weights: &W_RJ, remap: Remap::Zero },
        masks: &[(8, "##.###.##-#")],
    },
    StateRule {
        state: State::Rn,
        lengths: &[9, 10],
        prefixes: &["20"],
        check: Check::Custom(checks::rio_grande_do_norte),
        masks: &[(9, "##.###.###-#"), (10, "##.#.###.###-#")],
    },
    StateRule {
        state: State::Ro,
        lengths: &[9, 14],
        prefixes: &[],
        check: Check::Custom(checks::rondonia),
        masks: &[(9, "###.#####-#"), (14, "#############-#")],
    },
    StateRule {
        state: State::Rr,
        lengths: &[9],
        prefixes: &["24"],
        check: Check::Mod9,
        masks: &[(9, "########-#")],
    },
    StateRule {
        state: State::Rs,
        lengths: &[10],
        prefixes: &[],
        check: Check::Single { weights: &W_RS, remap: Remap::Zero },
        masks: &[(10, "###/#######")],
    },
    StateRule {
        state: State::Sc,
        lengths: &[9],
        prefixes: &[],
        check: Check::Single { weights: &W9_2, remap: Remap::Zero },
        masks: &[(9, "###.###.###")],
    },
    StateRule {
        state: State::Se,
        lengths: &[9],
        prefixes: &[],
        check: Check::Single { weights: &W9_2, remap: Remap::Zero },
        masks: &[(9, "########-#")],
    },
    StateRule {
        state: State::Sp,
        lengths: &[12],
        prefixes: &[],
        check: Check::Custom(checks::sao_paulo),
        masks: &[(12, "###.###.###.###")],
    },
    StateRule {
        state: State::To,
        lengths: &[11],
        prefixes: &[],
        check: Check::Custom(checks::tocantins),
        masks: &[(11, "##.##.######-#")],
    },
];

/// Run one rule against normalized digits: length guard, published prefix
/// constraint, then the check digits.
pub(crate) fn run(rule: &StateRule, digits: &[u8]) -> Result<()> {
    if !rule.lengths.contains(&digits.len()) {
        return Err(ValidationError::InvalidLength);
    }
    if !rule.prefixes.is_empty() && !rule.prefixes.iter().any(|p| checks::has_prefix(digits, p)) {
        return Err(ValidationError::InvalidPrefix);
    }
    match rule.check {
        Check::Single { weights, remap } => checks::single(digits, weights, remap),
        Check::Double { first, second, remap } => checks::double(digits, first, second, remap),
        Check::Mod9 => checks::mod9_state(digits),
        Check::Custom(check) => check(digits),
    }
}

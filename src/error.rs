//! Structured error vocabulary shared by the boleto and IE operations.
//!
//! Every failure is a value, never a panic: callers match on the variant for
//! programmatic handling and get a rendered message through `Display` when
//! they only want to show something to a human.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Non-digit content remains after separators are stripped, or the input
    /// is empty.
    #[error("input is empty or contains characters other than digits and separators")]
    InvalidFormat,

    /// The sanitized length is outside the permitted set for the document type.
    #[error("sanitized input has an unsupported length")]
    InvalidLength,

    /// No candidate algorithm's check digit matched.
    #[error("check digit verification failed for every candidate interpretation")]
    InvalidChecksum,

    /// A specific boleto sub-field failed its own check digit. Fields are
    /// numbered from 1 in line order; only the first failure is reported.
    #[error("field {0} failed its check digit")]
    InvalidFieldChecksum(u8),

    /// The length matched a state's format but a required digit prefix did
    /// not. The IE resolver folds this into `InvalidChecksum` when no other
    /// candidate matches.
    #[error("required digit prefix for the state did not match")]
    InvalidPrefix,

    /// The length / leading-digit combination matches no known boleto layout.
    #[error("length and leading digit match no known document type")]
    UnknownType,
}

pub type Result<T> = std::result::Result<T, ValidationError>;

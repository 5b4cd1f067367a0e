#[macro_use]
mod macros;
mod api;
mod boleto;
mod checksum;
mod document;
mod error;
mod ie;
mod sanitize;

pub use api::{Context, detect_states, parse_boleto, parse_boleto_with, parse_ie, validate_boleto, validate_ie};
pub use document::{Amount, Boleto, BoletoKind, Ie, State};
pub use error::{Result, ValidationError};

//! Rejection reasons for generation requests.

use thiserror::Error;

use super::CharClass;

/// Why a generation request was rejected. No password is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("select at least one character class")]
    NoClassSelected,

    #[error("length {length} is too short: minimum is {required} to include every selected class")]
    LengthTooShort { length: usize, required: usize },

    #[error("length {length} is too long: maximum is {max}")]
    LengthTooLong { length: usize, max: usize },

    #[error("no {class} characters left after excluding ambiguous ones")]
    EmptyPool { class: CharClass },
}

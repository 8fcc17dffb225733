//! # Error Types
//!
//! Validation failures surfaced by [`Isbn13::new`](crate::Isbn13::new).
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Checks run in a fixed order (length, then check digit, then registration
//! group) and the first failure wins, so a given input always maps to the
//! same variant.

use thiserror::Error;

/// Reasons a raw integer is rejected as an ISBN-13.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The value does not occupy exactly 13 decimal digits.
    #[error("not a 13-digit number")]
    InvalidLength,

    /// The trailing digit does not match the checksum of the leading 12.
    #[error("incorrect check digit")]
    InvalidCheckDigit,

    /// The digits after the GS1 prefix fall in no defined range for that
    /// prefix. Also covers prefixes other than 978 and 979.
    #[error("registration group not defined")]
    UnknownRegistrationGroup,
}

impl ValidationError {
    /// Short machine-readable tag, used as the `reason` field in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidLength => "invalid_length",
            Self::InvalidCheckDigit => "invalid_check_digit",
            Self::UnknownRegistrationGroup => "unknown_registration_group",
        }
    }
}

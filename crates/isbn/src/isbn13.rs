//! # ISBN-13 Value Type
//!
//! [`Isbn13`] wraps a 13-digit integer that has passed length, check digit,
//! and registration group validation. Nothing is cached: every accessor
//! recomputes its field from the raw integer.
//!
//! ## Construction
//!
//! - [`Isbn13::new`] validates and is the normal entry point.
//! - [`Isbn13::new_unchecked`] wraps any integer without looking at it, for
//!   bulk ingestion of numbers that were validated elsewhere.
//!
//! Deserialization routes through [`Isbn13::new`], so a deserialized value
//! is always valid.

use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::ValidationError;
use crate::group::{self, RegistrationGroup};
use crate::range::GS1_DIVISOR;

/// Smallest integer with 13 decimal digits.
const MIN_13_DIGITS: u64 = 1_000_000_000_000;

/// Largest integer with 13 decimal digits.
const MAX_13_DIGITS: u64 = 9_999_999_999_999;

/// A 13-digit International Standard Book Number as defined by ISO 2108.
///
/// # Example
///
/// ```
/// use isbn::Isbn13;
///
/// let isbn = Isbn13::new(9780575094185).unwrap();
/// assert_eq!(isbn.gs1(), 978);
/// assert_eq!(isbn.registration_group(), 0);
/// assert_eq!(isbn.check_digit(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Isbn13(u64);

impl Isbn13 {
    /// Validate `value` and wrap it.
    ///
    /// # Errors
    ///
    /// Checks run in order and the first failure is returned:
    ///
    /// - [`ValidationError::InvalidLength`] if `value` is not exactly 13 digits.
    /// - [`ValidationError::InvalidCheckDigit`] if the trailing digit does not
    ///   match the checksum of the leading 12.
    /// - [`ValidationError::UnknownRegistrationGroup`] if the GS1 prefix is not
    ///   978 or 979, or the group digits fall in no defined range.
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        match Self::validate(value) {
            Ok(()) => {
                tracing::trace!(isbn = value, "validated ISBN-13");
                Ok(Self(value))
            }
            Err(e) => {
                tracing::debug!(value, reason = e.as_str(), "rejected ISBN-13: {e}");
                Err(e)
            }
        }
    }

    fn validate(value: u64) -> Result<(), ValidationError> {
        if !(MIN_13_DIGITS..=MAX_13_DIGITS).contains(&value) {
            return Err(ValidationError::InvalidLength);
        }
        if u64::from(checksum::check_digit(value)) != value % 10 {
            return Err(ValidationError::InvalidCheckDigit);
        }
        if group::resolve(value).is_none() {
            return Err(ValidationError::UnknownRegistrationGroup);
        }
        Ok(())
    }

    /// Wrap `value` without any validation.
    ///
    /// The caller is trusted completely. If `value` is not a valid ISBN-13
    /// the accessors still return without panicking, but their results are
    /// meaningless (for example [`registration_group`](Self::registration_group)
    /// returns 0).
    pub const fn new_unchecked(value: u64) -> Self {
        Self(value)
    }

    /// The raw 13-digit integer.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The leading three digits: 978 or 979 for a validated value.
    pub const fn gs1(&self) -> u32 {
        // u64::MAX / 10^10 fits in u32, so this never truncates.
        (self.0 / GS1_DIVISOR) as u32
    }

    /// The registration group code, or 0 if it cannot be resolved.
    ///
    /// A validated value always resolves. Use
    /// [`registration_group_info`](Self::registration_group_info) to tell a
    /// genuine group 0 apart from a failed lookup, or to get the group width.
    pub fn registration_group(&self) -> u32 {
        self.registration_group_info().map_or(0, |g| g.code)
    }

    /// The registration group code together with its digit width.
    pub fn registration_group_info(&self) -> Option<RegistrationGroup> {
        group::resolve(self.0)
    }

    /// The trailing digit.
    pub const fn check_digit(&self) -> u8 {
        (self.0 % 10) as u8
    }
}

impl TryFrom<u64> for Isbn13 {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Isbn13> for u64 {
    fn from(isbn: Isbn13) -> Self {
        isbn.0
    }
}

impl std::fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:013}", self.0)
    }
}

impl<'de> Deserialize<'de> for Isbn13 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

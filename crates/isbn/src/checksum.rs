//! # Check Digit
//!
//! Weighted checksum over the leading 12 digits of an ISBN-13. Digits are
//! weighted 3, 1, 3, 1, ... starting from the least-significant of the 12,
//! and the check digit is the weighted sum modulo 10.

/// Number of digits covered by the checksum.
const CHECKED_DIGITS: u32 = 12;

/// Compute the check digit for a 13-digit candidate.
///
/// The candidate's own trailing digit is discarded first, so this can be
/// compared directly against `isbn % 10`.
pub const fn check_digit(isbn: u64) -> u8 {
    let mut rest = isbn / 10;
    let mut sum = 0;
    let mut position = 0;
    while position < CHECKED_DIGITS {
        let weight = if position % 2 == 0 { 3 } else { 1 };
        sum += (rest % 10) * weight;
        rest /= 10;
        position += 1;
    }
    (sum % 10) as u8
}

//! # Registration Group Resolution
//!
//! Finds the registration group of a 13-digit number by scanning the
//! [`RangeTable`](crate::range::RangeTable) for its GS1 prefix.
//!
//! Tiers are tried narrowest first and the first tier whose substring falls
//! in one of its bounds wins. The tables are prefix-free across tiers, so
//! the order only matters if a future table edit introduces an overlap, in
//! which case the result is still deterministic.

use serde::{Deserialize, Serialize};

use crate::range::{self, GS1_DIVISOR};

/// A resolved registration group: its numeric code and how many digits it
/// occupies after the GS1 prefix.
///
/// The width is needed to tell `"0"` apart from `"00"`; the code alone
/// loses leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationGroup {
    /// Numeric value of the group digits.
    pub code: u32,
    /// Number of digits the group occupies (1..=5).
    pub digits: u8,
}

/// Resolve the registration group of `isbn`.
///
/// Returns `None` if the GS1 prefix is neither 978 nor 979, or if no tier
/// of that prefix's table contains the candidate code.
pub fn resolve(isbn: u64) -> Option<RegistrationGroup> {
    let table = u32::try_from(isbn / GS1_DIVISOR)
        .ok()
        .and_then(range::table_for)?;

    table.tiers.iter().find_map(|tier| {
        tier.matches(isbn).map(|code| RegistrationGroup {
            code,
            digits: tier.digits,
        })
    })
}

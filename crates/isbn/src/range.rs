//! # Registration Group Range Tables
//!
//! Static data describing which registration group codes are defined under
//! each GS1 prefix. A registration group is 1 to 5 digits long and sits
//! immediately after the 3-digit GS1 prefix:
//!
//! ```text
//!   978 | 057509418 | 5
//!   GS1 | group, registrant, publication | check
//! ```
//!
//! Each [`Tier`] covers one group width. It knows how to cut its substring
//! out of the full 13-digit number (`(isbn / divisor) % modulus`) and which
//! numeric ranges of that substring are assigned.
//!
//! Tiers are stored in ascending width order. The ranges are prefix-free
//! across tiers for each GS1 prefix, so at most one tier matches any number;
//! the `tier_uniqueness` integration test enumerates every bound to confirm.
//!
//! The tables are `static` and never written, so they can be shared across
//! threads freely.

/// Divides a 13-digit ISBN down to its leading three GS1 digits.
pub const GS1_DIVISOR: u64 = 10_000_000_000;

/// GS1 prefix for the original "Bookland" ISBN space.
pub const GS1_978: u32 = 978;

/// GS1 prefix opened once the 978 space ran short.
pub const GS1_979: u32 = 979;

/// An inclusive range of registration group codes within one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound {
    /// Lowest code in the range.
    pub lower: u32,
    /// Highest code in the range.
    pub upper: u32,
}

impl Bound {
    /// Returns true if `code` lies within `lower..=upper`.
    pub const fn contains(&self, code: u32) -> bool {
        self.lower <= code && code <= self.upper
    }
}

/// All defined ranges for registration groups of one digit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tier {
    /// Width of the registration group code in digits (1..=5).
    pub digits: u8,
    /// Strips everything after the group code.
    pub divisor: u64,
    /// Strips the GS1 prefix and any earlier group digits.
    pub modulus: u64,
    /// Assigned code ranges for this width.
    pub bounds: &'static [Bound],
}

impl Tier {
    /// Cut this tier's candidate group code out of a 13-digit number.
    pub const fn extract(&self, isbn: u64) -> u32 {
        // modulus <= 100_000, so the result always fits.
        ((isbn / self.divisor) % self.modulus) as u32
    }

    /// Returns the candidate code if it falls within any of this tier's
    /// bounds.
    pub fn matches(&self, isbn: u64) -> Option<u32> {
        let code = self.extract(isbn);
        self.bounds
            .iter()
            .any(|bound| bound.contains(code))
            .then_some(code)
    }
}

/// The registration group tiers defined for one GS1 prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeTable {
    /// The GS1 prefix these tiers apply to.
    pub gs1: u32,
    /// Tiers in ascending digit-width order.
    pub tiers: &'static [Tier],
}

// Divisor/modulus per tier. The group starts at the 4th digit, so a group of
// width `w` ends 10 - w digits above the units place:
//   1 digit : 10^9, 10^1
//   2 digits: 10^8, 10^2
//   3 digits: 10^7, 10^3
//   4 digits: 10^6, 10^4
//   5 digits: 10^5, 10^5

/// Registration group ranges under GS1 978.
pub static TABLE_978: RangeTable = RangeTable {
    gs1: GS1_978,
    tiers: &[
        Tier {
            digits: 1,
            divisor: 1_000_000_000,
            modulus: 10,
            bounds: &[Bound { lower: 0, upper: 5 }, Bound { lower: 7, upper: 7 }],
        },
        Tier {
            digits: 2,
            divisor: 100_000_000,
            modulus: 100,
            bounds: &[
                Bound { lower: 80, upper: 94 },
                Bound { lower: 65, upper: 65 },
            ],
        },
        Tier {
            digits: 3,
            divisor: 10_000_000,
            modulus: 1_000,
            bounds: &[
                Bound { lower: 600, upper: 649 },
                Bound { lower: 950, upper: 989 },
            ],
        },
        Tier {
            digits: 4,
            divisor: 1_000_000,
            modulus: 10_000,
            bounds: &[Bound { lower: 9900, upper: 9989 }],
        },
        Tier {
            digits: 5,
            divisor: 100_000,
            modulus: 100_000,
            bounds: &[Bound { lower: 99900, upper: 99999 }],
        },
    ],
};

/// Registration group ranges under GS1 979.
pub static TABLE_979: RangeTable = RangeTable {
    gs1: GS1_979,
    tiers: &[
        Tier {
            digits: 1,
            divisor: 1_000_000_000,
            modulus: 10,
            bounds: &[Bound { lower: 8, upper: 8 }],
        },
        Tier {
            digits: 2,
            divisor: 100_000_000,
            modulus: 100,
            bounds: &[Bound { lower: 10, upper: 12 }],
        },
    ],
};

/// Select the range table for a GS1 prefix. Only 978 and 979 are defined.
pub fn table_for(gs1: u32) -> Option<&'static RangeTable> {
    match gs1 {
        GS1_978 => Some(&TABLE_978),
        GS1_979 => Some(&TABLE_979),
        _ => None,
    }
}

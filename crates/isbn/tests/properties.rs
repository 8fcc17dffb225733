//! # Property Tests
//!
//! Randomized checks of the accessor formulas and the validation contract
//! over the whole 13-digit space and beyond it.

use isbn::checksum::check_digit;
use isbn::{group, Isbn13, ValidationError};
use proptest::prelude::*;

/// Any 13-digit number.
fn thirteen_digits() -> impl Strategy<Value = u64> {
    1_000_000_000_000u64..=9_999_999_999_999u64
}

/// A 13-digit number under 978 or 979 with a correct check digit.
fn checksummed_bookland() -> impl Strategy<Value = u64> {
    (prop_oneof![Just(978u64), Just(979u64)], 0u64..1_000_000_000).prop_map(|(gs1, body)| {
        let candidate = (gs1 * 1_000_000_000 + body) * 10;
        candidate + u64::from(check_digit(candidate))
    })
}

proptest! {
    /// Validation succeeds iff the check digit matches and the group resolves.
    #[test]
    fn new_iff_checksum_and_group(n in thirteen_digits()) {
        let checksum_ok = u64::from(check_digit(n)) == n % 10;
        let group_ok = group::resolve(n).is_some();
        match Isbn13::new(n) {
            Ok(isbn) => {
                prop_assert!(checksum_ok && group_ok);
                prop_assert_eq!(isbn.get(), n);
            }
            Err(ValidationError::InvalidCheckDigit) => prop_assert!(!checksum_ok),
            Err(ValidationError::UnknownRegistrationGroup) => {
                prop_assert!(checksum_ok && !group_ok);
            }
            Err(ValidationError::InvalidLength) => {
                prop_assert!(false, "13-digit input {} rejected for length", n);
            }
        }
    }

    /// Checksummed numbers under a defined prefix fail only on the group.
    #[test]
    fn checksummed_fail_only_on_group(n in checksummed_bookland()) {
        match Isbn13::new(n) {
            Ok(isbn) => prop_assert_ne!(isbn.registration_group_info(), None),
            Err(e) => prop_assert_eq!(e, ValidationError::UnknownRegistrationGroup),
        }
    }

    /// Accessors follow their arithmetic definitions, validated or not.
    #[test]
    fn accessor_formulas(n in any::<u64>()) {
        let isbn = Isbn13::new_unchecked(n);
        prop_assert_eq!(u64::from(isbn.gs1()), n / 10_000_000_000);
        prop_assert_eq!(u64::from(isbn.check_digit()), n % 10);
        let expected_group = group::resolve(n).map_or(0, |g| g.code);
        prop_assert_eq!(isbn.registration_group(), expected_group);
    }

    /// Accessors have no hidden state.
    #[test]
    fn accessors_idempotent(n in any::<u64>()) {
        let isbn = Isbn13::new_unchecked(n);
        prop_assert_eq!(isbn.gs1(), isbn.gs1());
        prop_assert_eq!(isbn.registration_group(), isbn.registration_group());
        prop_assert_eq!(isbn.registration_group_info(), isbn.registration_group_info());
        prop_assert_eq!(isbn.check_digit(), isbn.check_digit());
    }

    /// A validated value reproduces its input's digits.
    #[test]
    fn validated_fields_match_input(n in checksummed_bookland()) {
        if let Ok(isbn) = Isbn13::new(n) {
            let digits = isbn.to_string();
            prop_assert_eq!(digits.len(), 13);
            prop_assert_eq!(&digits[..3], isbn.gs1().to_string());
            prop_assert_eq!(&digits[12..], isbn.check_digit().to_string());

            let group = isbn.registration_group_info().unwrap();
            let width = usize::from(group.digits);
            let group_digits: u32 = digits[3..3 + width].parse().unwrap();
            prop_assert_eq!(group_digits, isbn.registration_group());
        }
    }

    /// Anything outside the 13-digit range is a length error.
    #[test]
    fn out_of_range_is_length_error(
        n in prop_oneof![0u64..1_000_000_000_000, 10_000_000_000_000u64..=u64::MAX]
    ) {
        prop_assert_eq!(Isbn13::new(n), Err(ValidationError::InvalidLength));
    }

    /// Changing only the trailing digit breaks the checksum.
    #[test]
    fn wrong_trailing_digit_rejected(n in checksummed_bookland(), delta in 1u64..10) {
        let body = n / 10 * 10;
        let wrong = body + (n % 10 + delta) % 10;
        prop_assert_eq!(Isbn13::new(wrong), Err(ValidationError::InvalidCheckDigit));
    }
}

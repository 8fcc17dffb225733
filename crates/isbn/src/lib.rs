//! # isbn — Validated ISBN-13 Numbers
//!
//! Validates and decodes 13-digit International Standard Book Numbers
//! (ISO 2108) held as plain `u64` values. An [`Isbn13`] can only be built
//! through a validating constructor (or the explicitly unchecked escape
//! hatch) and exposes its GS1 prefix, registration group, and check digit.
//!
//! ## Validation Pipeline
//!
//! [`Isbn13::new`] runs three checks, stopping at the first failure:
//!
//! 1. **Length** — exactly 13 decimal digits.
//! 2. **Check digit** — trailing digit equals [`checksum::check_digit`].
//! 3. **Registration group** — [`group::resolve`] finds the group in the
//!    [`range`] table for the GS1 prefix (978 or 979).
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No I/O. The range tables are `static` data with no runtime setup.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Rejections are logged at `debug` level through `tracing`; the library
//!   never installs a subscriber.

pub mod checksum;
pub mod error;
pub mod group;
pub mod isbn13;
pub mod range;

// Re-export primary types for ergonomic imports.
pub use error::ValidationError;
pub use group::RegistrationGroup;
pub use isbn13::Isbn13;

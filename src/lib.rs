//! Titan-float implements extended-range floating point numbers for workloads,
//! such as incremental and simulation games, that must handle magnitudes far
//! outside the binary64 range while keeping arithmetic close to native speed.
//!
//! ## Numbers
//!
//! Two value types are provided, each a different trade-off between
//! precision, range, and speed:
//!
//! [`BigDouble`] is a normalized pair of a binary64 mantissa in [1, 10) and a
//! signed 64-bit base-10 exponent. It keeps roughly 15 significant decimal
//! digits and reaches 10^±9e15.
//!
//! [`Quad`] is a 128-bit binary float: a 64-bit significand (sign bit,
//! implicit leading 1, 63 fraction bits) and a signed 64-bit binary exponent.
//! It keeps ~63 bits of precision and reaches roughly 2^±(2^63-65).
//!
//! Both types carry the full special-value algebra of binary64: a unique
//! zero, the two infinities, and NaN. Results that leave the representable
//! range saturate to an infinity (overflow) or to zero (underflow); NaN is
//! absorbing for arithmetic. All operations are pure and the types are plain
//! `Copy` data, safe to pass between threads.
//!
//! ## Examples
//!
//! ```rust
//! use titan_float::{BigDouble, Quad};
//!
//! // BigDouble: decimal mantissa/exponent arithmetic
//! let a = BigDouble::from_f64(299.0);
//! let b = BigDouble::from_f64(18.0);
//! let c = a + b;
//! assert_eq!(c.mantissa(), 3.17);
//! assert_eq!(c.exponent(), 2);
//!
//! let huge: BigDouble = "1.23456789e1234".parse().unwrap();
//! assert_eq!(format!("{}", huge), "1.23456789E+1234");
//!
//! // Quad: 128-bit binary arithmetic that survives binary64 overflow
//! let q = Quad::from_f64(1.15).pow(6000.0);
//! assert!(q.is_finite());
//! assert!(q.log10() > 364.0 && q.log10() < 365.0);
//! ```

#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod bigdouble;
mod common;
mod defs;
mod quad;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::bigdouble::BigDouble;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::defs::EXP_LIMIT;
pub use crate::defs::MAX_SIGNIFICANT_DIGITS;
pub use crate::quad::FormatMode;
pub use crate::quad::Quad;

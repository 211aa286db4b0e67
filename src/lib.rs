// ============================================================================
// Fixed-Point Library
// Deterministic, overflow-checked unsigned fixed-point decimal arithmetic
// ============================================================================

//! # fixedpoint
//!
//! Fixed-point decimal arithmetic over unsigned integers scaled by a runtime
//! number of decimal digits, for environments where floating-point is
//! unavailable or unsafe (deterministic ledgers, replicated state machines).
//!
//! ## Design principles
//!
//! - **No floating-point operations** anywhere.
//! - **Fail loudly**: every operation returns a `Result`; overflow,
//!   underflow, division by zero, and scale mismatches are distinguishable
//!   errors, never wrapped or silently rescaled values.
//! - **Immutable values**: every operation produces a new value, re-derived
//!   from its raw scaled representation.
//! - **Non-negative by construction**: there is no sign; subtraction below
//!   zero fails with `Underflow`.
//!
//! ## Example
//!
//! ```rust
//! use fixedpoint::{FixedPoint, FixedPointError};
//!
//! // 2.50 at two decimal digits
//! let balance = FixedPoint::from_raw(250, 2)?;
//! assert_eq!(balance.integer_part(), 2);
//! assert_eq!(balance.fractional_part(), 50);
//!
//! // 1/3 truncated to two digits: 0.33
//! let third = FixedPoint::ratio(1, 3, 2)?;
//! assert_eq!(third.raw_value(), 33);
//!
//! // Scales never mix silently
//! let other = FixedPoint::from_raw(250, 3)?;
//! assert_eq!(balance.checked_add(other), Err(FixedPointError::ScaleMismatch));
//!
//! // Subtraction below zero fails instead of going negative
//! let small = FixedPoint::from_raw(50, 2)?;
//! assert_eq!(small.checked_sub_raw(100), Err(FixedPointError::Underflow));
//! # Ok::<(), FixedPointError>(())
//! ```

mod errors;
mod fixed_point;

pub use errors::{FixedPointError, FixedPointResult};
pub use fixed_point::FixedPoint;

// ============================================================================
// Fixed-Point Decimal
// Overflow-checked unsigned fixed-point arithmetic with runtime precision
// ============================================================================

use crate::errors::{FixedPointError, FixedPointResult};
use std::cmp::Ordering;

/// Compute 10^decimals, failing with `Overflow` when it exceeds u64.
///
/// The scale is recomputed from `decimals` wherever it is needed; values
/// whose scale does not fit in u64 (decimals > 19) are unrepresentable and
/// rejected at construction.
fn checked_pow10(decimals: u8) -> FixedPointResult<u64> {
    let mut scale: u64 = 1;
    for _ in 0..decimals {
        scale = scale.checked_mul(10).ok_or(FixedPointError::Overflow)?;
    }
    Ok(scale)
}

/// Count the decimal digits of `n` by repeated division; `num_digits(0) == 0`.
///
/// Used by `div_rounding` to size the rescale shift of the remainder digit.
fn num_digits(mut n: u64) -> u32 {
    let mut count = 0;
    while n != 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Non-negative fixed-point decimal number with runtime precision.
///
/// Represents `raw / 10^decimals`. The scale is a runtime field rather than
/// a type parameter so that two values with different scales can meet at an
/// API boundary and be rejected with [`FixedPointError::ScaleMismatch`]
/// instead of silently rescaling.
///
/// The integer and fractional parts are split out of `raw` at construction
/// time, so every comparison and predicate is a plain field read. Values are
/// immutable; every operation returns a new value, re-normalized through
/// [`FixedPoint::from_raw`].
///
/// # Value Range
/// `raw` is a u64, so with `decimals = 2` the largest representable value is
/// 184,467,440,737,095,516.15. There is no sign: subtraction below zero
/// fails with [`FixedPointError::Underflow`].
///
/// # Example
/// ```
/// use fixedpoint::FixedPoint;
///
/// let price = FixedPoint::from_raw(250, 2)?; // 2.50
/// assert_eq!(price.integer_part(), 2);
/// assert_eq!(price.fractional_part(), 50);
///
/// let total = price.checked_add_raw(100)?; // 3.50
/// assert_eq!(total.raw_value(), 350);
/// # Ok::<(), fixedpoint::FixedPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    /// The canonical scaled representation (`value × 10^decimals`).
    raw: u64,
    /// Derived: `raw / 10^decimals`.
    integer: u64,
    /// Derived: `raw % 10^decimals`.
    fraction: u64,
    /// Number of fractional digits; fixed for the lifetime of the value.
    decimals: u8,
}

impl FixedPoint {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The zero value at the given scale.
    #[inline]
    pub fn zero(decimals: u8) -> FixedPointResult<Self> {
        Self::from_raw(0, decimals)
    }

    /// The value 1.0 at the given scale (`raw = 10^decimals`).
    #[inline]
    pub fn one(decimals: u8) -> FixedPointResult<Self> {
        let scale = checked_pow10(decimals)?;
        Self::from_raw(scale, decimals)
    }

    /// Create from a raw scaled value. This is the canonical constructor:
    /// every arithmetic result passes through it, so the integer/fraction
    /// split is always recomputed from `raw`, never carried forward stale.
    ///
    /// # Errors
    /// Returns `Overflow` if `10^decimals` does not fit in u64.
    #[inline]
    pub fn from_raw(raw: u64, decimals: u8) -> FixedPointResult<Self> {
        let scale = checked_pow10(decimals)?;
        Ok(Self {
            raw,
            integer: raw / scale,
            fraction: raw % scale,
            decimals,
        })
    }

    /// Build a value whose display fields are NOT derived from `raw`.
    ///
    /// Only `div_rounding` uses this: it keeps the floor quotient as `raw`
    /// while the fraction field carries a single-digit approximation of the
    /// discarded remainder. Calling [`FixedPoint::to_raw`] on such a value
    /// yields `integer * 10^decimals + fraction`, which may disagree with
    /// [`FixedPoint::raw_value`].
    #[inline]
    fn display_only(raw: u64, integer: u64, fraction: u64, decimals: u8) -> Self {
        Self {
            raw,
            integer,
            fraction,
            decimals,
        }
    }

    /// The fixed-point representation of `numerator / denominator`,
    /// truncated to `decimals` fractional digits:
    /// `floor(numerator * 10^decimals / denominator)`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `Overflow` if the scaling multiply exceeds u64
    pub fn ratio(numerator: u64, denominator: u64, decimals: u8) -> FixedPointResult<Self> {
        if denominator == 0 {
            return Err(FixedPointError::DivisionByZero);
        }
        let scale = checked_pow10(decimals)?;
        let scaled = numerator
            .checked_mul(scale)
            .ok_or(FixedPointError::Overflow)?;
        Self::from_raw(scaled / denominator, decimals)
    }

    // ========================================================================
    // Accessors & Conversion
    // ========================================================================

    /// Get the stored raw scaled value.
    #[inline]
    pub const fn raw_value(self) -> u64 {
        self.raw
    }

    /// Get the number of fractional digits defining this value's scale.
    #[inline]
    pub const fn decimals(self) -> u8 {
        self.decimals
    }

    /// Get the integer part (`raw / 10^decimals` at construction).
    #[inline]
    pub const fn integer_part(self) -> u64 {
        self.integer
    }

    /// Get the fractional part (`raw % 10^decimals` at construction).
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        self.fraction
    }

    /// Reconstruct the scaled integer from the display fields:
    /// `integer * 10^decimals + fraction`.
    ///
    /// For normalized values this equals [`FixedPoint::raw_value`]. For the
    /// result of [`FixedPoint::div_rounding`] it reflects the approximated
    /// fraction instead of the stored floor quotient.
    pub fn to_raw(&self) -> FixedPointResult<u64> {
        let scale = checked_pow10(self.decimals)?;
        self.integer
            .checked_mul(scale)
            .and_then(|scaled| scaled.checked_add(self.fraction))
            .ok_or(FixedPointError::Overflow)
    }

    /// Check if the value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Check if the value is purely fractional: integer part zero with a
    /// non-zero fractional part (strictly between 0 and 1).
    #[inline]
    pub const fn is_partial(self) -> bool {
        self.integer == 0 && self.fraction > 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    #[inline]
    fn ensure_same_scale(self, other: Self) -> FixedPointResult<()> {
        if self.decimals != other.decimals {
            Err(FixedPointError::ScaleMismatch)
        } else {
            Ok(())
        }
    }

    /// Checked addition of two values with identical scale.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the scales differ, `Overflow` if the sum
    /// exceeds u64.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> FixedPointResult<Self> {
        self.ensure_same_scale(rhs)?;
        self.checked_add_raw(rhs.raw)
    }

    /// Checked addition of a raw scaled value at this value's scale.
    #[inline]
    pub fn checked_add_raw(self, rhs: u64) -> FixedPointResult<Self> {
        let raw = self
            .raw
            .checked_add(rhs)
            .ok_or(FixedPointError::Overflow)?;
        Self::from_raw(raw, self.decimals)
    }

    /// Checked subtraction of two values with identical scale.
    ///
    /// Underflow is the sole guard against negative values; there is no
    /// signed representation.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the scales differ, `Underflow` if the
    /// result would be negative.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> FixedPointResult<Self> {
        self.ensure_same_scale(rhs)?;
        self.checked_sub_raw(rhs.raw)
    }

    /// Checked subtraction of a raw scaled value at this value's scale.
    #[inline]
    pub fn checked_sub_raw(self, rhs: u64) -> FixedPointResult<Self> {
        let raw = self
            .raw
            .checked_sub(rhs)
            .ok_or(FixedPointError::Underflow)?;
        Self::from_raw(raw, self.decimals)
    }

    /// Checked multiplication by an integer scalar.
    ///
    /// Multiplying by another `FixedPoint` is deliberately not provided at
    /// this layer: multiplying two raw values would double the scale.
    ///
    /// # Errors
    /// Returns `Overflow` if the product exceeds u64.
    #[inline]
    pub fn checked_mul(self, rhs: u64) -> FixedPointResult<Self> {
        let raw = self
            .raw
            .checked_mul(rhs)
            .ok_or(FixedPointError::Overflow)?;
        Self::from_raw(raw, self.decimals)
    }

    /// Checked floor division by an integer scalar; the remainder is
    /// discarded. See [`FixedPoint::div_rounding`] for the remainder-aware
    /// variant.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: u64) -> FixedPointResult<Self> {
        if rhs == 0 {
            return Err(FixedPointError::DivisionByZero);
        }
        Self::from_raw(self.raw / rhs, self.decimals)
    }

    /// Floor division by an integer scalar, approximating the discarded
    /// remainder in the result's fraction field.
    ///
    /// When the remainder is non-zero, one extra decimal digit of it is
    /// computed (`remainder * 10 / rhs`) and rescaled into the `decimals`
    /// width: left-padded with zeros when its digit count is below
    /// `decimals`, truncated when above, used unscaled when equal. The
    /// result is built without re-normalizing: its `raw_value` stays the
    /// floor quotient while `fractional_part` carries the approximation, so
    /// `to_raw` on the result may disagree with `raw_value`.
    ///
    /// This captures only the first significant decimal digit of the
    /// remainder. It is a coarse approximation, not a correctly-rounded
    /// quotient.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div_rounding(self, rhs: u64) -> FixedPointResult<Self> {
        if rhs == 0 {
            return Err(FixedPointError::DivisionByZero);
        }
        let quotient = Self::from_raw(self.raw / rhs, self.decimals)?;
        let remainder = self.raw % rhs;
        if remainder == 0 {
            return Ok(quotient);
        }

        // One extra decimal digit of the remainder; always < 10.
        let digit = remainder
            .checked_mul(10)
            .ok_or(FixedPointError::Overflow)?
            / rhs;
        let digits = num_digits(digit);
        let target = u32::from(self.decimals);

        let fraction = match digits.cmp(&target) {
            Ordering::Equal => digit,
            Ordering::Less => {
                let shift = checked_pow10((target - digits) as u8)?;
                digit.checked_mul(shift).ok_or(FixedPointError::Overflow)?
            },
            Ordering::Greater => {
                let shift = checked_pow10((digits - target) as u8)?;
                digit / shift
            },
        };

        Ok(Self::display_only(
            quotient.raw,
            quotient.integer,
            fraction,
            self.decimals,
        ))
    }

    /// Checked fixed-point exponentiation.
    ///
    /// The accumulator starts at 1.0 and is multiplied by `raw` then
    /// re-divided by `10^decimals` on every step, so the result keeps this
    /// value's scale for any exponent. Each step truncates toward zero.
    /// `exponent == 0` returns [`FixedPoint::one`] at this value's scale.
    ///
    /// # Errors
    /// Returns `Overflow` if an intermediate product exceeds u64.
    pub fn checked_pow(self, exponent: u32) -> FixedPointResult<Self> {
        let scale = checked_pow10(self.decimals)?;
        let mut acc = scale;
        for _ in 0..exponent {
            acc = acc.checked_mul(self.raw).ok_or(FixedPointError::Overflow)? / scale;
        }
        Self::from_raw(acc, self.decimals)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison of two values with identical scale, on raw
    /// values.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the scales differ.
    #[inline]
    pub fn cmp_checked(&self, other: &Self) -> FixedPointResult<Ordering> {
        self.ensure_same_scale(*other)?;
        Ok(self.raw.cmp(&other.raw))
    }

    /// Same-scale equality. Fails with `ScaleMismatch` on differing scales.
    #[inline]
    pub fn equals(&self, other: &Self) -> FixedPointResult<bool> {
        Ok(self.cmp_checked(other)? == Ordering::Equal)
    }

    /// Same-scale strict greater-than.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> FixedPointResult<bool> {
        Ok(self.cmp_checked(other)? == Ordering::Greater)
    }

    /// Same-scale strict less-than.
    #[inline]
    pub fn less_than(&self, other: &Self) -> FixedPointResult<bool> {
        Ok(self.cmp_checked(other)? == Ordering::Less)
    }

    /// Same-scale greater-than-or-equal.
    #[inline]
    pub fn greater_than_or_equal(&self, other: &Self) -> FixedPointResult<bool> {
        Ok(self.cmp_checked(other)? != Ordering::Less)
    }

    /// Same-scale less-than-or-equal.
    #[inline]
    pub fn less_than_or_equal(&self, other: &Self) -> FixedPointResult<bool> {
        Ok(self.cmp_checked(other)? != Ordering::Greater)
    }

    /// Three-way comparison on the display decomposition: integer parts
    /// first, fractional parts only on a tie. Accepts differing scales.
    ///
    /// This is lexicographic, not numeric: fraction 5 at 1 decimal (0.5)
    /// compares equal to fraction 5 at 2 decimals (0.05). The coarseness is
    /// intentional and kept; use [`FixedPoint::cmp_rescaled`] for a
    /// numerically correct cross-scale comparison.
    #[inline]
    pub fn cmp_display(&self, other: &Self) -> Ordering {
        self.integer
            .cmp(&other.integer)
            .then_with(|| self.fraction.cmp(&other.fraction))
    }

    /// Cross-scale display equality (coarse, see [`FixedPoint::cmp_display`]).
    #[inline]
    pub fn eq_display(&self, other: &Self) -> bool {
        self.cmp_display(other) == Ordering::Equal
    }

    /// Cross-scale display greater-than.
    #[inline]
    pub fn gt_display(&self, other: &Self) -> bool {
        self.cmp_display(other) == Ordering::Greater
    }

    /// Cross-scale display less-than.
    #[inline]
    pub fn lt_display(&self, other: &Self) -> bool {
        self.cmp_display(other) == Ordering::Less
    }

    /// Cross-scale display greater-than-or-equal.
    #[inline]
    pub fn ge_display(&self, other: &Self) -> bool {
        self.cmp_display(other) != Ordering::Less
    }

    /// Cross-scale display less-than-or-equal.
    #[inline]
    pub fn le_display(&self, other: &Self) -> bool {
        self.cmp_display(other) != Ordering::Greater
    }

    /// Numerically correct cross-scale comparison: both raw values are
    /// rescaled to the wider scale with checked multiplication, then
    /// compared.
    ///
    /// # Errors
    /// Returns `Overflow` if rescaling the narrower value exceeds u64.
    pub fn cmp_rescaled(&self, other: &Self) -> FixedPointResult<Ordering> {
        let (lhs, rhs) = if self.decimals >= other.decimals {
            let shift = checked_pow10(self.decimals - other.decimals)?;
            let widened = other
                .raw
                .checked_mul(shift)
                .ok_or(FixedPointError::Overflow)?;
            (self.raw, widened)
        } else {
            let shift = checked_pow10(other.decimals - self.decimals)?;
            let widened = self
                .raw
                .checked_mul(shift)
                .ok_or(FixedPointError::Overflow)?;
            (widened, other.raw)
        };
        Ok(lhs.cmp(&rhs))
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl FixedPoint {
    /// Convert from `rust_decimal::Decimal` at the given target scale.
    ///
    /// Intended for API boundaries. Excess fractional digits are truncated,
    /// matching the truncation stance of [`FixedPoint::ratio`].
    ///
    /// # Errors
    /// - `Underflow` if the decimal is negative (not representable)
    /// - `Overflow` if the scaled value exceeds u64
    pub fn from_decimal(d: rust_decimal::Decimal, decimals: u8) -> FixedPointResult<Self> {
        let mantissa = d.mantissa();
        if mantissa < 0 {
            return Err(FixedPointError::Underflow);
        }
        let source = d.scale();
        let target = u32::from(decimals);

        let raw = if target >= source {
            let shift = 10i128
                .checked_pow(target - source)
                .ok_or(FixedPointError::Overflow)?;
            mantissa
                .checked_mul(shift)
                .ok_or(FixedPointError::Overflow)?
        } else {
            // rust_decimal scales are at most 28, so 10^(source - target)
            // always fits in i128. Truncates.
            mantissa / 10i128.pow(source - target)
        };

        let raw = u64::try_from(raw).map_err(|_| FixedPointError::Overflow)?;
        Self::from_raw(raw, decimals)
    }

    /// Convert to `rust_decimal::Decimal` from the stored raw value.
    ///
    /// Intended for display and debugging at API boundaries.
    pub fn to_decimal(&self) -> rust_decimal::Decimal {
        let mut d = rust_decimal::Decimal::from(self.raw);
        // decimals <= 19 is guaranteed by construction, well below the
        // rust_decimal limit of 28.
        d.set_scale(u32::from(self.decimals)).expect("valid scale");
        d
    }
}

// ============================================================================
// Serde (canonical raw + decimals pair)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::FixedPoint;
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes as the canonical `{ raw, decimals }` pair. The derived
    /// display fields are omitted; deserialization re-normalizes through
    /// `from_raw`, so invariant-violating values can never be decoded and
    /// display-only values round-trip to their normalized form.
    impl Serialize for FixedPoint {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("FixedPoint", 2)?;
            state.serialize_field("raw", &self.raw_value())?;
            state.serialize_field("decimals", &self.decimals())?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct FixedPointRepr {
        raw: u64,
        decimals: u8,
    }

    impl<'de> Deserialize<'de> for FixedPoint {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = FixedPointRepr::deserialize(deserializer)?;
            FixedPoint::from_raw(repr.raw, repr.decimals).map_err(D::Error::custom)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

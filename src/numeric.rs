//! Numeric validators and arbitrary-precision types
//!
//! This module provides the range validators for the bounded integer
//! types, exact big-integer range checks for long/unsignedLong, and the
//! `BigDec` arbitrary-precision decimal used by decimal, float and
//! double. Float and double range checks are performed against exact
//! arbitrary-precision boundary constants so that extreme magnitudes are
//! never run through native-float rounding.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result, ValidationError};

fn out_of_range(message: &str, value: impl fmt::Display) -> Error {
    Error::OutOfRange(
        ValidationError::new(message).with_reason(format!("Actual value: {}", value)),
    )
}

// =============================================================================
// Native-Width Integer Validators
// =============================================================================

/// Inclusive range check for native-width integers
pub fn in_range(value: i64, min: i64, max: i64) -> bool {
    (min..=max).contains(&value)
}

/// Validate a byte value (-128 to 127)
pub fn byte_validator(value: i64) -> Result<()> {
    if !in_range(value, -128, 127) {
        return Err(out_of_range("value must be -128 <= x <= 127", value));
    }
    Ok(())
}

/// Validate a short value (-32768 to 32767)
pub fn short_validator(value: i64) -> Result<()> {
    if !in_range(value, -32768, 32767) {
        return Err(out_of_range("value must be -32768 <= x <= 32767", value));
    }
    Ok(())
}

/// Validate an int value (-2^31 to 2^31-1)
pub fn int_validator(value: i64) -> Result<()> {
    if !in_range(value, -2147483648, 2147483647) {
        return Err(out_of_range(
            "value must be -2147483648 <= x <= 2147483647",
            value,
        ));
    }
    Ok(())
}

/// Validate an unsigned byte value (0 to 255)
pub fn unsigned_byte_validator(value: i64) -> Result<()> {
    if !in_range(value, 0, 255) {
        return Err(out_of_range("value must be 0 <= x <= 255", value));
    }
    Ok(())
}

/// Validate an unsigned short value (0 to 65535)
pub fn unsigned_short_validator(value: i64) -> Result<()> {
    if !in_range(value, 0, 65535) {
        return Err(out_of_range("value must be 0 <= x <= 65535", value));
    }
    Ok(())
}

/// Validate an unsigned int value (0 to 2^32-1)
pub fn unsigned_int_validator(value: i64) -> Result<()> {
    if !in_range(value, 0, 4294967295) {
        return Err(out_of_range("value must be 0 <= x <= 4294967295", value));
    }
    Ok(())
}

// =============================================================================
// Big-Integer Range Validators
// =============================================================================

lazy_static::lazy_static! {
    static ref LONG_MIN: BigInt = BigInt::from(i64::MIN);
    static ref LONG_MAX: BigInt = BigInt::from(i64::MAX);
    static ref ULONG_MAX: BigInt = BigInt::from(u64::MAX);
}

/// Validate a long value (-2^63 to 2^63-1), exact comparison
pub fn long_validator(value: &BigInt) -> Result<()> {
    if value < &LONG_MIN || value > &LONG_MAX {
        return Err(out_of_range(
            "value must be -9223372036854775808 <= x <= 9223372036854775807",
            value,
        ));
    }
    Ok(())
}

/// Validate an unsigned long value (0 to 2^64-1), exact comparison
pub fn unsigned_long_validator(value: &BigInt) -> Result<()> {
    if value.is_negative() || value > &ULONG_MAX {
        return Err(out_of_range(
            "value must be 0 <= x <= 18446744073709551615",
            value,
        ));
    }
    Ok(())
}

// =============================================================================
// Integer Sign Validators
// =============================================================================

/// Validate a positive integer value (> 0)
pub fn positive_int_validator(value: &BigInt) -> Result<()> {
    if !value.is_positive() {
        return Err(out_of_range("value must be positive", value));
    }
    Ok(())
}

/// Validate a non-negative integer value (>= 0)
pub fn non_negative_int_validator(value: &BigInt) -> Result<()> {
    if value.is_negative() {
        return Err(out_of_range("value must be non-negative", value));
    }
    Ok(())
}

/// Validate a negative integer value (< 0)
pub fn negative_int_validator(value: &BigInt) -> Result<()> {
    if !value.is_negative() {
        return Err(out_of_range("value must be negative", value));
    }
    Ok(())
}

/// Validate a non-positive integer value (<= 0)
pub fn non_positive_int_validator(value: &BigInt) -> Result<()> {
    if value.is_positive() {
        return Err(out_of_range("value must be non-positive", value));
    }
    Ok(())
}

/// Parse base-10 integer text into a big integer
pub fn integer_from_text(value: &str) -> Result<BigInt> {
    value.trim().parse::<BigInt>().map_err(|_| {
        Error::Coercion(format!("'{}' is not a valid integer value", value))
    })
}

// =============================================================================
// Arbitrary-Precision Decimal
// =============================================================================

/// Exact base-10 floating value: `sig * 10^-scale`, or one of the
/// special states NaN / INF / -INF.
///
/// Finite values are kept normalized (no trailing zero digits in the
/// significand while the scale is nonzero), so derived equality is
/// value equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigDec {
    /// Exact finite value `sig * 10^-scale`
    Finite {
        /// Signed significand
        sig: BigInt,
        /// Negative power of ten applied to the significand
        scale: u32,
    },
    /// Not-a-number
    Nan,
    /// Positive infinity
    Inf,
    /// Negative infinity
    NegInf,
}

impl BigDec {
    /// Create a normalized finite value `sig * 10^-scale`
    pub fn finite(mut sig: BigInt, mut scale: u32) -> Self {
        let ten = BigInt::from(10);
        while scale > 0 && !sig.is_zero() && (&sig % &ten).is_zero() {
            sig /= &ten;
            scale -= 1;
        }
        if sig.is_zero() {
            scale = 0;
        }
        BigDec::Finite { sig, scale }
    }

    /// Exact power of two, `2^exp`
    pub fn pow2(exp: i32) -> Self {
        if exp >= 0 {
            BigDec::finite(BigInt::one() << exp as usize, 0)
        } else {
            // 2^-n == 5^n * 10^-n, which is exact in base 10
            let n = (-exp) as u32;
            BigDec::finite(BigInt::from(5).pow(n), n)
        }
    }

    /// True for NaN and the infinities
    pub fn is_special(&self) -> bool {
        !matches!(self, BigDec::Finite { .. })
    }

    /// True for NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, BigDec::Nan)
    }

    /// True for exact zero
    pub fn is_zero(&self) -> bool {
        matches!(self, BigDec::Finite { sig, .. } if sig.is_zero())
    }

    /// Exact conversion from a native double. The mantissa-times-power-
    /// of-two decomposition is expanded in full, so subnormals and
    /// extreme magnitudes convert without rounding.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return BigDec::Nan;
        }
        if value == f64::INFINITY {
            return BigDec::Inf;
        }
        if value == f64::NEG_INFINITY {
            return BigDec::NegInf;
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let exp_bits = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & 0x000f_ffff_ffff_ffff;

        let (mantissa, exp) = if exp_bits == 0 {
            (frac, -1074i64)
        } else {
            (frac | (1 << 52), exp_bits - 1075)
        };

        let mut sig = BigInt::from(mantissa);
        let scale;
        if exp >= 0 {
            sig <<= exp as usize;
            scale = 0;
        } else {
            // mant * 2^-n == mant * 5^n * 10^-n
            let n = (-exp) as u32;
            sig *= BigInt::from(5).pow(n);
            scale = n;
        }
        if negative {
            sig = -sig;
        }
        BigDec::finite(sig, scale)
    }

    /// Parse decimal text: optional sign, digits with an optional
    /// fraction, and an optional exponent (float/double lexical space).
    /// The special tokens NaN, INF and -INF are recognized.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        match trimmed {
            "NaN" => return Ok(BigDec::Nan),
            "INF" => return Ok(BigDec::Inf),
            "-INF" => return Ok(BigDec::NegInf),
            _ => {}
        }

        let invalid =
            || Error::Coercion(format!("'{}' is not a valid decimal value", value));

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (number, exponent) = match rest.split_once(['e', 'E']) {
            Some((number, exp)) => {
                let exp: i64 = exp.parse().map_err(|_| invalid())?;
                (number, exp)
            }
            None => (rest, 0),
        };

        let (int_part, frac_part) = match number.split_once('.') {
            Some((i, f)) => (i, f),
            None => (number, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let digits = format!("{}{}", int_part, frac_part);
        let mut sig: BigInt = if digits.is_empty() {
            BigInt::zero()
        } else {
            digits.parse().map_err(|_| invalid())?
        };
        if negative {
            sig = -sig;
        }

        let scale = frac_part.len() as i64 - exponent;
        if scale <= 0 {
            sig *= BigInt::from(10).pow((-scale) as u32);
            Ok(BigDec::finite(sig, 0))
        } else {
            let scale = u32::try_from(scale).map_err(|_| invalid())?;
            Ok(BigDec::finite(sig, scale))
        }
    }

    /// Compare magnitudes of two finite values exactly, by aligning the
    /// scales with integer arithmetic. Specials compare as `None`.
    pub fn cmp_abs(&self, other: &BigDec) -> Option<Ordering> {
        match (self, other) {
            (
                BigDec::Finite { sig: a, scale: ka },
                BigDec::Finite { sig: b, scale: kb },
            ) => {
                let lhs = a.abs() * BigInt::from(10).pow(*kb);
                let rhs = b.abs() * BigInt::from(10).pow(*ka);
                Some(lhs.cmp(&rhs))
            }
            _ => None,
        }
    }
}

impl From<i64> for BigDec {
    fn from(value: i64) -> Self {
        BigDec::finite(BigInt::from(value), 0)
    }
}

impl fmt::Display for BigDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigDec::Nan => write!(f, "NaN"),
            BigDec::Inf => write!(f, "INF"),
            BigDec::NegInf => write!(f, "-INF"),
            BigDec::Finite { sig, scale } => {
                if *scale == 0 {
                    return write!(f, "{}", sig);
                }
                let sign = if sig.is_negative() { "-" } else { "" };
                let mut digits = sig.abs().to_string();
                let scale = *scale as usize;
                if digits.len() <= scale {
                    digits = format!("{}{}", "0".repeat(scale - digits.len() + 1), digits);
                }
                let point = digits.len() - scale;
                write!(f, "{}{}.{}", sign, &digits[..point], &digits[point..])
            }
        }
    }
}

// =============================================================================
// Float/Double Range Validators
// =============================================================================

lazy_static::lazy_static! {
    // IEEE-754 single precision: largest finite and smallest subnormal
    // magnitudes, expressed exactly as 2^24 * 2^104 and 2^24 * 2^-149.
    static ref FLOAT_MAX: BigDec = BigDec::pow2(24 + 104);
    static ref FLOAT_MIN: BigDec = BigDec::pow2(24 - 149);

    // IEEE-754 double precision: 2^53 * 2^970 and 2^53 * 2^-1075.
    static ref DOUBLE_MAX: BigDec = BigDec::pow2(53 + 970);
    static ref DOUBLE_MIN: BigDec = BigDec::pow2(53 - 1075);
}

/// Validate a float value: NaN and the infinities are always valid;
/// exact zero is always valid; otherwise the magnitude must satisfy
/// min <= |x| <= max with INCLUSIVE bounds.
///
/// The inclusive policy here versus the exclusive policy for double is
/// inherited from the source rules and kept as-is; the intended behavior
/// is an open question, so neither side is "fixed" to match the other.
pub fn float_range_validator(value: &BigDec) -> Result<()> {
    if value.is_special() || value.is_zero() {
        return Ok(());
    }
    let above = value.cmp_abs(&FLOAT_MIN) != Some(Ordering::Less);
    let below = value.cmp_abs(&FLOAT_MAX) != Some(Ordering::Greater);
    if above && below {
        Ok(())
    } else {
        Err(out_of_range(
            "value magnitude outside the xs:float range",
            value,
        ))
    }
}

/// Validate a double value: NaN and the infinities are always valid;
/// exact zero is always valid; otherwise the magnitude must satisfy
/// min < |x| < max with EXCLUSIVE bounds (see `float_range_validator`).
pub fn double_range_validator(value: &BigDec) -> Result<()> {
    if value.is_special() || value.is_zero() {
        return Ok(());
    }
    let above = value.cmp_abs(&DOUBLE_MIN) == Some(Ordering::Greater);
    let below = value.cmp_abs(&DOUBLE_MAX) == Some(Ordering::Less);
    if above && below {
        Ok(())
    } else {
        Err(out_of_range(
            "value magnitude outside the xs:double range",
            value,
        ))
    }
}

/// Validate a decimal value: the special states are rejected
pub fn decimal_validator(value: &BigDec) -> Result<()> {
    if value.is_special() {
        return Err(Error::Validation(ValidationError::new(
            "xs:decimal cannot be NaN or infinite",
        )));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

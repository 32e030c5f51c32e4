//! Value representations
//!
//! This module defines the canonical in-memory representation for the
//! atomic type catalog (`Value`), the tagged union of host-native source
//! shapes that coercion rules dispatch on (`Source`), and the structured
//! date/time and duration host values those shapes carry.

use std::fmt;
use std::io::Read;

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use num_bigint::BigInt;
use url::Url;

use crate::numeric::BigDec;

// =============================================================================
// Canonical Value Representation
// =============================================================================

/// Canonical in-memory representation of an atomic value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text value (string, boolean lexical forms and all pattern types)
    Text(String),
    /// Boolean value
    Boolean(bool),
    /// Native-width bounded integer (byte through unsignedInt)
    Int(i64),
    /// Arbitrary-precision integer (integer, long, unsignedLong and the
    /// sign-restricted integer types)
    BigInt(BigInt),
    /// Arbitrary-precision decimal (decimal, float, double)
    Decimal(BigDec),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Int(i) => write!(f, "{}", i),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl Value {
    /// The text content, if this is a text representation
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

// =============================================================================
// Structured Date/Time Source Value
// =============================================================================

/// Timezone descriptor attached to a structured date/time value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// No associated UTC offset (local/unspecified zone)
    Floating,
    /// UTC, rendered as the literal `Z` suffix
    Utc,
    /// Fixed offset from UTC, rendered as `±HH:MM`
    Offset(FixedOffset),
}

/// Structured date/time host value: calendar date, time-of-day down to
/// nanosecond resolution, and a timezone descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Calendar date
    pub date: NaiveDate,
    /// Time of day (sub-second resolution carried in the nanosecond field)
    pub time: NaiveTime,
    /// Timezone descriptor
    pub zone: Zone,
}

impl Timestamp {
    /// Create a timestamp from date, time and zone
    pub fn new(date: NaiveDate, time: NaiveTime, zone: Zone) -> Self {
        Self { date, time, zone }
    }
}

// =============================================================================
// Structured Duration Source Value
// =============================================================================

/// Structured duration host value: a sign flag plus six non-negative
/// component magnitudes. Years/months/days are calendar units; hours,
/// minutes and seconds (with a nanosecond remainder) are exact-time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationValue {
    /// Sign flag; the component magnitudes are always non-negative
    pub negative: bool,
    /// Calendar years
    pub years: u32,
    /// Calendar months
    pub months: u32,
    /// Calendar days
    pub days: u32,
    /// Hours
    pub hours: u32,
    /// Minutes
    pub minutes: u32,
    /// Whole seconds
    pub seconds: u64,
    /// Nanosecond remainder of the seconds component
    pub nanos: u32,
}

// =============================================================================
// Coercion Source Shapes
// =============================================================================

/// Tagged union of host-native source shapes recognized by coercion rules.
///
/// Each type's coercion rule matches the shapes registered for it and
/// signals not-applicable for everything else; no runtime type inspection
/// is involved.
pub enum Source<'a> {
    /// Native boolean
    Bool(bool),
    /// Native signed integer
    Int(i64),
    /// Native unsigned integer
    UInt(u64),
    /// Native floating-point value
    Float(f64),
    /// Text in (claimed) lexical form
    Text(&'a str),
    /// Ordered integer pair (gYearMonth, gMonthDay)
    Pair(i64, i64),
    /// Structured date/time value
    Timestamp(Timestamp),
    /// Structured duration value
    Duration(DurationValue),
    /// Open readable binary stream; drained to exhaustion, never closed
    Reader(&'a mut dyn Read),
    /// Structured URI value
    Uri(&'a Url),
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Bool(b) => write!(f, "Bool({})", b),
            Source::Int(i) => write!(f, "Int({})", i),
            Source::UInt(u) => write!(f, "UInt({})", u),
            Source::Float(v) => write!(f, "Float({})", v),
            Source::Text(s) => write!(f, "Text({:?})", s),
            Source::Pair(a, b) => write!(f, "Pair({}, {})", a, b),
            Source::Timestamp(t) => write!(f, "Timestamp({:?})", t),
            Source::Duration(d) => write!(f, "Duration({:?})", d),
            Source::Reader(_) => write!(f, "Reader(..)"),
            Source::Uri(u) => write!(f, "Uri({})", u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Int(-42).to_string(), "-42");
        assert_eq!(
            Value::BigInt(BigInt::from(18446744073709551615u64)).to_string(),
            "18446744073709551615"
        );
    }

    #[test]
    fn test_value_as_text() {
        assert_eq!(Value::Text("x".to_string()).as_text(), Some("x"));
        assert_eq!(Value::Int(1).as_text(), None);
    }
}

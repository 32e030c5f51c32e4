//! The atomic type catalog
//!
//! This module defines the fixed catalog of XSD atomic types: for each
//! type a canonical representation kind, a validation predicate, and the
//! coercion rules from host-native source shapes. The catalog is built
//! once at first use and never mutated, so the validation path takes no
//! locks.

use std::collections::HashMap;

use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::coercions::{binary, duration, temporal, uri};
use crate::error::{Error, Result, ValidationError};
use crate::numeric::{self, BigDec};
use crate::patterns;
use crate::values::{Source, Value};

// =============================================================================
// Type Name Constants
// =============================================================================

/// XSD namespace shared by every catalog type
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XSD string type name
pub const XS_STRING: &str = "string";
/// XSD boolean type name
pub const XS_BOOLEAN: &str = "boolean";

/// XSD decimal type name
pub const XS_DECIMAL: &str = "decimal";
/// XSD integer type name
pub const XS_INTEGER: &str = "integer";
/// XSD long type name
pub const XS_LONG: &str = "long";
/// XSD int type name
pub const XS_INT: &str = "int";
/// XSD short type name
pub const XS_SHORT: &str = "short";
/// XSD byte type name
pub const XS_BYTE: &str = "byte";
/// XSD nonNegativeInteger type name
pub const XS_NON_NEGATIVE_INTEGER: &str = "nonNegativeInteger";
/// XSD positiveInteger type name
pub const XS_POSITIVE_INTEGER: &str = "positiveInteger";
/// XSD unsignedLong type name
pub const XS_UNSIGNED_LONG: &str = "unsignedLong";
/// XSD unsignedInt type name
pub const XS_UNSIGNED_INT: &str = "unsignedInt";
/// XSD unsignedShort type name
pub const XS_UNSIGNED_SHORT: &str = "unsignedShort";
/// XSD unsignedByte type name
pub const XS_UNSIGNED_BYTE: &str = "unsignedByte";
/// XSD nonPositiveInteger type name
pub const XS_NON_POSITIVE_INTEGER: &str = "nonPositiveInteger";
/// XSD negativeInteger type name
pub const XS_NEGATIVE_INTEGER: &str = "negativeInteger";

/// XSD float type name
pub const XS_FLOAT: &str = "float";
/// XSD double type name
pub const XS_DOUBLE: &str = "double";

/// XSD duration type name
pub const XS_DURATION: &str = "duration";
/// XSD dateTime type name
pub const XS_DATETIME: &str = "dateTime";
/// XSD time type name
pub const XS_TIME: &str = "time";
/// XSD date type name
pub const XS_DATE: &str = "date";
/// XSD gYearMonth type name
pub const XS_GYEAR_MONTH: &str = "gYearMonth";
/// XSD gYear type name
pub const XS_GYEAR: &str = "gYear";
/// XSD gMonthDay type name
pub const XS_GMONTH_DAY: &str = "gMonthDay";
/// XSD gDay type name
pub const XS_GDAY: &str = "gDay";
/// XSD gMonth type name
pub const XS_GMONTH: &str = "gMonth";

/// XSD base64Binary type name
pub const XS_BASE64_BINARY: &str = "base64Binary";
/// XSD anyURI type name
pub const XS_ANY_URI: &str = "anyURI";

// =============================================================================
// Type Descriptor
// =============================================================================

/// Canonical representation kind of a catalog type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationKind {
    /// Text (string and all pattern-validated types)
    Text,
    /// Boolean
    Boolean,
    /// Native-width bounded integer
    NativeInt,
    /// Arbitrary-precision integer
    BigInteger,
    /// Arbitrary-precision decimal
    Decimal,
}

/// Descriptor of one catalog type: name, representation kind, validation
/// predicate and coercion rules. Immutable; constructed once at startup.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Type name (local name without namespace)
    pub name: &'static str,
    /// Representation kind
    pub kind: RepresentationKind,
    /// Validation predicate
    validator: fn(&Value) -> Result<()>,
    /// Coercion dispatch over source shapes
    coercer: fn(Source) -> Result<Value>,
}

impl TypeDescriptor {
    /// Validate a canonical representation against this type
    pub fn validate(&self, value: &Value) -> Result<()> {
        (self.validator)(value)
    }

    /// Coerce a host-native source value into this type's canonical
    /// representation. A coerced value is always re-validated before it
    /// is returned; the engine never hands out a representation that
    /// fails its own type's predicate.
    pub fn coerce(&self, source: Source) -> Result<Value> {
        let value = (self.coercer)(source)?;
        self.validate(&value)?;
        Ok(value)
    }
}

// =============================================================================
// Validator Functions
// =============================================================================

fn wrong_kind(type_name: &'static str, expected: &str) -> Error {
    Error::Validation(
        ValidationError::new(format!("representation is not {}", expected)).with_type(type_name),
    )
}

fn validate_string(value: &Value) -> Result<()> {
    match value {
        Value::Text(_) => Ok(()),
        _ => Err(wrong_kind(XS_STRING, "text")),
    }
}

fn validate_boolean(value: &Value) -> Result<()> {
    match value {
        Value::Boolean(_) => Ok(()),
        _ => Err(wrong_kind(XS_BOOLEAN, "a boolean")),
    }
}

fn native_int(value: &Value, type_name: &'static str) -> Result<i64> {
    match value {
        Value::Int(i) => Ok(*i),
        _ => Err(wrong_kind(type_name, "a native integer")),
    }
}

fn validate_byte(value: &Value) -> Result<()> {
    numeric::byte_validator(native_int(value, XS_BYTE)?)
}

fn validate_short(value: &Value) -> Result<()> {
    numeric::short_validator(native_int(value, XS_SHORT)?)
}

fn validate_int(value: &Value) -> Result<()> {
    numeric::int_validator(native_int(value, XS_INT)?)
}

fn validate_unsigned_byte(value: &Value) -> Result<()> {
    numeric::unsigned_byte_validator(native_int(value, XS_UNSIGNED_BYTE)?)
}

fn validate_unsigned_short(value: &Value) -> Result<()> {
    numeric::unsigned_short_validator(native_int(value, XS_UNSIGNED_SHORT)?)
}

fn validate_unsigned_int(value: &Value) -> Result<()> {
    numeric::unsigned_int_validator(native_int(value, XS_UNSIGNED_INT)?)
}

fn big_integer<'a>(value: &'a Value, type_name: &'static str) -> Result<&'a BigInt> {
    match value {
        Value::BigInt(n) => Ok(n),
        _ => Err(wrong_kind(type_name, "an arbitrary-precision integer")),
    }
}

fn validate_integer(value: &Value) -> Result<()> {
    big_integer(value, XS_INTEGER).map(|_| ())
}

fn validate_long(value: &Value) -> Result<()> {
    numeric::long_validator(big_integer(value, XS_LONG)?)
}

fn validate_unsigned_long(value: &Value) -> Result<()> {
    numeric::unsigned_long_validator(big_integer(value, XS_UNSIGNED_LONG)?)
}

fn validate_positive_integer(value: &Value) -> Result<()> {
    numeric::positive_int_validator(big_integer(value, XS_POSITIVE_INTEGER)?)
}

fn validate_non_negative_integer(value: &Value) -> Result<()> {
    numeric::non_negative_int_validator(big_integer(value, XS_NON_NEGATIVE_INTEGER)?)
}

fn validate_negative_integer(value: &Value) -> Result<()> {
    numeric::negative_int_validator(big_integer(value, XS_NEGATIVE_INTEGER)?)
}

fn validate_non_positive_integer(value: &Value) -> Result<()> {
    numeric::non_positive_int_validator(big_integer(value, XS_NON_POSITIVE_INTEGER)?)
}

fn decimal<'a>(value: &'a Value, type_name: &'static str) -> Result<&'a BigDec> {
    match value {
        Value::Decimal(d) => Ok(d),
        _ => Err(wrong_kind(type_name, "an arbitrary-precision decimal")),
    }
}

fn validate_decimal(value: &Value) -> Result<()> {
    numeric::decimal_validator(decimal(value, XS_DECIMAL)?)
}

fn validate_float(value: &Value) -> Result<()> {
    numeric::float_range_validator(decimal(value, XS_FLOAT)?)
}

fn validate_double(value: &Value) -> Result<()> {
    numeric::double_range_validator(decimal(value, XS_DOUBLE)?)
}

fn text<'a>(value: &'a Value, type_name: &'static str) -> Result<&'a str> {
    value.as_text().ok_or_else(|| wrong_kind(type_name, "text"))
}

fn validate_duration(value: &Value) -> Result<()> {
    patterns::duration_lexical(text(value, XS_DURATION)?)
}

fn validate_datetime(value: &Value) -> Result<()> {
    patterns::datetime_lexical(text(value, XS_DATETIME)?)
}

fn validate_time(value: &Value) -> Result<()> {
    patterns::time_lexical(text(value, XS_TIME)?)
}

fn validate_date(value: &Value) -> Result<()> {
    patterns::date_lexical(text(value, XS_DATE)?)
}

fn validate_gyear_month(value: &Value) -> Result<()> {
    patterns::gyear_month_lexical(text(value, XS_GYEAR_MONTH)?)
}

fn validate_gyear(value: &Value) -> Result<()> {
    patterns::gyear_lexical(text(value, XS_GYEAR)?)
}

fn validate_gmonth_day(value: &Value) -> Result<()> {
    patterns::gmonth_day_lexical(text(value, XS_GMONTH_DAY)?)
}

fn validate_gday(value: &Value) -> Result<()> {
    patterns::gday_lexical(text(value, XS_GDAY)?)
}

fn validate_gmonth(value: &Value) -> Result<()> {
    patterns::gmonth_lexical(text(value, XS_GMONTH)?)
}

fn validate_base64_binary(value: &Value) -> Result<()> {
    patterns::base64_lexical(text(value, XS_BASE64_BINARY)?)
}

fn validate_any_uri(value: &Value) -> Result<()> {
    patterns::any_uri_lexical(text(value, XS_ANY_URI)?)
}

// =============================================================================
// Coercion Functions
// =============================================================================

lazy_static::lazy_static! {
    /// XSD boolean lexical value mapping
    static ref BOOLEAN_MAP: HashMap<&'static str, bool> = {
        let mut m = HashMap::new();
        m.insert("false", false);
        m.insert("0", false);
        m.insert("true", true);
        m.insert("1", true);
        m
    };
}

fn coerce_string(source: Source) -> Result<Value> {
    match source {
        Source::Text(s) => Ok(Value::Text(s.to_string())),
        _ => Err(Error::NotApplicable { type_name: XS_STRING }),
    }
}

fn coerce_boolean(source: Source) -> Result<Value> {
    match source {
        Source::Bool(b) => Ok(Value::Boolean(b)),
        Source::Text(s) => BOOLEAN_MAP.get(s).copied().map(Value::Boolean).ok_or_else(|| {
            Error::Coercion(format!("'{}' is not a valid boolean value", s))
        }),
        _ => Err(Error::NotApplicable { type_name: XS_BOOLEAN }),
    }
}

/// Native-width integers are already integers; the only coercion is
/// identity from a native integer shape (the range check runs afterwards).
fn native_int_source(source: Source, type_name: &'static str) -> Result<Value> {
    match source {
        Source::Int(i) => Ok(Value::Int(i)),
        Source::UInt(u) => i64::try_from(u).map(Value::Int).map_err(|_| {
            Error::OutOfRange(
                ValidationError::new("value exceeds the native integer range")
                    .with_type(type_name)
                    .with_reason(format!("Actual value: {}", u)),
            )
        }),
        _ => Err(Error::NotApplicable { type_name }),
    }
}

fn coerce_byte(source: Source) -> Result<Value> {
    native_int_source(source, XS_BYTE)
}

fn coerce_short(source: Source) -> Result<Value> {
    native_int_source(source, XS_SHORT)
}

fn coerce_int(source: Source) -> Result<Value> {
    native_int_source(source, XS_INT)
}

fn coerce_unsigned_byte(source: Source) -> Result<Value> {
    native_int_source(source, XS_UNSIGNED_BYTE)
}

fn coerce_unsigned_short(source: Source) -> Result<Value> {
    native_int_source(source, XS_UNSIGNED_SHORT)
}

fn coerce_unsigned_int(source: Source) -> Result<Value> {
    native_int_source(source, XS_UNSIGNED_INT)
}

/// Arbitrary-precision integers coerce from native integers and from
/// base-10 text.
fn big_integer_source(source: Source, type_name: &'static str) -> Result<Value> {
    match source {
        Source::Int(i) => Ok(Value::BigInt(BigInt::from(i))),
        Source::UInt(u) => Ok(Value::BigInt(BigInt::from(u))),
        Source::Text(s) => Ok(Value::BigInt(numeric::integer_from_text(s)?)),
        _ => Err(Error::NotApplicable { type_name }),
    }
}

fn coerce_integer(source: Source) -> Result<Value> {
    big_integer_source(source, XS_INTEGER)
}

fn coerce_long(source: Source) -> Result<Value> {
    big_integer_source(source, XS_LONG)
}

fn coerce_unsigned_long(source: Source) -> Result<Value> {
    big_integer_source(source, XS_UNSIGNED_LONG)
}

fn coerce_positive_integer(source: Source) -> Result<Value> {
    big_integer_source(source, XS_POSITIVE_INTEGER)
}

fn coerce_non_negative_integer(source: Source) -> Result<Value> {
    big_integer_source(source, XS_NON_NEGATIVE_INTEGER)
}

fn coerce_negative_integer(source: Source) -> Result<Value> {
    big_integer_source(source, XS_NEGATIVE_INTEGER)
}

fn coerce_non_positive_integer(source: Source) -> Result<Value> {
    big_integer_source(source, XS_NON_POSITIVE_INTEGER)
}

/// Decimal-family types coerce from native floats (exact expansion, no
/// rounding) and from text.
fn decimal_source(source: Source, type_name: &'static str) -> Result<Value> {
    match source {
        Source::Float(f) => Ok(Value::Decimal(BigDec::from_f64(f))),
        Source::Text(s) => Ok(Value::Decimal(BigDec::parse(s)?)),
        _ => Err(Error::NotApplicable { type_name }),
    }
}

fn coerce_decimal(source: Source) -> Result<Value> {
    decimal_source(source, XS_DECIMAL)
}

fn coerce_float(source: Source) -> Result<Value> {
    decimal_source(source, XS_FLOAT)
}

fn coerce_double(source: Source) -> Result<Value> {
    decimal_source(source, XS_DOUBLE)
}

fn coerce_duration(source: Source) -> Result<Value> {
    match source {
        Source::Duration(d) => Ok(Value::Text(duration::duration_canonical(&d))),
        _ => Err(Error::NotApplicable { type_name: XS_DURATION }),
    }
}

fn coerce_datetime(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::datetime_canonical(&ts))),
        _ => Err(Error::NotApplicable { type_name: XS_DATETIME }),
    }
}

fn coerce_time(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::time_canonical(&ts))),
        _ => Err(Error::NotApplicable { type_name: XS_TIME }),
    }
}

fn coerce_date(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::date_canonical(&ts))),
        _ => Err(Error::NotApplicable { type_name: XS_DATE }),
    }
}

fn coerce_gyear_month(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::gyear_month_canonical(&ts))),
        Source::Pair(year, month) => {
            Ok(Value::Text(temporal::gyear_month_from_pair(year, month)))
        }
        _ => Err(Error::NotApplicable { type_name: XS_GYEAR_MONTH }),
    }
}

fn coerce_gyear(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::gyear_canonical(&ts))),
        _ => Err(Error::NotApplicable { type_name: XS_GYEAR }),
    }
}

fn coerce_gmonth_day(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::gmonth_day_canonical(&ts))),
        Source::Pair(month, day) => Ok(Value::Text(temporal::gmonth_day_from_pair(month, day))),
        _ => Err(Error::NotApplicable { type_name: XS_GMONTH_DAY }),
    }
}

fn coerce_gday(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::gday_canonical(&ts))),
        Source::Int(day) => Ok(Value::Text(temporal::gday_from_int(day))),
        _ => Err(Error::NotApplicable { type_name: XS_GDAY }),
    }
}

fn coerce_gmonth(source: Source) -> Result<Value> {
    match source {
        Source::Timestamp(ts) => Ok(Value::Text(temporal::gmonth_canonical(&ts))),
        Source::Int(month) => Ok(Value::Text(temporal::gmonth_from_int(month))),
        _ => Err(Error::NotApplicable { type_name: XS_GMONTH }),
    }
}

fn coerce_base64_binary(source: Source) -> Result<Value> {
    match source {
        Source::Reader(reader) => Ok(Value::Text(binary::encode_stream(reader)?)),
        _ => Err(Error::NotApplicable { type_name: XS_BASE64_BINARY }),
    }
}

fn coerce_any_uri(source: Source) -> Result<Value> {
    match source {
        Source::Uri(u) => Ok(Value::Text(uri::uri_canonical(u))),
        _ => Err(Error::NotApplicable { type_name: XS_ANY_URI }),
    }
}

// =============================================================================
// Catalog
// =============================================================================

macro_rules! descriptor {
    ($name:expr, $kind:expr, $validator:ident, $coercer:ident) => {
        TypeDescriptor {
            name: $name,
            kind: $kind,
            validator: $validator,
            coercer: $coercer,
        }
    };
}

lazy_static::lazy_static! {
    /// The full catalog of atomic types, keyed by name. Built once,
    /// read-only afterwards.
    pub static ref CATALOG: IndexMap<&'static str, TypeDescriptor> = {
        use RepresentationKind::*;

        let types = vec![
            descriptor!(XS_STRING, Text, validate_string, coerce_string),
            descriptor!(XS_BOOLEAN, Boolean, validate_boolean, coerce_boolean),

            descriptor!(XS_DECIMAL, Decimal, validate_decimal, coerce_decimal),
            descriptor!(XS_INTEGER, BigInteger, validate_integer, coerce_integer),
            descriptor!(XS_LONG, BigInteger, validate_long, coerce_long),
            descriptor!(XS_INT, NativeInt, validate_int, coerce_int),
            descriptor!(XS_SHORT, NativeInt, validate_short, coerce_short),
            descriptor!(XS_BYTE, NativeInt, validate_byte, coerce_byte),
            descriptor!(
                XS_NON_NEGATIVE_INTEGER,
                BigInteger,
                validate_non_negative_integer,
                coerce_non_negative_integer
            ),
            descriptor!(
                XS_POSITIVE_INTEGER,
                BigInteger,
                validate_positive_integer,
                coerce_positive_integer
            ),
            descriptor!(
                XS_UNSIGNED_LONG,
                BigInteger,
                validate_unsigned_long,
                coerce_unsigned_long
            ),
            descriptor!(XS_UNSIGNED_INT, NativeInt, validate_unsigned_int, coerce_unsigned_int),
            descriptor!(
                XS_UNSIGNED_SHORT,
                NativeInt,
                validate_unsigned_short,
                coerce_unsigned_short
            ),
            descriptor!(
                XS_UNSIGNED_BYTE,
                NativeInt,
                validate_unsigned_byte,
                coerce_unsigned_byte
            ),
            descriptor!(
                XS_NON_POSITIVE_INTEGER,
                BigInteger,
                validate_non_positive_integer,
                coerce_non_positive_integer
            ),
            descriptor!(
                XS_NEGATIVE_INTEGER,
                BigInteger,
                validate_negative_integer,
                coerce_negative_integer
            ),

            descriptor!(XS_FLOAT, Decimal, validate_float, coerce_float),
            descriptor!(XS_DOUBLE, Decimal, validate_double, coerce_double),

            descriptor!(XS_DURATION, Text, validate_duration, coerce_duration),
            descriptor!(XS_DATETIME, Text, validate_datetime, coerce_datetime),
            descriptor!(XS_TIME, Text, validate_time, coerce_time),
            descriptor!(XS_DATE, Text, validate_date, coerce_date),
            descriptor!(XS_GYEAR_MONTH, Text, validate_gyear_month, coerce_gyear_month),
            descriptor!(XS_GYEAR, Text, validate_gyear, coerce_gyear),
            descriptor!(XS_GMONTH_DAY, Text, validate_gmonth_day, coerce_gmonth_day),
            descriptor!(XS_GDAY, Text, validate_gday, coerce_gday),
            descriptor!(XS_GMONTH, Text, validate_gmonth, coerce_gmonth),

            descriptor!(XS_BASE64_BINARY, Text, validate_base64_binary, coerce_base64_binary),
            descriptor!(XS_ANY_URI, Text, validate_any_uri, coerce_any_uri),
        ];

        types.into_iter().map(|t| (t.name, t)).collect()
    };
}

/// Get a catalog type by name
pub fn get_type(name: &str) -> Option<&'static TypeDescriptor> {
    CATALOG.get(name)
}

/// Validate a canonical representation against the named type
pub fn validate(type_name: &str, value: &Value) -> Result<()> {
    match get_type(type_name) {
        Some(descriptor) => descriptor.validate(value),
        None => Err(Error::Type(format!("unknown type: {}", type_name))),
    }
}

/// True if the representation satisfies the named type's predicate
pub fn is_valid(type_name: &str, value: &Value) -> bool {
    validate(type_name, value).is_ok()
}

/// Coerce a host-native source value into the named type's canonical
/// representation. Returns `Error::NotApplicable` when the source shape
/// has no rule for the target type; the caller then falls back to direct
/// validation of the raw value.
pub fn coerce(type_name: &str, source: Source) -> Result<Value> {
    match get_type(type_name) {
        Some(descriptor) => descriptor.coerce(source),
        None => Err(Error::Type(format!("unknown type: {}", type_name))),
    }
}

// =============================================================================
// Tests
// =============================================================================

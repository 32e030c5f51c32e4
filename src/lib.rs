//! # xsdatomic
//!
//! A validation and coercion engine for the XML Schema atomic type
//! catalog: string, boolean, the bounded integer ranges, arbitrary-
//! precision integers and decimals, float/double with exact IEEE-754
//! boundary checks, duration, the date/time family, base64 binary and
//! anyURI.
//!
//! For each type the catalog defines a canonical in-memory
//! representation, a validation predicate, and coercion rules that
//! convert richer host-native values (structured date/time values,
//! structured durations, binary streams, URI objects, native integers
//! and floats) into the canonical representation.
//!
//! ## Example
//!
//! ```rust
//! use xsdatomic::{catalog, Source, Value};
//!
//! // Validate an already-canonical representation
//! assert!(catalog::is_valid("byte", &Value::Int(127)));
//! assert!(!catalog::is_valid("byte", &Value::Int(128)));
//!
//! // Coerce a host-native value into canonical lexical form
//! let day = catalog::coerce("gDay", Source::Int(7)).unwrap();
//! assert_eq!(day.to_string(), "---07");
//! ```
//!
//! The catalog is built once at first use and shared freely across
//! threads; validation and coercion are pure functions of their inputs,
//! except for the one-shot drain of a caller-supplied binary stream.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod coercions;
pub mod error;
pub mod numeric;
pub mod patterns;
pub mod values;

// Re-exports for convenience
pub use catalog::{coerce, get_type, is_valid, validate, TypeDescriptor};
pub use error::{Error, Result, ValidationError};
pub use numeric::BigDec;
pub use values::{DurationValue, Source, Timestamp, Value, Zone};

/// Version of the xsdatomic library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD namespace of the catalog types
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

//! Coercion rules
//!
//! Conversions from richer host-native values into canonical lexical
//! forms: structured date/time values into the date/time family,
//! structured durations into the duration form, binary streams into
//! base64 text, and URI objects into their string form.

pub mod binary;
pub mod duration;
pub mod temporal;
pub mod uri;

pub use binary::encode_stream;
pub use duration::duration_canonical;
pub use uri::uri_canonical;

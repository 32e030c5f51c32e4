//! URI coercion
//!
//! Extracts the canonical string form of a structured URI value,
//! unchanged. The anyURI lexical pattern is enforced separately by
//! the catalog after coercion.

use url::Url;

/// Canonical string form of a URI value
pub fn uri_canonical(uri: &Url) -> String {
    uri.as_str().to_string()
}

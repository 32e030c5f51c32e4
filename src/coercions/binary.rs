//! Binary coercion
//!
//! Drains a caller-supplied readable stream to exhaustion, checks that
//! its bytes form valid UTF-8 text (the declared re-encoding step), and
//! base64-encodes the result with the standard alphabet and padding.
//! The stream is only read, never closed; closing stays with the caller.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Drain `reader` and produce the base64 canonical form of its content.
///
/// A zero-length stream yields the empty string, which the base64
/// lexical pattern accepts.
pub fn encode_stream(reader: &mut dyn Read) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = std::str::from_utf8(&bytes)
        .map_err(|_| Error::Coercion("binary stream content is not valid UTF-8 text".into()))?;

    Ok(STANDARD.encode(text.as_bytes()))
}

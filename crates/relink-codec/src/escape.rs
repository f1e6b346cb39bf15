//! Payload escaping
//!
//! Percent-escaping over UTF-8 bytes. Escaped on write: `%`, the field
//! delimiter, the tag separator, and every other ASCII control byte, so a
//! payload can never break record framing. Non-ASCII text passes through
//! untouched and stays readable in the document.

use crate::error::{CodecError, Result};
use crate::wire::{FIELD_DELIM, NULL_TOKEN, TAG_SEP};

// A literal "NULL" payload would otherwise collide with the null token.
const ESCAPED_NULL: &str = "%4EULL";

fn must_escape(byte: u8) -> bool {
    byte == b'%'
        || byte == FIELD_DELIM as u8
        || byte == TAG_SEP as u8
        || byte.is_ascii_control()
}

/// Escape a payload for embedding in a record. `None` becomes the null token.
pub fn escape(payload: Option<&str>) -> String {
    let Some(text) = payload else {
        return NULL_TOKEN.to_owned();
    };
    if text == NULL_TOKEN {
        return ESCAPED_NULL.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() && must_escape(ch as u8) {
            out.push_str(&format!("%{:02X}", ch as u8));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Invert [`escape`] exactly. The null token becomes `None`.
pub fn unescape(token: &str) -> Result<Option<String>> {
    if token == NULL_TOKEN {
        return Ok(None);
    }
    let bytes = token.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let value = bytes
                .get(i + 1..i + 3)
                .and_then(|pair| std::str::from_utf8(pair).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| CodecError::BadEscape {
                    token: token.to_owned(),
                })?;
            out.push(value);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map(Some).map_err(|_| CodecError::NotUtf8 {
        token: token.to_owned(),
    })
}

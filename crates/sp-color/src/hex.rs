// SPDX-License-Identifier: MIT
//
// Hex codec for single channels and the optional `#` marker.
//
// These are the only functions that touch the textual form of a color. The
// rest of the crate works on `u8` channels and goes through here on the way
// in and out.

use crate::error::{FormatError, Result};

/// The literal marker that may precede a six-digit color.
pub const PREFIX: char = '#';

// ─── Channels ────────────────────────────────────────────────────────────────

/// Decode a two-digit hex pair (`"ff"`, `"0A"`) to a channel value.
///
/// Either case is accepted. Anything that is not exactly two hex digits is a
/// [`FormatError::Digit`]; signs and whitespace are rejected.
pub fn decode_channel(pair: &str) -> Result<u8> {
    let digit_err = || FormatError::Digit {
        pair: pair.to_owned(),
    };

    let &[hi, lo] = pair.as_bytes() else {
        return Err(digit_err());
    };
    let hi = hex_digit(hi).ok_or_else(digit_err)?;
    let lo = hex_digit(lo).ok_or_else(digit_err)?;
    Ok(hi << 4 | lo)
}

/// Encode a channel as two lowercase hex digits, zero-padded.
#[must_use]
pub fn encode_channel(value: u8) -> String {
    format!("{value:02x}")
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Prefix ──────────────────────────────────────────────────────────────────

/// Split off a leading `#`.
///
/// Returns whether the marker was present and the remaining body. The body
/// length is not checked here.
#[must_use]
pub fn split_prefix(color: &str) -> (bool, &str) {
    color
        .strip_prefix(PREFIX)
        .map_or((false, color), |body| (true, body))
}

/// Put the `#` back in front of `body` when `has_prefix` is set.
#[must_use]
pub fn join_prefix(has_prefix: bool, body: &str) -> String {
    if has_prefix {
        let mut out = String::with_capacity(body.len() + 1);
        out.push(PREFIX);
        out.push_str(body);
        out
    } else {
        body.to_owned()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

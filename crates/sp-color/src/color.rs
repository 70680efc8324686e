// SPDX-License-Identifier: MIT
//
// The validated color value.
//
// A `Color` is three 8-bit channels plus a note of whether its textual form
// carried a leading `#`. Parsing is the only fallible step: once a string has
// become a `Color`, lighten/darken/legibility cannot fail. Formatting always
// writes lowercase hex and restores the marker exactly as it was read.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{FormatError, Result};
use crate::hex::{decode_channel, encode_channel, join_prefix, split_prefix};

/// Number of hex digits in a color body (`RRGGBB`).
pub const BODY_LEN: usize = 6;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An RGB color read from `RRGGBB` or `#RRGGBB`.
///
/// # Examples
///
/// ```
/// use sp_color::Color;
///
/// let orange: Color = "#FFA500".parse().unwrap();
/// assert_eq!(orange.rgb(), (255, 165, 0));
/// assert_eq!(orange.to_string(), "#ffa500");
///
/// let bare = Color::parse("800080").unwrap();
/// assert!(!bare.has_prefix());
/// ```
///
/// Equality and hashing look at the channels only. The `#` marker is a
/// formatting detail, so `#ff0000` and `ff0000` are the same color; compare
/// [`Color::to_hex`] when the textual form matters.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    prefixed: bool,
}

impl Color {
    /// Pure black, without a marker.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white, without a marker.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// Build a color from channel values. The textual form has no `#`.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            prefixed: false,
        }
    }

    /// Parse `RRGGBB` or `#RRGGBB` (either case).
    ///
    /// # Errors
    ///
    /// [`FormatError::Length`] if the body is not six characters long,
    /// [`FormatError::Digit`] if a channel pair is not hex.
    pub fn parse(s: &str) -> Result<Self> {
        let (prefixed, body) = split_prefix(s);
        if body.len() != BODY_LEN {
            return Err(FormatError::Length {
                input: s.to_owned(),
                len: body.len(),
            });
        }
        // Length is in bytes; a multibyte char would split a pair.
        let pair = |i: usize| {
            body.get(i..i + 2).ok_or_else(|| FormatError::Digit {
                pair: body.chars().skip(i).take(2).collect(),
            })
        };

        Ok(Self {
            r: decode_channel(pair(0)?)?,
            g: decode_channel(pair(2)?)?,
            b: decode_channel(pair(4)?)?,
            prefixed,
        })
    }

    /// Return a copy whose textual form has (or lacks) the `#` marker.
    #[inline]
    #[must_use]
    pub const fn with_prefix(self, prefixed: bool) -> Self {
        Self { prefixed, ..self }
    }

    /// Whether the textual form carries a leading `#`.
    #[inline]
    #[must_use]
    pub const fn has_prefix(self) -> bool {
        self.prefixed
    }

    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Channels as an `(r, g, b)` tuple.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels in red, green, blue order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Rebuild from channels in red, green, blue order, keeping the marker.
    #[inline]
    #[must_use]
    pub(crate) const fn with_channels(self, [r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b, ..self }
    }

    /// The six lowercase hex digits, never prefixed.
    #[must_use]
    pub fn body(self) -> String {
        self.channels().into_iter().map(encode_channel).collect()
    }

    /// Textual form: lowercase hex, `#` restored if it was read.
    #[must_use]
    pub fn to_hex(self) -> String {
        join_prefix(self.prefixed, &self.body())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

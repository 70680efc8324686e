// SPDX-License-Identifier: MIT
//
// Lighten and darken by a percentage of the full channel range.
//
// Both directions compute one delta, `ceil(percent * 255 / 100)`, and apply
// it identically to red, green and blue, saturating at 0 and 255. This is
// not a perceptual lighten: a shared delta also shifts hue, and saturated
// channels stop moving while the others keep going. It is kept that way so
// the swatches match the classic "add N to every channel" behavior.
//
// Percentages outside [0, 100] are accepted. Large ones simply saturate; a
// negative one produces a negative delta and moves the color the other way,
// still clamped to [0, 255].

use crate::color::Color;
use crate::error::Result;

/// Which bound the channels move toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward white (255).
    Lighten,
    /// Toward black (0).
    Darken,
}

impl Direction {
    /// Both directions, lighten first.
    pub const ALL: [Self; 2] = [Self::Lighten, Self::Darken];

    /// Lowercase name, as used on the command line and in JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lighten => "lighten",
            Self::Darken => "darken",
        }
    }
}

/// The shared per-channel delta for `percent`.
///
/// `ceil(percent * 255 / 100)`. Non-finite input is treated as saturating
/// (`NaN` → 0, `±inf` → the extreme deltas).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn change_amount(percent: f64) -> i64 {
    // Float-to-int `as` saturates and maps NaN to 0.
    (percent * 255.0 / 100.0).ceil() as i64
}

/// Move one channel by `amount` toward the bound for `direction`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn shift_channel(value: u8, amount: i64, direction: Direction) -> u8 {
    let value = i64::from(value);
    let shifted = match direction {
        Direction::Lighten => value.saturating_add(amount),
        Direction::Darken => value.saturating_sub(amount),
    };
    // Safe: clamp keeps the value inside u8 range before truncation.
    shifted.clamp(0, 255) as u8
}

/// Shift every channel of `color` by the delta for `change_percent`.
///
/// The `#` marker of the input is carried over to the output.
#[must_use]
pub fn adjust(color: Color, change_percent: f64, direction: Direction) -> Color {
    let amount = change_amount(change_percent);
    color.with_channels(
        color
            .channels()
            .map(|channel| shift_channel(channel, amount, direction)),
    )
}

/// Shift `color` toward white by `percent` of the channel range.
#[inline]
#[must_use]
pub fn lighten(color: Color, percent: f64) -> Color {
    adjust(color, percent, Direction::Lighten)
}

/// Shift `color` toward black by `percent` of the channel range.
#[inline]
#[must_use]
pub fn darken(color: Color, percent: f64) -> Color {
    adjust(color, percent, Direction::Darken)
}

/// Parse, lighten and format in one step.
///
/// # Errors
///
/// Returns a [`FormatError`](crate::FormatError) if `color` is malformed.
pub fn lighten_hex(color: &str, percent: f64) -> Result<String> {
    Ok(lighten(Color::parse(color)?, percent).to_hex())
}

/// Parse, darken and format in one step.
///
/// # Errors
///
/// Returns a [`FormatError`](crate::FormatError) if `color` is malformed.
pub fn darken_hex(color: &str, percent: f64) -> Result<String> {
    Ok(darken(Color::parse(color)?, percent).to_hex())
}

impl Color {
    /// See [`lighten`].
    #[inline]
    #[must_use]
    pub fn lighten(self, percent: f64) -> Self {
        lighten(self, percent)
    }

    /// See [`darken`].
    #[inline]
    #[must_use]
    pub fn darken(self, percent: f64) -> Self {
        darken(self, percent)
    }

    /// See [`adjust`].
    #[inline]
    #[must_use]
    pub fn adjust(self, percent: f64, direction: Direction) -> Self {
        adjust(self, percent, direction)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use pretty_assertions::assert_eq;

    const BASES: [&str; 8] = [
        "000000", "FFFFFF", "FF0000", "FFA500", "FFFF00", "00FF00", "0000FF", "800080",
    ];

    fn color(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    // ── change_amount ────────────────────────────────────────────────────

    #[test]
    fn change_amount_rounds_up() {
        assert_eq!(change_amount(0.0), 0);
        // 2% of 255 = 5.1 → 6
        assert_eq!(change_amount(2.0), 6);
        // 10% of 255 = 25.5 → 26
        assert_eq!(change_amount(10.0), 26);
        assert_eq!(change_amount(50.0), 128);
        assert_eq!(change_amount(100.0), 255);
    }

    #[test]
    fn change_amount_fractional_percent() {
        // 0.1% of 255 = 0.255 → 1
        assert_eq!(change_amount(0.1), 1);
    }

    #[test]
    fn change_amount_negative_and_non_finite() {
        // -10% → ceil(-25.5) = -25
        assert_eq!(change_amount(-10.0), -25);
        assert_eq!(change_amount(f64::NAN), 0);
        assert_eq!(change_amount(f64::INFINITY), i64::MAX);
        assert_eq!(change_amount(f64::NEG_INFINITY), i64::MIN);
    }

    // ── Known values ─────────────────────────────────────────────────────

    #[test]
    fn full_range_saturates_exactly() {
        assert_eq!(lighten_hex("000000", 100.0).unwrap(), "ffffff");
        assert_eq!(darken_hex("ffffff", 100.0).unwrap(), "000000");
    }

    #[test]
    fn white_does_not_overflow() {
        assert_eq!(lighten_hex("ffffff", 50.0).unwrap(), "ffffff");
    }

    #[test]
    fn black_does_not_underflow() {
        assert_eq!(darken_hex("000000", 50.0).unwrap(), "000000");
    }

    #[test]
    fn shared_delta_on_every_channel() {
        // delta 26: orange 255,165,0 → 255,191,26
        assert_eq!(lighten_hex("FFA500", 10.0).unwrap(), "ffbf1a");
        // purple 128,0,128 → 102,0,102
        assert_eq!(darken_hex("800080", 10.0).unwrap(), "660066");
    }

    #[test]
    fn small_step() {
        // delta 6
        assert_eq!(lighten_hex("800080", 2.0).unwrap(), "860686");
        assert_eq!(darken_hex("ffa500", 2.0).unwrap(), "f99f00");
    }

    // ── Prefix ───────────────────────────────────────────────────────────

    #[test]
    fn prefix_is_symmetric() {
        assert!(lighten_hex("#ff0000", 10.0).unwrap().starts_with('#'));
        assert!(!lighten_hex("ff0000", 10.0).unwrap().starts_with('#'));
        assert_eq!(darken_hex("#ff0000", 10.0).unwrap(), "#e50000");
    }

    // ── Properties over the base palette ─────────────────────────────────

    #[test]
    fn zero_change_is_identity() {
        for base in BASES {
            let lower = base.to_ascii_lowercase();
            assert_eq!(lighten_hex(base, 0.0).unwrap(), lower);
            assert_eq!(darken_hex(base, 0.0).unwrap(), lower);
        }
    }

    #[test]
    fn lighten_never_lowers_and_darken_never_raises() {
        for base in BASES {
            let c = color(base);
            for pct in (0..=100).step_by(2) {
                let pct = f64::from(pct);
                let up = c.lighten(pct);
                let down = c.darken(pct);
                for i in 0..3 {
                    assert!(up.channels()[i] >= c.channels()[i], "{base} +{pct}%");
                    assert!(down.channels()[i] <= c.channels()[i], "{base} -{pct}%");
                }
            }
        }
    }

    #[test]
    fn results_are_six_digits_with_same_prefix() {
        for base in BASES {
            for prefixed in [false, true] {
                let c = color(base).with_prefix(prefixed);
                for pct in [0.0, 1.0, 33.3, 50.0, 99.9, 100.0] {
                    for dir in Direction::ALL {
                        let out = c.adjust(pct, dir).to_hex();
                        let (has, body) = crate::hex::split_prefix(&out);
                        assert_eq!(has, prefixed);
                        assert_eq!(body.len(), 6);
                        assert!(body.bytes().all(|b| b.is_ascii_hexdigit()));
                    }
                }
            }
        }
    }

    // ── Boundary behavior ────────────────────────────────────────────────

    #[test]
    fn over_one_hundred_saturates() {
        assert_eq!(lighten_hex("800080", 250.0).unwrap(), "ffffff");
        assert_eq!(darken_hex("800080", 250.0).unwrap(), "000000");
    }

    #[test]
    fn negative_percent_reverses_direction() {
        // delta -25
        assert_eq!(lighten_hex("800080", -10.0).unwrap(), "670067");
        assert_eq!(darken_hex("800080", -10.0).unwrap(), "991999");
    }

    #[test]
    fn negative_percent_still_clamps() {
        assert_eq!(lighten_hex("000000", -50.0).unwrap(), "000000");
        assert_eq!(darken_hex("ffffff", -50.0).unwrap(), "ffffff");
    }

    #[test]
    fn infinite_percent_saturates() {
        assert_eq!(lighten(Color::BLACK, f64::INFINITY), Color::WHITE);
        assert_eq!(darken(Color::WHITE, f64::INFINITY), Color::BLACK);
    }

    // ── Errors ───────────────────────────────────────────────────────────

    #[test]
    fn malformed_input_propagates() {
        assert!(matches!(
            lighten_hex("fffff", 10.0),
            Err(FormatError::Length { len: 5, .. })
        ));
        assert!(matches!(
            darken_hex("#gg0000", 10.0),
            Err(FormatError::Digit { .. })
        ));
    }
}

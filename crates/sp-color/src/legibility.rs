// SPDX-License-Identifier: MIT
//
// Light or dark text on a swatch.
//
// A cheap threshold heuristic, not a luminance or contrast-ratio formula.
// Each channel lands in one of three bands:
//
//   0 ..= 85     low   → pulls toward "dark background" (-1)
//   86 ..= 170   mid   → no vote
//   171 ..= 255  high  → pulls toward "bright background" (+1)
//
// A negative total means the background is dark and wants light text. Green
// dominates perceived brightness, so a high green channel settles the
// question before any scoring: dark text.

use crate::color::Color;
use crate::error::Result;

/// Channels above this are "high".
pub const HIGH_THRESHOLD: u8 = 170;

/// Channels below this are "low".
pub const LOW_THRESHOLD: u8 = 86;

/// Which text rendering to put on top of a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foreground {
    /// Light (white) text, for dark backgrounds.
    Light,
    /// Dark (default/black) text, for bright backgrounds.
    Dark,
}

impl Foreground {
    /// Pick the foreground for `background`.
    #[must_use]
    pub fn for_background(background: Color) -> Self {
        if use_light_foreground(background) {
            Self::Light
        } else {
            Self::Dark
        }
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Lowercase name, as printed by the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The band score of a background, or `None` when green short-circuits.
///
/// Exposed for diagnostics; most callers want [`use_light_foreground`].
#[must_use]
pub fn brightness_score(color: Color) -> Option<i8> {
    let (r, g, b) = color.rgb();

    if g > HIGH_THRESHOLD {
        return None;
    }

    let high = |v: u8| i8::from(v > HIGH_THRESHOLD);
    let low = |v: u8| i8::from(v < LOW_THRESHOLD);

    // Green can never be high here, so it only ever votes "low".
    Some(high(r) + high(b) - low(r) - low(g) - low(b))
}

/// Whether light text should be used on top of `color`.
#[must_use]
pub fn use_light_foreground(color: Color) -> bool {
    brightness_score(color).is_some_and(|score| score < 0)
}

/// Parse `color` and classify it.
///
/// # Errors
///
/// Returns a [`FormatError`](crate::FormatError) if `color` is malformed.
pub fn use_light_foreground_hex(color: &str) -> Result<bool> {
    Ok(use_light_foreground(Color::parse(color)?))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn light(s: &str) -> bool {
        use_light_foreground_hex(s).unwrap()
    }

    // ── Extremes ─────────────────────────────────────────────────────────

    #[test]
    fn black_wants_light_text() {
        assert!(light("000000"));
        assert_eq!(brightness_score(Color::BLACK), Some(-3));
    }

    #[test]
    fn white_wants_dark_text() {
        assert!(!light("ffffff"));
        assert_eq!(brightness_score(Color::WHITE), None);
    }

    // ── Green short-circuit ──────────────────────────────────────────────

    #[test]
    fn high_green_forces_dark_text() {
        // Red and blue are low, which alone would score -2.
        assert!(!light("00ff00"));
        assert!(!light("#00ab00"));
        assert_eq!(brightness_score(Color::rgb8(0, 171, 0)), None);
    }

    #[test]
    fn green_at_threshold_is_scored() {
        // 0xaa = 170 is not "high": scoring applies, r/b low → -2.
        assert!(light("00aa00"));
    }

    // ── Scoring ──────────────────────────────────────────────────────────

    #[test]
    fn pure_red_is_dark_background() {
        // +1 (r) -1 (g) -1 (b) = -1
        assert!(light("ff0000"));
    }

    #[test]
    fn pure_blue_is_dark_background() {
        assert!(light("0000ff"));
    }

    #[test]
    fn magenta_is_bright_background() {
        // +1 +1 -1 = +1
        assert!(!light("ff00ff"));
    }

    #[test]
    fn mid_band_scores_zero() {
        // Everything in 86..=170: no votes, score 0 → dark text.
        assert_eq!(brightness_score(Color::rgb8(128, 128, 128)), Some(0));
        assert!(!light("808080"));
    }

    #[test]
    fn band_edges() {
        // 85 is low, 86 is not.
        assert_eq!(brightness_score(Color::rgb8(85, 100, 100)), Some(-1));
        assert_eq!(brightness_score(Color::rgb8(86, 100, 100)), Some(0));
        // 171 is high, 170 is not.
        assert_eq!(brightness_score(Color::rgb8(171, 100, 100)), Some(1));
        assert_eq!(brightness_score(Color::rgb8(170, 100, 100)), Some(0));
    }

    #[test]
    fn purple_wants_light_text() {
        // 128 (mid), 0 (low), 128 (mid) → -1
        assert!(light("800080"));
    }

    #[test]
    fn orange_and_yellow_want_dark_text() {
        // Orange: g = 165 is mid; +1 (r) -1 (b) = 0
        assert!(!light("ffa500"));
        assert!(!light("ffff00"));
    }

    // ── Foreground ───────────────────────────────────────────────────────

    #[test]
    fn foreground_matches_boolean() {
        assert_eq!(Foreground::for_background(Color::BLACK), Foreground::Light);
        assert_eq!(Foreground::for_background(Color::WHITE), Foreground::Dark);
        assert!(Foreground::Light.is_light());
        assert_eq!(Foreground::Dark.name(), "dark");
    }

    #[test]
    fn prefix_does_not_matter() {
        assert_eq!(light("#800080"), light("800080"));
    }

    #[test]
    fn malformed_input_propagates() {
        assert!(use_light_foreground_hex("80008").is_err());
        assert!(use_light_foreground_hex("80x080").is_err());
    }
}

//! Base palette, percentage steps, and the swatch grid.
//!
//! The grid is two panels, one per [`Direction`]. Each panel has a row per
//! percentage step, and each row holds one [`Swatch`] per base color in
//! palette order. Every swatch carries its own legibility decision so a
//! renderer never has to call back into the color core.

use log::{debug, trace};
use serde::Serialize;
use sp_color::{Color, Direction, Foreground};

use crate::config::{ConfigError, PaletteConfig};

// ---------------------------------------------------------------------------
// Base colors
// ---------------------------------------------------------------------------

/// A named entry of the base palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseColor {
    pub name: String,
    pub color: Color,
}

impl BaseColor {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// The stock palette: black, white, the primaries and a few classics.
const DEFAULT_BASE: [(&str, u8, u8, u8); 8] = [
    ("Black", 0x00, 0x00, 0x00),
    ("White", 0xff, 0xff, 0xff),
    ("Red", 0xff, 0x00, 0x00),
    ("Orange", 0xff, 0xa5, 0x00),
    ("Yellow", 0xff, 0xff, 0x00),
    ("Green", 0x00, 0xff, 0x00),
    ("Blue", 0x00, 0x00, 0xff),
    ("Purple", 0x80, 0x00, 0x80),
];

/// The stock base palette, in display order.
#[must_use]
pub fn default_base_colors() -> Vec<BaseColor> {
    DEFAULT_BASE
        .iter()
        .map(|&(name, r, g, b)| BaseColor::new(name, Color::rgb8(r, g, b)))
        .collect()
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// `0, step, 2*step, …` up to and including `max_percent`.
///
/// A zero `step` is treated as 1 rather than looping forever; config
/// validation rejects it before it gets here.
pub fn percent_steps(step: u32, max_percent: u32) -> impl Iterator<Item = u32> {
    let step = usize::try_from(step.max(1)).unwrap_or(usize::MAX);
    (0..=max_percent).step_by(step)
}

// ---------------------------------------------------------------------------
// Swatches
// ---------------------------------------------------------------------------

/// One derived color and the text rendering that reads on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Name of the base color this was derived from.
    pub base: String,
    pub percent: u32,
    #[serde(serialize_with = "serialize_direction")]
    pub direction: Direction,
    pub color: Color,
    #[serde(serialize_with = "serialize_foreground")]
    pub foreground: Foreground,
}

impl Swatch {
    /// Derive `base` by `percent` in `direction` and classify the result.
    #[must_use]
    pub fn derive(base: &BaseColor, percent: u32, direction: Direction) -> Self {
        let color = base.color.adjust(f64::from(percent), direction);
        Self {
            base: base.name.clone(),
            percent,
            direction,
            color,
            foreground: Foreground::for_background(color),
        }
    }
}

fn serialize_direction<S: serde::Serializer>(d: &Direction, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(d.name())
}

fn serialize_foreground<S: serde::Serializer>(f: &Foreground, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(f.name())
}

/// All swatches at one percentage, one per base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchRow {
    pub percent: u32,
    pub swatches: Vec<Swatch>,
}

/// All rows for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    #[serde(serialize_with = "serialize_direction")]
    pub direction: Direction,
    pub rows: Vec<SwatchRow>,
}

// ---------------------------------------------------------------------------
// SwatchGrid
// ---------------------------------------------------------------------------

/// The complete grid: a lighten panel followed by a darken panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchGrid {
    pub base_colors: Vec<BaseColor>,
    pub panels: Vec<Panel>,
}

impl SwatchGrid {
    /// Build the grid described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not validate.
    pub fn generate(config: &PaletteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_colors = config.base_colors()?;

        let panels: Vec<Panel> = Direction::ALL
            .iter()
            .map(|&direction| Panel {
                direction,
                rows: percent_steps(config.step, config.max_percent)
                    .map(|percent| {
                        let swatches: Vec<Swatch> = base_colors
                            .iter()
                            .map(|base| Swatch::derive(base, percent, direction))
                            .collect();
                        trace!("{} {percent}%: {} swatches", direction.name(), swatches.len());
                        SwatchRow { percent, swatches }
                    })
                    .collect(),
            })
            .collect();

        debug!(
            "generated {} panels x {} rows x {} colors",
            panels.len(),
            panels.first().map_or(0, |p| p.rows.len()),
            base_colors.len()
        );

        Ok(Self {
            base_colors,
            panels,
        })
    }

    /// The panel for `direction`.
    #[must_use]
    pub fn panel(&self, direction: Direction) -> Option<&Panel> {
        self.panels.iter().find(|p| p.direction == direction)
    }

    /// Every swatch in the grid, panel by panel, row by row.
    pub fn swatches(&self) -> impl Iterator<Item = &Swatch> {
        self.panels
            .iter()
            .flat_map(|p| p.rows.iter())
            .flat_map(|r| r.swatches.iter())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! # sp-palette — swatch grids for swatchplay
//!
//! Walks a palette of base colors through a range of percentage steps,
//! lightening and darkening each one with [`sp_color`], and records which
//! text rendering reads on every result.
//!
//! # Architecture
//!
//! ```text
//! Config (TOML) ──► PaletteConfig
//!                        │
//!                        ▼
//! palette.rs:  base colors × percent steps × {lighten, darken}
//!                        │
//!                        ▼
//!              SwatchGrid { panels → rows → swatches }
//! ```

pub mod config;
pub mod palette;

pub use config::{Config, ConfigError, LoggingConfig, PaletteConfig};
pub use palette::{BaseColor, Panel, Swatch, SwatchGrid, SwatchRow};

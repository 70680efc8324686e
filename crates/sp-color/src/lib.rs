// SPDX-License-Identifier: MIT
//
// sp-color — color core for swatchplay.
//
// Pure, stateless color arithmetic over 6-digit hex colors:
//
//   hex        → channel codec and `#` marker handling
//   color      → the validated `Color` value
//   adjust     → lighten/darken by a percentage, clamped per channel
//   legibility → light or dark text on a given background
//
// Nothing here does I/O or holds state. Every function can be called from
// any thread without coordination.

pub mod adjust;
pub mod color;
pub mod error;
pub mod hex;
pub mod legibility;

pub use adjust::{Direction, darken, darken_hex, lighten, lighten_hex};
pub use color::Color;
pub use error::FormatError;
pub use legibility::{Foreground, use_light_foreground, use_light_foreground_hex};

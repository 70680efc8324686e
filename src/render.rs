// SPDX-License-Identifier: MIT
//
// Terminal rendering of swatch grids.
//
// Pure functions that write to any `impl Write`. Each swatch is its hex code
// padded with a space on each side, painted with a 24-bit background in the
// swatch color and a white or black foreground per its legibility decision.
// Plain mode writes the same layout without any escape sequences.

use std::io::{self, Write};

use sp_color::{Color, Foreground};
use sp_palette::{Panel, Swatch, SwatchGrid, SwatchRow};

/// Text color used for `Foreground::Light`.
const LIGHT_TEXT: Color = Color::WHITE;

/// Text color used for `Foreground::Dark`.
const DARK_TEXT: Color = Color::BLACK;

// ─── Escapes ─────────────────────────────────────────────────────────────────

/// Set a 24-bit foreground color (SGR 38;2).
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.rgb();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set a 24-bit background color (SGR 48;2).
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.rgb();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// Write one swatch cell.
pub fn swatch(w: &mut impl Write, swatch: &Swatch, ansi: bool) -> io::Result<()> {
    if ansi {
        let text = match swatch.foreground {
            Foreground::Light => LIGHT_TEXT,
            Foreground::Dark => DARK_TEXT,
        };
        bg(w, swatch.color)?;
        fg(w, text)?;
        write!(w, " {} ", swatch.color)?;
        reset(w)
    } else {
        write!(w, " {} ", swatch.color)
    }
}

/// Write one row: the percentage label followed by every swatch.
pub fn row(w: &mut impl Write, row: &SwatchRow, ansi: bool) -> io::Result<()> {
    write!(w, "{:>4}%", row.percent)?;
    for s in &row.swatches {
        w.write_all(b" ")?;
        swatch(w, s, ansi)?;
    }
    w.write_all(b"\n")
}

/// Write a panel: its direction as a heading, then its rows.
pub fn panel(w: &mut impl Write, panel: &Panel, ansi: bool) -> io::Result<()> {
    writeln!(w, "{}", panel.direction.name())?;
    for r in &panel.rows {
        row(w, r, ansi)?;
    }
    Ok(())
}

/// Write every panel of the grid, separated by a blank line.
pub fn grid(w: &mut impl Write, grid: &SwatchGrid, ansi: bool) -> io::Result<()> {
    for (i, p) in grid.panels.iter().enumerate() {
        if i > 0 {
            w.write_all(b"\n")?;
        }
        panel(w, p, ansi)?;
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

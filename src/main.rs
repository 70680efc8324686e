// SPDX-License-Identifier: MIT
//
// swatchplay — lighten/darken swatches and legible text, in the terminal.
//
// This is the binary that wires the crates together:
//
//   sp-color   → hex codec, lighten/darken, light/dark text heuristic
//   sp-palette → base palette, percentage steps, swatch grid, config
//
// One-shot subcommands (`lighten`, `darken`, `legibility`) call straight
// into sp-color. `grid` builds a SwatchGrid from the config and hands it to
// render.rs, or to serde_json with `--json`.
//
// Logs go to stderr; stdout carries only results.

mod render;

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{LevelFilter, debug, info};

use sp_color::{Color, Direction, Foreground};
use sp_palette::{Config, SwatchGrid};

/// Log level when neither the command line, `RUST_LOG` nor the config set one.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Lighten and darken hex colors, and pick legible text for them.
#[derive(Parser, Debug)]
#[command(name = "swatchplay", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides RUST_LOG and config)
    #[arg(short, long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shift a color toward white by a percentage of the channel range
    Lighten {
        /// RRGGBB or #RRGGBB
        color: String,
        /// Percentage, usually 0–100
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },

    /// Shift a color toward black by a percentage of the channel range
    Darken {
        /// RRGGBB or #RRGGBB
        color: String,
        /// Percentage, usually 0–100
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },

    /// Print whether light or dark text reads better on a color
    Legibility {
        /// RRGGBB or #RRGGBB
        color: String,
    },

    /// Print the lighten/darken grid of the configured palette
    Grid {
        /// Emit JSON instead of swatches
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Hex codes only, no color escapes
        #[arg(long)]
        plain: bool,
    },
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// Where the log filter comes from.
///
/// Decided from the command line and environment alone, so the logger is
/// running before the config file is read and its loading messages show up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogFilter {
    /// `--log-level`, else `RUST_LOG`. Installed as-is; the config's level is
    /// ignored.
    Fixed(String),
    /// Neither was given. `env_logger` passes everything and the global max
    /// level gates output: [`DEFAULT_LOG_LEVEL`] while loading, then the
    /// config's `[logging] level` if it has one.
    Deferred,
}

impl LogFilter {
    fn resolve(cli_level: Option<&str>, rust_log: Option<&str>) -> Self {
        cli_level
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .map_or(Self::Deferred, |f| Self::Fixed(f.to_owned()))
    }

    /// The max level to switch to once `config` is loaded. `None` keeps a
    /// fixed filter untouched.
    fn after_config(&self, config: &Config) -> Result<Option<LevelFilter>> {
        match self {
            Self::Fixed(_) => Ok(None),
            Self::Deferred => Ok(Some(
                config.logging.level_filter()?.unwrap_or(DEFAULT_LOG_LEVEL),
            )),
        }
    }
}

fn init_logging(filter: &LogFilter) {
    let mut builder = env_logger::Builder::from_env(Env::default());
    match filter {
        LogFilter::Fixed(f) => {
            builder.parse_filters(f);
        }
        LogFilter::Deferred => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    // Keep a logger that is already installed.
    let _ = builder.try_init();
    if *filter == LogFilter::Deferred {
        log::set_max_level(DEFAULT_LOG_LEVEL);
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn adjust(out: &mut impl Write, color: &str, percent: f64, direction: Direction) -> Result<()> {
    let base = Color::parse(color)
        .with_context(|| format!("cannot {} '{color}'", direction.name()))?;
    let result = base.adjust(percent, direction);
    debug!("{} {base} by {percent}% -> {result}", direction.name());
    writeln!(out, "{result}")?;
    Ok(())
}

fn legibility(out: &mut impl Write, color: &str) -> Result<()> {
    let background = Color::parse(color).with_context(|| format!("cannot classify '{color}'"))?;
    let foreground = Foreground::for_background(background);
    debug!(
        "{background}: score {:?} -> {}",
        sp_color::legibility::brightness_score(background),
        foreground.name()
    );
    writeln!(out, "{}", foreground.name())?;
    Ok(())
}

fn grid(out: &mut impl Write, config: &Config, json: bool, plain: bool) -> Result<()> {
    let grid = SwatchGrid::generate(&config.palette).context("cannot build swatch grid")?;
    info!(
        "grid: {} base colors, step {}%, up to {}%",
        grid.base_colors.len(),
        config.palette.step,
        config.palette.max_percent
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &grid)?;
        writeln!(out)?;
    } else {
        render::grid(out, &grid, !plain)?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let filter = LogFilter::resolve(
        args.log_level.as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    );
    init_logging(&filter);

    let config = Config::load_or_default(args.config.as_deref())?;
    if let Some(level) = filter.after_config(&config)? {
        log::set_max_level(level);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &args.command {
        Command::Lighten { color, percent } => {
            adjust(&mut out, color, *percent, Direction::Lighten)?;
        }
        Command::Darken { color, percent } => {
            adjust(&mut out, color, *percent, Direction::Darken)?;
        }
        Command::Legibility { color } => legibility(&mut out, color)?,
        Command::Grid { json, plain } => grid(&mut out, &config, *json, *plain)?,
    }

    out.flush()?;
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("swatchplay: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

//! Command-line argument definitions for the `dosekit` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::LogFormat;

/// Headless tools for DoseKit layout files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the settings file (TOML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report overlapping components; exits with status 1 if there are any
    Check {
        /// Layout file to inspect
        layout: PathBuf,
    },

    /// Write the print export of a layout
    Export {
        /// Layout file to export
        layout: PathBuf,

        /// Destination of the export
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Append a linear run of components and save
    Tile {
        /// Layout file to extend
        layout: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        x0: f64,

        #[arg(long, allow_hyphen_values = true)]
        y0: f64,

        #[arg(long, allow_hyphen_values = true)]
        dx: f64,

        #[arg(long, allow_hyphen_values = true)]
        dy: f64,

        /// Number of components
        #[arg(long, allow_hyphen_values = true)]
        count: i64,

        #[command(flatten)]
        target: TileTarget,
    },

    /// Append a grid of components and save
    Grid {
        /// Layout file to extend
        layout: PathBuf,

        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x_start: f64,

        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y_start: f64,

        /// Horizontal gap between neighbouring components
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x_gap: f64,

        /// Vertical gap between neighbouring components
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y_gap: f64,

        #[arg(long, allow_hyphen_values = true)]
        columns: i64,

        #[arg(long, allow_hyphen_values = true)]
        rows: i64,

        #[command(flatten)]
        target: TileTarget,
    },
}

/// Where new tiles go.
#[derive(Args, Debug, Clone)]
pub struct TileTarget {
    /// Exposure group for the new components, created if missing
    #[arg(short, long)]
    pub group: Option<String>,

    /// Write the result here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

//! # DoseKit
//!
//! Layout editor core for multi-dose printing. Components are arranged on a
//! print bed, assigned to exposure groups, kept free of overlaps and
//! exported for the print-file generator.
//!
//! ## Architecture
//!
//! DoseKit is organized as a workspace with multiple crates:
//!
//! 1. **dosekit-core** - Identifiers, constants and the error hierarchy
//! 2. **dosekit-layout** - Layout model, overlap detection, alignment, tiling,
//!    selection, viewport, layout files and export
//! 3. **dosekit-settings** - Editor configuration
//! 4. **dosekit** - Headless command line front end

pub mod cli;
pub mod commands;

pub use dosekit_core::{Error, ExportError, LayoutError, PersistenceError, Result, TileError};
pub use dosekit_layout::{
    Bounds, ComponentTemplate, LayoutOptions, LayoutState, Point, ZoomLimits,
};
pub use dosekit_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so command results on stdout stay clean
/// - RUST_LOG environment variable support, INFO otherwise
/// - Plain text or JSON lines
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}

/// Editor options described by a settings file.
pub fn layout_options(config: &Config) -> LayoutOptions {
    let editor = &config.editor;
    let (x, y) = editor.default_position;
    let (width, height) = editor.default_template_size;
    LayoutOptions {
        default_position: Point::new(x, y),
        default_template: ComponentTemplate::new(width, height).ok(),
        nudge_step: editor.nudge_step,
        zoom: ZoomLimits {
            step: editor.zoom_step,
            min: editor.min_zoom,
            max: editor.max_zoom,
        },
        default_group_color: editor.default_group_color.clone(),
        spatial_cell_size: editor.spatial_cell_size,
        bed: Bounds::from_rect(0.0, 0.0, config.bed.width, config.bed.height),
    }
}

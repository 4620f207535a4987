//! Implementations of the command line subcommands.

use std::path::{Path, PathBuf};

use anyhow::Context;
use dosekit_core::ComponentId;
use dosekit_layout::{ExportedLayout, LayoutOptions, LayoutState, OverlapReport, TileOperation};

use crate::cli::TileTarget;

/// Result of `dosekit check`.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub components: usize,
    pub groups: usize,
    pub overlaps: OverlapReport,
    /// Number of exposure batches of mutually disjoint components
    pub batches: usize,
    /// Components extending past the print bed
    pub off_bed: Vec<ComponentId>,
}

impl CheckReport {
    pub fn is_clear(&self) -> bool {
        self.overlaps.is_clear()
    }
}

/// Result of a tile command.
#[derive(Debug, Clone)]
pub struct TileOutcome {
    pub added: Vec<ComponentId>,
    pub saved_to: PathBuf,
    pub overlaps: OverlapReport,
}

/// Loads a layout file into a fresh editor session.
pub fn open_layout(path: &Path, options: &LayoutOptions) -> anyhow::Result<LayoutState> {
    let mut state = LayoutState::with_options(options.clone());
    state
        .load_from_file(path)
        .with_context(|| format!("Failed to load layout {}", path.display()))?;
    Ok(state)
}

pub fn check(path: &Path, options: &LayoutOptions) -> anyhow::Result<CheckReport> {
    let state = open_layout(path, options)?;
    Ok(CheckReport {
        components: state.layout().component_count(),
        groups: state.layout().group_count(),
        overlaps: state.overlaps().clone(),
        batches: state.exposure_batches().len(),
        off_bed: state.off_bed_components(),
    })
}

pub fn export(path: &Path, output: &Path, options: &LayoutOptions) -> anyhow::Result<ExportedLayout> {
    let state = open_layout(path, options)?;
    let exported = state
        .export()
        .with_context(|| format!("Cannot export {}", path.display()))?;
    exported
        .save_to_file(output)
        .with_context(|| format!("Failed to write export {}", output.display()))?;
    Ok(exported)
}

/// Appends tiles to a layout and saves it.
///
/// A named group that does not exist yet is created with the default color.
pub fn tile(
    path: &Path,
    operation: &TileOperation,
    target: &TileTarget,
    options: &LayoutOptions,
) -> anyhow::Result<TileOutcome> {
    let mut state = open_layout(path, options)?;

    if let Some(name) = target.group.as_deref() {
        if state.layout().group_by_name(name).is_some() {
            state.set_current_group_by_name(name)?;
        } else {
            state
                .new_group(name, None)
                .with_context(|| format!("Cannot create group '{name}'"))?;
        }
    }

    let added = match operation {
        TileOperation::Linear(params) => state.tile_linear(params),
        TileOperation::Grid(params) => state.tile_grid(params),
    }
    .context("Tiling failed")?;

    let saved_to = target.output.clone().unwrap_or_else(|| path.to_path_buf());
    state
        .save_to_file(&saved_to)
        .with_context(|| format!("Failed to save layout {}", saved_to.display()))?;

    Ok(TileOutcome {
        added,
        saved_to,
        overlaps: state.overlaps().clone(),
    })
}

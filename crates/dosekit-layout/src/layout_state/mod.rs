//! Layout state manager for UI integration.
//! Owns the layout being edited and all session state around it.
//!
//! This module is split into submodules:
//! - `components`: Template, add, delete, move, status line
//! - `arrange`: Alignment, coordinate entry, tiling
//! - `groups`: Exposure group management
//! - `selection`: Selection passthroughs
//! - `viewport`: Zoom controls
//! - `file_io`: New, save, load, export

mod arrange;
mod components;
mod file_io;
mod groups;
mod selection;
mod viewport;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use dosekit_core::constants::{
    BED_HEIGHT, BED_WIDTH, DEFAULT_COMPONENT_POSITION, DEFAULT_GROUP_COLOR, SPATIAL_CELL_SIZE,
};
use dosekit_core::{ComponentId, GroupId, LayoutError};

use crate::geometry::{Bounds, Point};
use crate::model::Layout;
use crate::overlap::{find_overlaps, OverlapReport};
use crate::selection_manager::SelectionManager;
use crate::viewport::{Viewport, ZoomLimits};

/// Size of the components placed by the editor, taken from the loaded
/// component file.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTemplate {
    pub width: f64,
    pub height: f64,
    /// Component file the size was read from, if any
    pub source: Option<PathBuf>,
}

impl ComponentTemplate {
    /// Creates a template, rejecting non-positive or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self {
                width,
                height,
                source: None,
            })
        } else {
            Err(LayoutError::InvalidDimensions { width, height })
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Editor behaviour knobs, usually filled from the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Where new components are placed
    pub default_position: Point,
    /// Template available before any component file is loaded
    pub default_template: Option<ComponentTemplate>,
    /// Distance moved by one keyboard nudge
    pub nudge_step: f64,
    pub zoom: ZoomLimits,
    /// Color given to new groups when none is chosen
    pub default_group_color: String,
    /// Cell size of the overlap grid
    pub spatial_cell_size: f64,
    /// Printable area; components outside it are reported
    pub bed: Bounds,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        let (x, y) = DEFAULT_COMPONENT_POSITION;
        Self {
            default_position: Point::new(x, y),
            default_template: None,
            nudge_step: 1.0,
            zoom: ZoomLimits::default(),
            default_group_color: DEFAULT_GROUP_COLOR.to_string(),
            spatial_cell_size: SPATIAL_CELL_SIZE,
            bed: Bounds::from_rect(0.0, 0.0, BED_WIDTH, BED_HEIGHT),
        }
    }
}

/// Layout state for UI integration
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub(crate) layout: Layout,
    pub(crate) selection: SelectionManager,
    pub(crate) viewport: Viewport,
    pub(crate) current_group: Option<GroupId>,
    pub(crate) template: Option<ComponentTemplate>,
    pub(crate) overlaps: OverlapReport,
    pub(crate) options: LayoutOptions,
    pub(crate) created: Option<DateTime<Utc>>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub layout_name: String,
}

impl LayoutState {
    /// Creates an empty layout state with default options.
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default())
    }

    /// Creates an empty layout state.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            layout: Layout::with_cell_size(options.spatial_cell_size),
            selection: SelectionManager::new(),
            viewport: Viewport::with_limits(options.zoom),
            current_group: None,
            template: options.default_template.clone(),
            overlaps: OverlapReport::default(),
            options,
            created: None,
            current_file_path: None,
            is_modified: false,
            layout_name: "Untitled".to_string(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn template(&self) -> Option<&ComponentTemplate> {
        self.template.as_ref()
    }

    /// The group new components and tiles are assigned to.
    pub fn current_group(&self) -> Option<GroupId> {
        self.current_group
    }

    /// Overlaps found by the last geometry change.
    pub fn overlaps(&self) -> &OverlapReport {
        &self.overlaps
    }

    /// Re-runs overlap detection. Called after every geometry change.
    pub fn refresh_overlaps(&mut self) {
        self.overlaps = find_overlaps(&self.layout);
        if !self.overlaps.is_clear() {
            tracing::warn!(
                "{} overlapping component pair(s): {:?}",
                self.overlaps.len(),
                self.overlaps.pairs()
            );
        }
    }

    /// Components not lying entirely on the print bed.
    pub fn off_bed_components(&self) -> Vec<ComponentId> {
        self.layout
            .components()
            .filter(|c| !self.options.bed.contains(c.bounds()))
            .map(|c| c.id)
            .collect()
    }

    /// Mark layout as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

//! Error handling for DoseKit
//!
//! Provides error types for every layer of the layout editor:
//! - Layout errors (model mutations, group rules)
//! - Tile errors (tile generator parameters)
//! - Persistence errors (layout file load/save)
//! - Export errors (print-file layout validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::{ComponentId, GroupId, OverlapPair};

/// Layout model error type
///
/// Raised by mutations of the layout model and the editing controller.
/// A failed mutation leaves the layout untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No component with this id exists
    #[error("Component {id} not found")]
    ComponentNotFound {
        /// The missing component id.
        id: ComponentId,
    },

    /// No group with this id exists
    #[error("Group {id} not found")]
    GroupNotFound {
        /// The missing group id.
        id: GroupId,
    },

    /// A group with this name already exists
    #[error("A group named '{name}' already exists")]
    DuplicateGroupName {
        /// The conflicting name.
        name: String,
    },

    /// Group name does not encode a usable exposure value
    #[error("Invalid group name '{name}': {reason}")]
    InvalidGroupName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// Component dimensions must be finite and positive
    #[error("Invalid component size {width} x {height}")]
    InvalidDimensions {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// A coordinate was NaN or infinite
    #[error("Invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The rejected value.
        value: f64,
    },

    /// The operation needs a current group
    #[error("No group is selected")]
    NoGroupSelected,

    /// The operation needs a selection
    #[error("No components are selected")]
    EmptySelection,

    /// No component template has been loaded
    #[error("No component template loaded")]
    NoTemplate,
}

/// Tile generator error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TileError {
    /// The number of tiles must be positive
    #[error("Tile count must be positive, got {count}")]
    InvalidCount {
        /// The rejected count.
        count: i64,
    },

    /// Every tile would land on the same position
    #[error("Spacing (0, 0) places all {count} tiles at the same position")]
    CollapsedSpacing {
        /// The requested count.
        count: i64,
    },

    /// The request would create more tiles than allowed
    #[error("{count} tiles requested, at most {max} allowed")]
    TooMany {
        /// The requested number of tiles.
        count: i64,
        /// The limit.
        max: i64,
    },

    /// A start or spacing value was NaN or infinite
    #[error("Tile parameter '{field}' must be finite")]
    NonFinite {
        /// The offending parameter.
        field: &'static str,
    },
}

/// Layout file persistence error type
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for a layout
    #[error("Malformed layout file: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was written by an unknown format version
    #[error("Unsupported layout file version {version}")]
    UnsupportedVersion {
        /// The version string found in the file.
        version: String,
    },

    /// A component references a group the file does not define
    #[error("Component {component} references unknown group {group}")]
    DanglingGroup {
        /// The referencing component.
        component: ComponentId,
        /// The missing group.
        group: String,
    },

    /// Two entities in the file share an id
    #[error("Duplicate id {id} in layout file")]
    DuplicateId {
        /// The repeated id.
        id: u64,
    },

    /// The file contains a component or group that violates a layout rule
    #[error("Invalid layout entry: {0}")]
    Invalid(#[from] LayoutError),
}

/// Export error type
///
/// Raised when the layout cannot be handed to the print-file generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Components still overlap
    #[error("{} overlapping component pair(s) must be resolved before export", pairs.len())]
    Overlaps {
        /// Every overlapping pair.
        pairs: Vec<OverlapPair>,
    },

    /// Components without an exposure group
    #[error("{} component(s) are not assigned to a group", ids.len())]
    Unassigned {
        /// The unassigned components.
        ids: Vec<ComponentId>,
    },

    /// The group name is not a positive number
    #[error("Group '{name}' does not encode a positive exposure value")]
    InvalidExposure {
        /// The offending group name.
        name: String,
    },

    /// Nothing to export
    #[error("Layout contains no components")]
    EmptyLayout,
}

/// Main error type for DoseKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout model error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Tile generator error
    #[error(transparent)]
    Tile(#[from] TileError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error blocks export because of overlaps
    pub fn is_overlap(&self) -> bool {
        matches!(self, Error::Export(ExportError::Overlaps { .. }))
    }

    /// Check if this is a persistence error
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }

    /// Check if this is a tile parameter error
    pub fn is_tile_error(&self) -> bool {
        matches!(self, Error::Tile(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

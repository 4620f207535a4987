//! # DoseKit Layout
//!
//! Editor core for arranging printable components on a print bed. Components
//! are grouped into exposure groups, checked for overlaps and exported as a
//! layout description for the print-file generator.
//!
//! ## Core Components
//!
//! ### Model
//! - **Component**: a rectangle of template size placed on the bed
//! - **Group**: a named, colored exposure group; the name is the exposure value
//! - **Layout**: component and group stores plus the group membership index
//!
//! ### Geometry
//! - **Bounds**: axis-aligned rectangles with strict overlap tests
//! - **Spatial Index**: uniform grid for hit tests and overlap candidates
//! - **Overlap**: every positive-area intersecting pair, and batching of
//!   non-overlapping components
//! - **Alignment**: align a selection to its left, right, top or bottom edge
//! - **Tiling**: linear runs and grids of template components
//!
//! ### Session
//! - **SelectionManager**: click, shift-click and drag selection
//! - **Viewport**: zoom and screen/bed coordinate conversion
//! - **LayoutState**: the controller that owns everything above
//!
//! ### Files
//! - **Serialization**: versioned JSON layout files, legacy formats on load
//! - **Export**: the `{group, x, y}` list consumed by the print-file generator
//!
//! ## Usage
//!
//! ```
//! use dosekit_layout::{Alignment, ComponentTemplate, LayoutState, LinearTileParams};
//!
//! let mut state = LayoutState::new();
//! state.set_template(ComponentTemplate::new(100.0, 100.0).unwrap()).unwrap();
//! state.new_group("100", Some("red")).unwrap();
//!
//! let ids = state
//!     .tile_linear(&LinearTileParams::new(0.0, 0.0, 120.0, 0.0, 3))
//!     .unwrap();
//! assert_eq!(ids.len(), 3);
//! assert!(state.overlaps().is_clear());
//!
//! state.align_selected(Alignment::Top).unwrap();
//! let export = state.export().unwrap();
//! assert_eq!(export.components.len(), 3);
//! ```

pub mod alignment;
pub mod export;
pub mod geometry;
pub mod layout_state;
pub mod model;
pub mod overlap;
pub mod selection_manager;
pub mod serialization;
pub mod spatial_index;
pub mod tiling;
pub mod viewport;

pub use alignment::{alignment_target, calculate_alignment_deltas, Alignment};
pub use export::{ExportedComponent, ExportedGroup, ExportedLayout};
pub use geometry::{enclosing_bounds, Bounds, Point};
pub use layout_state::{ComponentTemplate, LayoutOptions, LayoutState};
pub use model::{validate_group_name, Component, Group, Layout};
pub use overlap::{find_overlaps, find_overlaps_naive, partition_non_overlapping, OverlapReport};
pub use selection_manager::SelectionManager;
pub use serialization::LayoutFile;
pub use spatial_index::{SpatialIndex, SpatialIndexStats};
pub use tiling::{GridTileParams, LinearTileParams, TileGenerator, TileOperation};
pub use viewport::{Viewport, ZoomLimits};

pub use dosekit_core::{ComponentId, GroupId};

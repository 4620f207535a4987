//! Editor-wide constants.

/// Width of the print bed canvas in pixels.
pub const BED_WIDTH: f64 = 2560.0;

/// Height of the print bed canvas in pixels.
pub const BED_HEIGHT: f64 = 1600.0;

/// Position at which "Add" places a new component.
pub const DEFAULT_COMPONENT_POSITION: (f64, f64) = (50.0, 50.0);

/// Template size used until a component file has been loaded.
pub const DEFAULT_TEMPLATE_SIZE: (f64, f64) = (100.0, 100.0);

/// Color given to a group when none was chosen.
pub const DEFAULT_GROUP_COLOR: &str = "blue";

/// Zoom increment applied by one zoom-in/zoom-out step.
pub const ZOOM_STEP: f64 = 0.1;

/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f64 = 10.0;

/// Largest number of components a single tile request may create.
pub const MAX_TILES: i64 = 10_000;

/// Cell edge length of the overlap grid index.
pub const SPATIAL_CELL_SIZE: f64 = 256.0;

/// Layout file format version written by this build.
pub const LAYOUT_FORMAT_VERSION: &str = "1.0";

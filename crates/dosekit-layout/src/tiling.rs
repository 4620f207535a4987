//! # Tile Generator
//!
//! Produces regular placements of the component template.
//!
//! Supports:
//! - Linear runs: start point, per-step spacing and a count
//! - Grids: start point, gap between neighbouring components, columns and rows
//!
//! The generator only computes positions. Placing the components is the job
//! of [`crate::LayoutState`], which validates first so a rejected request
//! leaves the layout untouched.

use dosekit_core::constants::MAX_TILES;
use dosekit_core::TileError;

use crate::geometry::Point;

/// Parameters for a linear tile run.
///
/// Tile `i` is placed at `(x0 + i * dx, y0 + i * dy)` for `i` in `0..count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTileParams {
    /// Start x of the first tile
    pub x0: f64,
    /// Start y of the first tile
    pub y0: f64,
    /// Horizontal step between tiles
    pub dx: f64,
    /// Vertical step between tiles
    pub dy: f64,
    /// Number of tiles
    pub count: i64,
}

impl LinearTileParams {
    pub fn new(x0: f64, y0: f64, dx: f64, dy: f64, count: i64) -> Self {
        Self {
            x0,
            y0,
            dx,
            dy,
            count,
        }
    }

    /// Checks the parameters. At most [`MAX_TILES`] tiles may be requested.
    pub fn validate(&self) -> Result<(), TileError> {
        for (field, value) in [("x0", self.x0), ("y0", self.y0), ("dx", self.dx), ("dy", self.dy)] {
            if !value.is_finite() {
                return Err(TileError::NonFinite { field });
            }
        }
        if self.count <= 0 {
            return Err(TileError::InvalidCount { count: self.count });
        }
        if self.count > MAX_TILES {
            return Err(TileError::TooMany {
                count: self.count,
                max: MAX_TILES,
            });
        }
        if self.count > 1 && self.dx == 0.0 && self.dy == 0.0 {
            return Err(TileError::CollapsedSpacing { count: self.count });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Position of tile `index`.
    pub fn position(&self, index: i64) -> Point {
        let i = index as f64;
        Point::new(self.x0 + i * self.dx, self.y0 + i * self.dy)
    }
}

/// Parameters for a grid of tiles.
///
/// The gaps are measured between neighbouring components, so the pitch of
/// the grid is the component size plus the gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTileParams {
    pub x_start: f64,
    pub y_start: f64,
    /// Horizontal gap between columns
    pub x_gap: f64,
    /// Vertical gap between rows
    pub y_gap: f64,
    pub columns: i64,
    pub rows: i64,
}

impl GridTileParams {
    pub fn new(x_start: f64, y_start: f64, x_gap: f64, y_gap: f64, columns: i64, rows: i64) -> Self {
        Self {
            x_start,
            y_start,
            x_gap,
            y_gap,
            columns,
            rows,
        }
    }

    /// Checks the parameters for a component of `width` x `height`.
    pub fn validate(&self, width: f64, height: f64) -> Result<(), TileError> {
        for (field, value) in [
            ("x_start", self.x_start),
            ("y_start", self.y_start),
            ("x_gap", self.x_gap),
            ("y_gap", self.y_gap),
        ] {
            if !value.is_finite() {
                return Err(TileError::NonFinite { field });
            }
        }
        if self.columns <= 0 {
            return Err(TileError::InvalidCount {
                count: self.columns,
            });
        }
        if self.rows <= 0 {
            return Err(TileError::InvalidCount { count: self.rows });
        }
        let total = self.total_tiles();
        if total > MAX_TILES {
            return Err(TileError::TooMany {
                count: total,
                max: MAX_TILES,
            });
        }
        let (pitch_x, pitch_y) = (width + self.x_gap, height + self.y_gap);
        if (self.columns > 1 && pitch_x == 0.0) || (self.rows > 1 && pitch_y == 0.0) {
            return Err(TileError::CollapsedSpacing { count: total });
        }
        Ok(())
    }

    pub fn total_tiles(&self) -> i64 {
        self.columns.saturating_mul(self.rows)
    }

    /// Position of the tile in `column`, `row`, or `None` outside the grid.
    pub fn position(&self, column: i64, row: i64, width: f64, height: f64) -> Option<Point> {
        if column < 0 || row < 0 || column >= self.columns || row >= self.rows {
            return None;
        }
        Some(Point::new(
            self.x_start + column as f64 * (width + self.x_gap),
            self.y_start + row as f64 * (height + self.y_gap),
        ))
    }
}

/// A tile request of either shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileOperation {
    Linear(LinearTileParams),
    Grid(GridTileParams),
}

/// Generator for tile positions.
pub struct TileGenerator;

impl TileGenerator {
    /// Positions of a linear run.
    pub fn generate_linear(params: &LinearTileParams) -> Result<Vec<Point>, TileError> {
        params.validate()?;
        Ok((0..params.count).map(|i| params.position(i)).collect())
    }

    /// Positions of a grid, row by row, for a component of `width` x `height`.
    pub fn generate_grid(
        params: &GridTileParams,
        width: f64,
        height: f64,
    ) -> Result<Vec<Point>, TileError> {
        params.validate(width, height)?;
        let mut positions = Vec::new();
        for row in 0..params.rows {
            for column in 0..params.columns {
                if let Some(p) = params.position(column, row, width, height) {
                    positions.push(p);
                }
            }
        }
        Ok(positions)
    }

    /// Positions for any tile operation.
    pub fn generate(
        operation: &TileOperation,
        width: f64,
        height: f64,
    ) -> Result<Vec<Point>, TileError> {
        match operation {
            TileOperation::Linear(params) => Self::generate_linear(params),
            TileOperation::Grid(params) => Self::generate_grid(params, width, height),
        }
    }
}

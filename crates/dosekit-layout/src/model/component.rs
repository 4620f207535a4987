//! Placed component.

use dosekit_core::{ComponentId, GroupId, LayoutError};

use crate::alignment::Alignment;
use crate::geometry::Bounds;

/// A printable item placed on the bed.
///
/// Width and height come from the component template and never change
/// after creation; only the position moves. The size is stored as given
/// and the bounds are derived from it, so moving never alters the size.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub group: Option<GroupId>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    bounds: Bounds,
}

impl Component {
    /// Creates a component, rejecting non-finite coordinates and
    /// non-positive sizes.
    pub fn new(
        id: ComponentId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, LayoutError> {
        check_dimensions(width, height)?;
        let bounds = placed_bounds(x, y, width, height)?;
        Ok(Self {
            id,
            group: None,
            x,
            y,
            width,
            height,
            bounds,
        })
    }

    /// Sets the group at construction time.
    pub fn with_group(mut self, group: Option<GroupId>) -> Self {
        self.group = group;
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Moves the top-left corner to (x, y), keeping the size.
    pub(crate) fn set_position(&mut self, x: f64, y: f64) -> Result<(), LayoutError> {
        self.bounds = placed_bounds(x, y, self.width, self.height)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Moves the component by (dx, dy).
    pub(crate) fn translate(&mut self, dx: f64, dy: f64) -> Result<(), LayoutError> {
        check_coordinate(dx)?;
        check_coordinate(dy)?;
        self.set_position(self.x + dx, self.y + dy)
    }

    /// Moves the component so that the given edge lies exactly on `target`.
    ///
    /// The far edges are pinned to the target rather than derived from the
    /// size, so every component aligned to the same target shares the edge
    /// bit for bit.
    pub(crate) fn align_edge(&mut self, alignment: Alignment, target: f64) -> Result<(), LayoutError> {
        check_coordinate(target)?;
        match alignment {
            Alignment::Left => self.set_position(target, self.y),
            Alignment::Top => self.set_position(self.x, target),
            Alignment::Right => {
                let x = target - self.width;
                check_coordinate(x)?;
                self.bounds = Bounds {
                    min_x: x,
                    max_x: target,
                    ..self.bounds
                };
                self.x = x;
                Ok(())
            }
            Alignment::Bottom => {
                let y = target - self.height;
                check_coordinate(y)?;
                self.bounds = Bounds {
                    min_y: y,
                    max_y: target,
                    ..self.bounds
                };
                self.y = y;
                Ok(())
            }
        }
    }
}

fn placed_bounds(x: f64, y: f64, width: f64, height: f64) -> Result<Bounds, LayoutError> {
    check_coordinate(x)?;
    check_coordinate(y)?;
    let bounds = Bounds::from_rect(x, y, width, height);
    check_coordinate(bounds.max_x)?;
    check_coordinate(bounds.max_y)?;
    Ok(bounds)
}

pub(crate) fn check_dimensions(width: f64, height: f64) -> Result<(), LayoutError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimensions { width, height })
    }
}

pub(crate) fn check_coordinate(value: f64) -> Result<(), LayoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::InvalidCoordinate { value })
    }
}

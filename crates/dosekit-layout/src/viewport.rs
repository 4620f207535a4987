//! Viewport and coordinate transformation for the bed canvas.
//!
//! Converts between screen pixels and bed coordinates. Both spaces share
//! the canvas orientation (origin top-left, y down), so the mapping is a
//! scale by the zoom factor plus a pan offset.

use std::fmt;

use dosekit_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use crate::geometry::{Bounds, Point};

/// Zoom limits and step of a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: ZOOM_STEP,
            min: MIN_ZOOM,
            max: MAX_ZOOM,
        }
    }
}

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    limits: ZoomLimits,
}

impl Viewport {
    /// Creates a viewport at 100 % zoom with the default limits.
    pub fn new() -> Self {
        Self::with_limits(ZoomLimits::default())
    }

    /// Creates a viewport at 100 % zoom. Inconsistent limits fall back to
    /// the defaults.
    pub fn with_limits(limits: ZoomLimits) -> Self {
        let sane = limits.step > 0.0
            && limits.min > 0.0
            && limits.min <= 1.0
            && limits.max >= 1.0
            && limits.step.is_finite()
            && limits.max.is_finite();
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            limits: if sane { limits } else { ZoomLimits::default() },
        }
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the limits. Non-finite values are
    /// ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.limits.min, self.limits.max);
        }
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.limits.step);
    }

    /// Zooms out by one step, never below the minimum.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.limits.step);
    }

    /// Resets zoom to 1.0 and clears the pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount in pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts bed coordinates to screen pixels.
    ///
    /// ```text
    /// pixel = world * zoom + pan
    /// ```
    pub fn to_screen(&self, world: &Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan_x,
            world.y * self.zoom + self.pan_y,
        )
    }

    /// Converts screen pixels to bed coordinates.
    pub fn to_world(&self, pixel: &Point) -> Point {
        Point::new(
            (pixel.x - self.pan_x) / self.zoom,
            (pixel.y - self.pan_y) / self.zoom,
        )
    }

    /// Fits `bounds` into a `view_width` x `view_height` screen area,
    /// leaving `padding` (fraction of the view, 0.0 - 0.5) on every side.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, view_width: f64, view_height: f64, padding: f64) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 || !bounds.is_finite() {
            return;
        }
        let factor = 1.0 - padding.clamp(0.0, 0.49) * 2.0;
        let zoom_x = view_width * factor / bounds.width();
        let zoom_y = view_height * factor / bounds.height();
        self.set_zoom(zoom_x.min(zoom_y));

        let content_w = bounds.width() * self.zoom;
        let content_h = bounds.height() * self.zoom;
        self.pan_x = (view_width - content_w) / 2.0 - bounds.min_x * self.zoom;
        self.pan_y = (view_height - content_h) / 2.0 - bounds.min_y * self.zoom;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.zoom * 100.0)
    }
}

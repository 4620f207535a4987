//! Zoom controls for layout state.

use super::LayoutState;
use crate::viewport::Viewport;

impl LayoutState {
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset();
    }

    /// Zooms and pans so every component fits a `width` x `height` view.
    pub fn fit_to_view(&mut self, width: f64, height: f64, padding: f64) {
        if let Some(extent) = self.layout.extent() {
            self.viewport.fit_to_bounds(&extent, width, height, padding);
        }
    }
}

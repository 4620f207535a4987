//! Selection passthroughs for layout state.

use dosekit_core::ComponentId;

use super::LayoutState;
use crate::geometry::Point;
use crate::selection_manager::SelectionManager;

impl LayoutState {
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selected_ids(&self) -> Vec<ComponentId> {
        self.selection.selected_ids()
    }

    /// Selects a component by id. Unknown ids are ignored.
    pub fn select_component(&mut self, id: ComponentId, multi: bool) {
        if self.layout.contains_component(id) {
            self.selection.select(id, multi);
        }
    }

    /// Click at a bed position. With `multi` the hit is toggled.
    pub fn select_at(&mut self, point: &Point, multi: bool) -> Option<ComponentId> {
        self.selection.select_at(&self.layout, point, multi)
    }

    /// Click at a screen position, converted through the viewport.
    pub fn select_at_screen(&mut self, pixel: &Point, multi: bool) -> Option<ComponentId> {
        let world = self.viewport.to_world(pixel);
        self.select_at(&world, multi)
    }

    /// Drag-select between two bed positions.
    pub fn select_in_rect(&mut self, a: &Point, b: &Point, multi: bool) -> usize {
        self.selection.select_in_rect(&self.layout, a, b, multi)
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.layout);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }
}

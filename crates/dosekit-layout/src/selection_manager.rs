use std::collections::BTreeSet;

use dosekit_core::ComponentId;

use crate::geometry::{Bounds, Point};
use crate::model::Layout;

/// Manages component selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking the set of selected component ids
/// - Tracking which component is the "primary" selection
/// - Handling point-based selection (clicking on components)
/// - Handling rectangle-based selection (drag-select)
/// - Multi-select toggling (Shift+click)
///
/// # Selection Model
///
/// - **Primary Selection**: the most recently selected component; its
///   coordinates are shown in the status line.
/// - **Multiple Selection**: every selected id, kept in id order.
///
/// The selection is transient: it is never saved with the layout.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: BTreeSet<ComponentId>,
    primary: Option<ComponentId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use dosekit_layout::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary(), None);
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the primary selected component.
    pub fn primary(&self) -> Option<ComponentId> {
        self.primary
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<ComponentId> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selects a component.
    ///
    /// # Arguments
    ///
    /// * `id` - The component to select
    /// * `multi` - If `true`, adds to the existing selection; if `false`, replaces it
    pub fn select(&mut self, id: ComponentId, multi: bool) {
        if !multi {
            self.selected.clear();
        }
        self.selected.insert(id);
        self.primary = Some(id);
    }

    /// Toggles a component in or out of the selection (Shift+click).
    ///
    /// Returns `true` when the component is selected afterwards.
    pub fn toggle(&mut self, id: ComponentId) -> bool {
        if self.selected.remove(&id) {
            if self.primary == Some(id) {
                self.primary = self.selected.iter().next_back().copied();
            }
            false
        } else {
            self.selected.insert(id);
            self.primary = Some(id);
            true
        }
    }

    /// Removes one component from the selection.
    pub fn deselect(&mut self, id: ComponentId) {
        if self.selected.remove(&id) && self.primary == Some(id) {
            self.primary = self.selected.iter().next_back().copied();
        }
    }

    /// Clears the selection and the primary selection.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.primary = None;
    }

    /// Selects every component of the layout.
    ///
    /// The primary selection becomes the topmost (last created) component.
    pub fn select_all(&mut self, layout: &Layout) {
        self.selected = layout.component_ids().into_iter().collect();
        self.primary = self.selected.iter().next_back().copied();
    }

    /// Selects the topmost component at the given point.
    ///
    /// Uses the spatial index for candidates, then tests exact bounds.
    /// Components created later are drawn on top, so the highest matching
    /// id wins.
    ///
    /// # Multi-select Behavior
    ///
    /// - If `multi` is `false`: replaces the selection with the hit, or
    ///   clears it when the click lands on empty space
    /// - If `multi` is `true`: toggles the hit, leaving others untouched
    ///
    /// # Returns
    ///
    /// The primary selection after the click.
    pub fn select_at(&mut self, layout: &Layout, point: &Point, multi: bool) -> Option<ComponentId> {
        let hit = layout
            .spatial_index()
            .query_point(point.x, point.y)
            .into_iter()
            .rev()
            .find(|id| {
                layout
                    .component(*id)
                    .is_some_and(|c| c.bounds().contains_point(point.x, point.y))
            });

        match (hit, multi) {
            (Some(id), true) => {
                self.toggle(id);
            }
            (Some(id), false) => self.select(id, false),
            (None, false) => self.deselect_all(),
            (None, true) => {}
        }
        self.primary
    }

    /// Selects every component lying entirely inside the rectangle spanned
    /// by two drag corners.
    ///
    /// The corners may be given in any order. With `multi` the hits are
    /// added to the existing selection. Returns the number of hits.
    pub fn select_in_rect(
        &mut self,
        layout: &Layout,
        corner_a: &Point,
        corner_b: &Point,
        multi: bool,
    ) -> usize {
        if !multi {
            self.deselect_all();
        }
        let rect = Bounds::new(corner_a.x, corner_a.y, corner_b.x, corner_b.y);
        let hits: Vec<ComponentId> = layout
            .spatial_index()
            .query(&rect)
            .into_iter()
            .filter(|id| {
                layout
                    .component(*id)
                    .is_some_and(|c| rect.contains(c.bounds()))
            })
            .collect();

        for id in &hits {
            self.selected.insert(*id);
        }
        if let Some(last) = hits.last() {
            self.primary = Some(*last);
        }
        hits.len()
    }

    /// Drops ids that no longer exist in the layout.
    pub fn retain_existing(&mut self, layout: &Layout) {
        self.selected.retain(|id| layout.contains_component(*id));
        if self.primary.is_some_and(|id| !self.selected.contains(&id)) {
            self.primary = self.selected.iter().next_back().copied();
        }
    }
}

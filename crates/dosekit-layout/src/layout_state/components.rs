//! Component operations (template, add, delete, move) for layout state.

use dosekit_core::{ComponentId, LayoutError, Result};

use super::{ComponentTemplate, LayoutState};

impl LayoutState {
    /// Sets the template used by add and tile.
    pub fn set_template(&mut self, template: ComponentTemplate) -> Result<()> {
        let checked = ComponentTemplate::new(template.width, template.height)?;
        tracing::info!(
            "Component template set to {} x {}{}",
            checked.width,
            checked.height,
            template
                .source
                .as_ref()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default()
        );
        self.template = Some(ComponentTemplate {
            source: template.source,
            ..checked
        });
        Ok(())
    }

    pub(crate) fn require_template(&self) -> std::result::Result<&ComponentTemplate, LayoutError> {
        self.template.as_ref().ok_or(LayoutError::NoTemplate)
    }

    /// Adds a component at the default position in the current group and
    /// makes it the only selection.
    pub fn add_component(&mut self) -> Result<ComponentId> {
        let p = self.options.default_position;
        self.add_component_at(p.x, p.y)
    }

    /// Adds a component at (x, y) in the current group and makes it the
    /// only selection.
    pub fn add_component_at(&mut self, x: f64, y: f64) -> Result<ComponentId> {
        let (w, h) = {
            let t = self.require_template()?;
            (t.width, t.height)
        };
        let id = self.layout.add_component(x, y, w, h, self.current_group)?;
        tracing::debug!("Added component {} at ({}, {})", id, x, y);
        self.selection.select(id, false);
        self.refresh_overlaps();
        self.mark_modified();
        Ok(id)
    }

    /// Deletes the selected components. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.selected_ids();
        let mut removed = 0;
        for id in ids {
            if self.layout.remove_component(id).is_ok() {
                removed += 1;
            }
        }
        self.selection.deselect_all();
        if removed > 0 {
            tracing::debug!("Deleted {} components", removed);
            self.refresh_overlaps();
            self.mark_modified();
        }
        removed
    }

    /// Moves every selected component by (dx, dy), as a drag does.
    pub fn move_selected(&mut self, dx: f64, dy: f64) -> Result<()> {
        let moves: Vec<_> = self
            .selection
            .selected_ids()
            .into_iter()
            .map(|id| (id, dx, dy))
            .collect();
        if moves.is_empty() {
            return Err(LayoutError::EmptySelection.into());
        }
        self.apply_moves(&moves)?;
        Ok(())
    }

    /// Moves the selection by whole nudge steps.
    pub fn nudge_selected(&mut self, steps_x: i32, steps_y: i32) -> Result<()> {
        let step = self.options.nudge_step;
        self.move_selected(f64::from(steps_x) * step, f64::from(steps_y) * step)
    }

    /// Applies `(id, dx, dy)` moves as one step.
    ///
    /// Every move is checked before any is applied, so a failure leaves the
    /// layout untouched.
    pub(crate) fn apply_moves(
        &mut self,
        moves: &[(ComponentId, f64, f64)],
    ) -> std::result::Result<(), LayoutError> {
        for &(id, dx, dy) in moves {
            let c = self
                .layout
                .component(id)
                .ok_or(LayoutError::ComponentNotFound { id })?;
            for value in [
                dx,
                dy,
                c.x() + dx + c.width(),
                c.y() + dy + c.height(),
            ] {
                if !value.is_finite() {
                    return Err(LayoutError::InvalidCoordinate { value });
                }
            }
        }
        if moves.is_empty() {
            return Ok(());
        }
        for &(id, dx, dy) in moves {
            self.layout.move_component(id, dx, dy)?;
        }
        self.refresh_overlaps();
        self.mark_modified();
        Ok(())
    }

    /// Places components at absolute `(id, x, y)` positions as one step.
    ///
    /// Every position is checked before any is applied.
    pub(crate) fn apply_positions(
        &mut self,
        positions: &[(ComponentId, f64, f64)],
    ) -> std::result::Result<(), LayoutError> {
        for &(id, x, y) in positions {
            let c = self
                .layout
                .component(id)
                .ok_or(LayoutError::ComponentNotFound { id })?;
            for value in [x, y, x + c.width(), y + c.height()] {
                if !value.is_finite() {
                    return Err(LayoutError::InvalidCoordinate { value });
                }
            }
        }
        if positions.is_empty() {
            return Ok(());
        }
        for &(id, x, y) in positions {
            self.layout.set_position(id, x, y)?;
        }
        self.refresh_overlaps();
        self.mark_modified();
        Ok(())
    }

    /// Status line for the primary selection, empty when nothing is
    /// selected.
    pub fn status_text(&self) -> String {
        let Some(c) = self
            .selection
            .primary()
            .and_then(|id| self.layout.component(id))
        else {
            return String::new();
        };
        let group = c
            .group
            .and_then(|gid| self.layout.group(gid))
            .map(|g| g.name.as_str())
            .unwrap_or("None");
        format!(
            "X: {}, Y: {}, Width: {}, Height: {}, Group: {}",
            c.x(),
            c.y(),
            c.width(),
            c.height(),
            group
        )
    }
}

//! Alignment, coordinate entry and tiling for layout state.

use dosekit_core::{ComponentId, LayoutError, Result};

use super::LayoutState;
use crate::alignment::{self, Alignment};
use crate::geometry::Point;
use crate::overlap::partition_non_overlapping;
use crate::tiling::{GridTileParams, LinearTileParams, TileGenerator};

impl LayoutState {
    /// Aligns the selection to an edge. Returns how many components moved.
    ///
    /// The aligned edge of every moved component lands exactly on the
    /// target.
    pub fn align_selected(&mut self, alignment: Alignment) -> Result<usize> {
        let ids = self.selection.selected_ids();
        let moves = alignment::calculate_alignment_deltas(&self.layout, &ids, alignment);
        let Some(target) = alignment::alignment_target(&self.layout, &ids, alignment) else {
            return Ok(0);
        };
        if moves.is_empty() {
            return Ok(0);
        }
        for &(id, _, _) in &moves {
            let c = self
                .layout
                .component(id)
                .ok_or(LayoutError::ComponentNotFound { id })?;
            let near = match alignment {
                Alignment::Left | Alignment::Top => target,
                Alignment::Right => target - c.width(),
                Alignment::Bottom => target - c.height(),
            };
            if !near.is_finite() {
                return Err(LayoutError::InvalidCoordinate { value: near }.into());
            }
        }
        for &(id, _, _) in &moves {
            self.layout.align_component(id, alignment, target)?;
        }
        tracing::debug!("Aligned {} components {}", moves.len(), alignment.name());
        self.refresh_overlaps();
        self.mark_modified();
        Ok(moves.len())
    }

    /// Sets the x coordinate of every selected component.
    pub fn set_selected_x(&mut self, x: f64) -> Result<usize> {
        let ids = self.require_selection()?;
        let positions = alignment::set_x(&self.layout, &ids, x);
        self.apply_positions(&positions)?;
        Ok(positions.len())
    }

    /// Sets the y coordinate of every selected component.
    pub fn set_selected_y(&mut self, y: f64) -> Result<usize> {
        let ids = self.require_selection()?;
        let positions = alignment::set_y(&self.layout, &ids, y);
        self.apply_positions(&positions)?;
        Ok(positions.len())
    }

    fn require_selection(&self) -> std::result::Result<Vec<ComponentId>, LayoutError> {
        let ids = self.selection.selected_ids();
        if ids.is_empty() {
            Err(LayoutError::EmptySelection)
        } else {
            Ok(ids)
        }
    }

    /// Places a linear run of template components.
    ///
    /// The new components join the current group, if any, and become the
    /// selection. Invalid parameters leave the layout unchanged.
    pub fn tile_linear(&mut self, params: &LinearTileParams) -> Result<Vec<ComponentId>> {
        self.require_template()?;
        let positions = TileGenerator::generate_linear(params)?;
        self.place_tiles(&positions)
    }

    /// Places a grid of template components with gaps between neighbours.
    pub fn tile_grid(&mut self, params: &GridTileParams) -> Result<Vec<ComponentId>> {
        let (w, h) = {
            let t = self.require_template()?;
            (t.width, t.height)
        };
        let positions = TileGenerator::generate_grid(params, w, h)?;
        self.place_tiles(&positions)
    }

    fn place_tiles(&mut self, positions: &[Point]) -> Result<Vec<ComponentId>> {
        let (w, h) = {
            let t = self.require_template()?;
            (t.width, t.height)
        };
        for p in positions {
            for value in [p.x, p.y, p.x + w, p.y + h] {
                if !value.is_finite() {
                    return Err(LayoutError::InvalidCoordinate { value }.into());
                }
            }
        }

        let mut ids = Vec::with_capacity(positions.len());
        for p in positions {
            ids.push(
                self.layout
                    .add_component(p.x, p.y, w, h, self.current_group)?,
            );
        }
        self.selection.deselect_all();
        for id in &ids {
            self.selection.select(*id, true);
        }
        tracing::info!("Tiled {} components", ids.len());
        self.refresh_overlaps();
        self.mark_modified();
        Ok(ids)
    }

    /// Splits the layout into batches of mutually non-overlapping
    /// components.
    pub fn exposure_batches(&self) -> Vec<Vec<ComponentId>> {
        partition_non_overlapping(&self.layout)
    }
}

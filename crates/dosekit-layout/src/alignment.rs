//! Alignment of a selection to a shared edge.
//!
//! The functions here only compute moves. [`crate::LayoutState`] applies
//! them and refreshes the overlap report. Aligned edges are placed on the
//! target exactly through [`crate::Layout::align_component`], not by adding
//! the deltas.

use dosekit_core::ComponentId;

use crate::model::{Component, Layout};

/// Edge to align a selection to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Smallest left edge
    Left,
    /// Largest right edge
    Right,
    /// Smallest top edge
    Top,
    /// Largest bottom edge
    Bottom,
}

impl Alignment {
    pub fn name(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Top => "top",
            Alignment::Bottom => "bottom",
        }
    }
}

fn selected<'a>(layout: &'a Layout, ids: &'a [ComponentId]) -> impl Iterator<Item = &'a Component> {
    ids.iter().filter_map(|id| layout.component(*id))
}

/// Edge coordinate the selection aligns to, or `None` when no id resolves to
/// a component.
pub fn alignment_target(layout: &Layout, ids: &[ComponentId], alignment: Alignment) -> Option<f64> {
    let mut edges = selected(layout, ids).map(|c| {
        let b = c.bounds();
        match alignment {
            Alignment::Left => b.min_x,
            Alignment::Right => b.max_x,
            Alignment::Top => b.min_y,
            Alignment::Bottom => b.max_y,
        }
    });
    let first = edges.next()?;
    Some(match alignment {
        Alignment::Left | Alignment::Top => edges.fold(first, f64::min),
        Alignment::Right | Alignment::Bottom => edges.fold(first, f64::max),
    })
}

/// Moves `(id, dx, dy)` needed to align the selection.
///
/// Only components that actually move are returned. A selection of fewer
/// than two components never moves.
pub fn calculate_alignment_deltas(
    layout: &Layout,
    ids: &[ComponentId],
    alignment: Alignment,
) -> Vec<(ComponentId, f64, f64)> {
    if selected(layout, ids).take(2).count() < 2 {
        return Vec::new();
    }
    let Some(target) = alignment_target(layout, ids, alignment) else {
        return Vec::new();
    };

    selected(layout, ids)
        .filter_map(|c| {
            let b = c.bounds();
            let (dx, dy) = match alignment {
                Alignment::Left => (target - b.min_x, 0.0),
                Alignment::Right => (target - b.max_x, 0.0),
                Alignment::Top => (0.0, target - b.min_y),
                Alignment::Bottom => (0.0, target - b.max_y),
            };
            (dx != 0.0 || dy != 0.0).then_some((c.id, dx, dy))
        })
        .collect()
}

/// New positions `(id, x, y)` that put every selected component's x at `x`.
///
/// Components already there are left out.
pub fn set_x(layout: &Layout, ids: &[ComponentId], x: f64) -> Vec<(ComponentId, f64, f64)> {
    selected(layout, ids)
        .filter(|c| c.x() != x)
        .map(|c| (c.id, x, c.y()))
        .collect()
}

/// New positions `(id, x, y)` that put every selected component's y at `y`.
pub fn set_y(layout: &Layout, ids: &[ComponentId], y: f64) -> Vec<(ComponentId, f64, f64)> {
    selected(layout, ids)
        .filter(|c| c.y() != y)
        .map(|c| (c.id, c.x(), y))
        .collect()
}

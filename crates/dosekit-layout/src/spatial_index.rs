//! Uniform grid spatial index.
//!
//! Every item is registered in each grid cell its bounds touch. Queries and
//! overlap candidate generation only look at items sharing a cell, which
//! keeps the overlap pass close to linear for layouts whose components are
//! spread over the bed.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::geometry::Bounds;

type Cell = (i64, i64);

/// Items covering more cells than this are kept out of the grid and treated
/// as candidates for every query.
const MAX_CELLS_PER_ITEM: i128 = 1 << 16;

/// Statistics about the index contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpatialIndexStats {
    /// Number of distinct items indexed.
    pub total_items: usize,
    /// Number of non-empty cells.
    pub occupied_cells: usize,
    /// Largest number of items registered in a single cell.
    pub max_items_per_cell: usize,
}

/// Grid index mapping cells to the ids of the items that touch them.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cell_size: f64,
    cells: HashMap<Cell, Vec<u64>>,
    oversized: Vec<u64>,
    items: HashSet<u64>,
}

impl SpatialIndex {
    /// Creates an empty index with square cells of `cell_size`.
    ///
    /// Non-positive or non-finite sizes fall back to
    /// [`dosekit_core::constants::SPATIAL_CELL_SIZE`].
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            dosekit_core::constants::SPATIAL_CELL_SIZE
        };
        Self {
            cell_size,
            cells: HashMap::new(),
            oversized: Vec::new(),
            items: HashSet::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn cell_of(&self, x: f64, y: f64) -> Cell {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }

    /// Cells covered by `bounds`, or `None` when the bounds span too many.
    fn cells_for(&self, bounds: &Bounds) -> Option<Vec<Cell>> {
        let (x0, y0) = self.cell_of(bounds.min_x, bounds.min_y);
        let (x1, y1) = self.cell_of(bounds.max_x, bounds.max_y);
        let span = (x1 as i128 - x0 as i128 + 1) * (y1 as i128 - y0 as i128 + 1);
        if span > MAX_CELLS_PER_ITEM {
            return None;
        }
        Some(
            (x0..=x1)
                .flat_map(|cx| (y0..=y1).map(move |cy| (cx, cy)))
                .collect(),
        )
    }

    /// Registers `id` under `bounds`. Non-finite bounds are ignored.
    pub fn insert(&mut self, id: u64, bounds: &Bounds) {
        if !bounds.is_finite() {
            tracing::warn!("Skipping spatial index insert of {} with non-finite bounds", id);
            return;
        }
        match self.cells_for(bounds) {
            Some(cells) => {
                for cell in cells {
                    let entry = self.cells.entry(cell).or_default();
                    if !entry.contains(&id) {
                        entry.push(id);
                    }
                }
            }
            None => {
                tracing::debug!("Item {} spans too many cells, tracking as oversized", id);
                if !self.oversized.contains(&id) {
                    self.oversized.push(id);
                }
            }
        }
        self.items.insert(id);
    }

    /// Removes `id`, which must have been inserted with the same `bounds`.
    pub fn remove(&mut self, id: u64, bounds: &Bounds) {
        if !bounds.is_finite() {
            return;
        }
        match self.cells_for(bounds) {
            Some(cells) => {
                for cell in cells {
                    if let Some(entry) = self.cells.get_mut(&cell) {
                        entry.retain(|&other| other != id);
                        if entry.is_empty() {
                            self.cells.remove(&cell);
                        }
                    }
                }
            }
            None => self.oversized.retain(|&other| other != id),
        }
        self.items.remove(&id);
    }

    /// Moves `id` from `old` to `new` bounds.
    pub fn update(&mut self, id: u64, old: &Bounds, new: &Bounds) {
        self.remove(id, old);
        self.insert(id, new);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.oversized.clear();
        self.items.clear();
    }

    /// Ids whose cells intersect `bounds`, sorted and de-duplicated.
    ///
    /// The result is a candidate set: callers still test the exact bounds.
    pub fn query(&self, bounds: &Bounds) -> Vec<u64> {
        if !bounds.is_finite() {
            return Vec::new();
        }
        let mut found: BTreeSet<u64> = self.oversized.iter().copied().collect();
        match self.cells_for(bounds) {
            Some(cells) => {
                for cell in cells {
                    if let Some(ids) = self.cells.get(&cell) {
                        found.extend(ids.iter().copied());
                    }
                }
            }
            None => found.extend(self.items.iter().copied()),
        }
        found.into_iter().collect()
    }

    /// Ids registered in the cell containing the point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<u64> {
        self.query(&Bounds::new(x, y, x, y))
    }

    /// Every unordered pair of ids sharing at least one cell, smaller id first.
    pub fn candidate_pairs(&self) -> BTreeSet<(u64, u64)> {
        let mut pairs = BTreeSet::new();
        for ids in self.cells.values() {
            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    pairs.insert(dosekit_core::types::ordered_pair(a, b));
                }
            }
        }
        for &a in &self.oversized {
            for &b in &self.items {
                if a != b {
                    pairs.insert(dosekit_core::types::ordered_pair(a, b));
                }
            }
        }
        pairs
    }

    pub fn stats(&self) -> SpatialIndexStats {
        SpatialIndexStats {
            total_items: self.items.len(),
            occupied_cells: self.cells.len(),
            max_items_per_cell: self.cells.values().map(Vec::len).max().unwrap_or(0),
        }
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new(dosekit_core::constants::SPATIAL_CELL_SIZE)
    }
}

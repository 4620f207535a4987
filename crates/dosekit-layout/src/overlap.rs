//! Overlap detection.
//!
//! Two components overlap when their rectangles share a region of positive
//! area. Touching edges or corners are allowed. The grid finder uses the
//! layout's spatial index for candidate pairs; the naive finder checks every
//! pair and serves as the reference.

use std::collections::{BTreeMap, BTreeSet};

use dosekit_core::types::ordered_pair;
use dosekit_core::{ComponentId, OverlapPair};

use crate::model::Layout;

/// Every overlapping pair of a layout, smaller id first, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapReport {
    pairs: Vec<OverlapPair>,
}

impl OverlapReport {
    pub fn new(pairs: impl IntoIterator<Item = OverlapPair>) -> Self {
        let set: BTreeSet<OverlapPair> = pairs
            .into_iter()
            .map(|(a, b)| ordered_pair(a, b))
            .collect();
        Self {
            pairs: set.into_iter().collect(),
        }
    }

    pub fn pairs(&self) -> &[OverlapPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no component overlaps another.
    pub fn is_clear(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when `id` is part of any overlapping pair.
    pub fn involves(&self, id: ComponentId) -> bool {
        self.pairs.iter().any(|&(a, b)| a == id || b == id)
    }

    /// Every component taking part in an overlap, ascending.
    pub fn involved_ids(&self) -> Vec<ComponentId> {
        let ids: BTreeSet<ComponentId> = self.pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        ids.into_iter().collect()
    }

    pub fn into_pairs(self) -> Vec<OverlapPair> {
        self.pairs
    }
}

/// Finds overlapping pairs using the layout's spatial grid.
pub fn find_overlaps(layout: &Layout) -> OverlapReport {
    let candidates = layout.spatial_index().candidate_pairs();
    let candidate_count = candidates.len();
    let report = OverlapReport::new(candidates.into_iter().filter(|&(a, b)| {
        match (layout.component(a), layout.component(b)) {
            (Some(ca), Some(cb)) => ca.bounds().overlaps(cb.bounds()),
            _ => false,
        }
    }));
    tracing::debug!(
        "Overlap pass: {} components, {} candidate pairs, {} overlaps",
        layout.component_count(),
        candidate_count,
        report.len()
    );
    report
}

/// Finds overlapping pairs by testing every pair of components.
pub fn find_overlaps_naive(layout: &Layout) -> OverlapReport {
    let components: Vec<_> = layout.components().collect();
    let mut pairs = Vec::new();
    for (i, a) in components.iter().enumerate() {
        for b in &components[i + 1..] {
            if a.bounds().overlaps(b.bounds()) {
                pairs.push((a.id, b.id));
            }
        }
    }
    OverlapReport::new(pairs)
}

/// Splits the components into batches whose members never overlap each
/// other.
///
/// Greedy coloring of the conflict graph: components are visited by
/// descending number of overlaps (ties by id) and each takes the first
/// batch holding none of its neighbours. Batches are returned in creation
/// order with ids ascending inside each batch.
pub fn partition_non_overlapping(layout: &Layout) -> Vec<Vec<ComponentId>> {
    let report = find_overlaps(layout);
    let mut neighbours: BTreeMap<ComponentId, BTreeSet<ComponentId>> = layout
        .components()
        .map(|c| (c.id, BTreeSet::new()))
        .collect();
    for &(a, b) in report.pairs() {
        neighbours.entry(a).or_default().insert(b);
        neighbours.entry(b).or_default().insert(a);
    }

    let mut order: Vec<ComponentId> = neighbours.keys().copied().collect();
    order.sort_by(|a, b| {
        neighbours[b]
            .len()
            .cmp(&neighbours[a].len())
            .then(a.cmp(b))
    });

    let mut batches: Vec<BTreeSet<ComponentId>> = Vec::new();
    for id in order {
        let adjacent = &neighbours[&id];
        match batches
            .iter_mut()
            .find(|batch| batch.is_disjoint(adjacent))
        {
            Some(batch) => {
                batch.insert(id);
            }
            None => batches.push(BTreeSet::from([id])),
        }
    }
    batches
        .into_iter()
        .map(|batch| batch.into_iter().collect())
        .collect()
}

//! Export of a finished layout for the print-file generator.
//!
//! The generator consumes one `{group, x, y}` record per component plus a
//! per-group summary carrying the exposure value encoded in the group name.

use std::collections::BTreeMap;
use std::path::Path;

use dosekit_core::{ExportError, PersistenceError};
use serde::{Deserialize, Serialize};

use crate::model::Layout;
use crate::overlap::find_overlaps;

/// Placement of one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedComponent {
    /// Name of the component's group
    pub group: String,
    pub x: f64,
    pub y: f64,
}

/// Summary of one exposure group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedGroup {
    pub exposure: f64,
    pub color: String,
    /// Number of components in the group
    pub count: usize,
}

/// Layout description handed to the print-file generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedLayout {
    pub components: Vec<ExportedComponent>,
    pub groups: BTreeMap<String, ExportedGroup>,
}

impl ExportedLayout {
    /// Validates the layout and builds the export.
    ///
    /// Fails when the layout is empty, when any components overlap, when a
    /// component has no group, or when a used group name is not a positive
    /// number. Overlaps are always recomputed from `layout`. Groups without
    /// components are left out.
    pub fn build(layout: &Layout) -> Result<Self, ExportError> {
        if layout.is_empty() {
            return Err(ExportError::EmptyLayout);
        }
        let overlaps = find_overlaps(layout);
        if !overlaps.is_clear() {
            return Err(ExportError::Overlaps {
                pairs: overlaps.pairs().to_vec(),
            });
        }
        let unassigned = layout.unassigned();
        if !unassigned.is_empty() {
            return Err(ExportError::Unassigned { ids: unassigned });
        }

        let mut groups = BTreeMap::new();
        for group in layout.groups() {
            let count = layout.members(group.id).len();
            if count == 0 {
                continue;
            }
            let exposure = group.exposure().ok_or_else(|| ExportError::InvalidExposure {
                name: group.name.clone(),
            })?;
            groups.insert(
                group.name.clone(),
                ExportedGroup {
                    exposure,
                    color: group.color.clone(),
                    count,
                },
            );
        }

        let components = layout
            .components()
            .filter_map(|c| {
                let group = layout.group(c.group?)?;
                Some(ExportedComponent {
                    group: group.name.clone(),
                    x: c.x(),
                    y: c.y(),
                })
            })
            .collect();

        Ok(Self { components, groups })
    }

    /// Writes the export as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(
            "Exported {} components in {} groups to {}",
            self.components.len(),
            self.groups.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

//! Serialization and deserialization for layout files.
//!
//! Layouts are stored as pretty-printed JSON with a format version, file
//! metadata, the viewport zoom, the component template size and flat lists
//! of groups and components.
//!
//! Two older shapes written by earlier releases of the editor are still
//! accepted on load:
//! - `{"groups": {"<name>": [{x, y, width, height}]}, "colors": {...}}`
//! - `{"rectangles": [{x, y, width, height, group}], "colors": {...}}`
//!
//! Loading never touches live state: [`LayoutFile::to_layout`] builds a
//! fresh [`Layout`] and fails as a whole on the first invalid entry.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::{DateTime, Utc};
use dosekit_core::constants::{DEFAULT_GROUP_COLOR, LAYOUT_FORMAT_VERSION};
use dosekit_core::{ComponentId, GroupId, PersistenceError};
use serde::{Deserialize, Serialize};

use crate::model::{Component, Group, Layout};

/// Complete layout file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    #[serde(default)]
    pub viewport: ViewportState,
    #[serde(default)]
    pub template: Option<TemplateData>,
    #[serde(default)]
    pub groups: Vec<GroupData>,
    #[serde(default)]
    pub components: Vec<ComponentData>,
}

/// Layout metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Viewport state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

/// Size of the component template the layout was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    pub width: f64,
    pub height: f64,
}

/// Serialized group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    pub id: GroupId,
    pub name: String,
    pub color: String,
}

/// Serialized component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentData {
    pub id: ComponentId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub group: Option<GroupId>,
}

#[derive(Debug, Deserialize)]
struct LegacyRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    group: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyLayout {
    #[serde(default)]
    groups: BTreeMap<String, Vec<LegacyRect>>,
    #[serde(default)]
    rectangles: Vec<LegacyRect>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

impl LegacyLayout {
    fn into_layout_file(self) -> LayoutFile {
        let mut file = LayoutFile::new("Imported layout");
        let mut next_id: u64 = 1;
        let mut ids: BTreeMap<String, GroupId> = BTreeMap::new();

        let mut ensure_group = |name: &str, file: &mut LayoutFile, next_id: &mut u64| -> GroupId {
            if let Some(id) = ids.get(name) {
                return *id;
            }
            let id = *next_id;
            *next_id += 1;
            let color = self
                .colors
                .get(name)
                .cloned()
                .unwrap_or_else(|| DEFAULT_GROUP_COLOR.to_string());
            file.groups.push(GroupData {
                id,
                name: name.to_string(),
                color,
            });
            ids.insert(name.to_string(), id);
            id
        };

        for name in self.colors.keys().chain(self.groups.keys()) {
            ensure_group(name, &mut file, &mut next_id);
        }
        for rect in &self.rectangles {
            if let Some(name) = &rect.group {
                ensure_group(name, &mut file, &mut next_id);
            }
        }

        let grouped = self
            .groups
            .iter()
            .flat_map(|(name, rects)| rects.iter().map(move |r| (Some(name.as_str()), r)));
        let flat = self.rectangles.iter().map(|r| (r.group.as_deref(), r));
        for (group, rect) in grouped.chain(flat) {
            let group = group.and_then(|name| ids.get(name).copied());
            file.components.push(ComponentData {
                id: next_id,
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                group,
            });
            next_id += 1;
        }
        file
    }
}

impl LayoutFile {
    /// Create an empty layout file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: LAYOUT_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            viewport: ViewportState::default(),
            template: None,
            groups: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Snapshot a layout
    pub fn from_layout(layout: &Layout, name: impl Into<String>) -> Self {
        let mut file = Self::new(name);
        file.groups = layout
            .groups()
            .map(|g| GroupData {
                id: g.id,
                name: g.name.clone(),
                color: g.color.clone(),
            })
            .collect();
        file.components = layout
            .components()
            .map(|c| ComponentData {
                id: c.id,
                x: c.x(),
                y: c.y(),
                width: c.width(),
                height: c.height(),
                group: c.group,
            })
            .collect();
        file
    }

    /// Parse a layout file in the current or a legacy format
    pub fn from_json_str(json: &str) -> Result<Self, PersistenceError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let is_current = value.get("version").is_some();
        if is_current {
            let file: LayoutFile = serde_json::from_value(value)?;
            file.check_version()?;
            Ok(file)
        } else {
            tracing::info!("Reading legacy layout format");
            let legacy: LegacyLayout = serde_json::from_value(value)?;
            Ok(legacy.into_layout_file())
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let json = self.to_json_string()?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(
            "Saved layout '{}' ({} components, {} groups) to {}",
            self.metadata.name,
            self.components.len(),
            self.groups.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded layout '{}' ({} components, {} groups) from {}",
            file.metadata.name,
            file.components.len(),
            file.groups.len(),
            path.as_ref().display()
        );
        Ok(file)
    }

    fn check_version(&self) -> Result<(), PersistenceError> {
        let major = |v: &str| v.split('.').next().map(str::to_string);
        if major(&self.version) == major(LAYOUT_FORMAT_VERSION) {
            Ok(())
        } else {
            Err(PersistenceError::UnsupportedVersion {
                version: self.version.clone(),
            })
        }
    }

    /// Build a fresh layout from the file contents.
    ///
    /// Fails on duplicate ids, components referencing unknown groups,
    /// duplicate group names and invalid geometry.
    pub fn to_layout(&self, cell_size: f64) -> Result<Layout, PersistenceError> {
        let mut seen = HashSet::new();
        let ids = self
            .groups
            .iter()
            .map(|g| g.id)
            .chain(self.components.iter().map(|c| c.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(PersistenceError::DuplicateId { id });
            }
        }

        let mut layout = Layout::with_cell_size(cell_size);
        for g in &self.groups {
            layout.restore_group(Group::new(g.id, g.name.trim(), g.color.clone()))?;
        }
        for c in &self.components {
            if let Some(gid) = c.group {
                if layout.group(gid).is_none() {
                    return Err(PersistenceError::DanglingGroup {
                        component: c.id,
                        group: gid.to_string(),
                    });
                }
            }
            let component = Component::new(c.id, c.x, c.y, c.width, c.height)?.with_group(c.group);
            layout.restore_component(component)?;
        }
        Ok(layout)
    }
}

//! Layout store: components, groups and the group membership index.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use dosekit_core::{ComponentId, GroupId, LayoutError};

use super::component::Component;
use super::group::Group;
use crate::alignment::Alignment;
use crate::geometry::{enclosing_bounds, Bounds};
use crate::spatial_index::SpatialIndex;

/// All components and groups of one editing session.
///
/// Components and groups are stored by id. Group membership is kept in a
/// separate `group -> components` index so components only carry a plain
/// back-reference. Every mutation keeps the component's `group` field, the
/// membership index and the spatial index in agreement.
#[derive(Debug, Clone)]
pub struct Layout {
    components: BTreeMap<ComponentId, Component>,
    groups: BTreeMap<GroupId, Group>,
    members: HashMap<GroupId, BTreeSet<ComponentId>>,
    spatial: SpatialIndex,
    next_id: u64,
}

impl Layout {
    pub fn new() -> Self {
        Self::with_cell_size(dosekit_core::constants::SPATIAL_CELL_SIZE)
    }

    /// Creates an empty layout whose overlap index uses `cell_size` cells.
    pub fn with_cell_size(cell_size: f64) -> Self {
        Self {
            components: BTreeMap::new(),
            groups: BTreeMap::new(),
            members: HashMap::new(),
            spatial: SpatialIndex::new(cell_size),
            next_id: 1,
        }
    }

    /// Generates a new unique id for a component or group.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reserve_id(&mut self, id: u64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    // ---------------------------------------------------------------------
    // Components
    // ---------------------------------------------------------------------

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn contains_component(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    /// Components in creation order.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &Component> {
        self.components.values()
    }

    pub fn component_ids(&self) -> Vec<ComponentId> {
        self.components.keys().copied().collect()
    }

    /// Adds a component of the given size at (x, y).
    pub fn add_component(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        group: Option<GroupId>,
    ) -> Result<ComponentId, LayoutError> {
        if let Some(gid) = group {
            self.require_group(gid)?;
        }
        let component = Component::new(self.next_id, x, y, width, height)?.with_group(group);
        let id = self.generate_id();
        self.attach(component);
        Ok(id)
    }

    /// Inserts a fully built component, keeping its id.
    ///
    /// Used when restoring a layout from a file.
    pub fn restore_component(&mut self, component: Component) -> Result<(), LayoutError> {
        if let Some(gid) = component.group {
            self.require_group(gid)?;
        }
        if let Some(existing) = self.components.remove(&component.id) {
            self.spatial.remove(existing.id, existing.bounds());
            if let Some(gid) = existing.group {
                self.unlink(gid, existing.id);
            }
        }
        self.reserve_id(component.id);
        self.attach(component);
        Ok(())
    }

    fn attach(&mut self, component: Component) {
        self.spatial.insert(component.id, component.bounds());
        if let Some(gid) = component.group {
            self.members.entry(gid).or_default().insert(component.id);
        }
        self.components.insert(component.id, component);
    }

    fn unlink(&mut self, group: GroupId, component: ComponentId) {
        if let Some(set) = self.members.get_mut(&group) {
            set.remove(&component);
        }
    }

    /// Removes a component and drops it from its group's membership.
    pub fn remove_component(&mut self, id: ComponentId) -> Result<Component, LayoutError> {
        let component = self
            .components
            .remove(&id)
            .ok_or(LayoutError::ComponentNotFound { id })?;
        self.spatial.remove(id, component.bounds());
        if let Some(gid) = component.group {
            self.unlink(gid, id);
        }
        Ok(component)
    }

    /// Moves a component to the absolute position (x, y).
    pub fn set_position(&mut self, id: ComponentId, x: f64, y: f64) -> Result<(), LayoutError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(LayoutError::ComponentNotFound { id })?;
        let old = *component.bounds();
        component.set_position(x, y)?;
        let new = *component.bounds();
        self.spatial.update(id, &old, &new);
        Ok(())
    }

    /// Moves a component by (dx, dy).
    pub fn move_component(&mut self, id: ComponentId, dx: f64, dy: f64) -> Result<(), LayoutError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(LayoutError::ComponentNotFound { id })?;
        let old = *component.bounds();
        component.translate(dx, dy)?;
        let new = *component.bounds();
        self.spatial.update(id, &old, &new);
        Ok(())
    }

    /// Moves a component so that one of its edges lies on `target`.
    pub fn align_component(
        &mut self,
        id: ComponentId,
        alignment: Alignment,
        target: f64,
    ) -> Result<(), LayoutError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(LayoutError::ComponentNotFound { id })?;
        let old = *component.bounds();
        component.align_edge(alignment, target)?;
        let new = *component.bounds();
        self.spatial.update(id, &old, &new);
        Ok(())
    }

    /// Moves a component into `group`, or unassigns it with `None`.
    pub fn assign_group(
        &mut self,
        id: ComponentId,
        group: Option<GroupId>,
    ) -> Result<(), LayoutError> {
        if let Some(gid) = group {
            self.require_group(gid)?;
        }
        let component = self
            .components
            .get_mut(&id)
            .ok_or(LayoutError::ComponentNotFound { id })?;
        let previous = component.group;
        component.group = group;
        if let Some(old) = previous {
            self.unlink(old, id);
        }
        if let Some(gid) = group {
            self.members.entry(gid).or_default().insert(id);
        }
        Ok(())
    }

    /// Components without a group.
    pub fn unassigned(&self) -> Vec<ComponentId> {
        self.components
            .values()
            .filter(|c| c.group.is_none())
            .map(|c| c.id)
            .collect()
    }

    /// Bounding box of every component, `None` for an empty layout.
    pub fn extent(&self) -> Option<Bounds> {
        enclosing_bounds(self.components.values().map(Component::bounds))
    }

    pub fn spatial_index(&self) -> &SpatialIndex {
        &self.spatial
    }

    // ---------------------------------------------------------------------
    // Groups
    // ---------------------------------------------------------------------

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn group_by_name(&self, name: &str) -> Option<&Group> {
        let name = name.trim();
        self.groups.values().find(|g| g.name == name)
    }

    fn require_group(&self, id: GroupId) -> Result<&Group, LayoutError> {
        self.groups.get(&id).ok_or(LayoutError::GroupNotFound { id })
    }

    fn check_name_available(&self, name: &str, except: Option<GroupId>) -> Result<(), LayoutError> {
        if name.is_empty() {
            return Err(LayoutError::InvalidGroupName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        match self.group_by_name(name) {
            Some(existing) if Some(existing.id) != except => Err(LayoutError::DuplicateGroupName {
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Creates a group. Names are trimmed and must be unique.
    pub fn add_group(&mut self, name: &str, color: &str) -> Result<GroupId, LayoutError> {
        let name = name.trim();
        self.check_name_available(name, None)?;
        let id = self.generate_id();
        self.groups.insert(id, Group::new(id, name, color));
        self.members.insert(id, BTreeSet::new());
        Ok(id)
    }

    /// Inserts a fully built group, keeping its id.
    pub fn restore_group(&mut self, group: Group) -> Result<(), LayoutError> {
        self.check_name_available(group.name.trim(), Some(group.id))?;
        self.reserve_id(group.id);
        self.members.entry(group.id).or_default();
        self.groups.insert(group.id, group);
        Ok(())
    }

    pub fn rename_group(&mut self, id: GroupId, name: &str) -> Result<(), LayoutError> {
        let name = name.trim();
        self.require_group(id)?;
        self.check_name_available(name, Some(id))?;
        if let Some(group) = self.groups.get_mut(&id) {
            group.name = name.to_string();
        }
        Ok(())
    }

    pub fn recolor_group(&mut self, id: GroupId, color: &str) -> Result<(), LayoutError> {
        let group = self
            .groups
            .get_mut(&id)
            .ok_or(LayoutError::GroupNotFound { id })?;
        group.color = color.to_string();
        Ok(())
    }

    /// Deletes a group. Its components stay on the bed, unassigned.
    ///
    /// Returns the removed group and the ids of the components it held.
    pub fn remove_group(&mut self, id: GroupId) -> Result<(Group, Vec<ComponentId>), LayoutError> {
        let group = self
            .groups
            .remove(&id)
            .ok_or(LayoutError::GroupNotFound { id })?;
        let members: Vec<ComponentId> = self
            .members
            .remove(&id)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();
        for cid in &members {
            if let Some(component) = self.components.get_mut(cid) {
                component.group = None;
            }
        }
        Ok((group, members))
    }

    /// Components assigned to `group`, in id order.
    pub fn members(&self, group: GroupId) -> Vec<ComponentId> {
        self.members
            .get(&group)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Removes every component and group.
    pub fn clear(&mut self) {
        self.components.clear();
        self.groups.clear();
        self.members.clear();
        self.spatial.clear();
        self.next_id = 1;
    }

    /// Checks that the membership index and the components' back-references
    /// agree and that no id is used twice.
    pub fn check_integrity(&self) -> bool {
        for component in self.components.values() {
            if self.groups.contains_key(&component.id) {
                return false;
            }
            if let Some(gid) = component.group {
                let indexed = self
                    .members
                    .get(&gid)
                    .is_some_and(|set| set.contains(&component.id));
                if !self.groups.contains_key(&gid) || !indexed {
                    return false;
                }
            }
        }
        self.members.iter().all(|(gid, set)| {
            self.groups.contains_key(gid)
                && set.iter().all(|cid| {
                    self.components
                        .get(cid)
                        .is_some_and(|c| c.group == Some(*gid))
                })
        }) && self.spatial.len() == self.components.len()
    }

    /// Id that the next generated entity will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

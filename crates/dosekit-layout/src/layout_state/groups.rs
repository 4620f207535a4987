//! Exposure group management for layout state.

use dosekit_core::{ComponentId, GroupId, LayoutError, Result};

use super::LayoutState;
use crate::model::{validate_group_name, Group};

impl LayoutState {
    /// Creates a group and makes it the current group.
    ///
    /// The name must be a positive number not used by another group.
    /// Without a color the configured default is used.
    pub fn new_group(&mut self, name: &str, color: Option<&str>) -> Result<GroupId> {
        validate_group_name(name)?;
        let color = color.unwrap_or(&self.options.default_group_color).to_string();
        let id = self.layout.add_group(name, &color)?;
        tracing::info!("Created group '{}' ({})", name.trim(), color);
        self.current_group = Some(id);
        self.mark_modified();
        Ok(id)
    }

    /// Makes `group` the current group, or clears it with `None`.
    pub fn set_current_group(&mut self, group: Option<GroupId>) -> Result<()> {
        if let Some(id) = group {
            if self.layout.group(id).is_none() {
                return Err(LayoutError::GroupNotFound { id }.into());
            }
        }
        self.current_group = group;
        Ok(())
    }

    /// Makes the group called `name` current.
    pub fn set_current_group_by_name(&mut self, name: &str) -> Result<GroupId> {
        let id = self
            .layout
            .group_by_name(name)
            .map(|g| g.id)
            .ok_or_else(|| LayoutError::InvalidGroupName {
                name: name.to_string(),
                reason: "no such group".to_string(),
            })?;
        self.current_group = Some(id);
        Ok(id)
    }

    fn require_current_group(&self) -> std::result::Result<GroupId, LayoutError> {
        self.current_group.ok_or(LayoutError::NoGroupSelected)
    }

    pub fn rename_current_group(&mut self, name: &str) -> Result<()> {
        let id = self.require_current_group()?;
        validate_group_name(name)?;
        self.layout.rename_group(id, name)?;
        self.mark_modified();
        Ok(())
    }

    pub fn recolor_current_group(&mut self, color: &str) -> Result<()> {
        let id = self.require_current_group()?;
        self.layout.recolor_group(id, color)?;
        self.mark_modified();
        Ok(())
    }

    /// Deletes the current group. Its components stay, unassigned.
    ///
    /// Returns the ids of the components that lost their group.
    pub fn delete_current_group(&mut self) -> Result<Vec<ComponentId>> {
        let id = self.require_current_group()?;
        let (group, members) = self.layout.remove_group(id)?;
        tracing::info!(
            "Deleted group '{}', {} components unassigned",
            group.name,
            members.len()
        );
        self.current_group = None;
        self.mark_modified();
        Ok(members)
    }

    /// Moves every selected component into `group`, or unassigns them with
    /// `None`. Returns how many components changed.
    pub fn change_selection_group(&mut self, group: Option<GroupId>) -> Result<usize> {
        if let Some(id) = group {
            if self.layout.group(id).is_none() {
                return Err(LayoutError::GroupNotFound { id }.into());
            }
        }
        let ids = self.selection.selected_ids();
        if ids.is_empty() {
            return Err(LayoutError::EmptySelection.into());
        }
        let mut changed = 0;
        for id in ids {
            let current = self.layout.component(id).and_then(|c| c.group);
            if current != group {
                self.layout.assign_group(id, group)?;
                changed += 1;
            }
        }
        if changed > 0 {
            self.mark_modified();
        }
        Ok(changed)
    }

    /// Selects every member of `group`.
    pub fn select_group_members(&mut self, group: GroupId) -> Result<usize> {
        if self.layout.group(group).is_none() {
            return Err(LayoutError::GroupNotFound { id: group }.into());
        }
        self.selection.deselect_all();
        let members = self.layout.members(group);
        for id in &members {
            self.selection.select(*id, true);
        }
        Ok(members.len())
    }

    /// Groups in creation order, as shown in the group picker.
    pub fn groups(&self) -> Vec<&Group> {
        self.layout.groups().collect()
    }
}

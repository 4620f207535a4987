//! File I/O operations (new, save, load, export) for layout state.

use std::path::Path;

use dosekit_core::Result;

use super::{ComponentTemplate, LayoutState};
use crate::export::ExportedLayout;
use crate::model::Layout;
use crate::serialization::{LayoutFile, TemplateData};

impl LayoutState {
    /// Clears the layout and all session state.
    pub fn new_layout(&mut self) {
        self.layout = Layout::with_cell_size(self.options.spatial_cell_size);
        self.selection.deselect_all();
        self.viewport.reset();
        self.current_group = None;
        self.overlaps = Default::default();
        self.created = None;
        self.current_file_path = None;
        self.is_modified = false;
        self.layout_name = "Untitled".to_string();
    }

    /// Snapshot of the current layout in file form.
    pub fn to_layout_file(&self) -> LayoutFile {
        let mut file = LayoutFile::from_layout(&self.layout, &self.layout_name);
        if let Some(created) = self.created {
            file.metadata.created = created;
        }
        file.viewport.zoom = self.viewport.zoom();
        file.template = self.template.as_ref().map(|t| TemplateData {
            width: t.width,
            height: t.height,
        });
        file
    }

    /// Save layout to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = self.to_layout_file();
        file.save_to_file(&path)?;

        self.created = Some(file.metadata.created);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load layout from file.
    ///
    /// The file is parsed and validated into a fresh layout before anything
    /// is replaced, so a bad file leaves the current session untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = LayoutFile::load_from_file(&path)?;
        let layout = file.to_layout(self.options.spatial_cell_size)?;
        let template = match file.template {
            Some(t) => Some(ComponentTemplate::new(t.width, t.height)?),
            None => self.template.clone(),
        };

        self.layout = layout;
        self.template = template;
        self.selection.deselect_all();
        self.viewport.reset();
        self.viewport.set_zoom(file.viewport.zoom);
        self.current_group = None;
        self.created = Some(file.metadata.created);
        self.layout_name = file.metadata.name.clone();
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        self.refresh_overlaps();
        Ok(())
    }

    /// Validates the layout and builds the print-file export.
    pub fn export(&self) -> Result<ExportedLayout> {
        let exported = ExportedLayout::build(&self.layout)?;
        let off_bed = self.off_bed_components();
        if !off_bed.is_empty() {
            tracing::warn!(
                "{} component(s) extend past the print bed: {:?}",
                off_bed.len(),
                off_bed
            );
        }
        tracing::info!(
            "Export ready: {} components, {} groups",
            exported.components.len(),
            exported.groups.len()
        );
        Ok(exported)
    }

    /// Exports straight to a JSON file.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.export()?.save_to_file(path)?;
        Ok(())
    }

    /// Get display name for the layout.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.layout_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}

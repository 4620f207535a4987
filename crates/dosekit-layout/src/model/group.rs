//! Exposure groups.

use dosekit_core::{GroupId, LayoutError};

/// A named, colored set of components printed with one exposure setting.
///
/// The name doubles as the exposure value: "100" means 100 % of the base
/// exposure of the component file.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub color: String,
}

impl Group {
    pub fn new(id: GroupId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Exposure value encoded in the name, if it is a finite positive number.
    pub fn exposure(&self) -> Option<f64> {
        parse_exposure(&self.name)
    }
}

fn parse_exposure(name: &str) -> Option<f64> {
    name.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Checks that `name` encodes a positive exposure value and returns it.
pub fn validate_group_name(name: &str) -> Result<f64, LayoutError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LayoutError::InvalidGroupName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| LayoutError::InvalidGroupName {
            name: name.to_string(),
            reason: "must be a number".to_string(),
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::InvalidGroupName {
            name: name.to_string(),
            reason: "must be a positive number".to_string(),
        });
    }
    Ok(value)
}

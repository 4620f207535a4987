//! # DoseKit Core
//!
//! Core types and error definitions shared by every DoseKit crate.
//! Provides the identifier aliases used by the layout model, the print-bed
//! constants of the editor, and the layered error hierarchy.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, ExportError, LayoutError, PersistenceError, Result, TileError};
pub use types::{ComponentId, GroupId, OverlapPair};

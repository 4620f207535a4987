//! Layout data model: components, exposure groups and the layout store.

pub mod component;
pub mod group;
pub mod layout;

pub use component::Component;
pub use group::{validate_group_name, Group};
pub use layout::Layout;

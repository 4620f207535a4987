//! Identifier aliases for layout entities.
//!
//! Components and groups share a single id space inside a layout, so an id
//! never names both a component and a group at the same time.

/// Identifier of a placed component.
pub type ComponentId = u64;

/// Identifier of an exposure group.
pub type GroupId = u64;

/// Two components whose bounding rectangles overlap, smaller id first.
pub type OverlapPair = (ComponentId, ComponentId);

/// Orders an id pair so the smaller id comes first.
pub fn ordered_pair(a: ComponentId, b: ComponentId) -> OverlapPair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

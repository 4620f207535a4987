use dosekit_core::LayoutError;
use dosekit_layout::{Bounds, Layout};

#[test]
fn test_delete_group_keeps_components() {
    let mut layout = Layout::new();
    let group = layout.add_group("100", "red").unwrap();
    let other = layout.add_group("50", "blue").unwrap();
    for i in 0..4 {
        layout
            .add_component(i as f64 * 20.0, 0.0, 10.0, 10.0, Some(group))
            .unwrap();
    }
    let outsider = layout.add_component(0.0, 50.0, 10.0, 10.0, Some(other)).unwrap();
    let total = layout.component_count();

    let (_, released) = layout.remove_group(group).unwrap();
    assert_eq!(released.len(), 4);
    assert_eq!(layout.component_count(), total);
    assert_eq!(layout.unassigned(), released);
    assert_eq!(layout.members(other), vec![outsider]);
    assert!(layout.group(group).is_none());
    assert!(layout.check_integrity());
}

#[test]
fn test_delete_component_leaves_group_membership() {
    let mut layout = Layout::new();
    let group = layout.add_group("100", "red").unwrap();
    let a = layout.add_component(0.0, 0.0, 10.0, 10.0, Some(group)).unwrap();
    let b = layout.add_component(20.0, 0.0, 10.0, 10.0, Some(group)).unwrap();

    layout.remove_component(a).unwrap();
    assert_eq!(layout.members(group), vec![b]);
    assert!(layout.check_integrity());
}

#[test]
fn test_ids_are_unique_across_components_and_groups() {
    let mut layout = Layout::new();
    let g = layout.add_group("1", "red").unwrap();
    let c = layout.add_component(0.0, 0.0, 1.0, 1.0, None).unwrap();
    let g2 = layout.add_group("2", "red").unwrap();
    assert_ne!(g, c);
    assert_ne!(c, g2);
    assert_ne!(g, g2);
}

#[test]
fn test_recolor_and_unknown_group() {
    let mut layout = Layout::new();
    let g = layout.add_group("100", "red").unwrap();
    layout.recolor_group(g, "#00ff00").unwrap();
    assert_eq!(layout.group(g).unwrap().color, "#00ff00");
    assert_eq!(
        layout.recolor_group(999, "red"),
        Err(LayoutError::GroupNotFound { id: 999 })
    );
    assert_eq!(
        layout.assign_group(999, Some(g)),
        Err(LayoutError::ComponentNotFound { id: 999 })
    );
}

#[test]
fn test_extent_and_clear() {
    let mut layout = Layout::new();
    assert_eq!(layout.extent(), None);
    layout.add_component(10.0, 10.0, 10.0, 10.0, None).unwrap();
    layout.add_component(-5.0, 30.0, 10.0, 10.0, None).unwrap();
    assert_eq!(layout.extent(), Some(Bounds::new(-5.0, 10.0, 20.0, 40.0)));

    layout.clear();
    assert!(layout.is_empty());
    assert_eq!(layout.group_count(), 0);
    assert!(layout.spatial_index().is_empty());
}

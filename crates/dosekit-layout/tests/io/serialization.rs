use dosekit_layout::serialization::LayoutFile;
use dosekit_layout::{ComponentTemplate, LayoutState};
use tempfile::tempdir;

fn populated_state() -> LayoutState {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(100.0, 60.0).unwrap())
        .unwrap();
    state.new_group("100", Some("red")).unwrap();
    state.add_component_at(0.0, 0.0).unwrap();
    state.add_component_at(150.0, 0.0).unwrap();
    state.new_group("45.5", Some("#00ff00")).unwrap();
    state.add_component_at(0.0, 100.0).unwrap();
    state.set_current_group(None).unwrap();
    state.add_component_at(300.0, 300.0).unwrap();
    state.zoom_in();
    state
}

#[test]
fn test_create_new_layout_file() {
    let file = LayoutFile::new("Test Layout");
    assert_eq!(file.version, "1.0");
    assert_eq!(file.metadata.name, "Test Layout");
    assert!(file.components.is_empty());
    assert!(file.groups.is_empty());
}

#[test]
fn test_save_then_load_reproduces_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bed.json");

    let mut original = populated_state();
    original.save_to_file(&path).unwrap();
    assert!(!original.is_modified);

    let mut loaded = LayoutState::new();
    loaded.load_from_file(&path).unwrap();

    let a = original.layout();
    let b = loaded.layout();
    assert_eq!(a.component_count(), b.component_count());
    for (ca, cb) in a.components().zip(b.components()) {
        assert_eq!(ca.bounds(), cb.bounds());
        let name_a = ca.group.and_then(|g| a.group(g)).map(|g| g.name.clone());
        let name_b = cb.group.and_then(|g| b.group(g)).map(|g| g.name.clone());
        assert_eq!(name_a, name_b);
    }
    let groups_a: Vec<_> = a.groups().map(|g| (g.name.clone(), g.color.clone())).collect();
    let groups_b: Vec<_> = b.groups().map(|g| (g.name.clone(), g.color.clone())).collect();
    assert_eq!(groups_a, groups_b);

    assert!((loaded.zoom() - original.zoom()).abs() < 1e-9);
    assert_eq!(loaded.template().map(|t| t.width), Some(100.0));
    assert_eq!(loaded.display_name(), "bed.json");
    assert!(b.check_integrity());
}

#[test]
fn test_corrupt_file_leaves_state_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"version": "1.0", "metadata": "#).unwrap();

    let mut state = populated_state();
    let before = state.layout().component_count();
    let err = state.load_from_file(&path).unwrap_err();
    assert!(err.is_persistence_error());
    assert_eq!(state.layout().component_count(), before);
    assert!(state.current_file_path.is_none());
}

#[test]
fn test_invalid_entry_leaves_state_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dangling.json");
    let mut file = LayoutFile::new("dangling");
    file.components.push(dosekit_layout::serialization::ComponentData {
        id: 1,
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
        group: Some(42),
    });
    file.save_to_file(&path).unwrap();

    let mut state = populated_state();
    assert!(state.load_from_file(&path).is_err());
    assert_eq!(state.layout().component_count(), 4);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let mut state = LayoutState::new();
    let err = state.load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(err.is_persistence_error());
}

#[test]
fn test_load_legacy_file_and_keep_editing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rectangles.json");
    std::fs::write(
        &path,
        r#"{
            "groups": {
                "100": [{"x": 0, "y": 0, "width": 50, "height": 50},
                        {"x": 60, "y": 0, "width": 50, "height": 50}]
            },
            "colors": {"100": "red"}
        }"#,
    )
    .unwrap();

    let mut state = LayoutState::new();
    state.load_from_file(&path).unwrap();
    assert_eq!(state.layout().component_count(), 2);
    assert!(state.overlaps().is_clear());

    // Ids generated for the legacy entries do not clash with new ones.
    state
        .set_template(ComponentTemplate::new(50.0, 50.0).unwrap())
        .unwrap();
    let id = state.add_component_at(200.0, 0.0).unwrap();
    assert!(state.layout().check_integrity());
    assert_eq!(state.layout().component_count(), 3);
    assert!(state.layout().component(id).is_some());
}

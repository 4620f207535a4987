use dosekit_core::ExportError;
use dosekit_layout::{ComponentTemplate, ExportedLayout, LayoutState};
use tempfile::tempdir;

fn grouped_state() -> LayoutState {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(10.0, 10.0).unwrap())
        .unwrap();
    state.new_group("100", Some("red")).unwrap();
    state
}

#[test]
fn test_export_blocked_until_overlaps_resolved() {
    let mut state = grouped_state();
    state.add_component_at(0.0, 0.0).unwrap();
    let b = state.add_component_at(5.0, 0.0).unwrap();

    let err = state.export().unwrap_err();
    assert!(err.is_overlap());

    state.select_component(b, false);
    state.move_selected(5.0, 0.0).unwrap();
    let export = state.export().unwrap();
    assert_eq!(export.components.len(), 2);
    assert_eq!(export.components[1].x, 10.0);
}

#[test]
fn test_export_rejects_unassigned() {
    let mut state = grouped_state();
    state.add_component_at(0.0, 0.0).unwrap();
    state.set_current_group(None).unwrap();
    let loose = state.add_component_at(50.0, 0.0).unwrap();
    assert!(matches!(
        state.export(),
        Err(dosekit_core::Error::Export(ExportError::Unassigned { ids })) if ids == vec![loose]
    ));
}

#[test]
fn test_export_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("print.json");

    let mut state = grouped_state();
    state.add_component_at(0.0, 0.0).unwrap();
    state.new_group("60", Some("blue")).unwrap();
    state.add_component_at(20.0, 0.0).unwrap();
    state.export_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let export: ExportedLayout = serde_json::from_str(&text).unwrap();
    assert_eq!(export.groups.len(), 2);
    assert_eq!(export.groups["60"].exposure, 60.0);
    assert_eq!(export.groups["100"].color, "red");
    assert_eq!(export.components[0].group, "100");

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["components"][1]["group"], "60");
    assert_eq!(value["components"][1]["x"], 20.0);
}

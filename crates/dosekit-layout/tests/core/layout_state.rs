use dosekit_core::{Error, LayoutError};
use dosekit_layout::{Bounds, ComponentTemplate, LayoutOptions, LayoutState, Point};

#[test]
fn test_add_without_template_fails() {
    let mut state = LayoutState::new();
    assert!(matches!(
        state.add_component(),
        Err(Error::Layout(LayoutError::NoTemplate))
    ));
    assert!(!state.is_modified);
}

#[test]
fn test_default_template_from_options() {
    let options = LayoutOptions {
        default_template: Some(ComponentTemplate::new(80.0, 40.0).unwrap()),
        default_position: Point::new(5.0, 6.0),
        ..LayoutOptions::default()
    };
    let mut state = LayoutState::with_options(options);
    let id = state.add_component().unwrap();
    let c = state.layout().component(id).unwrap();
    assert_eq!((c.x(), c.y(), c.width(), c.height()), (5.0, 6.0, 80.0, 40.0));
    assert!(state.is_modified);
}

#[test]
fn test_off_bed_components_follow_bed_bounds() {
    let options = LayoutOptions {
        default_template: Some(ComponentTemplate::new(10.0, 10.0).unwrap()),
        bed: Bounds::from_rect(0.0, 0.0, 100.0, 50.0),
        ..LayoutOptions::default()
    };
    let mut state = LayoutState::with_options(options);
    state.add_component_at(90.0, 40.0).unwrap();
    let past_right = state.add_component_at(95.0, 0.0).unwrap();
    let negative = state.add_component_at(-1.0, 10.0).unwrap();
    assert_eq!(state.off_bed_components(), vec![past_right, negative]);

    // Only the last added component is selected.
    state.set_selected_x(80.0).unwrap();
    assert_eq!(state.off_bed_components(), vec![past_right]);
}

#[test]
fn test_move_selected_and_nudge() {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(10.0, 10.0).unwrap())
        .unwrap();
    let id = state.add_component_at(0.0, 0.0).unwrap();
    state.move_selected(15.5, -3.0).unwrap();
    state.nudge_selected(2, 1).unwrap();
    let c = state.layout().component(id).unwrap();
    assert_eq!((c.x(), c.y()), (17.5, -2.0));
}

#[test]
fn test_failed_move_is_atomic() {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(10.0, 10.0).unwrap())
        .unwrap();
    let a = state.add_component_at(0.0, 0.0).unwrap();
    let b = state.add_component_at(f64::MAX, 0.0).unwrap();
    state.select_component(a, false);
    state.select_component(b, true);

    assert!(state.move_selected(f64::MAX, 0.0).is_err());
    assert_eq!(state.layout().component(a).unwrap().x(), 0.0);
    assert_eq!(state.layout().component(b).unwrap().x(), f64::MAX);
}

#[test]
fn test_status_text() {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(100.0, 100.0).unwrap())
        .unwrap();
    assert_eq!(state.status_text(), "");
    state.new_group("75", None).unwrap();
    state.add_component().unwrap();
    assert_eq!(
        state.status_text(),
        "X: 50, Y: 50, Width: 100, Height: 100, Group: 75"
    );
}

#[test]
fn test_zoom_controls() {
    let mut state = LayoutState::new();
    state.zoom_in();
    state.zoom_in();
    assert!((state.zoom() - 1.2).abs() < 1e-9);
    state.reset_zoom();
    assert_eq!(state.zoom(), 1.0);
    for _ in 0..30 {
        state.zoom_out();
    }
    assert!((state.zoom() - 0.1).abs() < 1e-9);
}

#[test]
fn test_new_layout_resets_session() {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(10.0, 10.0).unwrap())
        .unwrap();
    state.new_group("100", None).unwrap();
    state.add_component().unwrap();
    state.zoom_in();

    state.new_layout();
    assert!(state.layout().is_empty());
    assert_eq!(state.layout().group_count(), 0);
    assert_eq!(state.current_group(), None);
    assert_eq!(state.zoom(), 1.0);
    assert!(!state.is_modified);
    // The template survives a new layout.
    assert!(state.template().is_some());
}

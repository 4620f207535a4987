use dosekit_layout::{ComponentTemplate, LayoutState, Point};

fn state() -> LayoutState {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(50.0, 50.0).unwrap())
        .unwrap();
    state
}

#[test]
fn test_add_component_selects_it() {
    let mut state = state();
    let a = state.add_component().unwrap();
    let b = state.add_component_at(200.0, 0.0).unwrap();
    assert_eq!(state.selected_ids(), vec![b]);
    assert_eq!(state.selection().primary(), Some(b));
    assert_ne!(a, b);
}

#[test]
fn test_click_and_drag_selection() {
    let mut state = state();
    let a = state.add_component_at(0.0, 0.0).unwrap();
    let b = state.add_component_at(100.0, 0.0).unwrap();
    let c = state.add_component_at(300.0, 300.0).unwrap();

    assert_eq!(state.select_at(&Point::new(10.0, 10.0), false), Some(a));
    state.select_at(&Point::new(110.0, 10.0), true);
    assert_eq!(state.selected_ids(), vec![a, b]);

    // Drag from bottom-right to top-left covering a and b only.
    let hits = state.select_in_rect(&Point::new(160.0, 60.0), &Point::new(-1.0, -1.0), false);
    assert_eq!(hits, 2);
    assert!(!state.selection().is_selected(c));

    state.select_all();
    assert_eq!(state.selection().len(), 3);
    state.deselect_all();
    assert!(state.selection().is_empty());
}

#[test]
fn test_screen_click_respects_zoom() {
    let mut state = state();
    let a = state.add_component_at(100.0, 100.0).unwrap();
    state.deselect_all();
    state.zoom_out();
    state.zoom_out();
    // At 80 % zoom the component spans 80..120 pixels.
    assert_eq!(state.select_at_screen(&Point::new(90.0, 90.0), false), Some(a));
    assert_eq!(state.select_at_screen(&Point::new(130.0, 130.0), false), None);
}

#[test]
fn test_delete_selected() {
    let mut state = state();
    state.add_component_at(0.0, 0.0).unwrap();
    state.add_component_at(100.0, 0.0).unwrap();
    state.select_all();
    assert_eq!(state.delete_selected(), 2);
    assert!(state.layout().is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(state.delete_selected(), 0);
}

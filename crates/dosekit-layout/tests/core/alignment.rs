use dosekit_layout::{alignment_target, Alignment, ComponentTemplate, LayoutState};

fn state_with_three() -> (LayoutState, Vec<u64>) {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(20.0, 10.0).unwrap())
        .unwrap();
    let ids = vec![
        state.add_component_at(40.0, 0.0).unwrap(),
        state.add_component_at(100.0, 30.0).unwrap(),
        state.add_component_at(15.0, 70.0).unwrap(),
    ];
    for id in &ids {
        state.select_component(*id, true);
    }
    (state, ids)
}

#[test]
fn test_align_left_uses_min_x_and_keeps_y() {
    let (mut state, ids) = state_with_three();
    let before: Vec<f64> = ids
        .iter()
        .map(|id| state.layout().component(*id).unwrap().y())
        .collect();

    let moved = state.align_selected(Alignment::Left).unwrap();
    assert_eq!(moved, 2);
    for (id, y) in ids.iter().zip(before) {
        let c = state.layout().component(*id).unwrap();
        assert_eq!(c.x(), 15.0);
        assert_eq!(c.y(), y);
    }
}

#[test]
fn test_align_right_and_bottom_use_far_edges() {
    let (mut state, ids) = state_with_three();
    state.align_selected(Alignment::Right).unwrap();
    for id in &ids {
        let c = state.layout().component(*id).unwrap();
        assert_eq!(c.x() + c.width(), 120.0);
    }

    state.align_selected(Alignment::Bottom).unwrap();
    for id in &ids {
        let c = state.layout().component(*id).unwrap();
        assert_eq!(c.y() + c.height(), 80.0);
    }
}

#[test]
fn test_align_refreshes_overlaps() {
    let (mut state, _) = state_with_three();
    assert!(state.overlaps().is_clear());
    state.align_selected(Alignment::Top).unwrap();
    state.align_selected(Alignment::Left).unwrap();
    // All three now share the same rectangle.
    assert_eq!(state.overlaps().len(), 3);
}

#[test]
fn test_align_single_selection_noop() {
    let (mut state, ids) = state_with_three();
    state.select_component(ids[1], false);
    assert_eq!(state.align_selected(Alignment::Left).unwrap(), 0);
    assert_eq!(state.layout().component(ids[1]).unwrap().x(), 100.0);
}

#[test]
fn test_set_selected_coordinates() {
    let (mut state, ids) = state_with_three();
    state.set_selected_y(500.0).unwrap();
    assert!(ids
        .iter()
        .all(|id| state.layout().component(*id).unwrap().y() == 500.0));

    state.deselect_all();
    assert!(state.set_selected_x(1.0).is_err());
}

#[test]
fn test_fractional_right_and_bottom_edges_land_on_target() {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(0.3, 0.7).unwrap())
        .unwrap();
    let ids = vec![
        state.add_component_at(0.1, 0.2).unwrap(),
        state.add_component_at(0.7, 1.1).unwrap(),
        state.add_component_at(2.35, 0.05).unwrap(),
    ];
    for id in &ids {
        state.select_component(*id, true);
    }

    let right = alignment_target(state.layout(), &ids, Alignment::Right).unwrap();
    state.align_selected(Alignment::Right).unwrap();
    let bottom = alignment_target(state.layout(), &ids, Alignment::Bottom).unwrap();
    state.align_selected(Alignment::Bottom).unwrap();

    for id in &ids {
        let c = state.layout().component(*id).unwrap();
        assert_eq!(c.bounds().max_x, right);
        assert_eq!(c.bounds().max_y, bottom);
        assert_eq!((c.width(), c.height()), (0.3, 0.7));
    }
}

#[test]
fn test_set_selected_x_is_exact() {
    let (mut state, ids) = state_with_three();
    assert_eq!(state.set_selected_x(0.1 + 0.2).unwrap(), 3);
    for id in &ids {
        let c = state.layout().component(*id).unwrap();
        assert_eq!(c.x(), 0.1 + 0.2);
        assert_eq!(c.width(), 20.0);
    }
}

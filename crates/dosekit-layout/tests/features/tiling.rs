use dosekit_core::{Error, TileError};
use dosekit_layout::{ComponentTemplate, GridTileParams, LayoutState, LinearTileParams};

fn state() -> LayoutState {
    let mut state = LayoutState::new();
    state
        .set_template(ComponentTemplate::new(10.0, 10.0).unwrap())
        .unwrap();
    state
}

#[test]
fn test_linear_tile_positions() {
    let mut state = state();
    let ids = state
        .tile_linear(&LinearTileParams::new(0.0, 0.0, 10.0, 0.0, 5))
        .unwrap();
    let xs: Vec<f64> = ids
        .iter()
        .map(|id| state.layout().component(*id).unwrap().x())
        .collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    assert!(ids
        .iter()
        .all(|id| state.layout().component(*id).unwrap().y() == 0.0));
    // Adjacent tiles touch but do not overlap.
    assert!(state.overlaps().is_clear());
    assert_eq!(state.selected_ids(), ids);
}

#[test]
fn test_tiles_unassigned_without_current_group() {
    let mut state = state();
    let ids = state
        .tile_linear(&LinearTileParams::new(0.0, 0.0, 0.0, 20.0, 3))
        .unwrap();
    assert_eq!(state.layout().unassigned(), ids);
}

#[test]
fn test_tiles_join_current_group() {
    let mut state = state();
    let group = state.new_group("120", Some("red")).unwrap();
    let ids = state
        .tile_linear(&LinearTileParams::new(0.0, 0.0, 0.0, 20.0, 3))
        .unwrap();
    assert_eq!(state.layout().members(group), ids);
}

#[test]
fn test_invalid_tile_leaves_layout_unchanged() {
    let mut state = state();
    state.add_component().unwrap();
    let before = state.layout().component_count();

    for params in [
        LinearTileParams::new(0.0, 0.0, 10.0, 0.0, 0),
        LinearTileParams::new(0.0, 0.0, 10.0, 0.0, -2),
        LinearTileParams::new(0.0, 0.0, 0.0, 0.0, 4),
        LinearTileParams::new(f64::INFINITY, 0.0, 1.0, 0.0, 2),
    ] {
        let err = state.tile_linear(&params).unwrap_err();
        assert!(err.is_tile_error(), "{params:?} -> {err}");
    }
    assert_eq!(state.layout().component_count(), before);
}

#[test]
fn test_overflowing_tile_run_is_rejected_whole() {
    let mut state = state();
    let params = LinearTileParams::new(0.0, 0.0, f64::MAX, 0.0, 3);
    assert!(matches!(state.tile_linear(&params), Err(Error::Layout(_))));
    assert!(state.layout().is_empty());
}

#[test]
fn test_grid_tile_with_gaps() {
    let mut state = state();
    let ids = state
        .tile_grid(&GridTileParams::new(5.0, 5.0, 2.0, 3.0, 4, 3))
        .unwrap();
    assert_eq!(ids.len(), 12);
    let last = state.layout().component(ids[11]).unwrap();
    assert_eq!((last.x(), last.y()), (5.0 + 3.0 * 12.0, 5.0 + 2.0 * 13.0));
    assert!(state.overlaps().is_clear());
}

#[test]
fn test_grid_with_negative_gap_overlaps() {
    let mut state = state();
    state
        .tile_grid(&GridTileParams::new(0.0, 0.0, -5.0, 0.0, 3, 1))
        .unwrap();
    assert_eq!(state.overlaps().len(), 2);
}

#[test]
fn test_grid_rejects_zero_rows() {
    let mut state = state();
    assert!(matches!(
        state.tile_grid(&GridTileParams::new(0.0, 0.0, 1.0, 1.0, 3, 0)),
        Err(Error::Tile(TileError::InvalidCount { count: 0 }))
    ));
}

#[test]
fn test_huge_tile_count_rejected_without_change() {
    let mut state = state();
    let err = state
        .tile_linear(&LinearTileParams::new(0.0, 0.0, 1.0, 0.0, i64::MAX))
        .unwrap_err();
    assert!(matches!(err, Error::Tile(TileError::TooMany { .. })));

    let err = state
        .tile_grid(&GridTileParams::new(0.0, 0.0, 0.0, 0.0, 1_000_000, 1_000_000))
        .unwrap_err();
    assert!(err.is_tile_error());
    assert!(state.layout().is_empty());
    assert!(!state.is_modified);
}

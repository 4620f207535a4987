use dosekit_layout::{find_overlaps, find_overlaps_naive, Layout};

#[test]
fn test_positive_area_pairs_reported_boundary_pairs_not() {
    let mut layout = Layout::with_cell_size(16.0);
    let a = layout.add_component(0.0, 0.0, 100.0, 100.0, None).unwrap();
    let touching = layout.add_component(100.0, 0.0, 100.0, 100.0, None).unwrap();
    let corner = layout.add_component(200.0, 100.0, 50.0, 50.0, None).unwrap();
    let inside = layout.add_component(40.0, 40.0, 10.0, 10.0, None).unwrap();
    let sliver = layout.add_component(99.5, 50.0, 10.0, 10.0, None).unwrap();

    let report = find_overlaps(&layout);
    assert_eq!(
        report.pairs(),
        &[(a, inside), (a, sliver), (touching, sliver)]
    );
    assert!(!report.involves(corner));
    assert_eq!(report, find_overlaps_naive(&layout));
}

#[test]
fn test_grid_matches_naive_on_dense_layout() {
    let mut layout = Layout::with_cell_size(32.0);
    for i in 0..20 {
        for j in 0..10 {
            let x = i as f64 * 37.0 + (j % 3) as f64 * 5.0;
            let y = j as f64 * 41.0 + (i % 4) as f64 * 7.0;
            layout.add_component(x, y, 40.0, 40.0, None).unwrap();
        }
    }
    let grid = find_overlaps(&layout);
    assert!(!grid.is_clear());
    assert_eq!(grid, find_overlaps_naive(&layout));
}

#[test]
fn test_report_follows_moves() {
    let mut layout = Layout::new();
    let a = layout.add_component(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = layout.add_component(5.0, 0.0, 10.0, 10.0, None).unwrap();
    assert_eq!(find_overlaps(&layout).pairs(), &[(a, b)]);

    layout.move_component(b, 5.0, 0.0).unwrap();
    assert!(find_overlaps(&layout).is_clear());
}

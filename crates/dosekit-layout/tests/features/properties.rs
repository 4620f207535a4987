use dosekit_layout::{
    calculate_alignment_deltas, find_overlaps, find_overlaps_naive, partition_non_overlapping,
    Alignment, Bounds, Layout,
};
use proptest::prelude::*;

fn rect() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (0i32..400, 0i32..400, 1i32..80, 1i32..80)
        .prop_map(|(x, y, w, h)| (x as f64, y as f64, w as f64, h as f64))
}

fn layout_from(rects: &[(f64, f64, f64, f64)], cell: f64) -> Layout {
    let mut layout = Layout::with_cell_size(cell);
    for &(x, y, w, h) in rects {
        layout.add_component(x, y, w, h, None).unwrap();
    }
    layout
}

proptest! {
    #[test]
    fn grid_and_naive_overlap_agree(
        rects in prop::collection::vec(rect(), 0..40),
        cell in 4.0f64..200.0,
    ) {
        let layout = layout_from(&rects, cell);
        prop_assert_eq!(find_overlaps(&layout), find_overlaps_naive(&layout));
    }

    #[test]
    fn overlap_is_symmetric_and_strict(a in rect(), b in rect()) {
        let ba = Bounds::from_rect(a.0, a.1, a.2, a.3);
        let bb = Bounds::from_rect(b.0, b.1, b.2, b.3);
        prop_assert_eq!(ba.overlaps(&bb), bb.overlaps(&ba));
        if ba.overlaps(&bb) {
            let shared = ba.intersection(&bb).unwrap();
            prop_assert!(shared.area() > 0.0);
        }
    }

    #[test]
    fn align_left_sets_min_x_and_keeps_y(rects in prop::collection::vec(rect(), 2..12)) {
        let mut layout = layout_from(&rects, 64.0);
        let ids = layout.component_ids();
        let min_x = rects.iter().map(|r| r.0).fold(f64::INFINITY, f64::min);

        for (id, dx, dy) in calculate_alignment_deltas(&layout, &ids, Alignment::Left) {
            layout.move_component(id, dx, dy).unwrap();
        }
        for (id, r) in ids.iter().zip(&rects) {
            let c = layout.component(*id).unwrap();
            prop_assert_eq!(c.x(), min_x);
            prop_assert_eq!(c.y(), r.1);
        }
    }

    #[test]
    fn partition_batches_never_overlap(rects in prop::collection::vec(rect(), 0..30)) {
        let layout = layout_from(&rects, 64.0);
        let batches = partition_non_overlapping(&layout);
        let total: usize = batches.iter().map(Vec::len).sum();
        prop_assert_eq!(total, layout.component_count());

        let report = find_overlaps(&layout);
        for batch in &batches {
            for (i, a) in batch.iter().enumerate() {
                for b in &batch[i + 1..] {
                    prop_assert!(!report.pairs().contains(&(*a.min(b), *a.max(b))));
                }
            }
        }
    }
}

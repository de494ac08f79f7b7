//! Property-based tests for the XY-Cut sorter
//!
//! - Output is always a permutation of the input positions
//! - Order is invariant under translation within the page
//! - Larger minimum gaps never produce more segments

use proptest::prelude::*;
use xycut_reading_order::{split_profile, Direction, XYCut, XYCutConfig};

fn arb_box() -> impl Strategy<Value = [f32; 4]> {
    (-100.0f32..1100.0, -100.0f32..1100.0, 0.0f32..400.0, 0.0f32..400.0)
        .prop_map(|(x, y, w, h)| [x, y, x + w, y + h])
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Horizontal),
        Just(Direction::Vertical),
        Just(Direction::Auto),
    ]
}

fn sorter(direction: Direction, min_gap_ratio: f32) -> XYCut {
    sorter_with_min_value(direction, min_gap_ratio, 0.0)
}

fn sorter_with_min_value(direction: Direction, min_gap_ratio: f32, min_value_ratio: f32) -> XYCut {
    XYCut::new(
        XYCutConfig::default()
            .with_direction(direction)
            .with_min_gap_ratio(min_gap_ratio)
            .with_min_value_ratio(min_value_ratio),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn proptest_output_is_permutation(
        boxes in prop::collection::vec(arb_box(), 0..40),
        width in 0u32..1200,
        height in 0u32..1200,
        direction in arb_direction(),
        min_gap_ratio in 0.0f32..0.2,
        min_value_ratio in 0.0f32..4.0,
    ) {
        let order = sorter_with_min_value(direction, min_gap_ratio, min_value_ratio)
            .sort(&boxes, width, height);

        let mut seen = order.into_inner();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..boxes.len()).collect::<Vec<_>>());
    }

    #[test]
    fn proptest_degenerate_boxes_are_permuted(
        points in prop::collection::vec((0.0f32..100.0, 0.0f32..100.0), 0..20),
        direction in arb_direction(),
    ) {
        let boxes: Vec<[f32; 4]> = points.iter().map(|&(x, y)| [x, y, x, y]).collect();
        let mut seen = sorter(direction, 0.05).sort(&boxes, 100, 100).into_inner();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..boxes.len()).collect::<Vec<_>>());
    }

    #[test]
    fn proptest_singleton(b in arb_box(), direction in arb_direction()) {
        let order = sorter(direction, 0.05).sort(&[b], 1000, 1000);
        prop_assert_eq!(order.as_slice(), &[0]);
    }

    #[test]
    fn proptest_deterministic(boxes in prop::collection::vec(arb_box(), 0..30)) {
        let xy = XYCut::default();
        prop_assert_eq!(xy.sort(&boxes, 1000, 1000), xy.sort(&boxes, 1000, 1000));
    }

    #[test]
    fn proptest_translation_invariant(
        raw in prop::collection::vec((0u16..600, 0u16..600, 1u16..200, 1u16..200), 1..25),
        dx in 0u16..=200,
        dy in 0u16..=200,
    ) {
        let boxes: Vec<[f32; 4]> = raw
            .iter()
            .map(|&(x, y, w, h)| [x as f32, y as f32, (x + w) as f32, (y + h) as f32])
            .collect();
        let shifted: Vec<[f32; 4]> = boxes
            .iter()
            .map(|b| {
                let (dx, dy) = (dx as f32, dy as f32);
                [b[0] + dx, b[1] + dy, b[2] + dx, b[3] + dy]
            })
            .collect();

        let xy = XYCut::default();
        prop_assert_eq!(xy.sort(&boxes, 1000, 1000), xy.sort(&shifted, 1000, 1000));
    }

    #[test]
    fn proptest_larger_gap_never_adds_segments(
        histogram in prop::collection::vec(0u32..3, 0..300),
        small in 1usize..50,
        extra in 0usize..50,
    ) {
        let fine = split_profile(&histogram, 0, small).len();
        let coarse = split_profile(&histogram, 0, small + extra).len();
        prop_assert!(coarse <= fine);
    }
}

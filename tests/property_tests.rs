use hitzone::zone::{aggregate, Point};
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_point() -> impl Strategy<Value = Point> {
    (0u8..100, 0u8..100).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec(arb_point(), 0..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_aggregate_is_order_independent(
        hits in arb_points(200),
        strikes in arb_points(200),
        boxes in 1usize..=100
    ) {
        let forward = aggregate(&hits, &strikes, boxes).unwrap();

        let mut hits_rev = hits.clone();
        let mut strikes_rev = strikes.clone();
        hits_rev.reverse();
        strikes_rev.reverse();
        let backward = aggregate(&hits_rev, &strikes_rev, boxes).unwrap();

        prop_assert_eq!(forward.cells, backward.cells);
        prop_assert_eq!(forward.bounds, backward.bounds);
    }

    #[test]
    fn test_bounds_straddle_zero(
        hits in arb_points(200),
        strikes in arb_points(200),
        boxes in 1usize..=100
    ) {
        let map = aggregate(&hits, &strikes, boxes).unwrap();
        prop_assert!(map.bounds.min <= 0);
        prop_assert!(map.bounds.max >= 0);
        for row in &map.cells {
            for &score in row {
                prop_assert!(score <= map.bounds.max);
                prop_assert!(score >= map.bounds.min);
            }
        }
    }

    #[test]
    fn test_total_magnitude_bounded_by_input(
        hits in arb_points(200),
        strikes in arb_points(200),
        boxes in 1usize..=100
    ) {
        let map = aggregate(&hits, &strikes, boxes).unwrap();
        let total: i64 = map.cells.iter().flatten().map(|&s| s.abs() as i64).sum();
        prop_assert!(total <= (hits.len() + strikes.len()) as i64);
    }

    #[test]
    fn test_paired_points_net_to_zero(
        points in arb_points(200),
        boxes in 1usize..=100
    ) {
        // The same set as both hits and strikes cancels everywhere.
        let map = aggregate(&points, &points, boxes).unwrap();
        for row in &map.cells {
            for &score in row {
                prop_assert_eq!(score, 0);
            }
        }
    }

    #[test]
    fn test_every_point_lands_in_some_cell(
        hits in arb_points(200),
        boxes in 1usize..=100
    ) {
        let map = aggregate(&hits, &[], boxes).unwrap();
        let total: i64 = map.cells.iter().flatten().map(|&s| s as i64).sum();
        prop_assert_eq!(total, hits.len() as i64);
    }
}

use line_chart::core::{PathCommand, PixelPoint, monotone_x_path};
use proptest::prelude::*;

fn samples(steps: Vec<(f64, f64)>) -> Vec<PixelPoint> {
    let mut x = 0.0;
    steps
        .into_iter()
        .map(|(dx, y)| {
            x += dx;
            PixelPoint::new(x, y)
        })
        .collect()
}

proptest! {
    #[test]
    fn monotone_path_never_overshoots_between_samples(
        steps in prop::collection::vec((0.5f64..50.0, -500.0f64..500.0), 3..64)
    ) {
        let points = samples(steps);
        let path = monotone_x_path(&points);
        prop_assert_eq!(path.len(), points.len());

        for (segment, pair) in path[1..].iter().zip(points.windows(2)) {
            let PathCommand::CubicTo { x1, y1, x2, y2, x, y } = *segment else {
                return Err(TestCaseError::fail("expected cubic segment"));
            };
            let low = pair[0].y.min(pair[1].y) - 1e-9;
            let high = pair[0].y.max(pair[1].y) + 1e-9;
            prop_assert!((low..=high).contains(&y1));
            prop_assert!((low..=high).contains(&y2));
            prop_assert!(x1 >= pair[0].x && x1 <= x2 && x2 <= pair[1].x);
            prop_assert_eq!(x, pair[1].x);
            prop_assert_eq!(y, pair[1].y);
        }
    }

    #[test]
    fn monotone_path_is_deterministic(
        steps in prop::collection::vec((0.5f64..50.0, -500.0f64..500.0), 1..32)
    ) {
        let points = samples(steps);
        prop_assert_eq!(monotone_x_path(&points), monotone_x_path(&points));
    }
}

use super::*;

#[test]
fn evaluates_one_hundred_points_over_fixed_domain() {
    let pairs = [
        CoefficientPair::new(-2.0, -2.0),
        CoefficientPair::new(-0.75, 0.5),
        CoefficientPair::new(0.3, 1.7),
        CoefficientPair::new(2.0, 2.0),
    ];

    for pair in pairs {
        let series = evaluate(pair);
        assert_eq!(series.len(), SAMPLE_COUNT);
        for (i, point) in series.points().iter().enumerate() {
            let x = i as f64 * 0.01;
            assert_eq!(point.x, x);
            assert_eq!(point.y, pair.a() * x + pair.b() * (1.0 - pair.a()));
        }
    }
}

#[test]
fn identity_ignores_coefficients() {
    let series = identity();
    assert_eq!(series.len(), SAMPLE_COUNT);
    assert!(series.points().iter().all(|p| p.x == p.y));
    assert_eq!(series.points()[99].x, 99.0 * 0.01);
}

#[test]
fn evaluate_is_bit_identical_across_calls() {
    let pair = CoefficientPair::new(1.234, -0.567);
    let first = evaluate(pair);
    let second = evaluate(pair);
    for (l, r) in first.points().iter().zip(second.points()) {
        assert_eq!(l.x.to_bits(), r.x.to_bits());
        assert_eq!(l.y.to_bits(), r.y.to_bits());
    }
}

#[test]
fn default_pair_matches_known_values() {
    let series = evaluate(CoefficientPair::default());
    assert_eq!(series.points()[0].y, 0.875);
    assert_eq!(series.points()[50].x, 0.5);
    assert_eq!(series.points()[50].y, 0.5);
}

#[test]
fn zero_slope_gives_constant_series() {
    let series = evaluate(CoefficientPair::new(0.0, 0.5));
    assert!(series.points().iter().all(|p| p.y == 0.5));
}

#[test]
fn unit_slope_coincides_with_identity() {
    let series = evaluate(CoefficientPair::new(1.0, 1.3));
    assert_eq!(series, identity());
}

#[test]
fn all_zero_pair_gives_all_zero_series() {
    let series = evaluate(CoefficientPair::new(0.0, 0.0));
    assert!(series.points().iter().all(|p| p.y == 0.0));
    assert_eq!(series.max_y(), Some(0.0));
}

#[test]
fn fixed_point_is_b_unless_slope_is_one() {
    assert_eq!(fixed_point(CoefficientPair::default()), Some(0.5));
    let pair = CoefficientPair::new(0.25, -1.0);
    assert_eq!(progression(pair, -1.0), -1.0);
    assert_eq!(fixed_point(CoefficientPair::new(1.0, 0.2)), None);
}

#[test]
fn series_serializes_as_point_objects() {
    let series = identity();
    let json = serde_json::to_value(&series).expect("serialize");
    let points = json["points"].as_array().expect("points array");
    assert_eq!(points.len(), SAMPLE_COUNT);
    assert_eq!(points[0], serde_json::json!({ "x": 0.0, "y": 0.0 }));
}

//! Progression model: the mapping `y = a*x + b*(1-a)` sampled over `[0, 1)`.

use crate::domain::{CoefficientPair, Point, PointSeries};

pub const SAMPLE_COUNT: usize = 100;
pub const SAMPLE_STEP: f64 = 0.01;

/// The fixed x domain shared by every series: `i * 0.01` for `i = 0..100`.
pub fn sample_domain() -> impl Iterator<Item = f64> {
    (0..SAMPLE_COUNT).map(|i| i as f64 * SAMPLE_STEP)
}

pub fn progression(pair: CoefficientPair, x: f64) -> f64 {
    pair.a() * x + pair.b() * (1.0 - pair.a())
}

pub fn evaluate(pair: CoefficientPair) -> PointSeries {
    sample_domain()
        .map(|x| Point {
            x,
            y: progression(pair, x),
        })
        .collect()
}

pub fn identity() -> PointSeries {
    sample_domain().map(|x| Point { x, y: x }).collect()
}

/// Value left unchanged by the mapping. Every value is fixed when `a == 1`,
/// which is reported as `None`.
pub fn fixed_point(pair: CoefficientPair) -> Option<f64> {
    if pair.a() == 1.0 {
        None
    } else {
        Some(pair.b())
    }
}

#[cfg(test)]
#[path = "tests/progression_tests.rs"]
mod tests;

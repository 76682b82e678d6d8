//! Linear scales and axis tick generation for the chart.

/// Maps a continuous domain onto a pixel range. The range may be inverted
/// (`range.0 > range.1`) for a vertical axis that grows upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// A collapsed (or non-finite) domain maps every value to the middle of
    /// the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let decimals = tick_step(self.domain.0, self.domain.1, count)
            .map(decimals_for_step)
            .unwrap_or(0);
        move |value| format!("{:.*}", decimals, if value == 0.0 { 0.0 } else { value })
    }
}

/// Step between ticks, picked from 1, 2 and 5 times a power of ten.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let span = (stop - start).abs();
    if count == 0 || span == 0.0 || !span.is_finite() {
        return None;
    }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(factor * power)
}

/// Round tick values covering `[start, stop]` (in either order), ascending.
/// A collapsed domain yields its single value.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let Some(step) = tick_step(start, stop, count) else {
        return Vec::new();
    };
    let (lo, hi) = if start < stop {
        (start, stop)
    } else {
        (stop, start)
    };

    // Divide by the inverse step for sub-unit steps to keep 0.1 * 3 == 0.3.
    if step < 1.0 {
        let inverse = (1.0 / step).round();
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        (first..=last).map(|i| i as f64 / inverse).collect()
    } else {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

fn decimals_for_step(step: f64) -> usize {
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

#[cfg(test)]
#[path = "tests/scale_tests.rs"]
mod tests;

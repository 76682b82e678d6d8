use serde::{Deserialize, Serialize};

pub const COEFFICIENT_MIN: f64 = -2.0;
pub const COEFFICIENT_MAX: f64 = 2.0;
/// Control steps per unit; the committed step is `1 / STEPS_PER_UNIT`.
pub const STEPS_PER_UNIT: f64 = 1000.0;

pub const DEFAULT_A: f64 = -0.75;
pub const DEFAULT_B: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coefficient {
    A,
    B,
}

impl Coefficient {
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// Both values always lie in `[COEFFICIENT_MIN, COEFFICIENT_MAX]`. Fields are
/// private so every construction path goes through the clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PairFields")]
pub struct CoefficientPair {
    a: f64,
    b: f64,
}

#[derive(Deserialize)]
struct PairFields {
    a: f64,
    b: f64,
}

impl From<PairFields> for CoefficientPair {
    fn from(fields: PairFields) -> Self {
        Self::new(fields.a, fields.b)
    }
}

impl CoefficientPair {
    /// Builds a pair with both values clamped into the permitted range. A
    /// non-finite value falls back to that coefficient's default.
    pub fn new(a: f64, b: f64) -> Self {
        Self::default().with(Coefficient::A, a).with(Coefficient::B, b)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn get(&self, coefficient: Coefficient) -> f64 {
        match coefficient {
            Coefficient::A => self.a,
            Coefficient::B => self.b,
        }
    }

    /// Replaces one coefficient. Non-finite input leaves the pair unchanged.
    pub fn with(mut self, coefficient: Coefficient, value: f64) -> Self {
        if let Some(value) = clamp_coefficient(value) {
            match coefficient {
                Coefficient::A => self.a = value,
                Coefficient::B => self.b = value,
            }
        }
        self
    }
}

impl Default for CoefficientPair {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
        }
    }
}

/// `None` for NaN and infinities; callers keep their previous value.
pub fn clamp_coefficient(value: f64) -> Option<f64> {
    value
        .is_finite()
        .then(|| value.clamp(COEFFICIENT_MIN, COEFFICIENT_MAX))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointSeries {
    points: Vec<Point>,
}

impl PointSeries {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest y value, or `None` for an empty series.
    pub fn max_y(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(None, |acc, y| match acc {
                Some(m) if m >= y => Some(m),
                _ => Some(y),
            })
    }
}

impl FromIterator<Point> for PointSeries {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

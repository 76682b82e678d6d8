//! Bounded continuous inputs for the two coefficients.

use crate::domain::{
    clamp_coefficient, Coefficient, CoefficientPair, COEFFICIENT_MAX, COEFFICIENT_MIN,
    STEPS_PER_UNIT,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientControl {
    coefficient: Coefficient,
    value: f64,
}

impl CoefficientControl {
    pub fn new(coefficient: Coefficient, initial: f64) -> Self {
        let mut control = Self {
            coefficient,
            value: CoefficientPair::default().get(coefficient),
        };
        control.set(initial);
        control
    }

    pub fn coefficient(&self) -> Coefficient {
        self.coefficient
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        COEFFICIENT_MIN
    }

    pub fn max(&self) -> f64 {
        COEFFICIENT_MAX
    }

    pub fn step(&self) -> f64 {
        1.0 / STEPS_PER_UNIT
    }

    /// Snaps `value` to the step grid and clamps it into range. Non-finite
    /// input leaves the control untouched. Returns the committed value.
    pub fn set(&mut self, value: f64) -> f64 {
        if let Some(value) = clamp_coefficient(value) {
            self.value = (value * STEPS_PER_UNIT).round() / STEPS_PER_UNIT;
        }
        self.value
    }

    /// `a = -0.75`
    pub fn display_value(&self) -> String {
        format!("{} = {:.2}", self.coefficient.label(), self.value)
    }
}

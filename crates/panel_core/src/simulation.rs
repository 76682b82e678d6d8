//! Boundary to the external interactive simulation.
//!
//! A simulation receives a frozen [`SimulationConfig`] when it is mounted and
//! reports its session key back through a [`KeyReporter`]. Nothing in the core
//! depends on what the simulation does in between.

use std::{fmt, rc::Rc};

use serde::Serialize;

use crate::domain::CoefficientPair;
use crate::session::SessionKey;

/// Original sizing: the simulation takes a bit under half the window width
/// and the full height minus a header band.
const WIDTH_DIVISOR: f64 = 2.2;
const HEIGHT_RESERVE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationViewport {
    pub width: f64,
    pub height: f64,
}

impl SimulationViewport {
    pub fn from_window(window_width: f64, window_height: f64) -> Self {
        Self {
            width: (window_width / WIDTH_DIVISOR).max(1.0),
            height: (window_height - HEIGHT_RESERVE).max(1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub a: f64,
    pub b: f64,
    pub label: String,
}

impl SimulationConfig {
    pub fn freeze(pair: CoefficientPair, viewport: SimulationViewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            a: pair.a(),
            b: pair.b(),
            label: session_label(pair),
        }
    }

    pub fn pair(&self) -> CoefficientPair {
        CoefficientPair::new(self.a, self.b)
    }
}

pub fn session_label(pair: CoefficientPair) -> String {
    format!("custom-a={:.3}-b={:.3}", pair.a(), pair.b())
}

/// Callback handle given to a mounted simulation. `report` stores the key,
/// logs it and notifies observers before it returns.
#[derive(Clone)]
pub struct KeyReporter {
    sink: Rc<dyn Fn(SessionKey)>,
}

impl KeyReporter {
    pub(crate) fn new(sink: impl Fn(SessionKey) + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    pub fn report(&self, key: impl Into<String>) {
        (self.sink)(SessionKey::new(key));
    }
}

impl fmt::Debug for KeyReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyReporter").finish_non_exhaustive()
    }
}

pub trait SimulationFactory {
    type Simulation;

    fn mount(&mut self, config: SimulationConfig, reporter: KeyReporter) -> Self::Simulation;
}

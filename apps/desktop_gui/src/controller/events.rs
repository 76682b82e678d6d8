//! Events collected while drawing a frame, applied once the frame is laid out.

use panel_core::Coefficient;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    CoefficientChanged {
        coefficient: Coefficient,
        value: f64,
    },
    StartRequested,
    ViewDataRequested(String),
    SimulationKeyPressed,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CoefficientChanged { .. } => "coefficient_changed",
            Self::StartRequested => "start_requested",
            Self::ViewDataRequested(_) => "view_data_requested",
            Self::SimulationKeyPressed => "simulation_key_pressed",
        }
    }
}

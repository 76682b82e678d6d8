//! Applies queued UI events to the panel in the order they were raised.

use panel_core::{PanelController, SimulationViewport, StartOutcome};

use crate::controller::events::UiEvent;
use crate::simulation::BallFactory;

pub fn dispatch_ui_event(
    panel: &mut PanelController<BallFactory>,
    event: UiEvent,
    viewport: SimulationViewport,
    status: &mut String,
) {
    tracing::trace!(event = event.name(), "dispatching ui event");
    match event {
        UiEvent::CoefficientChanged { coefficient, value } => {
            panel.on_coefficient_change(coefficient, value);
        }
        UiEvent::StartRequested => {
            if let StartOutcome::Started(config) = panel.start(viewport) {
                *status = format!("Session started ({})", config.label);
            }
        }
        UiEvent::ViewDataRequested(route) => {
            tracing::info!(route = %route, "navigation requested");
            *status = format!("Session data is available at {route}");
        }
        UiEvent::SimulationKeyPressed => {
            if let Some(simulation) = panel.simulation_mut() {
                simulation.press();
            }
        }
    }
}

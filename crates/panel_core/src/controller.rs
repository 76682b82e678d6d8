//! Panel controller: the composition root tying controls, model, renderer,
//! session machine and the simulation boundary together.
//!
//! Every coefficient change runs the explicit chain
//! `on_coefficient_change -> recompute -> redraw` before returning, so the
//! mounted surface never shows a chart for a stale pair.

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use crate::config::Settings;
use crate::controls::CoefficientControl;
use crate::domain::{Coefficient, CoefficientPair, PointSeries};
use crate::progression::{self, evaluate, identity};
use crate::render::SeriesRenderer;
use crate::session::{KeyRecord, SessionKey, SessionMachine, StartOutcome};
use crate::simulation::{KeyReporter, SimulationConfig, SimulationFactory, SimulationViewport};
use crate::surface::{Scene, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum PanelUpdate {
    ChartRedrawn(CoefficientPair),
    SessionStarted(SimulationConfig),
    SessionKeyReported {
        key: SessionKey,
        navigation_target: String,
    },
}

/// What a host should show.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// Controls, chart and the start action.
    Configuring,
    /// The mounted simulation, plus a link once a key is known.
    Running { navigation_target: Option<String> },
}

type Observer = Box<dyn FnMut(&PanelUpdate)>;

/// Session state and observers shared with every [`KeyReporter`] handed out,
/// so a report lands in the same call that made it.
struct SessionHub {
    route_prefix: String,
    session: RefCell<SessionMachine>,
    observers: RefCell<Vec<Observer>>,
}

impl SessionHub {
    fn record_key(&self, key: SessionKey) {
        let record = self.session.borrow_mut().record_key(key.clone());
        match record {
            KeyRecord::Stored => tracing::info!(key = %key, "session key reported"),
            KeyRecord::Replaced(previous) => {
                tracing::info!(key = %key, previous = %previous, "session key replaced")
            }
            KeyRecord::HeldUntilStart => {
                tracing::warn!(key = %key, "session key reported before the session started");
                return;
            }
        }
        self.notify_key(key);
    }

    fn notify_key(&self, key: SessionKey) {
        let navigation_target = key.route_under(&self.route_prefix);
        self.notify(PanelUpdate::SessionKeyReported {
            key,
            navigation_target,
        });
    }

    fn notify(&self, update: PanelUpdate) {
        let Ok(mut observers) = self.observers.try_borrow_mut() else {
            tracing::warn!(?update, "update raised from inside an observer was not delivered");
            return;
        };
        for observer in observers.iter_mut() {
            observer(&update);
        }
    }
}

pub struct PanelController<F: SimulationFactory, S: Surface = Scene> {
    route_label: String,
    pair: CoefficientPair,
    control_a: CoefficientControl,
    control_b: CoefficientControl,
    hub: Rc<SessionHub>,
    renderer: SeriesRenderer,
    surface: S,
    factory: F,
    simulation: Option<F::Simulation>,
}

impl<F: SimulationFactory> PanelController<F, Scene> {
    /// Controller drawing onto a retained scene sized from `settings`.
    pub fn with_scene(route_label: impl Into<String>, settings: &Settings, factory: F) -> Self {
        let scene = Scene::new(settings.chart_width, settings.chart_height);
        Self::new(route_label, settings, factory, scene)
    }
}

impl<F: SimulationFactory, S: Surface> PanelController<F, S> {
    /// Mounts `surface` and draws the initial chart onto it.
    pub fn new(route_label: impl Into<String>, settings: &Settings, factory: F, surface: S) -> Self {
        let control_a = CoefficientControl::new(Coefficient::A, settings.initial_a);
        let control_b = CoefficientControl::new(Coefficient::B, settings.initial_b);

        let mut controller = Self {
            route_label: route_label.into(),
            pair: CoefficientPair::new(control_a.value(), control_b.value()),
            control_a,
            control_b,
            hub: Rc::new(SessionHub {
                route_prefix: settings.data_route_prefix.clone(),
                session: RefCell::new(SessionMachine::new()),
                observers: RefCell::new(Vec::new()),
            }),
            renderer: SeriesRenderer::new(settings.margins()),
            surface,
            factory,
            simulation: None,
        };
        controller.redraw();
        controller
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&PanelUpdate) + 'static) {
        self.hub.observers.borrow_mut().push(Box::new(observer));
    }

    pub fn route_label(&self) -> &str {
        &self.route_label
    }

    pub fn pair(&self) -> CoefficientPair {
        self.pair
    }

    pub fn control(&self, coefficient: Coefficient) -> &CoefficientControl {
        match coefficient {
            Coefficient::A => &self.control_a,
            Coefficient::B => &self.control_b,
        }
    }

    pub fn fixed_point(&self) -> Option<f64> {
        progression::fixed_point(self.pair)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn session(&self) -> Ref<'_, SessionMachine> {
        self.hub.session.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.hub.session.borrow().is_running()
    }

    pub fn simulation(&self) -> Option<&F::Simulation> {
        self.simulation.as_ref()
    }

    pub fn simulation_mut(&mut self) -> Option<&mut F::Simulation> {
        self.simulation.as_mut()
    }

    /// Commits one control change and redraws. Changes arriving after the
    /// session started are dropped so the frozen config stays as captured.
    pub fn on_coefficient_change(&mut self, coefficient: Coefficient, value: f64) -> CoefficientPair {
        if self.is_running() {
            tracing::debug!(
                coefficient = coefficient.label(),
                value,
                "ignoring coefficient change while running"
            );
            return self.pair;
        }

        let committed = match coefficient {
            Coefficient::A => self.control_a.set(value),
            Coefficient::B => self.control_b.set(value),
        };
        self.pair = self.pair.with(coefficient, committed);
        self.redraw();
        self.pair
    }

    pub fn recompute(&self) -> (PointSeries, PointSeries) {
        (evaluate(self.pair), identity())
    }

    pub fn redraw(&mut self) {
        let (progression, identity) = self.recompute();
        self.renderer
            .render(&progression, &identity, &mut self.surface);
        tracing::debug!(a = self.pair.a(), b = self.pair.b(), "chart redrawn");
        self.hub.notify(PanelUpdate::ChartRedrawn(self.pair));
    }

    /// Moves to running and mounts the simulation with a copy of the current
    /// pair. A second call is a no-op.
    pub fn start(&mut self, viewport: SimulationViewport) -> StartOutcome {
        let outcome = self.hub.session.borrow_mut().start(self.pair, viewport);
        match &outcome {
            StartOutcome::Started(config) => {
                tracing::info!(
                    a = config.a,
                    b = config.b,
                    width = config.width,
                    height = config.height,
                    label = %config.label,
                    "session started"
                );
                self.hub.notify(PanelUpdate::SessionStarted(config.clone()));
                // A key held from before the start is now visible.
                let held = self.hub.session.borrow().session_key().cloned();
                if let Some(key) = held {
                    self.hub.notify_key(key);
                }

                let hub = Rc::clone(&self.hub);
                let reporter = KeyReporter::new(move |key| hub.record_key(key));
                self.simulation = Some(self.factory.mount(config.clone(), reporter));
            }
            StartOutcome::AlreadyRunning => {
                tracing::debug!("start requested while already running");
            }
        }
        outcome
    }

    /// Stores the key and notifies observers, exactly as a
    /// [`KeyReporter`] handle does.
    pub fn report_session_key(&self, key: impl Into<String>) {
        self.hub.record_key(SessionKey::new(key));
    }

    pub fn navigation_target(&self) -> Option<String> {
        self.hub
            .session
            .borrow()
            .session_key()
            .map(|key| key.route_under(&self.hub.route_prefix))
    }

    pub fn view(&self) -> PanelView {
        if self.is_running() {
            PanelView::Running {
                navigation_target: self.navigation_target(),
            }
        } else {
            PanelView::Configuring
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

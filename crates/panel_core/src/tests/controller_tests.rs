use super::*;

use std::{cell::RefCell, rc::Rc};

use crate::session::SessionState;

struct RecordingSimulation {
    config: SimulationConfig,
    reporter: KeyReporter,
}

#[derive(Default)]
struct RecordingFactory {
    mounted: Rc<RefCell<Vec<SimulationConfig>>>,
}

impl SimulationFactory for RecordingFactory {
    type Simulation = RecordingSimulation;

    fn mount(&mut self, config: SimulationConfig, reporter: KeyReporter) -> Self::Simulation {
        self.mounted.borrow_mut().push(config.clone());
        RecordingSimulation { config, reporter }
    }
}

fn viewport() -> SimulationViewport {
    SimulationViewport {
        width: 500.0,
        height: 700.0,
    }
}

fn controller() -> PanelController<RecordingFactory> {
    PanelController::with_scene("custom", &Settings::default(), RecordingFactory::default())
}

#[test]
fn initial_render_happens_on_construction() {
    let panel = controller();
    assert_eq!(panel.pair(), CoefficientPair::default());
    assert_eq!(panel.surface().generation(), 1);
    assert_eq!(panel.surface().paths().count(), 2);
    assert_eq!(panel.view(), PanelView::Configuring);
    assert_eq!(panel.route_label(), "custom");
}

#[test]
fn each_change_triggers_exactly_one_redraw() {
    let mut panel = controller();
    let updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    panel.subscribe(move |update| sink.borrow_mut().push(update.clone()));

    panel.on_coefficient_change(Coefficient::A, 0.1);
    panel.on_coefficient_change(Coefficient::A, 0.2);
    panel.on_coefficient_change(Coefficient::B, 0.2);

    assert_eq!(panel.surface().generation(), 4);
    assert_eq!(
        updates.borrow().as_slice(),
        &[
            PanelUpdate::ChartRedrawn(CoefficientPair::new(0.1, 0.5)),
            PanelUpdate::ChartRedrawn(CoefficientPair::new(0.2, 0.5)),
            PanelUpdate::ChartRedrawn(CoefficientPair::new(0.2, 0.2)),
        ]
    );
}

#[test]
fn chart_tracks_the_current_pair() {
    let mut panel = controller();
    panel.on_coefficient_change(Coefficient::A, 0.0);
    panel.on_coefficient_change(Coefficient::B, 0.5);

    let (progression, identity) = panel.recompute();
    assert!(progression.points().iter().all(|p| p.y == 0.5));
    assert_eq!(identity.len(), 100);

    // The constant is also the top of the y domain.
    let (points, _) = panel.surface().paths().next().expect("progression path");
    assert!(points.iter().all(|&(_, y)| y == 10.0));
}

#[test]
fn out_of_range_input_is_clamped_before_recompute() {
    let mut panel = controller();
    let pair = panel.on_coefficient_change(Coefficient::B, 5.0);
    assert_eq!(pair.b(), 2.0);
    assert_eq!(panel.control(Coefficient::B).value(), 2.0);
}

#[test]
fn start_mounts_simulation_with_frozen_pair() {
    let factory = RecordingFactory::default();
    let mounted = Rc::clone(&factory.mounted);
    let mut panel = PanelController::with_scene("custom", &Settings::default(), factory);
    panel.on_coefficient_change(Coefficient::A, 0.25);

    let outcome = panel.start(viewport());
    let StartOutcome::Started(config) = outcome else {
        panic!("expected transition");
    };
    assert_eq!(config.pair(), CoefficientPair::new(0.25, 0.5));
    assert_eq!(config.label, "custom-a=0.250-b=0.500");
    assert_eq!(mounted.borrow().len(), 1);
    assert_eq!(panel.simulation().map(|s| &s.config), Some(&config));
    assert_eq!(
        panel.view(),
        PanelView::Running {
            navigation_target: None
        }
    );
}

#[test]
fn second_start_is_a_no_op() {
    let factory = RecordingFactory::default();
    let mounted = Rc::clone(&factory.mounted);
    let mut panel = PanelController::with_scene("custom", &Settings::default(), factory);

    panel.start(viewport());
    assert_eq!(panel.start(viewport()), StartOutcome::AlreadyRunning);
    assert_eq!(mounted.borrow().len(), 1);
    assert!(matches!(panel.session().state(), SessionState::Running { .. }));
}

#[test]
fn changes_after_start_do_not_leak_into_the_session() {
    let mut panel = controller();
    panel.start(viewport());
    let generation = panel.surface().generation();

    let pair = panel.on_coefficient_change(Coefficient::A, 1.9);
    assert_eq!(pair, CoefficientPair::default());
    assert_eq!(panel.surface().generation(), generation);
    assert_eq!(
        panel.session().config().map(|c| c.pair()),
        Some(CoefficientPair::default())
    );
}

#[test]
fn reported_key_becomes_navigation_target() {
    let mut panel = controller();
    panel.start(viewport());
    panel.report_session_key("abc123");

    assert_eq!(panel.navigation_target().as_deref(), Some("/data/abc123"));
    assert_eq!(
        panel.view(),
        PanelView::Running {
            navigation_target: Some("/data/abc123".to_string())
        }
    );
}

#[test]
fn simulation_reports_through_its_handle() {
    let mut panel = controller();
    let updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    panel.subscribe(move |update| sink.borrow_mut().push(update.clone()));
    panel.start(viewport());

    let reporter = panel.simulation().expect("mounted").reporter.clone();
    reporter.report("abc123");
    assert_eq!(panel.navigation_target().as_deref(), Some("/data/abc123"));
    assert_eq!(
        updates.borrow().last(),
        Some(&PanelUpdate::SessionKeyReported {
            key: SessionKey::new("abc123"),
            navigation_target: "/data/abc123".to_string(),
        })
    );

    reporter.report("second");
    assert_eq!(panel.navigation_target().as_deref(), Some("/data/second"));
    assert_eq!(
        panel.view(),
        PanelView::Running {
            navigation_target: Some("/data/second".to_string())
        }
    );
}

#[test]
fn key_reported_while_mounting_is_visible_after_start() {
    struct ReportOnMount;

    impl SimulationFactory for ReportOnMount {
        type Simulation = ();

        fn mount(&mut self, _config: SimulationConfig, reporter: KeyReporter) -> Self::Simulation {
            reporter.report("mounted-key");
        }
    }

    let mut panel = PanelController::with_scene("custom", &Settings::default(), ReportOnMount);
    let updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    panel.subscribe(move |update| sink.borrow_mut().push(update.clone()));

    panel.start(viewport());
    assert_eq!(panel.navigation_target().as_deref(), Some("/data/mounted-key"));
    assert!(matches!(
        updates.borrow().as_slice(),
        [PanelUpdate::SessionStarted(_), PanelUpdate::SessionKeyReported { .. }]
    ));
}

#[test]
fn reporting_from_inside_an_observer_still_stores_the_key() {
    let mut panel = controller();
    panel.start(viewport());
    let reporter = panel.simulation().expect("mounted").reporter.clone();
    panel.subscribe(move |update| {
        if let PanelUpdate::SessionKeyReported { key, .. } = update {
            if key.as_str() == "outer" {
                reporter.report("inner");
            }
        }
    });

    panel.report_session_key("outer");
    assert_eq!(panel.navigation_target().as_deref(), Some("/data/inner"));
}

#[test]
fn early_report_is_shown_once_running() {
    let mut panel = controller();
    let updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    panel.subscribe(move |update| sink.borrow_mut().push(update.clone()));

    panel.report_session_key("early");
    assert!(updates.borrow().is_empty());
    assert!(panel.navigation_target().is_none());

    panel.start(viewport());
    assert_eq!(panel.navigation_target().as_deref(), Some("/data/early"));
    assert!(matches!(
        updates.borrow().last(),
        Some(PanelUpdate::SessionKeyReported { key, .. }) if key.as_str() == "early"
    ));
}

#[test]
fn settings_drive_initial_state_and_route_prefix() {
    let settings = Settings {
        initial_a: 0.12345,
        initial_b: -3.0,
        data_route_prefix: "/sessions".into(),
        ..Settings::default()
    };
    let mut panel = PanelController::with_scene("label", &settings, RecordingFactory::default());
    assert_eq!(panel.pair(), CoefficientPair::new(0.123, -2.0));

    panel.start(viewport());
    panel.report_session_key("k");
    assert_eq!(panel.navigation_target().as_deref(), Some("/sessions/k"));
}

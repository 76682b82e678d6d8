use panel_core::{
    render::SeriesRenderer, svg::SvgSurface, Coefficient, CoefficientPair, KeyReporter,
    PanelController, PanelView, Settings, SimulationConfig, SimulationFactory, SimulationViewport,
    StartOutcome,
};

/// Reports its key as soon as it is mounted, like the demo host does.
struct EagerReporter;

impl SimulationFactory for EagerReporter {
    type Simulation = SimulationConfig;

    fn mount(&mut self, config: SimulationConfig, reporter: KeyReporter) -> Self::Simulation {
        reporter.report(format!("session-{}", config.label));
        config
    }
}

#[test]
fn configure_start_and_report_key() {
    let mut panel = PanelController::with_scene("custom", &Settings::default(), EagerReporter);

    // Dragging a slider commits every intermediate value.
    for step in 0..=10 {
        panel.on_coefficient_change(Coefficient::A, -0.75 + step as f64 * 0.1);
    }
    panel.on_coefficient_change(Coefficient::B, 0.0);
    assert_eq!(panel.surface().generation(), 13);
    assert_eq!(panel.pair(), CoefficientPair::new(0.25, 0.0));

    let viewport = SimulationViewport::from_window(1100.0, 800.0);
    assert!(matches!(panel.start(viewport), StartOutcome::Started(_)));

    // The key reported during mount is visible as soon as start returns.
    assert_eq!(
        panel.view(),
        PanelView::Running {
            navigation_target: Some("/data/session-custom-a=0.250-b=0.000".to_string())
        }
    );
    assert_eq!(panel.simulation().map(|c| c.pair()), Some(panel.pair()));
}

#[test]
fn svg_export_contains_both_series() {
    let mut svg = SvgSurface::new(460.0, 400.0);
    let pair = CoefficientPair::default();
    SeriesRenderer::default().render(
        &panel_core::progression::evaluate(pair),
        &panel_core::progression::identity(),
        &mut svg,
    );

    let document = svg.document();
    assert!(document.starts_with("<svg"));
    assert_eq!(document.matches("<path").count(), 2);
    assert!(document.contains("stroke=\"#ff0000\""));
    assert!(document.contains("stroke=\"#008000\""));

    // Rendering again replaces rather than appends.
    SeriesRenderer::default().render(
        &panel_core::progression::evaluate(CoefficientPair::new(0.0, 0.0)),
        &panel_core::progression::identity(),
        &mut svg,
    );
    assert_eq!(svg.document().matches("<path").count(), 2);
}

#[test]
fn svg_export_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.svg");
    let mut svg = SvgSurface::new(460.0, 400.0);
    SeriesRenderer::default().render(
        &panel_core::progression::evaluate(CoefficientPair::default()),
        &panel_core::progression::identity(),
        &mut svg,
    );
    svg.write_to(&path).expect("write svg");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.contains("</svg>"));
}

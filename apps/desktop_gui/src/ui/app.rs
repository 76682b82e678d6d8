use eframe::egui;
use panel_core::{Coefficient, PanelController, PanelView, Settings, SimulationViewport};

use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_ui_event;
use crate::simulation::BallFactory;
use crate::ui::chart::paint_scene;

pub struct PanelApp {
    panel: PanelController<BallFactory>,
    pending: Vec<UiEvent>,
    status: String,
}

impl PanelApp {
    pub fn new(route_label: String, settings: &Settings) -> Self {
        Self {
            panel: PanelController::with_scene(route_label, settings, BallFactory),
            pending: Vec::new(),
            status: String::new(),
        }
    }

    fn show_simulation_column(&mut self, ui: &mut egui::Ui) {
        let (dt, space_pressed) =
            ui.input(|i| (i.stable_dt as f64, i.key_pressed(egui::Key::Space)));

        egui::Frame::group(ui.style()).show(ui, |ui| match self.panel.simulation_mut() {
            Some(simulation) => {
                simulation.step(dt);
                simulation.paint(ui);
                if space_pressed {
                    self.pending.push(UiEvent::SimulationKeyPressed);
                }
            }
            None => {
                ui.label("You must start the session to begin.");
            }
        });
    }

    fn show_description(&self, ui: &mut egui::Ui) {
        ui.label(
            "This is a simple game designed to study how humans and machines interact \
             with each other. Press the spacebar every time the ball hits the bottom of \
             the screen.",
        );
        ui.label(format!(
            "You are currently playing on the {} setting.",
            self.panel.route_label()
        ));
        ui.label(
            "Session data is listed on the data page under the session key. It is kept \
             locally and is purely meant as a demonstration.",
        );
        if let Some(key) = self.panel.session().session_key() {
            ui.label(format!("Session key: {key}"));
        }
    }

    fn show_coefficient_slider(&mut self, ui: &mut egui::Ui, coefficient: Coefficient) {
        let control = self.panel.control(coefficient);
        ui.label(control.display_value());

        let mut value = control.value();
        let slider = egui::Slider::new(&mut value, control.min()..=control.max())
            .step_by(control.step())
            .show_value(false);
        if ui.add(slider).changed() {
            self.pending
                .push(UiEvent::CoefficientChanged { coefficient, value });
        }
        ui.add_space(12.0);
    }

    fn show_settings_column(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            self.show_description(ui);
            ui.separator();

            match self.panel.view() {
                PanelView::Configuring => {
                    paint_scene(ui, self.panel.surface());
                    ui.horizontal(|ui| {
                        ui.colored_label(egui::Color32::from_rgb(255, 0, 0), "progression");
                        ui.colored_label(egui::Color32::from_rgb(0, 128, 0), "y = x");
                        if let Some(fixed) = self.panel.fixed_point() {
                            ui.label(format!("fixed point {fixed:.2}"));
                        }
                    });
                    ui.add_space(8.0);

                    self.show_coefficient_slider(ui, Coefficient::A);
                    self.show_coefficient_slider(ui, Coefficient::B);

                    if ui.button("Start session").clicked() {
                        self.pending.push(UiEvent::StartRequested);
                    }
                }
                PanelView::Running { navigation_target } => {
                    if let Some(simulation) = self.panel.simulation() {
                        ui.label(format!(
                            "Running {} as {} (next bounce peak {:.2})",
                            simulation.config().label,
                            simulation.key(),
                            simulation.next_peak()
                        ));
                    }
                    match navigation_target {
                        Some(route) => {
                            if ui.link("View data").on_hover_text(route.as_str()).clicked() {
                                self.pending.push(UiEvent::ViewDataRequested(route));
                            }
                        }
                        None => {
                            ui.weak("Waiting for the session key…");
                        }
                    }
                }
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.small(self.status.as_str());
            }
        });
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let window = ctx.input(|i| i.screen_rect().size());
        let viewport = SimulationViewport::from_window(window.x as f64, window.y as f64);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.show_simulation_column(&mut columns[0]);
                self.show_settings_column(&mut columns[1]);
            });
        });

        for event in std::mem::take(&mut self.pending) {
            dispatch_ui_event(&mut self.panel, event, viewport, &mut self.status);
        }

        if self.panel.is_running() {
            ctx.request_repaint();
        }
    }
}

//! Bouncing ball: each bounce peak follows the progression function applied
//! to the previous peak. The player presses space whenever the ball touches
//! the floor.

use eframe::egui;
use panel_core::{progression::progression, SimulationConfig};

const GRAVITY: f64 = 2.5;
const MIN_PEAK: f64 = 0.05;
/// Fraction of the height counted as "at the floor" for a key press.
const FLOOR_WINDOW: f64 = 0.06;
const BALL_RADIUS: f32 = 14.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub bounces: u32,
    pub hits: u32,
    pub misses: u32,
}

#[derive(Debug)]
pub struct BallSimulation {
    config: SimulationConfig,
    key: String,
    peak: f64,
    height: f64,
    velocity: f64,
    score: Score,
}

impl BallSimulation {
    pub fn new(config: SimulationConfig, key: String) -> Self {
        Self {
            config,
            key,
            peak: 1.0,
            height: 1.0,
            velocity: 0.0,
            score: Score::default(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Height above the floor in `[0, 1]`.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn next_peak(&self) -> f64 {
        progression(self.config.pair(), self.peak).clamp(MIN_PEAK, 1.0)
    }

    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        self.velocity -= GRAVITY * dt;
        self.height += self.velocity * dt;
        if self.height <= 0.0 {
            self.height = 0.0;
            self.peak = self.next_peak();
            self.velocity = (2.0 * GRAVITY * self.peak).sqrt();
            self.score.bounces += 1;
        }
    }

    pub fn press(&mut self) {
        if self.height <= FLOOR_WINDOW {
            self.score.hits += 1;
        } else {
            self.score.misses += 1;
        }
    }

    pub fn paint(&self, ui: &mut egui::Ui) {
        let size = egui::vec2(self.config.width as f32, self.config.height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(24, 26, 32));

        let floor = rect.bottom() - BALL_RADIUS;
        let travel = (rect.height() - 2.0 * BALL_RADIUS).max(0.0);
        let center = egui::pos2(rect.center().x, floor - travel * self.height as f32);
        painter.circle_filled(center, BALL_RADIUS, egui::Color32::from_rgb(230, 190, 60));

        painter.text(
            rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            format!(
                "bounces {}  hits {}  misses {}",
                self.score.bounces, self.score.hits, self.score.misses
            ),
            egui::FontId::monospace(12.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}

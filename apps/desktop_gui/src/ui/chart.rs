//! Paints the retained chart scene with egui.

use eframe::egui;
use panel_core::surface::{Baseline, Primitive, Rgb, Scene, Surface, TextAnchor};

const LABEL_FONT_SIZE: f32 = 10.0;

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn align(anchor: TextAnchor, baseline: Baseline) -> egui::Align2 {
    match (anchor, baseline) {
        (TextAnchor::Start, Baseline::Top) => egui::Align2::LEFT_TOP,
        (TextAnchor::Middle, Baseline::Top) => egui::Align2::CENTER_TOP,
        (TextAnchor::End, Baseline::Top) => egui::Align2::RIGHT_TOP,
        (TextAnchor::Start, Baseline::Middle) => egui::Align2::LEFT_CENTER,
        (TextAnchor::Middle, Baseline::Middle) => egui::Align2::CENTER_CENTER,
        (TextAnchor::End, Baseline::Middle) => egui::Align2::RIGHT_CENTER,
    }
}

/// Allocates the scene's size in `ui` and paints every primitive it holds.
/// A scene still held by a drawable region shows only its background.
pub fn paint_scene(ui: &mut egui::Ui, scene: &Scene) -> egui::Response {
    let size = scene.size();
    let (response, painter) = ui.allocate_painter(
        egui::vec2(size.width as f32, size.height as f32),
        egui::Sense::hover(),
    );
    let origin = response.rect.min;
    let at = |(x, y): (f64, f64)| origin + egui::vec2(x as f32, y as f32);

    painter.rect_filled(response.rect, 4.0, egui::Color32::WHITE);
    if !scene.is_presented() {
        return response;
    }

    for primitive in scene.primitives() {
        match primitive {
            Primitive::Path { points, stroke } => {
                painter.add(egui::Shape::line(
                    points.iter().copied().map(at).collect(),
                    egui::Stroke::new(stroke.width as f32, color(stroke.color)),
                ));
            }
            Primitive::Line { from, to, stroke } => {
                painter.line_segment(
                    [at(*from), at(*to)],
                    egui::Stroke::new(stroke.width as f32, color(stroke.color)),
                );
            }
            Primitive::Text {
                at: position,
                text,
                anchor,
                baseline,
                color: text_color,
            } => {
                painter.text(
                    at(*position),
                    align(*anchor, *baseline),
                    text,
                    egui::FontId::proportional(LABEL_FONT_SIZE),
                    color(*text_color),
                );
            }
        }
    }

    response
}

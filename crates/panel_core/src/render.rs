//! Series renderer: draws the progression and identity series as a line chart.

use crate::domain::PointSeries;
use crate::scale::LinearScale;
use crate::surface::{
    Baseline, DrawableRegion, Primitive, Rgb, Size, Stroke, Surface, TextAnchor,
};

pub const PROGRESSION_STROKE: Stroke = Stroke::new(Rgb::RED, 1.5);
pub const IDENTITY_STROKE: Stroke = Stroke::new(Rgb::GREEN, 1.5);
const AXIS_STROKE: Stroke = Stroke::new(Rgb::AXIS, 1.0);
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 30.0,
            bottom: 30.0,
            left: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeriesRenderer {
    margins: Margins,
    tick_count: usize,
}

impl Default for SeriesRenderer {
    fn default() -> Self {
        Self::new(Margins::default())
    }
}

impl SeriesRenderer {
    pub fn new(margins: Margins) -> Self {
        Self {
            margins,
            tick_count: 10,
        }
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Plot area left after the margins, never negative.
    pub fn inner_size(&self, size: Size) -> (f64, f64) {
        let m = self.margins;
        (
            (size.width - m.left - m.right).max(0.0),
            (size.height - m.top - m.bottom).max(0.0),
        )
    }

    pub fn scales(&self, progression: &PointSeries, size: Size) -> (LinearScale, LinearScale) {
        let (width, height) = self.inner_size(size);
        let max_y = progression.max_y().unwrap_or(0.0);
        (
            LinearScale::new((0.0, 1.0), (0.0, width)),
            LinearScale::new((0.0, max_y), (height, 0.0)),
        )
    }

    /// Replaces everything on `surface` with a freshly drawn chart.
    pub fn render<S: Surface + ?Sized>(
        &self,
        progression: &PointSeries,
        identity: &PointSeries,
        surface: &mut S,
    ) {
        let mut region = DrawableRegion::acquire(surface);
        let (x, y) = self.scales(progression, region.size());
        let (width, height) = self.inner_size(region.size());
        region.set_origin((self.margins.left, self.margins.top));

        self.draw_bottom_axis(&mut region, &x, height);
        self.draw_left_axis(&mut region, &y);

        for (series, stroke) in [
            (progression, PROGRESSION_STROKE),
            (identity, IDENTITY_STROKE),
        ] {
            region.draw(Primitive::Path {
                points: series
                    .points()
                    .iter()
                    .map(|p| (x.map(p.x), y.map(p.y)))
                    .collect(),
                stroke,
            });
        }

        tracing::trace!(width, height, y_max = y.domain().1, "chart rendered");
    }

    fn draw_bottom_axis<S: Surface + ?Sized>(
        &self,
        region: &mut DrawableRegion<'_, S>,
        scale: &LinearScale,
        baseline: f64,
    ) {
        let (r0, r1) = scale.range();
        region.draw(Primitive::Line {
            from: (r0, baseline),
            to: (r1, baseline),
            stroke: AXIS_STROKE,
        });
        let format = scale.tick_format(self.tick_count);
        for tick in scale.ticks(self.tick_count) {
            let at = scale.map(tick);
            region.draw(Primitive::Line {
                from: (at, baseline),
                to: (at, baseline + TICK_SIZE),
                stroke: AXIS_STROKE,
            });
            region.draw(Primitive::Text {
                at: (at, baseline + TICK_SIZE + TICK_PADDING),
                text: format(tick),
                anchor: TextAnchor::Middle,
                baseline: Baseline::Top,
                color: Rgb::AXIS,
            });
        }
    }

    fn draw_left_axis<S: Surface + ?Sized>(
        &self,
        region: &mut DrawableRegion<'_, S>,
        scale: &LinearScale,
    ) {
        let (r0, r1) = scale.range();
        region.draw(Primitive::Line {
            from: (0.0, r0),
            to: (0.0, r1),
            stroke: AXIS_STROKE,
        });
        let format = scale.tick_format(self.tick_count);
        for tick in scale.ticks(self.tick_count) {
            let at = scale.map(tick);
            region.draw(Primitive::Line {
                from: (-TICK_SIZE, at),
                to: (0.0, at),
                stroke: AXIS_STROKE,
            });
            region.draw(Primitive::Text {
                at: (-(TICK_SIZE + TICK_PADDING), at),
                text: format(tick),
                anchor: TextAnchor::End,
                baseline: Baseline::Middle,
                color: Rgb::AXIS,
            });
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;

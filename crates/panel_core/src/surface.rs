//! Drawing surfaces and the owned drawable region the renderer draws through.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const AXIS: Rgb = Rgb(0, 0, 0);

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    Top,
    Middle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Path {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Stroke,
    },
    Text {
        at: (f64, f64),
        text: String,
        anchor: TextAnchor,
        baseline: Baseline,
        color: Rgb,
    },
}

impl Primitive {
    pub fn translated(self, (dx, dy): (f64, f64)) -> Self {
        let shift = |(x, y): (f64, f64)| (x + dx, y + dy);
        match self {
            Self::Path { points, stroke } => Self::Path {
                points: points.into_iter().map(shift).collect(),
                stroke,
            },
            Self::Line { from, to, stroke } => Self::Line {
                from: shift(from),
                to: shift(to),
                stroke,
            },
            Self::Text {
                at,
                text,
                anchor,
                baseline,
                color,
            } => Self::Text {
                at: shift(at),
                text,
                anchor,
                baseline,
                color,
            },
        }
    }
}

/// Something a chart can be drawn onto. Implementations keep every drawn
/// primitive until the next `clear`.
pub trait Surface {
    fn size(&self) -> Size;
    fn clear(&mut self);
    fn draw(&mut self, primitive: Primitive);
    /// Called when a drawable region is released.
    fn present(&mut self) {}
}

/// Exclusive, cleared view of a surface. Acquiring wipes whatever the surface
/// held; dropping the region presents the new content.
pub struct DrawableRegion<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    origin: (f64, f64),
}

impl<'a, S: Surface + ?Sized> DrawableRegion<'a, S> {
    pub fn acquire(surface: &'a mut S) -> Self {
        surface.clear();
        Self {
            surface,
            origin: (0.0, 0.0),
        }
    }

    pub fn size(&self) -> Size {
        self.surface.size()
    }

    /// Subsequent primitives are offset by `origin`.
    pub fn set_origin(&mut self, origin: (f64, f64)) {
        self.origin = origin;
    }

    pub fn draw(&mut self, primitive: Primitive) {
        self.surface.draw(primitive.translated(self.origin));
    }
}

impl<S: Surface + ?Sized> Drop for DrawableRegion<'_, S> {
    fn drop(&mut self) {
        self.surface.present();
    }
}

/// Retained in-memory surface. Hosts mount one scene and repaint its
/// primitives every frame; the generation counts clears.
#[derive(Debug, Clone)]
pub struct Scene {
    size: Size,
    primitives: Vec<Primitive>,
    generation: u64,
    presented: bool,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size { width, height },
            primitives: Vec::new(),
            generation: 0,
            presented: false,
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// False while a region holds the scene.
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn paths(&self) -> impl Iterator<Item = (&[(f64, f64)], Stroke)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path { points, stroke } => Some((points.as_slice(), *stroke)),
            _ => None,
        })
    }
}

impl Surface for Scene {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.primitives.clear();
        self.generation += 1;
        self.presented = false;
    }

    fn draw(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    fn present(&mut self) {
        self.presented = true;
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;

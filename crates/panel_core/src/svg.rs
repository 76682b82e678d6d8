//! SVG export surface.

use std::{
    fmt::{self, Write as _},
    fs,
    path::Path,
};

use crate::error::ExportError;
use crate::surface::{Baseline, Primitive, Size, Surface, TextAnchor};

#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size { width, height },
            body: String::new(),
        }
    }

    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" font-family=\"sans-serif\" font-size=\"10\">\n{}</svg>\n",
            self.size.width, self.size.height, self.body
        )
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, self.document()).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw(&mut self, primitive: Primitive) {
        if let Err(err) = write_primitive(&mut self.body, primitive) {
            tracing::warn!(%err, "svg primitive dropped");
        }
    }
}

fn write_primitive(out: &mut String, primitive: Primitive) -> fmt::Result {
    match primitive {
        Primitive::Path { points, stroke } => {
            let mut d = String::new();
            for (i, (x, y)) in points.iter().enumerate() {
                write!(d, "{}{x:.3},{y:.3}", if i == 0 { "M" } else { "L" })?;
            }
            writeln!(
                out,
                "  <path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                stroke.color.to_hex(),
                stroke.width
            )
        }
        Primitive::Line { from, to, stroke } => writeln!(
            out,
            "  <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            from.0,
            from.1,
            to.0,
            to.1,
            stroke.color.to_hex(),
            stroke.width
        ),
        Primitive::Text {
            at,
            text,
            anchor,
            baseline,
            color,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let baseline = match baseline {
                Baseline::Top => "hanging",
                Baseline::Middle => "middle",
            };
            writeln!(
                out,
                "  <text x=\"{:.3}\" y=\"{:.3}\" text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\" fill=\"{}\">{}</text>",
                at.0,
                at.1,
                color.to_hex(),
                escape(&text)
            )
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

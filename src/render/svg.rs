//! Standalone SVG documents for [`Schematic`] and [`VolumeCurve`].
//!
//! The writers implement [`fmt::Display`], so a drawing can be streamed into
//! any formatter or collected with `to_string()`.

use std::fmt::{self, Write};

use uom::si::{mass::pound, volume::liter};

use crate::models::storage::stacked_cylinders::{Extent, Role};

use super::{Schematic, VolumeCurve};

/// Drawing settings, in pixels.
mod style {
    pub const PLOT_SIZE: f64 = 400.0;
    pub const MARGIN: f64 = 60.0;
    pub const FONT_SIZE: f64 = 12.0;
    pub const VESSEL: &str = "#1f77b4";
    pub const MASS: &str = "#ff7f0e";
}

/// Returns the SVG for a stack cross-section.
#[must_use]
pub fn schematic(schematic: &Schematic) -> String {
    SchematicSvg(schematic).to_string()
}

/// Returns the SVG for a volume-vs-height curve.
#[must_use]
pub fn volume_curve(curve: &VolumeCurve) -> String {
    VolumeCurveSvg(curve).to_string()
}

/// Display adapter drawing a [`Schematic`] with equal axis scaling.
pub struct SchematicSvg<'a>(pub &'a Schematic);

/// Display adapter drawing a [`VolumeCurve`], with a mass axis when the
/// curve carries masses.
pub struct VolumeCurveSvg<'a>(pub &'a VolumeCurve);

/// Maps data coordinates onto the plot area; `y` grows upwards.
struct Frame {
    x: Extent,
    y: Extent,
    width: f64,
    height: f64,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        style::MARGIN + (x - self.x.min) / nonzero(self.x.span()) * self.width
    }

    fn py(&self, y: f64) -> f64 {
        style::MARGIN + (self.y.max - y) / nonzero(self.y.span()) * self.height
    }

    fn right(&self) -> f64 {
        style::MARGIN + self.width
    }

    fn bottom(&self) -> f64 {
        style::MARGIN + self.height
    }

    fn open(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width + 2.0 * style::MARGIN;
        let h = self.height + 2.0 * style::MARGIN;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#
        )?;
        writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)
    }

    fn border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
            style::MARGIN,
            style::MARGIN,
            self.width,
            self.height
        )
    }

    fn x_label(&self, f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
        let x = style::MARGIN + self.width / 2.0;
        let y = self.bottom() + 2.5 * style::FONT_SIZE;
        text(f, x, y, "middle", None, label)?;
        tick(f, style::MARGIN, self.bottom() + style::FONT_SIZE, "start", self.x.min)?;
        tick(f, self.right(), self.bottom() + style::FONT_SIZE, "end", self.x.max)
    }

    fn y_label(&self, f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
        let x = style::MARGIN - 3.0 * style::FONT_SIZE;
        let y = style::MARGIN + self.height / 2.0;
        text(f, x, y, "middle", Some(-90.0), label)?;
        let x = style::MARGIN - 0.5 * style::FONT_SIZE;
        tick(f, x, self.bottom(), "end", self.y.min)?;
        tick(f, x, style::MARGIN + style::FONT_SIZE, "end", self.y.max)
    }

    fn y2_label(&self, f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
        let x = self.right() + 3.0 * style::FONT_SIZE;
        let y = style::MARGIN + self.height / 2.0;
        text(f, x, y, "middle", Some(90.0), label)?;
        let x = self.right() + 0.5 * style::FONT_SIZE;
        tick(f, x, self.bottom(), "start", self.y.min)?;
        tick(f, x, style::MARGIN + style::FONT_SIZE, "start", self.y.max)
    }

    fn polyline(
        &self,
        f: &mut fmt::Formatter<'_>,
        points: impl Iterator<Item = (f64, f64)>,
        color: &str,
    ) -> fmt::Result {
        let mut coords = String::new();
        for (x, y) in points {
            write!(coords, "{:.2},{:.2} ", self.px(x), self.py(y))?;
        }
        writeln!(
            f,
            r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="1.5"/>"#,
            coords.trim_end()
        )
    }
}

impl fmt::Display for SchematicSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schematic = self.0;
        let (x, y) = (schematic.x_limits, schematic.z_limits);

        // Equal aspect: the longer span fills the plot size.
        let scale = style::PLOT_SIZE / nonzero(x.span().max(y.span()));
        let frame = Frame {
            x,
            y,
            width: x.span() * scale,
            height: y.span() * scale,
        };

        frame.open(f)?;
        for shape in &schematic.shapes {
            let (fill, stroke) = match shape.role {
                Role::Vessel => (
                    style::VESSEL,
                    format!(r#"stroke="{}" stroke-width="3""#, style::VESSEL),
                ),
                Role::Displacer => ("black", String::from(r#"stroke="none""#)),
            };
            writeln!(
                f,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{fill}" fill-opacity="0.5" {stroke}/>"#,
                frame.px(shape.x.min),
                frame.py(shape.z.max),
                shape.x.span() * scale,
                shape.z.span() * scale,
            )?;
        }
        frame.border(f)?;

        let label = format!("[{}]", schematic.unit.symbol());
        frame.x_label(f, &label)?;
        frame.y_label(f, &label)?;
        writeln!(f, "</svg>")
    }
}

impl fmt::Display for VolumeCurveSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let curve = self.0;
        let liters = span(curve.points.iter().map(|p| p.volume.get::<liter>()));
        let frame = Frame {
            x: curve.heights,
            y: liters,
            width: style::PLOT_SIZE,
            height: style::PLOT_SIZE * 0.75,
        };

        frame.open(f)?;
        for &marker in &curve.markers {
            let x = frame.px(marker);
            writeln!(
                f,
                r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="black" stroke-width="0.5"/>"#,
                style::MARGIN,
                frame.bottom()
            )?;
        }

        frame.polyline(
            f,
            curve.points.iter().map(|p| (p.height, p.volume.get::<liter>())),
            style::VESSEL,
        )?;

        let masses: Vec<(f64, f64)> = curve
            .points
            .iter()
            .filter_map(|p| p.mass.map(|m| (p.height, m.get::<pound>())))
            .collect();
        if !masses.is_empty() {
            let mass_frame = Frame {
                y: span(masses.iter().map(|&(_, m)| m)),
                ..frame
            };
            mass_frame.polyline(f, masses.into_iter(), style::MASS)?;
            mass_frame.y2_label(f, "mass [lbs]")?;
        }

        frame.border(f)?;
        frame.x_label(f, &format!("height of liquid [{}]", curve.unit))?;
        frame.y_label(f, "volume [L]")?;
        writeln!(f, "</svg>")
    }
}

fn text(
    f: &mut fmt::Formatter<'_>,
    x: f64,
    y: f64,
    anchor: &str,
    rotate: Option<f64>,
    value: &str,
) -> fmt::Result {
    write!(
        f,
        r#"<text x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="{}" text-anchor="{anchor}""#,
        style::FONT_SIZE
    )?;
    if let Some(angle) = rotate {
        write!(f, r#" transform="rotate({angle} {x:.2} {y:.2})""#)?;
    }
    writeln!(f, ">{}</text>", escape(value))
}

fn tick(f: &mut fmt::Formatter<'_>, x: f64, y: f64, anchor: &str, value: f64) -> fmt::Result {
    text(f, x, y, anchor, None, &format!("{value:.2}"))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Smallest extent enclosing `values`, or `0..1` when there are none.
fn span(mut values: impl Iterator<Item = f64>) -> Extent {
    let Some(first) = values.next() else {
        return Extent { min: 0.0, max: 1.0 };
    };
    values.fold(
        Extent {
            min: first,
            max: first,
        },
        |e, v| Extent {
            min: e.min.min(v),
            max: e.max.max(v),
        },
    )
}

/// Guards against flat ranges, e.g. a curve whose volume never changes.
fn nonzero(span: f64) -> f64 {
    if span > 0.0 { span } else { 1.0 }
}

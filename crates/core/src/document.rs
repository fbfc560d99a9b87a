//! The rendered flow diagram and its SVG serialization.
//!
//! Elements stack in a fixed order: background, eye disc, then the arrows in
//! grid order. All coordinates are written with two decimals.

use std::fmt::{self, Write as _};

use crate::arrow::ArrowGlyph;
use crate::color::{Rgba, Srgb};
use crate::config::ArrowStyle;
use crate::geometry::Point2D;

/// Full-canvas background rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub fill: Srgb,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            fill: Srgb::from_rgb8(0xf8, 0xf9, 0xfa),
        }
    }
}

/// The calm eye, drawn as a translucent disc with a darker border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeDisc {
    pub center: Point2D,
    pub radius: f64,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f64,
}

impl EyeDisc {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self {
            center,
            radius,
            fill: Rgba::new(200, 200, 200, 0.3),
            stroke: Rgba::new(100, 100, 100, 0.5),
            stroke_width: 2.0,
        }
    }
}

/// A complete, ready-to-persist flow diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDocument {
    pub width: usize,
    pub height: usize,
    pub background: Background,
    pub eye: EyeDisc,
    pub arrow_style: ArrowStyle,
    pub arrows: Vec<ArrowGlyph>,
    /// Number of grid points sampled, including those that produced no arrow.
    pub grid_points: usize,
}

impl FlowDocument {
    /// Grid points that were too slow to draw.
    pub fn omitted(&self) -> usize {
        self.grid_points.saturating_sub(self.arrows.len())
    }

    /// Serializes the document as an SVG string.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<svg width=\"{}\" height=\"{}\" \nxmlns=\"http://www.w3.org/2000/svg\">",
            self.width, self.height
        )?;
        f.write_str("  <defs>\n    <style>\n")?;
        write!(
            f,
            "      .flow-arrow {{\n        stroke: {};\n        stroke-width: {};\n        fill: none;\n        stroke-linecap: round;\n        stroke-linejoin: round;\n      }}\n",
            self.arrow_style.stroke_color, self.arrow_style.stroke_width
        )?;
        write!(
            f,
            "      .eye {{\n        fill: {};\n        stroke: {};\n        stroke-width: {};\n      }}\n",
            self.eye.fill, self.eye.stroke, self.eye.stroke_width
        )?;
        f.write_str("    </style>\n  </defs>\n  \n")
    }
}

/// SVG path data for one glyph: the shaft, then the head as a single
/// two-segment stroke through the tip.
pub fn arrow_path_data(glyph: &ArrowGlyph) -> String {
    let ArrowGlyph {
        origin: o,
        tip: t,
        left_barb: l,
        right_barb: r,
    } = glyph;
    let mut d = String::with_capacity(96);
    // Writing to a String cannot fail.
    let _ = write!(
        d,
        "M {:.2},{:.2} L {:.2},{:.2} M {:.2},{:.2} L {:.2},{:.2} L {:.2},{:.2}",
        o.x, o.y, t.x, t.y, l.x, l.y, t.x, t.y, r.x, r.y
    );
    d
}

impl fmt::Display for FlowDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;

        f.write_str("  <!-- Background -->\n")?;
        writeln!(
            f,
            "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width, self.height, self.background.fill
        )?;
        f.write_str("  \n  <!-- Hurricane eye -->\n")?;
        writeln!(
            f,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" \n          r=\"{:.2}\" class=\"eye\"/>",
            self.eye.center.x, self.eye.center.y, self.eye.radius
        )?;

        f.write_str("  \n  <!-- Flow field arrows -->\n  <g class=\"flow-field\">\n")?;
        for glyph in &self.arrows {
            writeln!(
                f,
                "    <path d=\"{}\" class=\"flow-arrow\"/>",
                arrow_path_data(glyph)
            )?;
        }
        f.write_str("  </g>\n</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph() -> ArrowGlyph {
        ArrowGlyph {
            origin: Point2D::new(100.0, 50.0),
            tip: Point2D::new(110.0, 50.0),
            left_barb: Point2D::new(107.0, 51.5),
            right_barb: Point2D::new(107.0, 48.5),
        }
    }

    fn document(arrows: Vec<ArrowGlyph>) -> FlowDocument {
        FlowDocument {
            width: 800,
            height: 600,
            background: Background::default(),
            eye: EyeDisc::new(Point2D::new(400.0, 300.0), 40.0),
            arrow_style: ArrowStyle::default(),
            grid_points: 713,
            arrows,
        }
    }

    #[test]
    fn path_data_has_shaft_then_head() {
        assert_eq!(
            arrow_path_data(&glyph()),
            "M 100.00,50.00 L 110.00,50.00 M 107.00,51.50 L 110.00,50.00 L 107.00,48.50"
        );
    }

    #[test]
    fn path_data_rounds_to_two_decimals() {
        let g = ArrowGlyph {
            origin: Point2D::new(1.0 / 3.0, 2.0 / 3.0),
            ..glyph()
        };
        assert!(arrow_path_data(&g).starts_with("M 0.33,0.67 L"));
    }

    #[test]
    fn svg_has_canvas_size_and_namespace() {
        let svg = document(vec![]).to_svg();
        assert!(svg.starts_with("<svg width=\"800\" height=\"600\" \nxmlns=\"http://www.w3.org/2000/svg\">"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn svg_styles_arrows_and_eye() {
        let svg = document(vec![]).to_svg();
        assert!(svg.contains("stroke: #0066cc;"), "{svg}");
        assert!(svg.contains("stroke-width: 1.5;"), "{svg}");
        assert!(svg.contains("fill: none;"));
        assert!(svg.contains("stroke-linecap: round;"));
        assert!(svg.contains("stroke-linejoin: round;"));
        assert!(svg.contains("fill: rgba(200, 200, 200, 0.3);"));
        assert!(svg.contains("stroke: rgba(100, 100, 100, 0.5);"));
        assert!(svg.contains("stroke-width: 2;"));
    }

    #[test]
    fn svg_stacks_background_then_eye_then_arrows() {
        let svg = document(vec![glyph()]).to_svg();
        let rect = svg.find("<rect width=\"800\" height=\"600\" fill=\"#f8f9fa\"/>").unwrap();
        let circle = svg.find("<circle cx=\"400.00\" cy=\"300.00\"").unwrap();
        let path = svg.find("<path d=\"M 100.00,50.00").unwrap();
        assert!(rect < circle && circle < path);
        assert!(svg.contains("r=\"40.00\" class=\"eye\""));
    }

    #[test]
    fn svg_emits_one_path_per_arrow() {
        let svg = document(vec![glyph(), glyph(), glyph()]).to_svg();
        assert_eq!(svg.matches("<path ").count(), 3);
        assert_eq!(svg.matches("class=\"flow-arrow\"").count(), 3);
    }

    #[test]
    fn empty_document_still_has_group() {
        let svg = document(vec![]).to_svg();
        assert!(svg.contains("<g class=\"flow-field\">\n  </g>\n</svg>"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn display_matches_to_svg() {
        let doc = document(vec![glyph()]);
        assert_eq!(format!("{doc}"), doc.to_svg());
    }

    #[test]
    fn omitted_counts_missing_arrows() {
        assert_eq!(document(vec![glyph()]).omitted(), 712);
    }
}

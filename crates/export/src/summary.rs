//! Human- and machine-readable description of a finished render.

use std::fmt;
use std::path::{Path, PathBuf};

use hurricane_flow_core::config::{FieldConfig, SamplingConfig};
use hurricane_flow_core::document::FlowDocument;
use hurricane_flow_core::geometry::Point2D;
use serde::Serialize;

/// What was rendered and where it went.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub eye_center: Point2D,
    pub eye_radius: f64,
    pub max_wind_speed: f64,
    pub spacing: usize,
    pub arrow_scale: f64,
    pub grid_points: usize,
    pub arrows: usize,
}

impl RenderSummary {
    pub fn new(
        output: &Path,
        field: &FieldConfig,
        sampling: &SamplingConfig,
        document: &FlowDocument,
    ) -> Self {
        Self {
            output: output.to_path_buf(),
            width: field.width,
            height: field.height,
            eye_center: field.center,
            eye_radius: field.eye_radius,
            max_wind_speed: field.max_wind_speed,
            spacing: sampling.spacing,
            arrow_scale: sampling.arrow_scale,
            grid_points: document.grid_points,
            arrows: document.arrows.len(),
        }
    }
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow field saved to {}", self.output.display())?;
        writeln!(f)?;
        writeln!(f, "Parameters:")?;
        writeln!(f, "  Canvas size: {}x{}", self.width, self.height)?;
        writeln!(
            f,
            "  Eye center: ({}, {})",
            self.eye_center.x, self.eye_center.y
        )?;
        writeln!(f, "  Eye radius: {}", self.eye_radius)?;
        writeln!(f, "  Max wind speed: {}", self.max_wind_speed)?;
        write!(
            f,
            "  Arrows: {} of {} grid points (spacing {}, scale {})",
            self.arrows, self.grid_points, self.spacing, self.arrow_scale
        )
    }
}

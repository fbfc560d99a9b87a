//! Samples a velocity field on a grid and assembles the flow diagram.

use tracing::debug;

use crate::arrow::{arrow_glyph, ArrowGlyph, GlyphSizing};
use crate::config::{FieldConfig, SamplingConfig};
use crate::document::{Background, EyeDisc, FlowDocument};
use crate::field_source::VelocityField;
use crate::geometry::{Point2D, Vector2D};
use crate::grid::generate_grid;
use crate::vortex::VortexField;

/// Renders flow diagrams for one canvas and velocity field.
///
/// Stateless between calls: rendering twice with the same
/// [`SamplingConfig`] yields identical documents.
#[derive(Debug, Clone)]
pub struct FlowRenderer<F = VortexField> {
    config: FieldConfig,
    field: F,
}

impl FlowRenderer<VortexField> {
    /// Renderer for the hurricane vortex described by `config`.
    pub fn new(config: FieldConfig) -> Self {
        let field = VortexField::new(&config);
        Self { config, field }
    }
}

impl<F: VelocityField> FlowRenderer<F> {
    /// Renderer for an arbitrary field drawn on the canvas of `config`.
    ///
    /// The eye disc still uses `config.center` and `config.eye_radius`.
    pub fn with_field(config: FieldConfig, field: F) -> Self {
        Self { config, field }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Velocity at `p`.
    pub fn velocity_at(&self, p: Point2D) -> Vector2D {
        self.field.velocity_at(p)
    }

    /// Sample points for `spacing` on this canvas.
    pub fn generate_grid(&self, spacing: usize) -> Vec<Point2D> {
        generate_grid(self.config.width, self.config.height, spacing)
    }

    /// Arrow for one sample, sized against the field's peak speed.
    ///
    /// Uses the default 0.01 speed cutoff; [`render_document`](Self::render_document)
    /// uses the cutoff from its [`SamplingConfig`].
    pub fn arrow_glyph(
        &self,
        origin: Point2D,
        velocity: Vector2D,
        scale: f64,
        base_length: f64,
    ) -> Option<ArrowGlyph> {
        let sizing = GlyphSizing {
            max_speed: self.field.max_speed(),
            scale,
            base_length,
            min_speed: SamplingConfig::default().min_speed_threshold,
        };
        arrow_glyph(origin, velocity, &sizing)
    }

    /// Samples the field at every grid point and assembles the diagram.
    pub fn render_document(&self, sampling: &SamplingConfig) -> FlowDocument {
        let sizing = GlyphSizing {
            max_speed: self.field.max_speed(),
            scale: sampling.arrow_scale,
            base_length: sampling.base_length,
            min_speed: sampling.min_speed_threshold,
        };
        let grid = self.generate_grid(sampling.spacing);
        let arrows: Vec<ArrowGlyph> = grid
            .iter()
            .filter_map(|&p| arrow_glyph(p, self.field.velocity_at(p), &sizing))
            .collect();

        debug!(
            grid_points = grid.len(),
            arrows = arrows.len(),
            spacing = sampling.spacing,
            "sampled flow field"
        );

        FlowDocument {
            width: self.config.width,
            height: self.config.height,
            background: Background::default(),
            eye: EyeDisc::new(self.config.center, self.config.eye_radius),
            arrow_style: sampling.style,
            arrows,
            grid_points: grid.len(),
        }
    }
}

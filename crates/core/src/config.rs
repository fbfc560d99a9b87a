//! Immutable configuration for the vortex model and the arrow sampling pass.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::color::Srgb;
use crate::error::FlowError;
use crate::geometry::Point2D;
use crate::params::{param_f64, param_str, param_usize};

/// Default canvas width.
pub const DEFAULT_WIDTH: usize = 800;
/// Default canvas height.
pub const DEFAULT_HEIGHT: usize = 600;
/// Default peak tangential wind speed.
pub const DEFAULT_MAX_WIND_SPEED: f64 = 50.0;
/// Default radius of the calm eye.
pub const DEFAULT_EYE_RADIUS: f64 = 30.0;
/// Default distance between grid samples.
pub const DEFAULT_SPACING: usize = 30;
/// Default arrow size multiplier.
pub const DEFAULT_ARROW_SCALE: f64 = 1.0;
/// Arrow length at `arrow_scale = 1` and full speed.
pub const DEFAULT_BASE_LENGTH: f64 = 20.0;
/// Samples slower than this produce no arrow.
pub const DEFAULT_MIN_SPEED_THRESHOLD: f64 = 0.01;
/// Default arrow stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;
/// Default arrow stroke color.
pub const DEFAULT_STROKE_COLOR: &str = "#0066cc";

/// Canvas and vortex parameters.
///
/// `eye_radius` should be non-negative and smaller than half the shorter
/// canvas side for a sensible picture, but nothing here enforces it: any
/// values produce a valid (if degenerate) document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    pub center: Point2D,
    pub max_wind_speed: f64,
    pub eye_radius: f64,
}

impl FieldConfig {
    /// Creates a config for a `width` x `height` canvas with the vortex
    /// centered and default wind speed and eye radius.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            center: Point2D::new(width as f64 / 2.0, height as f64 / 2.0),
            max_wind_speed: DEFAULT_MAX_WIND_SPEED,
            eye_radius: DEFAULT_EYE_RADIUS,
        }
    }

    pub fn with_center(mut self, center: Point2D) -> Self {
        self.center = center;
        self
    }

    pub fn with_max_wind_speed(mut self, max_wind_speed: f64) -> Self {
        self.max_wind_speed = max_wind_speed;
        self
    }

    pub fn with_eye_radius(mut self, eye_radius: f64) -> Self {
        self.eye_radius = eye_radius;
        self
    }

    /// Overlays `center_x`, `center_y`, `max_wind_speed` and `eye_radius`
    /// from `params` onto `base`, resized to `width` x `height`.
    ///
    /// When the canvas size differs from `base` and `params` gives no
    /// center coordinate, the center follows the new canvas center.
    pub fn from_json(width: usize, height: usize, params: &Value, base: &FieldConfig) -> Self {
        let resized = width != base.width || height != base.height;
        let fallback = if resized {
            FieldConfig::new(width, height).center
        } else {
            base.center
        };
        Self {
            width,
            height,
            center: Point2D::new(
                param_f64(params, "center_x", fallback.x),
                param_f64(params, "center_y", fallback.y),
            ),
            max_wind_speed: param_f64(params, "max_wind_speed", base.max_wind_speed),
            eye_radius: param_f64(params, "eye_radius", base.eye_radius),
        }
    }

    /// Current values as a flat JSON object, using the `from_json` keys.
    pub fn params(&self) -> Value {
        json!({
            "width": self.width,
            "height": self.height,
            "center_x": self.center.x,
            "center_y": self.center.y,
            "max_wind_speed": self.max_wind_speed,
            "eye_radius": self.eye_radius,
        })
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Stroke shared by every arrow in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowStyle {
    pub stroke_width: f64,
    pub stroke_color: Srgb,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: Srgb::from_rgb8(0x00, 0x66, 0xcc),
        }
    }
}

/// Grid and glyph parameters for one rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Distance between neighbouring grid points. Zero yields an empty grid.
    pub spacing: usize,
    pub arrow_scale: f64,
    pub base_length: f64,
    pub min_speed_threshold: f64,
    pub style: ArrowStyle,
}

impl SamplingConfig {
    pub fn new(spacing: usize, arrow_scale: f64) -> Self {
        Self {
            spacing,
            arrow_scale,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: ArrowStyle) -> Self {
        self.style = style;
        self
    }

    /// Overlays sampling and stroke keys from `params` onto `base`.
    ///
    /// Returns `FlowError::InvalidColor` if `stroke_color` is present but
    /// not a valid hex color; every other key falls back silently.
    pub fn from_json(params: &Value, base: &SamplingConfig) -> Result<Self, FlowError> {
        let stroke_color = match param_str(params, "stroke_color") {
            Some(hex) => Srgb::from_hex(hex)?,
            None => base.style.stroke_color,
        };
        Ok(Self {
            spacing: param_usize(params, "spacing", base.spacing),
            arrow_scale: param_f64(params, "arrow_scale", base.arrow_scale),
            base_length: param_f64(params, "base_length", base.base_length),
            min_speed_threshold: param_f64(
                params,
                "min_speed_threshold",
                base.min_speed_threshold,
            ),
            style: ArrowStyle {
                stroke_width: param_f64(params, "stroke_width", base.style.stroke_width),
                stroke_color,
            },
        })
    }

    /// Current values as a flat JSON object, using the `from_json` keys.
    pub fn params(&self) -> Value {
        json!({
            "spacing": self.spacing,
            "arrow_scale": self.arrow_scale,
            "base_length": self.base_length,
            "min_speed_threshold": self.min_speed_threshold,
            "stroke_width": self.style.stroke_width,
            "stroke_color": self.style.stroke_color.to_hex(),
        })
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            arrow_scale: DEFAULT_ARROW_SCALE,
            base_length: DEFAULT_BASE_LENGTH,
            min_speed_threshold: DEFAULT_MIN_SPEED_THRESHOLD,
            style: ArrowStyle::default(),
        }
    }
}

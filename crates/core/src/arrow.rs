//! Arrow glyph geometry.
//!
//! A glyph is a shaft from the sample point along the flow direction plus a
//! chevron head at the tip. Its length encodes speed relative to the field's
//! nominal maximum and is clipped at `base_length * scale`.

use crate::geometry::{Point2D, Vector2D};

/// Head length as a fraction of the shaft length.
const HEAD_LENGTH_RATIO: f64 = 0.3;
/// Half the head width as a fraction of the shaft length.
const HEAD_WIDTH_RATIO: f64 = 0.15;

/// The four points needed to draw one arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGlyph {
    pub origin: Point2D,
    pub tip: Point2D,
    pub left_barb: Point2D,
    pub right_barb: Point2D,
}

impl ArrowGlyph {
    /// Shaft length, origin to tip.
    pub fn length(&self) -> f64 {
        self.origin.distance(self.tip)
    }
}

/// Sizing inputs for [`arrow_glyph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSizing {
    /// Speed that maps to a full-length arrow.
    pub max_speed: f64,
    pub scale: f64,
    pub base_length: f64,
    /// Samples slower than this yield no glyph.
    pub min_speed: f64,
}

/// Builds the arrow for one velocity sample, or `None` when the flow is too
/// slow to draw.
pub fn arrow_glyph(origin: Point2D, velocity: Vector2D, sizing: &GlyphSizing) -> Option<ArrowGlyph> {
    let speed = velocity.speed();
    // Negated comparison so NaN speeds are dropped too.
    if !(speed >= sizing.min_speed) || speed == 0.0 {
        return None;
    }

    let length = sizing.base_length * sizing.scale * (speed / sizing.max_speed).min(1.0);
    let ux = velocity.vx / speed;
    let uy = velocity.vy / speed;

    let tip = origin.offset(ux, uy, length);
    let head_base = tip.offset(ux, uy, -HEAD_LENGTH_RATIO * length);
    let head_width = HEAD_WIDTH_RATIO * length;
    // Perpendicular to the flow: (-uy, ux).
    let left_barb = head_base.offset(-uy, ux, head_width);
    let right_barb = head_base.offset(-uy, ux, -head_width);

    Some(ArrowGlyph {
        origin,
        tip,
        left_barb,
        right_barb,
    })
}

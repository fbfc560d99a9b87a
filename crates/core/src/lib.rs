#![deny(unsafe_code)]
//! Core of hurricane-flow: a Rankine vortex velocity model and its rendering
//! as an SVG diagram of arrows sampled on a regular grid.
//!
//! Everything here is pure. [`FlowRenderer::render_document`] turns a
//! [`FieldConfig`] and a [`SamplingConfig`] into a [`FlowDocument`], whose
//! `to_svg` output is left to the caller to persist.

pub mod arrow;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod field_source;
pub mod geometry;
pub mod grid;
pub mod params;
pub mod renderer;
pub mod vortex;

pub use arrow::ArrowGlyph;
pub use color::{Rgba, Srgb};
pub use config::{ArrowStyle, FieldConfig, SamplingConfig};
pub use document::FlowDocument;
pub use error::FlowError;
pub use field_source::VelocityField;
pub use geometry::{Point2D, Vector2D};
pub use renderer::FlowRenderer;
pub use vortex::VortexField;

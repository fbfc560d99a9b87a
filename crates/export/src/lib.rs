#![deny(unsafe_code)]
//! Everything around the pure core that touches the outside world: named
//! presets, writing SVG files, and summarizing a finished render.
//!
//! The CLI depends on this crate so that lookup and persistence logic is not
//! duplicated in the binary.

pub mod preset;
pub mod snapshot;
pub mod summary;

use std::path::Path;

use hurricane_flow_core::config::{FieldConfig, SamplingConfig};
use hurricane_flow_core::error::FlowError;
use hurricane_flow_core::renderer::FlowRenderer;
use tracing::info;

pub use preset::Preset;
pub use summary::RenderSummary;

/// Renders the hurricane described by `field` and writes it to `path`.
pub fn render_to_file(
    field: &FieldConfig,
    sampling: &SamplingConfig,
    path: &Path,
) -> Result<RenderSummary, FlowError> {
    let document = FlowRenderer::new(*field).render_document(sampling);
    snapshot::write_svg(&document, path)?;
    info!(
        path = %path.display(),
        arrows = document.arrows.len(),
        omitted = document.omitted(),
        "rendered flow field"
    );
    Ok(RenderSummary::new(path, field, sampling, &document))
}

//! Writes a rendered [`FlowDocument`] to disk as SVG.

use std::fs;
use std::path::Path;

use hurricane_flow_core::document::FlowDocument;
use hurricane_flow_core::error::FlowError;
use tracing::debug;

/// Writes the document's SVG text to `path`, replacing any existing file.
///
/// Returns `FlowError::Io` carrying the path and the underlying
/// `std::io::Error` on failure.
pub fn write_svg(document: &FlowDocument, path: &Path) -> Result<(), FlowError> {
    let svg = document.to_svg();
    fs::write(path, &svg).map_err(|source| FlowError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = svg.len(), "wrote svg");
    Ok(())
}

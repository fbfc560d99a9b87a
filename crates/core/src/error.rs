//! Error types for hurricane-flow.
//!
//! The model and renderer are total; errors only arise at the edges where
//! user input is parsed or the rendered document is persisted.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced when parsing inputs or persisting output.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A requested preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Writing the rendered document failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn invalid_color_includes_message() {
        let err = FlowError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_preset_includes_name() {
        let err = FlowError::UnknownPreset("typhoon".into());
        let msg = format!("{err}");
        assert!(msg.contains("typhoon"), "missing preset name in: {msg}");
    }

    #[test]
    fn io_error_includes_path_and_keeps_kind() {
        let err = FlowError::Io {
            path: PathBuf::from("/nowhere/out.svg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("/nowhere/out.svg"), "missing path in: {msg}");
        assert!(msg.contains("denied"), "missing cause in: {msg}");

        let source = err.source().expect("io error should expose its source");
        let io_err = source
            .downcast_ref::<io::Error>()
            .expect("source should be an io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn flow_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlowError>();
    }

    #[test]
    fn flow_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<FlowError>();
    }
}

//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: setup error (logging could not be initialized)
//! - 11: I/O error (writing the SVG)
//! - 12: input error (unknown preset, bad JSON params, bad color)
//! - 13: serialization error

use hurricane_flow_core::FlowError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// The process environment could not be set up.
    Setup(String),
    /// An I/O error while writing output.
    Io(String),
    /// A user input error.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Setup(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Setup(msg)
            | CliError::Io(msg)
            | CliError::Input(msg)
            | CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<FlowError> for CliError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::Io { .. } => CliError::Io(e.to_string()),
            FlowError::InvalidColor(_) | FlowError::UnknownPreset(_) => {
                CliError::Input(e.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn setup_error_exit_code_is_10() {
        assert_eq!(CliError::Setup("subscriber".into()).exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad params".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn from_flow_io_error_routes_to_cli_io() {
        let flow_err = FlowError::Io {
            path: PathBuf::from("out.svg"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        let cli_err = CliError::from(flow_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
        assert!(cli_err.to_string().contains("out.svg"));
    }

    #[test]
    fn from_unknown_preset_routes_to_input() {
        let cli_err = CliError::from(FlowError::UnknownPreset("xyz".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("xyz"));
    }

    #[test]
    fn from_invalid_color_routes_to_input() {
        let cli_err = CliError::from(FlowError::InvalidColor("nope".into()));
        assert_eq!(cli_err.exit_code(), 12);
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}

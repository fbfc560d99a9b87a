#![deny(unsafe_code)]
//! CLI binary for hurricane-flow.
//!
//! Subcommands:
//! - `render` - build a flow diagram from a preset plus overrides, write SVG
//! - `sample` - print the velocity at a single point
//! - `list` - print available presets

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use hurricane_flow_core::{FieldConfig, FlowRenderer, Point2D, SamplingConfig};
use hurricane_flow_export::Preset;
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "hurricane-flow", version, about = "Hurricane flow field SVG generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every command that builds a model.
#[derive(Args)]
struct ModelArgs {
    /// Preset to start from (classic, showcase).
    #[arg(short, long, default_value = "classic")]
    preset: String,

    /// Canvas width; defaults to the preset's.
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Canvas height; defaults to the preset's.
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Overrides as a JSON object, e.g. '{"eye_radius": 40, "spacing": 25}'.
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Subcommand)]
enum Command {
    /// Render the flow field and write it as SVG.
    Render {
        #[command(flatten)]
        model: ModelArgs,

        /// Output file path.
        #[arg(short, long, default_value = "hurricane_flow_field.svg")]
        output: PathBuf,
    },
    /// Print the velocity vector at one point.
    Sample {
        #[command(flatten)]
        model: ModelArgs,

        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// List available presets.
    List,
}

impl ModelArgs {
    /// Resolves the preset and applies size and JSON overrides.
    fn configs(&self) -> Result<(FieldConfig, SamplingConfig), CliError> {
        let preset = Preset::from_name(&self.preset)?;
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        if !params.is_object() {
            return Err(CliError::Input("--params must be a JSON object".into()));
        }

        let base = preset.field_config();
        let field = FieldConfig::from_json(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
            &params,
            &base,
        );
        let sampling = SamplingConfig::from_json(&params, &preset.sampling_config())?;
        Ok((field, sampling))
    }
}

fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn init_logging(level: Level) -> Result<(), CliError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Setup(format!("failed to initialize logging: {e}")))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = Preset::list_names();
            if cli.json {
                let info = serde_json::json!({ "presets": presets });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    println!("  {name}");
                }
            }
        }
        Command::Render { model, output } => {
            let (field, sampling) = model.configs()?;
            tracing::debug!(
                field = %field.params(),
                sampling = %sampling.params(),
                "resolved configuration"
            );

            let summary = hurricane_flow_export::render_to_file(&field, &sampling, &output)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
        Command::Sample { model, x, y } => {
            let (field, _) = model.configs()?;
            let point = Point2D::new(x, y);
            let velocity = FlowRenderer::new(field).velocity_at(point);

            if cli.json {
                let info = serde_json::json!({
                    "point": point,
                    "velocity": velocity,
                    "speed": velocity.speed(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "velocity at ({x}, {y}): ({:.4}, {:.4}), speed {:.4}",
                    velocity.vx,
                    velocity.vy,
                    velocity.speed()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    let result = init_logging(parse_level(&cli.log_level)).and_then(|()| run(cli));
    if let Err(e) = result {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(args: &[&str]) -> ModelArgs {
        let mut argv = vec!["hurricane-flow", "sample", "--x", "0", "--y", "0"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Sample { model, .. } => model,
            _ => unreachable!(),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_resolve_to_classic_preset() {
        let (field, sampling) = model(&[]).configs().unwrap();
        assert_eq!(field, FieldConfig::default());
        assert_eq!(sampling, SamplingConfig::default());
    }

    #[test]
    fn params_override_preset_values() {
        let (field, sampling) = model(&[
            "--preset",
            "showcase",
            "--params",
            r#"{"eye_radius": 55, "spacing": 40}"#,
        ])
        .configs()
        .unwrap();
        assert_eq!(field.eye_radius, 55.0);
        assert_eq!(field.max_wind_speed, 60.0);
        assert_eq!(sampling.spacing, 40);
        assert_eq!(sampling.arrow_scale, 1.2);
    }

    #[test]
    fn resizing_recenters_the_vortex() {
        let (field, _) = model(&["-W", "400", "-H", "200"]).configs().unwrap();
        assert_eq!(field.center, Point2D::new(200.0, 100.0));
    }

    #[test]
    fn bad_inputs_are_input_errors() {
        for args in [
            vec!["--preset", "typhoon"],
            vec!["--params", "{not json"],
            vec!["--params", "[1, 2]"],
            vec!["--params", r#"{"stroke_color": "blue"}"#],
        ] {
            let err = model(&args).configs().unwrap_err();
            assert_eq!(err.exit_code(), 12, "args {args:?} gave {err}");
        }
    }

    #[test]
    fn sample_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["hurricane-flow", "sample", "--x", "-5", "--y", "-2.5"])
            .unwrap();
        match cli.command {
            Command::Sample { x, y, .. } => assert_eq!((x, y), (-5.0, -2.5)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn log_level_names_parse() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("bogus"), Level::WARN);
    }
}

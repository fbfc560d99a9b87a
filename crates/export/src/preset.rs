//! Named parameter sets.

use hurricane_flow_core::config::{FieldConfig, SamplingConfig};
use hurricane_flow_core::error::FlowError;
use hurricane_flow_core::geometry::Point2D;

/// All preset names, in listing order.
const PRESET_NAMES: &[&str] = &["classic", "showcase"];

/// A starting point for rendering, refined by user overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Library defaults: 800x600, max wind 50, eye 30, spacing 30.
    Classic,
    /// Stronger storm with a wider eye and a denser grid of larger arrows.
    Showcase,
}

impl Preset {
    /// Looks up a preset by name.
    ///
    /// Returns `FlowError::UnknownPreset` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, FlowError> {
        match name {
            "classic" => Ok(Preset::Classic),
            "showcase" => Ok(Preset::Showcase),
            _ => Err(FlowError::UnknownPreset(name.to_string())),
        }
    }

    /// Returns a slice of all recognized preset names.
    pub fn list_names() -> &'static [&'static str] {
        PRESET_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Showcase => "showcase",
        }
    }

    pub fn field_config(self) -> FieldConfig {
        match self {
            Preset::Classic => FieldConfig::default(),
            Preset::Showcase => FieldConfig::new(800, 600)
                .with_center(Point2D::new(400.0, 300.0))
                .with_max_wind_speed(60.0)
                .with_eye_radius(40.0),
        }
    }

    pub fn sampling_config(self) -> SamplingConfig {
        match self {
            Preset::Classic => SamplingConfig::default(),
            Preset::Showcase => SamplingConfig::new(25, 1.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves_and_round_trips() {
        for &name in Preset::list_names() {
            let preset = Preset::from_name(name).unwrap();
            assert_eq!(preset.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(
            Preset::from_name("typhoon"),
            Err(FlowError::UnknownPreset(n)) if n == "typhoon"
        ));
    }

    #[test]
    fn classic_matches_library_defaults() {
        assert_eq!(Preset::Classic.field_config(), FieldConfig::default());
        assert_eq!(Preset::Classic.sampling_config(), SamplingConfig::default());
    }

    #[test]
    fn showcase_values() {
        let field = Preset::Showcase.field_config();
        assert_eq!(field.max_wind_speed, 60.0);
        assert_eq!(field.eye_radius, 40.0);
        assert_eq!(field.center, Point2D::new(400.0, 300.0));
        let sampling = Preset::Showcase.sampling_config();
        assert_eq!(sampling.spacing, 25);
        assert_eq!(sampling.arrow_scale, 1.2);
        assert_eq!(sampling.style.stroke_color.to_hex(), "#0066cc");
    }
}

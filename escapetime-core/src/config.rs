//! Fractal configuration.
//!
//! `FractalConfig` is the fully-resolved parameter set every iteration and
//! render function takes. Callers that only want to change a few fields use
//! struct update syntax over `FractalConfig::default()`, or collect optional
//! values in `ConfigOverrides` and resolve them over the defaults.

use crate::{ConfigError, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 4.0;
pub const DEFAULT_OFFSET_X: f64 = -0.5;
pub const DEFAULT_OFFSET_Y: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Named color ramps understood by the colorizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Fire,
    #[default]
    Rainbow,
    Grayscale,
    Ocean,
    Sunset,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Fire,
        ColorScheme::Rainbow,
        ColorScheme::Grayscale,
        ColorScheme::Ocean,
        ColorScheme::Sunset,
    ];

    /// Identifier used in serialized configs and by `FromStr`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Rainbow => "rainbow",
            Self::Grayscale => "grayscale",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Rainbow => "Rainbow",
            Self::Grayscale => "Grayscale",
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorScheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownColorScheme(s.to_string()))
    }
}

/// The escape-time recurrences the renderer can dispatch to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FractalType {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
}

impl FractalType {
    pub const ALL: [FractalType; 3] = [
        FractalType::Mandelbrot,
        FractalType::Julia,
        FractalType::BurningShip,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burningShip",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia => "Julia Set",
            Self::BurningShip => "Burning Ship",
        }
    }
}

impl fmt::Display for FractalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FractalType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['_', '-', ' '], "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseError::UnknownFractalType(s.to_string()))
    }
}

/// Iteration and viewport parameters for a single render.
///
/// `escape_radius` is compared against the *squared* magnitude of z, so a
/// true bailout radius of 2 is expressed as 4.
///
/// Deserializing from JSON fills any missing key from the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FractalConfig {
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub color_scheme: ColorScheme,
    /// Real part of the viewport center.
    pub offset_x: f64,
    /// Imaginary part of the viewport center.
    pub offset_y: f64,
    /// Viewport width in the complex plane is `3 / zoom`.
    pub zoom: f64,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            color_scheme: ColorScheme::default(),
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl FractalConfig {
    /// Check the numeric invariants the iteration functions assume.
    ///
    /// Rendering never calls this: out-of-range values there just produce
    /// degenerate pixels. Hosts accepting user input can call it up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.escape_radius.is_finite() && self.escape_radius > 0.0) {
            return Err(ConfigError::InvalidEscapeRadius(self.escape_radius));
        }
        if self.escape_radius <= 1.0 {
            return Err(ConfigError::EscapeRadiusTooSmall(self.escape_radius));
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        if !(self.offset_x.is_finite() && self.offset_y.is_finite()) {
            return Err(ConfigError::InvalidOffset(self.offset_x, self.offset_y));
        }
        Ok(())
    }
}

/// Partial configuration: every field left as `None` keeps the base value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub max_iterations: Option<u32>,
    pub escape_radius: Option<f64>,
    pub color_scheme: Option<ColorScheme>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub zoom: Option<f64>,
}

impl ConfigOverrides {
    /// Merge over `FractalConfig::default()`.
    pub fn resolve(&self) -> FractalConfig {
        self.apply_to(&FractalConfig::default())
    }

    /// Merge over an arbitrary base, field by field.
    pub fn apply_to(&self, base: &FractalConfig) -> FractalConfig {
        FractalConfig {
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            escape_radius: self.escape_radius.unwrap_or(base.escape_radius),
            color_scheme: self.color_scheme.unwrap_or(base.color_scheme),
            offset_x: self.offset_x.unwrap_or(base.offset_x),
            offset_y: self.offset_y.unwrap_or(base.offset_y),
            zoom: self.zoom.unwrap_or(base.zoom),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ConfigOverrides> for FractalConfig {
    fn from(overrides: ConfigOverrides) -> Self {
        overrides.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = FractalConfig::default();
        assert_eq!(config.max_iterations, 256);
        assert_eq!(config.escape_radius, 4.0);
        assert_eq!(config.color_scheme, ColorScheme::Rainbow);
        assert_eq!(config.offset_x, -0.5);
        assert_eq!(config.offset_y, 0.0);
        assert_eq!(config.zoom, 1.0);
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(FractalConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_iterations() {
        let config = FractalConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn validate_rejects_bad_escape_radius() {
        let negative = FractalConfig {
            escape_radius: -4.0,
            ..Default::default()
        };
        assert_eq!(
            negative.validate(),
            Err(ConfigError::InvalidEscapeRadius(-4.0))
        );

        let tiny = FractalConfig {
            escape_radius: 1.0,
            ..Default::default()
        };
        assert_eq!(tiny.validate(), Err(ConfigError::EscapeRadiusTooSmall(1.0)));
    }

    #[test]
    fn validate_rejects_bad_zoom_and_offset() {
        let zoom = FractalConfig {
            zoom: 0.0,
            ..Default::default()
        };
        assert_eq!(zoom.validate(), Err(ConfigError::InvalidZoom(0.0)));

        let offset = FractalConfig {
            offset_y: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            offset.validate(),
            Err(ConfigError::InvalidOffset(_, _))
        ));
    }

    #[test]
    fn overrides_merge_field_by_field() {
        let overrides = ConfigOverrides {
            zoom: Some(4.0),
            color_scheme: Some(ColorScheme::Fire),
            ..Default::default()
        };
        let config = overrides.resolve();
        assert_eq!(config.zoom, 4.0);
        assert_eq!(config.color_scheme, ColorScheme::Fire);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.offset_x, DEFAULT_OFFSET_X);
    }

    #[test]
    fn overrides_apply_to_custom_base() {
        let base = FractalConfig {
            max_iterations: 1000,
            offset_x: 0.0,
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            offset_y: Some(0.5),
            ..Default::default()
        };
        let config = overrides.apply_to(&base);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.offset_x, 0.0);
        assert_eq!(config.offset_y, 0.5);
    }

    #[test]
    fn empty_overrides_resolve_to_default() {
        let overrides = ConfigOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(FractalConfig::from(overrides), FractalConfig::default());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: FractalConfig =
            serde_json::from_str(r#"{"zoom": 2.5, "colorScheme": "ocean"}"#).unwrap();
        assert_eq!(config.zoom, 2.5);
        assert_eq!(config.color_scheme, ColorScheme::Ocean);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.escape_radius, DEFAULT_ESCAPE_RADIUS);
    }

    #[test]
    fn overrides_from_json() {
        let overrides: ConfigOverrides = serde_json::from_str(r#"{"maxIterations": 64}"#).unwrap();
        assert_eq!(overrides.max_iterations, Some(64));
        assert_eq!(overrides.zoom, None);
    }

    #[test]
    fn color_scheme_parses_case_insensitively() {
        assert_eq!("fire".parse::<ColorScheme>(), Ok(ColorScheme::Fire));
        assert_eq!("Sunset".parse::<ColorScheme>(), Ok(ColorScheme::Sunset));
        assert_eq!(
            "plasma".parse::<ColorScheme>(),
            Err(ParseError::UnknownColorScheme("plasma".to_string()))
        );
    }

    #[test]
    fn color_scheme_ids_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.to_string().parse::<ColorScheme>(), Ok(scheme));
            let json = serde_json::to_string(&scheme).unwrap();
            assert_eq!(json, format!("\"{}\"", scheme.id()));
        }
    }

    #[test]
    fn fractal_type_parses_common_spellings() {
        assert_eq!("julia".parse::<FractalType>(), Ok(FractalType::Julia));
        assert_eq!(
            "burningShip".parse::<FractalType>(),
            Ok(FractalType::BurningShip)
        );
        assert_eq!(
            "burning_ship".parse::<FractalType>(),
            Ok(FractalType::BurningShip)
        );
        assert!("newton".parse::<FractalType>().is_err());
    }

    #[test]
    fn fractal_type_serializes_camel_case() {
        let json = serde_json::to_string(&FractalType::BurningShip).unwrap();
        assert_eq!(json, "\"burningShip\"");
    }
}

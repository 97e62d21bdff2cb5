//! Reference Julia constants.

use crate::Point;

/// Julia constant used when the caller does not supply one.
pub const DEFAULT_JULIA_CONSTANT: Point = Point::new(-0.7, 0.27015);

/// A named Julia-set constant `c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JuliaPreset {
    pub name: &'static str,
    pub constant: Point,
    pub description: &'static str,
}

pub static JULIA_PRESETS: &[JuliaPreset] = &[
    JuliaPreset {
        name: "Dendrite",
        constant: Point::new(0.0, 1.0),
        description: "Branching tree with no interior",
    },
    JuliaPreset {
        name: "Dragon",
        constant: Point::new(-0.8, 0.156),
        description: "Dragon-like connected set",
    },
    JuliaPreset {
        name: "Swirl",
        constant: Point::new(-0.7, 0.27015),
        description: "Spiralling arms, the default constant",
    },
    JuliaPreset {
        name: "Spiral",
        constant: Point::new(0.285, 0.01),
        description: "Tight spirals around a central body",
    },
    JuliaPreset {
        name: "Nebula",
        constant: Point::new(-0.4, 0.6),
        description: "Cloudy disconnected dust",
    },
    JuliaPreset {
        name: "Burning Ship",
        constant: Point::new(-1.755, 0.0),
        description: "Thin spine along the real axis echoing the Burning Ship",
    },
    JuliaPreset {
        name: "Circle",
        constant: Point::new(0.0, 0.0),
        description: "Degenerate case: the unit circle",
    },
    JuliaPreset {
        name: "Cardioid",
        constant: Point::new(0.25, 0.0),
        description: "Cauliflower from the cusp of the main cardioid",
    },
];

/// Look up a preset by name, ignoring ASCII case.
pub fn find_julia_preset(name: &str) -> Option<&'static JuliaPreset> {
    JULIA_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

//! Map normalized escape values to colors.
//!
//! `t` in [0, 1) is an escaping point; `t >= 1` marks the interior, which is
//! always black. Float-to-byte casts saturate, so stray values such as a
//! negative smoothed escape or NaN still land in [0, 255].

use escapetime_core::ColorScheme;

/// Map an escape value to an RGB triple.
pub fn color(t: f64, scheme: ColorScheme) -> [u8; 3] {
    if t >= 1.0 {
        return [0, 0, 0];
    }

    match scheme {
        ColorScheme::Fire => [to_byte(255.0 * t), to_byte(255.0 * t * t), 0],
        ColorScheme::Rainbow => hsl_to_rgb(360.0 * t, 1.0, 0.5),
        ColorScheme::Grayscale => {
            let v = to_byte(255.0 * t);
            [v, v, v]
        }
        ColorScheme::Ocean => [
            to_byte(50.0 * t),
            to_byte(50.0 * t + 100.0 * t * t),
            to_byte(100.0 + 155.0 * t),
        ],
        ColorScheme::Sunset => [
            to_byte(255.0 * t.powf(0.7)),
            to_byte(100.0 * t),
            to_byte(50.0 + 205.0 * (1.0 - t)),
        ],
    }
}

/// Same as [`color`] with an opaque alpha channel appended.
pub fn colorize(t: f64, scheme: ColorScheme) -> [u8; 4] {
    let [r, g, b] = color(t, scheme);
    [r, g, b, 255]
}

/// Convert HSL to RGB.
///
/// `h` is in degrees (wrapped into [0, 360)), `s` and `l` in [0, 1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return [v, v, v];
    }

    let h = (h / 360.0).rem_euclid(1.0);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    ]
}

/// Piecewise-linear channel ramp over one hue turn.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_byte(value: f64) -> u8 {
    value.floor() as u8
}

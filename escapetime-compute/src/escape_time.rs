//! Escape-time iteration for the Mandelbrot, Julia and Burning Ship sets.
//!
//! Every function here is pure f64 arithmetic. Malformed configurations are
//! not rejected: NaN or degenerate values simply flow through to the result.

use escapetime_core::{EscapeData, FractalConfig, FractalType, Point};

/// Iterate z ← z² + c from `z0` until |z|² reaches the escape radius or the
/// iteration budget runs out.
pub fn iterate_quadratic(z0: Point, c: Point, config: &FractalConfig) -> EscapeData {
    let (mut zr, mut zi) = z0.into_parts();
    let (cx, cy) = c.into_parts();
    let mut iterations = 0;

    while iterations < config.max_iterations && zr * zr + zi * zi < config.escape_radius {
        // new_zr = zr^2 - zi^2 + cx
        // new_zi = 2*zr*zi + cy
        let new_zr = zr * zr - zi * zi + cx;
        let new_zi = 2.0 * zr * zi + cy;
        zr = new_zr;
        zi = new_zi;
        iterations += 1;
    }

    EscapeData {
        iterations,
        max_iterations: config.max_iterations,
        final_z_norm_sq: zr * zr + zi * zi,
    }
}

/// Burning Ship recurrence: both components are folded to their absolute
/// value after every step.
pub fn iterate_burning_ship(c: Point, config: &FractalConfig) -> EscapeData {
    let (cx, cy) = c.into_parts();
    let mut zr = 0.0_f64;
    let mut zi = 0.0_f64;
    let mut iterations = 0;

    while iterations < config.max_iterations && zr * zr + zi * zi < config.escape_radius {
        let new_zr = (zr * zr - zi * zi + cx).abs();
        let new_zi = (2.0 * zr * zi + cy).abs();
        zr = new_zr;
        zi = new_zi;
        iterations += 1;
    }

    EscapeData {
        iterations,
        max_iterations: config.max_iterations,
        final_z_norm_sq: zr * zr + zi * zi,
    }
}

/// Normalized escape value with log-log smoothing between iteration bands.
///
/// Points that never escaped return exactly 1.0. The smoothing term needs
/// |z|² > 1 at escape, which holds whenever escape_radius > 1.
pub fn smooth_escape_value(data: &EscapeData) -> f64 {
    if !data.escaped() {
        return 1.0;
    }
    let iterations = data.iterations as f64;
    (iterations - data.final_z_norm_sq.log2().log2() + 4.0) / data.max_iterations as f64
}

/// Normalized escape value without smoothing: iterations / max_iterations.
pub fn linear_escape_value(data: &EscapeData) -> f64 {
    data.iterations as f64 / data.max_iterations as f64
}

/// Mandelbrot set: z₀ = 0, c = `point`.
pub fn mandelbrot(point: Point, config: &FractalConfig) -> f64 {
    smooth_escape_value(&iterate_quadratic(Point::ORIGIN, point, config))
}

/// Julia set: z₀ = `point`, c = `constant`.
pub fn julia(point: Point, constant: Point, config: &FractalConfig) -> f64 {
    smooth_escape_value(&iterate_quadratic(point, constant, config))
}

/// Burning Ship: z₀ = 0, c = `point`, unsmoothed.
pub fn burning_ship(point: Point, config: &FractalConfig) -> f64 {
    linear_escape_value(&iterate_burning_ship(point, config))
}

/// Dispatch to the iteration function for `fractal`.
///
/// `julia_constant` is only read for [`FractalType::Julia`].
pub fn escape_value(
    fractal: FractalType,
    point: Point,
    config: &FractalConfig,
    julia_constant: Point,
) -> f64 {
    match fractal {
        FractalType::Mandelbrot => mandelbrot(point, config),
        FractalType::Julia => julia(point, julia_constant, config),
        FractalType::BurningShip => burning_ship(point, config),
    }
}

//! Range mapping for controller values and modulation depth.
//!
//! Knobs send 0-127. Two curves turn that into parameter values:
//!
//!   map       straight line, used for amounts, cutoff and resonance and for
//!             scaling the LFO into a modulation range
//!   log_map   normalise to 0..1, square, then scale. Gives finer control at
//!             the bottom of the range, where pitch and gain changes are most
//!             audible. The squared curve is the intended response and is not
//!             a stand-in for an exponential one.

/// Linear interpolation that returns `a` at `t = 0` and `b` at `t = 1` exactly.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Linear map from `[in_min, in_max]` to `[out_min, out_max]`, unclamped.
#[inline]
pub fn map(input: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (out_max - out_min) * (input - in_min) / (in_max - in_min)
}

/// Squared-curve map from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Inputs outside the source range are clamped to it.
#[inline]
pub fn log_map(input: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let norm = ((input - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    lerp(out_min, out_max, norm * norm)
}

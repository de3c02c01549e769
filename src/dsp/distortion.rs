//! Distortion / Waveshaping
//!
//! The box has a single waveshaper: a rational soft clip followed by a hard
//! clamp.
//!
//!   d = (1 + g) * x / (1 + g * |x|)
//!   out = clamp(d, -1, 1)
//!
//! # Gain Values
//!
//!   0    = Clean (identity, clamped to ±1)
//!   1    = Gentle saturation, unity at full scale
//!   2-5  = Obvious distortion
//!   10   = Heavy, almost square
//!
//! For `|x| <= 1` the curve passes through ±1 at ±1 whatever the gain, so the
//! gain only changes how quickly the signal bends toward full scale. Louder
//! inputs (the output volume stage can push up to 10x) land on the clamp.
//! Negative gain is treated as zero; the curve is odd and monotonic for every
//! gain it accepts.

/// Soft-clip `input` with the given gain, result always in [-1, 1].
#[inline]
pub fn distort(input: f32, gain: f32) -> f32 {
    // |x| >= 1 always lands on the clamp; skipping the division avoids inf/inf
    if input.abs() >= 1.0 {
        return 1.0f32.copysign(input);
    }
    let gain = gain.max(0.0);
    let d = (1.0 + gain) * input / (1.0 + gain * input.abs());
    d.clamp(-1.0, 1.0)
}

/// Apply `distort` to an entire buffer in place.
pub fn distort_buffer(buffer: &mut [f32], gain: f32) {
    for sample in buffer.iter_mut() {
        *sample = distort(*sample, gain);
    }
}

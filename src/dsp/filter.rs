use std::f32::consts::PI;

/*
Resonant Low-Pass
=================

A Chamberlin state-variable filter: two leaky integrators in a feedback loop.
Every step produces low-pass, band-pass and high-pass at once; the synth only
listens to the low-pass tap.

    low  += f * band
    high  = input - low - q * band
    band += f * high

  f    tuning coefficient, 2 * sin(pi * cutoff / sample_rate)
  q    damping, 1 / resonance. Less damping = taller peak at the cutoff.

Stability
---------

Written as a state update (low, band) -> (low', band') the loop matrix has

    det   = 1 - f*q
    trace = 2 - f*f - f*q

and stays inside the unit circle while f*q > 0 and f*f + 2*f*q < 4. Cutoff is
clamped to sample_rate / 6, where f reaches exactly 1.0, and resonance is
clamped to [0.75, 50], so q never exceeds 4/3. At the worst corner
(f = 1, q = 4/3) the second bound is 1 + 8/3 < 4, so no parameter combination
can make the state run away.

The two registers are the filter's audio memory and persist for the whole
session. Nothing resets them during playback.
*/

/// Lowest accepted resonance; keeps damping at or below 4/3.
pub const MIN_RESONANCE: f32 = 0.75;
/// Highest accepted resonance; keeps a sliver of damping in the loop.
pub const MAX_RESONANCE: f32 = 50.0;
/// Upper bound on the tuning coefficient.
pub const MAX_COEFFICIENT: f32 = 1.0;

pub struct ResonantFilter {
    low: f32,  // Second integrator / low-pass output
    band: f32, // First integrator / band-pass output
    sample_rate: f32,
}

impl ResonantFilter {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            low: 0.0,
            band: 0.0,
            sample_rate,
        }
    }

    /// Tuning coefficient for a cutoff, clamped to the stable range.
    #[inline]
    pub fn coefficient(&self, cutoff_hz: f32) -> f32 {
        if !cutoff_hz.is_finite() || !(self.sample_rate > 0.0) {
            return 0.0;
        }
        let cutoff = cutoff_hz.clamp(0.0, self.sample_rate / 6.0);
        (2.0 * (PI * cutoff / self.sample_rate).sin()).clamp(0.0, MAX_COEFFICIENT)
    }

    /// Damping for a resonance; higher resonance gives less damping.
    #[inline]
    pub fn damping(resonance: f32) -> f32 {
        let resonance = if resonance.is_finite() {
            resonance.clamp(MIN_RESONANCE, MAX_RESONANCE)
        } else {
            MIN_RESONANCE
        };
        1.0 / resonance
    }

    /// One low-pass step.
    #[inline]
    pub fn lores(&mut self, input: f32, cutoff_hz: f32, resonance: f32) -> f32 {
        let f = self.coefficient(cutoff_hz);
        let q = Self::damping(resonance);
        let input = if input.is_finite() { input } else { 0.0 };

        self.low += f * self.band;
        let high = input - self.low - q * self.band;
        self.band += f * high;

        self.low
    }

    /// Apply `lores` over a buffer with fixed coefficients.
    pub fn render(&mut self, buffer: &mut [f32], cutoff_hz: f32, resonance: f32) {
        for sample in buffer.iter_mut() {
            *sample = self.lores(*sample, cutoff_hz, resonance);
        }
    }

    /// Clear both integrators. Only for start-up and tests.
    pub fn reset(&mut self) {
        self.low = 0.0;
        self.band = 0.0;
    }

    pub fn state(&self) -> (f32, f32) {
        (self.low, self.band)
    }
}

use std::f64::consts::TAU;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Oscillator
==========

The oscillator is the only sound source in the box. It keeps a phase
accumulator that counts fractional cycles in [0, 1) and maps the phase to one
of four waveforms:

    phase      0 ........ 0.25 ........ 0.5 ........ 0.75 ........ 1
    Sine       0           +1            0           -1            0
    Saw       -1          -0.5           0          +0.5          ~+1
    Square    +1          +1            -1          -1            -1
    Triangle  +1           0            -1           0            ~+1

Each call to `next_sample()` advances the phase by `frequency / sample_rate`
and then evaluates the waveform, so the first sample after construction is
already one step into the cycle.

The same type serves as the audible voice (20 Hz - 8 kHz) and as the LFO
(0.01 Hz - 100 Hz). Negative frequencies run the phase backwards, which only
mirrors the direction of travel through the cycle. A zero frequency holds the
phase. A non-finite increment is ignored so the accumulator can never become
NaN.

Sine comes from a shared lookup table with linear interpolation between
entries; the other shapes are cheap enough to compute directly. Switching
waveform keeps the phase, so changing shape mid-note does not restart the
cycle.
*/

/// Number of table entries covering one sine cycle.
pub const SINE_TABLE_LEN: usize = 4096;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    Sine,
    #[default]
    Saw,
    Square,
    Triangle,
}

impl Waveform {
    /// Fixed order used by note selection: index 0..=3.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Saw,
        Waveform::Square,
        Waveform::Triangle,
    ];

    /// Waveform for an index, wrapping modulo 4.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    pub fn index(self) -> u8 {
        match self {
            Waveform::Sine => 0,
            Waveform::Saw => 1,
            Waveform::Square => 2,
            Waveform::Triangle => 3,
        }
    }
}

/// One precomputed sine cycle, immutable after construction.
///
/// The table carries one guard entry past the end so interpolation never has
/// to wrap its upper index.
#[derive(Debug)]
pub struct SineTable {
    samples: Box<[f32]>,
}

impl SineTable {
    pub fn new() -> Self {
        let mut samples: Vec<f32> = (0..SINE_TABLE_LEN)
            .map(|i| (TAU * i as f64 / SINE_TABLE_LEN as f64).sin() as f32)
            .collect();
        samples.push(samples[0]);

        Self {
            samples: samples.into_boxed_slice(),
        }
    }

    /// Build a table ready to be handed to several oscillators.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Interpolated sine at `phase` (cycles, expected in [0, 1)).
    #[inline]
    pub fn lookup(&self, phase: f32) -> f32 {
        let position = phase * SINE_TABLE_LEN as f32;
        let index = (position as usize).min(SINE_TABLE_LEN - 1);
        let frac = (position - index as f32).clamp(0.0, 1.0);

        let a = self.samples[index];
        let b = self.samples[index + 1];
        a + (b - a) * frac
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Oscillator {
    table: Arc<SineTable>,
    waveform: Waveform,
    frequency: f32,
    sample_rate: f32,
    phase: f32,
}

impl Oscillator {
    pub fn new(table: Arc<SineTable>, waveform: Waveform, frequency: f32, sample_rate: f32) -> Self {
        Self {
            table,
            waveform,
            frequency,
            sample_rate,
            phase: 0.0,
        }
    }

    /// Switch the generating function. Phase is kept to avoid clicks.
    pub fn set_waveform(&mut self, waveform: Waveform, sample_rate: f32) {
        self.waveform = waveform;
        self.sample_rate = sample_rate;
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Current phase in cycles, always in [0, 1).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance one sample and return the waveform at the new phase.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.advance();
        self.evaluate(self.phase)
    }

    #[inline]
    fn advance(&mut self) {
        let increment = self.frequency / self.sample_rate;
        if !increment.is_finite() {
            return;
        }

        let phase = self.phase + increment;
        let wrapped = phase - phase.floor();
        // floor() leaves tiny negatives that round up to exactly 1.0
        self.phase = if wrapped >= 1.0 || !wrapped.is_finite() {
            0.0
        } else {
            wrapped
        };
    }

    #[inline]
    fn evaluate(&self, phase: f32) -> f32 {
        match self.waveform {
            Waveform::Sine => self.table.lookup(phase),
            Waveform::Saw => 2.0 * phase - 1.0,
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
        }
    }
}

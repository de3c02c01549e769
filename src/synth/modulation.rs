use crate::dsp::lfo::scale_bipolar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Modulation Routing
==================

One amount knob, one target switch. The LFO moves either the oscillator pitch
(vibrato, siren) or the filter cutoff (wah), never both at once.

The LFO sample is scaled linearly into a range that ends at the base value,
multiplied by the amount, and subtracted from the base:

    pitch:   osc    = base_osc    - amount * map(lfo, -1, 1,  0, base_osc)
    cutoff:  cutoff = base_cutoff - amount * map(lfo, -1, 1, 40, base_cutoff)

So modulation only ever pulls the parameter down from where the knob sits.
With amount = 1 the pitch sweeps between base and zero, and the cutoff between
base and (nearly) the bottom of the filter. A linear scale is used here, not
the squared knob curve, so depth feels proportional to the amount.

With amount = 0 both results are the base values bit for bit.
*/

/// Lower end of the cutoff sweep range, in Hz.
pub const CUTOFF_SWEEP_FLOOR: f32 = 40.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ModulationTarget {
    #[default]
    Pitch = 0,
    Cutoff = 1,
}

impl ModulationTarget {
    /// Decode a stored value; anything unknown reads as `Cutoff`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => ModulationTarget::Pitch,
            _ => ModulationTarget::Cutoff,
        }
    }

    /// Target-select switch: values above 63 pick pitch.
    pub fn from_controller(value: u8) -> Self {
        if value > 63 {
            ModulationTarget::Pitch
        } else {
            ModulationTarget::Cutoff
        }
    }
}

/// Effective parameters after modulation for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Routed {
    pub osc_frequency: f32,
    pub cutoff: f32,
}

/// Apply the LFO sample to exactly one of the two base values.
#[inline]
pub fn route(
    target: ModulationTarget,
    base_osc: f32,
    base_cutoff: f32,
    amount: f32,
    lfo: f32,
) -> Routed {
    match target {
        ModulationTarget::Pitch => Routed {
            osc_frequency: base_osc - amount * scale_bipolar(lfo, 0.0, base_osc),
            cutoff: base_cutoff,
        },
        ModulationTarget::Cutoff => Routed {
            osc_frequency: base_osc,
            cutoff: base_cutoff - amount * scale_bipolar(lfo, CUTOFF_SWEEP_FLOOR, base_cutoff),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LFO_SAMPLES: [f32; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];
    const TARGETS: [ModulationTarget; 2] = [ModulationTarget::Pitch, ModulationTarget::Cutoff];

    #[test]
    fn test_zero_amount_leaves_base_values() {
        for target in TARGETS {
            for lfo in LFO_SAMPLES {
                let routed = route(target, 440.0, 3_000.0, 0.0, lfo);
                assert_eq!(routed.osc_frequency, 440.0);
                assert_eq!(routed.cutoff, 3_000.0);
            }
        }
    }

    #[test]
    fn test_pitch_target_never_touches_cutoff() {
        for lfo in LFO_SAMPLES {
            let routed = route(ModulationTarget::Pitch, 440.0, 3_000.0, 1.0, lfo);
            assert_eq!(routed.cutoff, 3_000.0);
        }
    }

    #[test]
    fn test_cutoff_target_never_touches_pitch() {
        for lfo in LFO_SAMPLES {
            let routed = route(ModulationTarget::Cutoff, 440.0, 3_000.0, 1.0, lfo);
            assert_eq!(routed.osc_frequency, 440.0);
        }
    }

    #[test]
    fn test_pitch_depth_is_linear() {
        // lfo at +1 with full depth pulls the pitch all the way to zero
        let top = route(ModulationTarget::Pitch, 440.0, 3_000.0, 1.0, 1.0);
        assert!(top.osc_frequency.abs() < 1e-3);

        // lfo at 0 is halfway through the range
        let mid = route(ModulationTarget::Pitch, 440.0, 3_000.0, 0.5, 0.0);
        assert!((mid.osc_frequency - 330.0).abs() < 1e-3);

        // lfo at -1 is the bottom of the range: no change
        let bottom = route(ModulationTarget::Pitch, 440.0, 3_000.0, 1.0, -1.0);
        assert!((bottom.osc_frequency - 440.0).abs() < 1e-3);
    }

    #[test]
    fn test_cutoff_sweep_range() {
        let bottom = route(ModulationTarget::Cutoff, 440.0, 3_000.0, 1.0, -1.0);
        assert!((bottom.cutoff - (3_000.0 - CUTOFF_SWEEP_FLOOR)).abs() < 1e-2);

        let top = route(ModulationTarget::Cutoff, 440.0, 3_000.0, 1.0, 1.0);
        assert!(top.cutoff.abs() < 1e-2);
    }

    #[test]
    fn test_target_switch_threshold() {
        assert_eq!(ModulationTarget::from_controller(100), ModulationTarget::Pitch);
        assert_eq!(ModulationTarget::from_controller(64), ModulationTarget::Pitch);
        assert_eq!(ModulationTarget::from_controller(63), ModulationTarget::Cutoff);
        assert_eq!(ModulationTarget::from_controller(30), ModulationTarget::Cutoff);
    }

    #[test]
    fn test_raw_round_trip() {
        for target in TARGETS {
            assert_eq!(ModulationTarget::from_raw(target as u8), target);
        }
    }
}

//! Low Frequency Oscillator (LFO) conventions.

/*
Low Frequency Oscillators
=========================

An LFO is an oscillator running at sub-audio frequencies. In this synth it is
literally the same `Oscillator` type as the voice, just tuned between 0.01 Hz
and 100 Hz by controller 2 and never routed to the output.

Vocabulary
----------

  audio-rate      ~20 Hz and up. Produces the tone you hear.

  control-rate    Below ~20 Hz. Moves a parameter instead of making sound.

  bipolar         Output swings -1.0 to +1.0. This is what the oscillator
                  produces.

  unipolar        Output in 0.0 to 1.0.
                  Convert: unipolar = (bipolar + 1.0) / 2.0

Typical LFO Frequencies
-----------------------

    0.01 - 0.1 Hz   Very slow sweeps (the power-on default is 0.1 Hz)
    0.5 - 2 Hz      Slow wah
    2 - 7 Hz        Vibrato sweet spot
    > 20 Hz         Audio-rate; turns into FM/AM sidebands rather than wobble

Free-running
------------

The LFO is never reset by notes. It runs for the whole session, even while
the output is muted, so modulation picks up wherever it happens to be when
the next note opens the gate.

Depth Scaling
-------------

The router needs the LFO as a position inside a parameter range, not as a
bipolar swing. `bipolar_to_unipolar` gives that position; scaling it by the
range is then a plain linear map:

    bipolar   unipolar   map(x, -1, 1, lo, hi)
    -1.0      0.0        lo
     0.0      0.5        (lo + hi) / 2
    +1.0      1.0        hi
*/

/// Convert bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Scale a bipolar LFO sample linearly into `[low, high]`.
#[inline]
pub fn scale_bipolar(bipolar: f32, low: f32, high: f32) -> f32 {
    low + (high - low) * bipolar_to_unipolar(bipolar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::mapping::map;

    #[test]
    fn test_bipolar_to_unipolar() {
        assert!((bipolar_to_unipolar(-1.0) - 0.0).abs() < 1e-6);
        assert!((bipolar_to_unipolar(0.0) - 0.5).abs() < 1e-6);
        assert!((bipolar_to_unipolar(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_bipolar_matches_linear_map() {
        for &lfo in &[-1.0, -0.3, 0.0, 0.25, 1.0] {
            let scaled = scale_bipolar(lfo, 40.0, 3_000.0);
            let mapped = map(lfo, -1.0, 1.0, 40.0, 3_000.0);
            assert!(
                (scaled - mapped).abs() < 1e-3,
                "lfo={lfo}: scaled={scaled}, mapped={mapped}"
            );
        }
    }
}

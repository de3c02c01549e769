use std::sync::Arc;

use crate::{
    config::EngineConfig,
    dsp::{
        distortion::distort,
        filter::ResonantFilter,
        oscillator::{Oscillator, SineTable},
    },
    synth::{
        message::{note_off_mutes, waveform_for_note, ParamChange, SynthMessage},
        modulation::route,
        param::SynthParams,
    },
};

/*
Engine
======

Per sample, the chain is:

    cells ──► router ──► oscillator ──► filter ──► distortion ──► guard ──► headroom ──► gate
                ▲
               LFO

  router      LFO moves pitch or cutoff (see modulation.rs)
  guard       a non-finite result is replaced by the raw oscillator sample
  headroom    fixed 0.7 attenuation
  gate        muted = exact zeros on every channel

The chain always runs, gate open or closed. Oscillator phase, LFO phase and
filter memory keep moving while muted so the next note opens onto a running
signal instead of a cold start.

`SynthEngine` is owned by the audio callback. `SynthController` is a cheap
handle for the control side; both point at the same `SynthParams`.
*/

/// Per-callback summary handed out of the audio context.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockStats {
    pub frames: u32,
    /// Largest absolute output sample in the block.
    pub peak: f32,
    /// Samples where the finite guard had to substitute the raw oscillator.
    pub fallbacks: u32,
    /// Gate state at the end of the block.
    pub muted: bool,
}

struct Frame {
    out: f32,
    fallback: bool,
}

pub struct SynthEngine {
    params: Arc<SynthParams>,
    osc: Oscillator,
    lfo: Oscillator,
    filter: ResonantFilter,
    sample_rate: f32,
    headroom: f32,
}

impl SynthEngine {
    pub fn new(config: &EngineConfig) -> Self {
        let patch = &config.initial;
        let table = SineTable::shared();

        Self {
            params: Arc::new(SynthParams::from_patch(patch)),
            osc: Oscillator::new(
                Arc::clone(&table),
                patch.waveform,
                patch.osc_frequency,
                config.sample_rate,
            ),
            lfo: Oscillator::new(table, patch.lfo_waveform, patch.lfo_frequency, config.sample_rate),
            filter: ResonantFilter::new(config.sample_rate),
            sample_rate: config.sample_rate,
            headroom: config.headroom,
        }
    }

    /// Handle for the control context.
    pub fn controller(&self) -> SynthController {
        SynthController {
            params: Arc::clone(&self.params),
        }
    }

    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.osc
    }

    pub fn lfo(&self) -> &Oscillator {
        &self.lfo
    }

    pub fn filter(&self) -> &ResonantFilter {
        &self.filter
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Produce one gated output sample.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.tick().out
    }

    #[inline]
    fn tick(&mut self) -> Frame {
        let params = &*self.params;
        // Gate first: its Acquire load makes the NoteOn waveform visible
        let muted = params.gate.is_muted();

        let waveform = params.waveform.get();
        if waveform != self.osc.waveform() {
            self.osc.set_waveform(waveform, self.sample_rate);
        }

        self.lfo.set_frequency(params.lfo_frequency.get());
        let lfo_sample = self.lfo.next_sample();

        let routed = route(
            params.mod_target.get(),
            params.osc_frequency.get(),
            params.filter_cutoff.get(),
            params.mod_amount.get(),
            lfo_sample,
        );

        self.osc.set_frequency(routed.osc_frequency);
        let raw = self.osc.next_sample();

        let filtered = self
            .filter
            .lores(raw, routed.cutoff, params.filter_resonance.get());
        let mut out = distort(filtered * params.dist_volume.get(), params.dist_gain.get());

        let fallback = !out.is_finite();
        if fallback {
            out = raw;
        }
        out *= self.headroom;

        if muted {
            out = 0.0;
        }

        Frame { out, fallback }
    }

    /// Fill an interleaved buffer, writing the same sample to every channel.
    ///
    /// Trailing samples that do not make up a whole frame are zeroed.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) -> BlockStats {
        if channels == 0 {
            return BlockStats {
                muted: self.params.gate.is_muted(),
                ..BlockStats::default()
            };
        }

        let mut stats = BlockStats::default();
        let mut frames = data.chunks_exact_mut(channels);
        for frame in &mut frames {
            let Frame { out, fallback } = self.tick();
            frame.fill(out);

            stats.frames += 1;
            stats.peak = stats.peak.max(out.abs());
            stats.fallbacks += fallback as u32;
        }
        frames.into_remainder().fill(0.0);

        stats.muted = self.params.gate.is_muted();
        stats
    }

    /// Fill a mono buffer.
    pub fn render_mono(&mut self, out: &mut [f32]) -> BlockStats {
        self.render_interleaved(out, 1)
    }
}

/// Control-side handle. Every method is a handful of atomic stores.
#[derive(Clone)]
pub struct SynthController {
    params: Arc<SynthParams>,
}

impl SynthController {
    pub fn apply(&self, message: SynthMessage) {
        match message {
            SynthMessage::NoteOn { note, .. } => {
                self.params.waveform.set(waveform_for_note(note));
                self.params.gate.set_muted(false);
            }
            SynthMessage::NoteOff { note, .. } => {
                if note_off_mutes(note) {
                    self.params.gate.set_muted(true);
                }
            }
            SynthMessage::ControlChange { controller, value } => {
                if let Some(change) = ParamChange::from_control_change(controller, value) {
                    self.set(change);
                }
            }
        }
    }

    pub fn set(&self, change: ParamChange) {
        let params = &*self.params;
        match change {
            ParamChange::OscFrequency(hz) => params.osc_frequency.set(hz),
            ParamChange::LfoFrequency(hz) => params.lfo_frequency.set(hz),
            ParamChange::ModAmount(amount) => params.mod_amount.set(amount),
            ParamChange::ModTarget(target) => params.mod_target.set(target),
            ParamChange::FilterCutoff(hz) => params.filter_cutoff.set(hz),
            ParamChange::FilterResonance(resonance) => params.filter_resonance.set(resonance),
            ParamChange::DistGain(gain) => params.dist_gain.set(gain),
            ParamChange::DistVolume(volume) => params.dist_volume.set(volume),
        }
    }

    pub fn params(&self) -> &SynthParams {
        &self.params
    }
}

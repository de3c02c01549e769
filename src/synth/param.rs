use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::{config::Patch, dsp::oscillator::Waveform, synth::modulation::ModulationTarget};

/*
Shared Parameters
=================

Two contexts touch these values:

  control   MIDI callback thread. Writes whenever a knob moves.
  audio     Device callback thread. Reads every sample, must never wait.

Every value shared between them lives in a single atomic word. A float is
stored as its raw bit pattern in an `AtomicU32`, so a reader always sees one
complete value that was written at some point, old or new, never half of
each. Parameter cells use Relaxed ordering: each one is independent and
"latest write wins" is the only promise made. No cell is ever guarded by a
lock, so the audio thread can not be stalled by the control thread.

The gate is the one exception. Opening it is a Release store and reading it is
an Acquire load, so an audio tick that sees the gate open also sees every cell
written before it was opened. A NoteOn therefore never sounds a sample with the
previous note's waveform.

Changes land as instantaneous steps. A fast knob twist on cutoff or pitch can
click; that is accepted.
*/

/// Lock-free `f32` cell with one writer and one reader.
#[derive(Debug)]
pub struct ParamSlot {
    bits: AtomicU32,
}

impl ParamSlot {
    pub fn new(initial: f32) -> Self {
        Self {
            bits: AtomicU32::new(initial.to_bits()),
        }
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

/// Which parameter the LFO is routed to.
#[derive(Debug)]
pub struct TargetCell {
    raw: AtomicU8,
}

impl TargetCell {
    pub fn new(target: ModulationTarget) -> Self {
        Self {
            raw: AtomicU8::new(target as u8),
        }
    }

    #[inline]
    pub fn set(&self, target: ModulationTarget) {
        self.raw.store(target as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> ModulationTarget {
        ModulationTarget::from_raw(self.raw.load(Ordering::Relaxed))
    }
}

/// Waveform requested for the voice oscillator.
#[derive(Debug)]
pub struct WaveformCell {
    index: AtomicU8,
}

impl WaveformCell {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            index: AtomicU8::new(waveform.index()),
        }
    }

    #[inline]
    pub fn set(&self, waveform: Waveform) {
        self.index.store(waveform.index(), Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> Waveform {
        Waveform::from_index(self.index.load(Ordering::Relaxed))
    }
}

/// Output gate. Muted means silence on every channel.
#[derive(Debug)]
pub struct GateFlag {
    muted: AtomicBool,
}

impl GateFlag {
    pub fn new(muted: bool) -> Self {
        Self {
            muted: AtomicBool::new(muted),
        }
    }

    #[inline]
    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Release);
    }

    /// Cells written before the gate was last changed are visible after this.
    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }
}

/// Every value the control context may change while audio is running.
#[derive(Debug)]
pub struct SynthParams {
    pub osc_frequency: ParamSlot,
    pub lfo_frequency: ParamSlot,
    pub mod_amount: ParamSlot,
    pub mod_target: TargetCell,
    pub filter_cutoff: ParamSlot,
    pub filter_resonance: ParamSlot,
    pub dist_gain: ParamSlot,
    pub dist_volume: ParamSlot,
    pub waveform: WaveformCell,
    pub gate: GateFlag,
}

impl SynthParams {
    pub fn from_patch(patch: &Patch) -> Self {
        Self {
            osc_frequency: ParamSlot::new(patch.osc_frequency),
            lfo_frequency: ParamSlot::new(patch.lfo_frequency),
            mod_amount: ParamSlot::new(patch.mod_amount),
            mod_target: TargetCell::new(patch.mod_target),
            filter_cutoff: ParamSlot::new(patch.filter_cutoff),
            filter_resonance: ParamSlot::new(patch.filter_resonance),
            dist_gain: ParamSlot::new(patch.dist_gain),
            dist_volume: ParamSlot::new(patch.dist_volume),
            waveform: WaveformCell::new(patch.waveform),
            gate: GateFlag::new(patch.muted),
        }
    }
}

impl Default for SynthParams {
    fn default() -> Self {
        Self::from_patch(&Patch::default())
    }
}

use crate::{
    dsp::{
        mapping::{log_map, map},
        oscillator::Waveform,
    },
    synth::modulation::ModulationTarget,
};

/// Control events understood by the synth.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynthMessage {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8, velocity: u8 },
    ControlChange { controller: u8, value: u8 },
}

/// Lowest note of the waveform-select pads.
pub const WAVEFORM_BASE_NOTE: u8 = 36;
/// Releasing any note at or below this one closes the gate.
pub const MUTE_NOTE_CEILING: u8 = 39;

/*
Controller Map
==============

| cc | parameter                | curve  | range          |
| -- | ------------------------ | ------ | -------------- |
| 1  | oscillator frequency     | log    | 20 - 8000 Hz   |
| 2  | LFO frequency            | log    | 0.01 - 100 Hz  |
| 3  | modulation amount        | linear | 0 - 1          |
| 4  | modulation target        | switch | >63 pitch      |
| 5  | filter cutoff            | linear | 50 - 4000 Hz   |
| 6  | filter resonance         | linear | 1 - 10         |
| 7  | distortion gain          | log    | 0 - 10         |
| 8  | distortion output volume | log    | 0 - 10         |

Any other controller number is ignored.
*/

/// A single parameter update decoded from a control change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamChange {
    OscFrequency(f32),
    LfoFrequency(f32),
    ModAmount(f32),
    ModTarget(ModulationTarget),
    FilterCutoff(f32),
    FilterResonance(f32),
    DistGain(f32),
    DistVolume(f32),
}

impl ParamChange {
    pub fn from_control_change(controller: u8, value: u8) -> Option<Self> {
        let v = value as f32;
        let change = match controller {
            1 => ParamChange::OscFrequency(log_map(v, 0.0, 127.0, 20.0, 8_000.0)),
            2 => ParamChange::LfoFrequency(log_map(v, 0.0, 127.0, 0.01, 100.0)),
            3 => ParamChange::ModAmount(map(v, 0.0, 127.0, 0.0, 1.0)),
            4 => ParamChange::ModTarget(ModulationTarget::from_controller(value)),
            5 => ParamChange::FilterCutoff(map(v, 0.0, 127.0, 50.0, 4_000.0)),
            6 => ParamChange::FilterResonance(map(v, 0.0, 127.0, 1.0, 10.0)),
            7 => ParamChange::DistGain(log_map(v, 0.0, 127.0, 0.0, 10.0)),
            8 => ParamChange::DistVolume(log_map(v, 0.0, 127.0, 0.0, 10.0)),
            _ => return None,
        };
        Some(change)
    }
}

/// Waveform selected by a note: `(note - 36) mod 4`, wrapping below 36 too.
pub fn waveform_for_note(note: u8) -> Waveform {
    let index = (note as i16 - WAVEFORM_BASE_NOTE as i16).rem_euclid(4);
    Waveform::from_index(index as u8)
}

/// Whether releasing `note` closes the gate.
pub fn note_off_mutes(note: u8) -> bool {
    note <= MUTE_NOTE_CEILING
}

use crate::{io::midi::MidiEvent, synth::message::SynthMessage};

/// Zero-based channel listened on unless told otherwise (MIDI channel 1).
pub const DEFAULT_CHANNEL: u8 = 0;

/// Translate a decoded MIDI event into a synth message.
///
/// `channel_filter` of `None` listens on every channel.
pub fn midi_to_synth(midi: MidiEvent, channel_filter: Option<u8>) -> Option<SynthMessage> {
    if channel_filter.is_some_and(|channel| channel != midi.channel()) {
        return None;
    }

    let message = match midi {
        MidiEvent::NoteOn { key, velocity, .. } => SynthMessage::NoteOn {
            note: key,
            velocity,
        },
        MidiEvent::NoteOff { key, velocity, .. } => SynthMessage::NoteOff {
            note: key,
            velocity,
        },
        MidiEvent::ControlChange {
            controller, value, ..
        } => SynthMessage::ControlChange { controller, value },
    };
    Some(message)
}

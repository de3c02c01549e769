//! Raw MIDI byte decoding.
//!
//! Only the three channel-voice messages the synth reacts to are decoded.
//! Running status is not tracked; the port driver delivers complete messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
}

impl MidiEvent {
    pub fn channel(&self) -> u8 {
        match *self {
            MidiEvent::NoteOn { channel, .. }
            | MidiEvent::NoteOff { channel, .. }
            | MidiEvent::ControlChange { channel, .. } => channel,
        }
    }
}

/// Decode one MIDI message. Returns `None` for anything the synth ignores.
///
/// A note-on with velocity 0 is reported as a note-off.
pub fn parse(bytes: &[u8]) -> Option<MidiEvent> {
    let (&status_byte, data) = bytes.split_first()?;

    // System messages (0xF0-0xFF) carry no channel
    if status_byte >= 0xF0 {
        return None;
    }

    let channel = status_byte & 0x0F;
    let data1 = *data.first()? & 0x7F;
    let data2 = *data.get(1)? & 0x7F;

    match status_byte & 0xF0 {
        0x90 if data2 > 0 => Some(MidiEvent::NoteOn {
            channel,
            key: data1,
            velocity: data2,
        }),
        0x80 | 0x90 => Some(MidiEvent::NoteOff {
            channel,
            key: data1,
            velocity: data2,
        }),
        0xB0 => Some(MidiEvent::ControlChange {
            channel,
            controller: data1,
            value: data2,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_on() {
        assert_eq!(
            parse(&[0x90, 36, 100]),
            Some(MidiEvent::NoteOn {
                channel: 0,
                key: 36,
                velocity: 100
            })
        );
    }

    #[test]
    fn test_zero_velocity_note_on_is_note_off() {
        assert_eq!(
            parse(&[0x93, 40, 0]),
            Some(MidiEvent::NoteOff {
                channel: 3,
                key: 40,
                velocity: 0
            })
        );
    }

    #[test]
    fn test_note_off_and_control_change() {
        assert_eq!(
            parse(&[0x80, 39, 64]),
            Some(MidiEvent::NoteOff {
                channel: 0,
                key: 39,
                velocity: 64
            })
        );
        let cc = parse(&[0xB9, 4, 100]).unwrap();
        assert_eq!(
            cc,
            MidiEvent::ControlChange {
                channel: 9,
                controller: 4,
                value: 100
            }
        );
        assert_eq!(cc.channel(), 9);
    }

    #[test]
    fn test_ignored_messages() {
        assert_eq!(parse(&[]), None);
        assert_eq!(parse(&[0xF8]), None); // timing clock
        assert_eq!(parse(&[0xF0, 0x7E, 0xF7]), None); // sysex
        assert_eq!(parse(&[0xE0, 0x00, 0x40]), None); // pitch bend
        assert_eq!(parse(&[0xC0, 5]), None); // program change
        assert_eq!(parse(&[0x90, 36]), None); // truncated
    }
}

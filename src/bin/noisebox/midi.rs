//! MIDI input port handling.
//!
//! Finds the controller by name prefix, connects, and feeds every decoded
//! message straight into the synth controller from midir's callback thread.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use midir::{Ignore, MidiInput, MidiInputConnection};
use tracing::{debug, info};

use noisebox::{
    io::{converter::midi_to_synth, midi::parse},
    SynthController,
};

/// Information about a MIDI input port
#[derive(Debug, Clone)]
pub struct MidiPortInfo {
    pub name: String,
    pub index: usize,
}

/// List available MIDI input ports
pub fn list_ports() -> EyreResult<Vec<MidiPortInfo>> {
    let midi_in = MidiInput::new("noisebox-list").wrap_err("failed to create MIDI input")?;

    Ok(midi_in
        .ports()
        .iter()
        .enumerate()
        .filter_map(|(index, port)| {
            midi_in
                .port_name(port)
                .ok()
                .map(|name| MidiPortInfo { name, index })
        })
        .collect())
}

/// Connect to the first input port whose name starts with `prefix`.
///
/// The returned connection must be kept alive for as long as input is wanted.
pub fn connect(
    prefix: &str,
    controller: SynthController,
    channel: Option<u8>,
) -> EyreResult<MidiInputConnection<()>> {
    let mut midi_in = MidiInput::new("noisebox").wrap_err("failed to create MIDI input")?;
    // Sysex, timing clock and active sensing are never needed
    midi_in.ignore(Ignore::All);

    let ports = midi_in.ports();
    info!("{} MIDI input sources available", ports.len());
    if ports.is_empty() {
        return Err(eyre!(
            "no MIDI input sources available; try `sudo modprobe snd_seq` if you are getting permission errors"
        ));
    }

    let (index, port, name) = ports
        .iter()
        .enumerate()
        .find_map(|(index, port)| {
            let name = midi_in.port_name(port).ok()?;
            name.starts_with(prefix).then(|| (index, port.clone(), name))
        })
        .ok_or_else(|| eyre!("no MIDI input port matching '{prefix}'"))?;

    info!("opening MIDI port #{}: {}", index + 1, name);

    midi_in
        .connect(
            &port,
            "noisebox-input",
            move |_timestamp_us, bytes, _| {
                let Some(message) = parse(bytes).and_then(|event| midi_to_synth(event, channel))
                else {
                    return;
                };
                debug!(?message, "control event");
                controller.apply(message);
            },
            (),
        )
        .map_err(|err| eyre!("failed to connect to MIDI port '{name}': {err}"))
}

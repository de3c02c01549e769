//! noisebox - monophonic MIDI synthesizer
//!
//! Run with: cargo run -- --midi-port LPD8

mod app;
mod midi;
mod notify;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::Noisebox;
use noisebox::{io::converter::DEFAULT_CHANNEL, EngineConfig};

/// Realtime synth played from a MIDI pad controller
#[derive(Parser, Debug)]
#[command(name = "noisebox")]
#[command(version, about)]
struct Cli {
    /// Output device index (see --list). Defaults to the system output.
    #[arg(short, long)]
    device: Option<usize>,

    /// Open the first MIDI input whose name starts with this prefix
    #[arg(short, long, default_value = "LPD8")]
    midi_port: String,

    /// Only listen on this MIDI channel (1-16)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_CHANNEL + 1,
        value_parser = clap::value_parser!(u8).range(1..=16),
        conflicts_with = "omni"
    )]
    channel: u8,

    /// Listen on every MIDI channel
    #[arg(long)]
    omni: bool,

    /// Send SIGUSR1 to the parent process once audio is running
    #[arg(long)]
    notify_parent: bool,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = noisebox::SAMPLE_RATE)]
    sample_rate: f32,

    /// Frames per audio callback
    #[arg(long, default_value_t = noisebox::BUFFER_FRAMES)]
    buffer_frames: usize,

    /// List audio outputs and MIDI inputs, then exit
    #[arg(short, long)]
    list: bool,
}

impl Cli {
    /// Zero-based channel filter handed to the converter.
    fn midi_channel(&self) -> Option<u8> {
        (!self.omni).then_some(self.channel - 1)
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.list {
        app::print_devices()?;
        return Ok(());
    }

    let config = EngineConfig::default()
        .with_sample_rate(cli.sample_rate)
        .with_buffer_frames(cli.buffer_frames);
    config.validate()?;

    Noisebox::new(config)
        .output_device(cli.device)
        .midi_port(&cli.midi_port)
        .midi_channel(cli.midi_channel())
        .notify_parent(cli.notify_parent)
        .run()
}

//! Noisebox - audio/MIDI setup and the main thread loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tracing::{debug, error, info, warn};

use noisebox::{
    io::converter::DEFAULT_CHANNEL,
    telemetry::{stats_channel, StatsSender, StatsSummary},
    EngineConfig, SynthEngine,
};

use super::{midi, notify};

const OUTPUT_CHANNELS: u16 = 2;
/// About three seconds of block reports at 22050 Hz / 128 frames
const STATS_RING_BLOCKS: usize = 512;
const POLL_INTERVAL: Duration = Duration::from_millis(100);
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Application builder
pub struct Noisebox {
    config: EngineConfig,
    output_device: Option<usize>,
    midi_port: String,
    midi_channel: Option<u8>,
    notify_parent: bool,
}

impl Noisebox {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            output_device: None,
            midi_port: String::from("LPD8"),
            midi_channel: Some(DEFAULT_CHANNEL),
            notify_parent: false,
        }
    }

    /// Pick an output device by index; `None` uses the host default.
    pub fn output_device(mut self, index: Option<usize>) -> Self {
        self.output_device = index;
        self
    }

    pub fn midi_port(mut self, prefix: &str) -> Self {
        self.midi_port = prefix.to_string();
        self
    }

    /// Restrict input to one zero-based channel; `None` listens on all of them.
    pub fn midi_channel(mut self, channel: Option<u8>) -> Self {
        self.midi_channel = channel;
        self
    }

    /// Send SIGUSR1 to the parent process once audio is running.
    pub fn notify_parent(mut self, notify: bool) -> Self {
        self.notify_parent = notify;
        self
    }

    /// Run until Ctrl+C.
    pub fn run(self) -> EyreResult<()> {
        info!("Noisebox!");

        let engine = SynthEngine::new(&self.config);
        let controller = engine.controller();

        // MIDI first: no controller means nothing to play
        let _midi = midi::connect(&self.midi_port, controller, self.midi_channel)?;

        let (stats_tx, mut stats_rx) = stats_channel(STATS_RING_BLOCKS);
        let stream = self.start_audio(engine, stats_tx)?;
        if self.notify_parent {
            notify::notify_parent()?;
        }

        let running = Arc::new(AtomicBool::new(true));
        {
            let running = Arc::clone(&running);
            ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
                .wrap_err("failed to install Ctrl+C handler")?;
        }

        info!("Playing... press Ctrl+C to stop");

        let mut report = StatsSummary::default();
        let mut last_report = Instant::now();
        let mut dropped = 0;
        while running.load(Ordering::SeqCst) {
            thread::sleep(POLL_INTERVAL);

            let summary = stats_rx.drain();
            if summary.fallbacks > 0 {
                warn!(
                    fallbacks = summary.fallbacks,
                    "non-finite samples replaced by raw oscillator output"
                );
            }
            report.merge(&summary);

            let total_dropped = stats_rx.dropped();
            if total_dropped > dropped {
                warn!(
                    lost = total_dropped - dropped,
                    total = total_dropped,
                    "block reports dropped, stats reader fell behind"
                );
                dropped = total_dropped;
            }

            if last_report.elapsed() >= REPORT_INTERVAL {
                debug!(
                    blocks = report.blocks,
                    frames = report.frames,
                    peak = report.peak,
                    muted = ?report.muted,
                    "audio report"
                );
                report = StatsSummary::default();
                last_report = Instant::now();
            }
        }

        drop(stream);
        info!("Bye!");
        Ok(())
    }

    fn start_audio(&self, mut engine: SynthEngine, mut stats_tx: StatsSender) -> EyreResult<cpal::Stream> {
        let host = cpal::default_host();
        let device = match self.output_device {
            Some(index) => host
                .output_devices()
                .wrap_err("failed to enumerate output devices")?
                .nth(index)
                .ok_or_else(|| eyre!("no output device with index {index}"))?,
            None => host
                .default_output_device()
                .ok_or_else(|| eyre!("no default output device available"))?,
        };
        let device_name = device.name().unwrap_or_else(|_| String::from("<unnamed>"));

        let sample_rate = self.config.sample_rate.round() as u32;
        let config = cpal::StreamConfig {
            channels: OUTPUT_CHANNELS,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Fixed(self.config.buffer_frames as u32),
        };
        let channels = config.channels as usize;

        info!(
            device = %device_name,
            sample_rate,
            buffer_frames = self.config.buffer_frames,
            channels,
            "opening output stream"
        );

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let stats = engine.render_interleaved(data, channels);
                    stats_tx.send(stats);
                },
                |err| error!("audio stream error: {err}"),
                None,
            )
            .wrap_err_with(|| format!("failed to open '{device_name}' at {sample_rate} Hz"))?;

        stream.play().wrap_err("failed to start output stream")?;
        Ok(stream)
    }
}

/// Print every output device and MIDI input with its index.
pub fn print_devices() -> EyreResult<()> {
    let host = cpal::default_host();
    println!("Audio outputs ({}):", host.id().name());
    for (index, device) in host
        .output_devices()
        .wrap_err("failed to enumerate output devices")?
        .enumerate()
    {
        let name = device.name().unwrap_or_else(|_| String::from("<unnamed>"));
        println!("  {index}: {name}");
    }

    let ports = midi::list_ports()?;
    println!("MIDI inputs ({}):", ports.len());
    for port in ports {
        println!("  {}: {}", port.index, port.name);
    }
    Ok(())
}

//! Block statistics carried out of the audio callback.
//!
//! The audio context must not log, so after every callback it pushes a
//! `BlockStats` into a wait-free ring. Pushing never blocks: when the ring is
//! full the report is dropped and counted. The main thread drains the ring on
//! its own schedule and decides what is worth logging, lost reports included.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rtrb::{Consumer, Producer, RingBuffer};

use crate::synth::engine::BlockStats;

/// Audio-side end of the stats ring.
pub struct StatsSender {
    tx: Producer<BlockStats>,
    dropped: Arc<AtomicU64>,
}

/// Control-side end of the stats ring.
pub struct StatsReceiver {
    rx: Consumer<BlockStats>,
    dropped: Arc<AtomicU64>,
}

/// Create a ring holding up to `capacity` block reports.
pub fn stats_channel(capacity: usize) -> (StatsSender, StatsReceiver) {
    let (tx, rx) = RingBuffer::<BlockStats>::new(capacity);
    let dropped = Arc::new(AtomicU64::new(0));
    (
        StatsSender {
            tx,
            dropped: Arc::clone(&dropped),
        },
        StatsReceiver { rx, dropped },
    )
}

impl StatsSender {
    /// Queue a report without blocking. Returns `false` if it was dropped.
    #[inline]
    pub fn send(&mut self, stats: BlockStats) -> bool {
        match self.tx.push(stats) {
            Ok(()) => true,
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }
}

/// Aggregate of every report drained in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsSummary {
    pub blocks: u64,
    pub frames: u64,
    pub peak: f32,
    pub fallbacks: u64,
    /// Gate state of the most recent block, if any arrived.
    pub muted: Option<bool>,
}

impl StatsSummary {
    pub fn add(&mut self, stats: &BlockStats) {
        self.blocks += 1;
        self.frames += stats.frames as u64;
        self.peak = self.peak.max(stats.peak);
        self.fallbacks += stats.fallbacks as u64;
        self.muted = Some(stats.muted);
    }

    pub fn merge(&mut self, other: &StatsSummary) {
        self.blocks += other.blocks;
        self.frames += other.frames;
        self.peak = self.peak.max(other.peak);
        self.fallbacks += other.fallbacks;
        if other.muted.is_some() {
            self.muted = other.muted;
        }
    }
}

impl StatsReceiver {
    pub fn pop(&mut self) -> Option<BlockStats> {
        self.rx.pop().ok()
    }

    /// Total reports lost so far because the reader fell behind.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Pop everything currently queued.
    pub fn drain(&mut self) -> StatsSummary {
        let mut summary = StatsSummary::default();
        while let Some(stats) = self.pop() {
            summary.add(&stats);
        }
        summary
    }
}

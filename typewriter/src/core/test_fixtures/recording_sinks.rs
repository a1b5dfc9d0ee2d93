// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sinks that remember everything they were given, along with the (tokio) time it
//! arrived at. Clone one, hand the clone to [`crate::Typewriter::try_start()`] or
//! [`crate::CursorBlinker::try_start()`], and inspect the original afterwards.
//!
//! The timestamps come from [`tokio::time::Instant`], so they follow the paused clock in
//! `#[tokio::test(start_paused = true)]` tests.

use std::sync::Arc;

use tokio::time::Instant;

use crate::{BlinkSink, RevealSink, StdMutex, lock_safe};

#[derive(Debug, Clone, Default)]
pub struct RecordingRevealSink {
    records: Arc<StdMutex<Vec<(Instant, String)>>>,
}

impl RecordingRevealSink {
    #[must_use]
    pub fn snapshots(&self) -> Vec<String> {
        lock_safe(&self.records)
            .iter()
            .map(|(_, it)| it.clone())
            .collect()
    }

    #[must_use]
    pub fn records(&self) -> Vec<(Instant, String)> { lock_safe(&self.records).clone() }

    #[must_use]
    pub fn len(&self) -> usize { lock_safe(&self.records).len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl RevealSink for RecordingRevealSink {
    fn on_update(&mut self, revealed: &str) {
        lock_safe(&self.records).push((Instant::now(), revealed.to_string()));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingBlinkSink {
    records: Arc<StdMutex<Vec<(Instant, bool)>>>,
}

impl RecordingBlinkSink {
    #[must_use]
    pub fn phases(&self) -> Vec<bool> {
        lock_safe(&self.records).iter().map(|(_, it)| *it).collect()
    }

    #[must_use]
    pub fn records(&self) -> Vec<(Instant, bool)> { lock_safe(&self.records).clone() }

    #[must_use]
    pub fn len(&self) -> usize { lock_safe(&self.records).len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl BlinkSink for RecordingBlinkSink {
    fn on_toggle(&mut self, visible: bool) {
        lock_safe(&self.records).push((Instant::now(), visible));
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::{Arc,
                 atomic::{AtomicBool, Ordering}},
          time::Duration};

use tokio::{sync::{broadcast, oneshot},
            time::{Instant, MissedTickBehavior, interval_at}};

use crate::{Liveness, SafeLiveness, TypewriterError, lock_safe};

/// Receives the new cursor visibility on every toggle.
///
/// Same rules as [`crate::RevealSink`]: it runs on the blinker's task while the
/// liveness lock is held.
pub trait BlinkSink: Send + 'static {
    fn on_toggle(&mut self, visible: bool);
}

impl<F> BlinkSink for F
where
    F: FnMut(bool) + Send + 'static,
{
    fn on_toggle(&mut self, visible: bool) { self(visible) }
}

/// Blinks a cursor: starts visible, and flips visibility every `half_period` until it is
/// stopped. It is completely independent of [`crate::Typewriter`], and keeps blinking
/// after the typewriter is done.
///
/// Shutdown works just like [`crate::Typewriter`]: [`Self::stop()`] (or dropping the
/// handle) cancels the timer, and no call to the sink begins after it returns.
#[derive(Debug)]
pub struct CursorBlinker {
    half_period: Duration,
    shutdown_sender: broadcast::Sender<()>,
    safe_liveness: SafeLiveness,
    is_visible: Arc<AtomicBool>,
    maybe_shutdown_complete_rx: Option<oneshot::Receiver<()>>,
}

impl CursorBlinker {
    /// # Errors
    ///
    /// - [`TypewriterError::InvalidBlinkPeriod`] if `half_period` is zero.
    /// - [`TypewriterError::NoRuntime`] if not called from within a tokio runtime.
    pub fn try_start(
        half_period: Duration,
        sink: impl BlinkSink,
    ) -> Result<Self, TypewriterError> {
        if half_period.is_zero() {
            return Err(TypewriterError::InvalidBlinkPeriod);
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| TypewriterError::NoRuntime)?;

        // Shutdown broadcast channel.
        let (shutdown_sender, _) = broadcast::channel::<()>(1);
        let (shutdown_complete_sender, shutdown_complete_receiver) =
            oneshot::channel::<()>();

        let it = Self {
            half_period,
            shutdown_sender,
            safe_liveness: Liveness::new_safe(),
            is_visible: Arc::new(AtomicBool::new(true)),
            maybe_shutdown_complete_rx: Some(shutdown_complete_receiver),
        };

        tracing::debug!(message = "Cursor blinker started", half_period = ?half_period);

        runtime.spawn(run_blink_task(
            half_period,
            sink,
            it.safe_liveness.clone(),
            it.is_visible.clone(),
            it.shutdown_sender.subscribe(),
            shutdown_complete_sender,
        ));

        Ok(it)
    }

    /// Fixed when the blinker starts. Start a new one for a different period.
    #[must_use]
    pub fn half_period(&self) -> Duration { self.half_period }

    #[must_use]
    pub fn is_visible(&self) -> bool { self.is_visible.load(Ordering::SeqCst) }

    #[must_use]
    pub fn is_stopped(&self) -> bool { !lock_safe(&self.safe_liveness).is_running() }

    /// Cancels the timer. No call to the sink begins after this returns.
    pub fn stop(&self) {
        {
            let mut liveness = lock_safe(&self.safe_liveness);
            if liveness.is_running() {
                *liveness = Liveness::Stopped;
                tracing::debug!(message = "Cursor blinker stop requested");
            }
        }
        // We don't care about the result of this operation.
        self.shutdown_sender.send(()).ok();
    }

    /// Waits for the blink task to exit. Call [`Self::stop()`] first, otherwise this
    /// never returns.
    pub async fn await_shutdown(mut self) {
        if let Some(receiver) = self.maybe_shutdown_complete_rx.take() {
            // We don't care about the result of this operation.
            receiver.await.ok();
        }
    }
}

impl Drop for CursorBlinker {
    fn drop(&mut self) { self.stop(); }
}

async fn run_blink_task(
    half_period: Duration,
    mut sink: impl BlinkSink,
    safe_liveness: SafeLiveness,
    is_visible: Arc<AtomicBool>,
    mut shutdown_receiver: broadcast::Receiver<()>,
    shutdown_complete_sender: oneshot::Sender<()>,
) {
    // The first tick of a plain `interval()` completes right away. The cursor should
    // stay visible for a whole half period first.
    let mut interval = interval_at(Instant::now() + half_period, half_period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Poll shutdown channel.
            // This branch is cancel safe because recv is cancel safe.
            _ = shutdown_receiver.recv() => break,

            // Poll interval.
            // This branch is cancel safe because tick is cancel safe.
            _ = interval.tick() => {
                let liveness = lock_safe(&safe_liveness);
                if !liveness.is_running() {
                    break;
                }
                let visible = !is_visible.fetch_xor(true, Ordering::SeqCst);
                sink.on_toggle(visible);
            }
        }
    }

    tracing::debug!(message = "Cursor blinker stopped");
    // It's okay if this fails - it just means the receiver was dropped.
    shutdown_complete_sender.send(()).ok();
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::Arc, time::Duration};

use tokio::sync::{broadcast, oneshot};

use crate::{Liveness, RevealConfig, RevealMachine, RevealSink, SafeBool, SafeLiveness,
            Script, StdMutex, TypewriterError, lock_safe};

/// Reveals a [`Script`] one grapheme cluster at a time, on a spawned tokio task, and
/// sends each snapshot of the revealed text to a [`RevealSink`].
///
/// The value returned by [`Typewriter::try_start()`] is the handle to that task. There is
/// exactly one way to make it go away early: [`Typewriter::stop()`], which dropping the
/// handle also calls. There is no pause / resume, and no restart. To replay, start a new
/// one.
///
/// Here's how the handle and the task cooperate on shutdown:
///
/// - The task waits for each step's delay in a [`tokio::select!`] against a
///   [`broadcast`] shutdown channel, so [`Self::stop()`] cancels the pending timer
///   right away.
/// - Before every reveal the task takes the liveness lock and checks that it is still
///   [`Liveness::Running`], and it keeps holding the lock while the sink runs.
///   [`Self::stop()`] flips the flag under the same lock. So once `stop()` returns, a
///   sink call that was in flight has completed, and no new one can begin.
/// - When the task exits (finished or stopped) it signals a [`oneshot`] channel, which
///   [`Self::await_finished()`] waits on.
///
/// # Usage example
///
/// ```
/// # use std::time::Duration;
/// # use folio_typewriter::{RevealConfig, Script, Typewriter};
/// # async fn example() -> miette::Result<()> {
/// let typewriter = Typewriter::try_start(
///     Script::try_new(["Hi"])?,
///     RevealConfig {
///         char_delay: Duration::from_millis(10),
///         line_pause_multiplier: 5.0,
///     },
///     |revealed: &str| println!("{revealed}"),
/// )?;
///
/// // Prints "H", then "Hi".
/// typewriter.await_finished().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Typewriter {
    shutdown_sender: broadcast::Sender<()>,
    safe_liveness: SafeLiveness,
    safe_is_finished: SafeBool,
    /// Signalled when the task exits. See [`Self::await_finished()`].
    maybe_finished_rx: Option<oneshot::Receiver<()>>,
}

impl Typewriter {
    /// Validates everything and spawns the reveal task. Nothing is revealed before this
    /// returns, even with a zero `char_delay`. An empty script gives a typewriter that
    /// is already finished, and never calls `sink`.
    ///
    /// # Errors
    ///
    /// - [`TypewriterError::NoRuntime`] if not called from within a tokio runtime.
    /// - Any error from [`RevealConfig::try_line_pause()`].
    pub fn try_start(
        script: Script,
        config: RevealConfig,
        sink: impl RevealSink,
    ) -> Result<Self, TypewriterError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| TypewriterError::NoRuntime)?;

        let line_count = script.line_count();
        let machine = RevealMachine::try_new(script, config)?;

        // Shutdown broadcast channel.
        let (shutdown_sender, _) = broadcast::channel::<()>(1);
        let (finished_sender, finished_receiver) = oneshot::channel::<()>();

        let it = Self {
            shutdown_sender,
            safe_liveness: Liveness::new_safe(),
            safe_is_finished: Arc::new(StdMutex::new(false)),
            maybe_finished_rx: Some(finished_receiver),
        };

        if machine.is_done() {
            tracing::debug!(message = "Typewriter has nothing to reveal", line_count);
            *lock_safe(&it.safe_is_finished) = true;
            finished_sender.send(()).ok();
            return Ok(it);
        }

        tracing::debug!(
            message = "Typewriter started",
            line_count,
            char_delay = ?config.char_delay,
            line_pause_multiplier = config.line_pause_multiplier
        );

        runtime.spawn(run_reveal_task(
            machine,
            sink,
            it.safe_liveness.clone(),
            it.safe_is_finished.clone(),
            it.shutdown_sender.subscribe(),
            finished_sender,
        ));

        Ok(it)
    }

    /// Cancels the pending step. No call to the sink begins after this returns. Calling
    /// it more than once, or after the typewriter finished, does nothing.
    pub fn stop(&self) {
        {
            let mut liveness = lock_safe(&self.safe_liveness);
            if liveness.is_running() {
                *liveness = Liveness::Stopped;
                tracing::debug!(message = "Typewriter stop requested");
            }
        }
        // We don't care about the result of this operation. It fails when the task has
        // already exited, and dropped its receiver.
        self.shutdown_sender.send(()).ok();
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool { !lock_safe(&self.safe_liveness).is_running() }

    /// `true` once the task has exited, because everything was revealed or because it
    /// was stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool { *lock_safe(&self.safe_is_finished) }

    /// Waits for the task to exit. Without a call to [`Self::stop()`] first, this waits
    /// for the whole script to be revealed. This consumes self, so the handle is dropped
    /// once the task is done.
    pub async fn await_finished(mut self) {
        if let Some(receiver) = self.maybe_finished_rx.take() {
            // We don't care about the result of this operation. The sender is only
            // dropped without sending if the task panicked.
            receiver.await.ok();
        }
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) { self.stop(); }
}

async fn run_reveal_task(
    mut machine: RevealMachine,
    mut sink: impl RevealSink,
    safe_liveness: SafeLiveness,
    safe_is_finished: SafeBool,
    mut shutdown_receiver: broadcast::Receiver<()>,
    finished_sender: oneshot::Sender<()>,
) {
    while let Some(delay) = machine.pending_delay() {
        tokio::select! {
            // Poll shutdown channel.
            // This branch is cancel safe because recv is cancel safe.
            _ = shutdown_receiver.recv() => break,

            // Poll the delay for the next step.
            () = wait_for(delay) => {
                let liveness = lock_safe(&safe_liveness);
                if !liveness.is_running() {
                    break;
                }
                if let Some(revealed) = machine.advance() {
                    tracing::trace!(message = "Typewriter reveal", revealed);
                    sink.on_update(revealed);
                }
            }
        }
    }

    if machine.is_done() {
        tracing::debug!(message = "Typewriter finished");
    } else {
        tracing::debug!(message = "Typewriter stopped", phase = ?machine.phase());
    }

    *lock_safe(&safe_is_finished) = true;
    // It's okay if this fails - it just means the receiver was dropped.
    finished_sender.send(()).ok();
}

/// A zero delay still yields, so the task never reveals the whole script in one go
/// without letting anything else run.
async fn wait_for(delay: Duration) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
}

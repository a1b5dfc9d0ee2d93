// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Receives the full text revealed so far (a snapshot, not a delta), once per reveal.
///
/// Called on the typewriter's tokio task, while the liveness lock is held. So keep it
/// short, and don't call [`crate::Typewriter::stop()`] on the same typewriter from in
/// here.
pub trait RevealSink: Send + 'static {
    fn on_update(&mut self, revealed: &str);
}

impl<F> RevealSink for F
where
    F: FnMut(&str) + Send + 'static,
{
    fn on_update(&mut self, revealed: &str) { self(revealed) }
}

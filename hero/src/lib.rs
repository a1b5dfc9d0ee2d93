// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The hero banner of the folio site, played in a terminal. The interesting parts (the
//! typed headline and its blinking cursor) come from [`folio_typewriter`]. This crate
//! owns the terminal, turns sink callbacks into [`HeroSignal`]s, and redraws the banner
//! on every change.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod banner;

// Re-export.
pub use banner::*;

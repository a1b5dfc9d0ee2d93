// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # folio_typewriter
//!
//! Async typed-text reveal for the hero banner of the folio site, plus the blinking
//! cursor that sits next to it.
//!
//! There are two independent moving parts:
//!
//! 1. [`Typewriter`] reveals a [`Script`] (an ordered list of lines) one grapheme
//!    cluster at a time. It pauses between lines, and then stops scheduling once the
//!    last grapheme of the last line is out. Every change is delivered to a
//!    [`RevealSink`] as a full snapshot of the text revealed so far.
//! 2. [`CursorBlinker`] flips a visibility flag on a fixed half-period until it is
//!    stopped. It knows nothing about the typewriter.
//!
//! Both run on a spawned tokio task and hand back a handle. Calling `stop()` on a handle
//! (or dropping it) cancels the pending timer, and no sink call begins after `stop()`
//! returns.
//!
//! ```
//! # use std::time::Duration;
//! # use folio_typewriter::{RevealConfig, Script, Typewriter};
//! # async fn example() -> miette::Result<()> {
//! let script = Script::try_new(["Building High-Scale", "Data Solutions."])?;
//! let handle = Typewriter::try_start(script, RevealConfig::default(), |revealed: &str| {
//!     println!("{revealed}");
//! })?;
//!
//! // Tear down early, eg: when the display goes away.
//! handle.stop();
//! # Ok(())
//! # }
//! ```
//!
//! # Timing model
//!
//! ```text
//! Script ["AB", "C"], char_delay = 10ms, line_pause_multiplier = 2
//!
//!  t=0      t=10   t=20    t=40      t=50
//!  start -> "A" -> "AB" -> "AB\n" -> "AB\nC" -> done
//!           |10ms| |10ms|  |20ms |   |10ms|
//! ```
//!
//! Empty lines don't spend a character delay: their line break is revealed right away
//! and the inter-line pause is spent before the next line instead. See
//! [`RevealMachine`] for the exact rules.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod cursor;
pub mod reveal;

// Re-export.
pub use core::*;
pub use cursor::*;
pub use reveal::*;

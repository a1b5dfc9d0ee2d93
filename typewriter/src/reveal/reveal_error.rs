// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// A [`crate::Script`] could not be built from the given lines.
#[derive(Debug, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ScriptError {
    #[error("Line {line_index} of the script contains a line break")]
    #[diagnostic(
        code(folio_typewriter::script::embedded_line_break),
        help("Pass each line separately, or use `Script::try_from_text()` to split the text")
    )]
    EmbeddedLineBreak { line_index: usize },
}

/// Contract violations, reported synchronously by [`crate::Typewriter::try_start()`],
/// [`crate::CursorBlinker::try_start()`] and [`crate::RevealConfig`] constructors. None of
/// these can happen once a task is running.
#[derive(Debug, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum TypewriterError {
    #[error("Character delay of {char_delay_ms}ms is not a valid delay")]
    #[diagnostic(
        code(folio_typewriter::config::invalid_char_delay),
        help("Use a finite, non negative number of milliseconds; 0 means as fast as possible")
    )]
    InvalidCharDelay { char_delay_ms: f64 },

    #[error("Line pause multiplier {multiplier} is not valid")]
    #[diagnostic(
        code(folio_typewriter::config::invalid_line_pause_multiplier),
        help("Use a finite number that is 0 or greater")
    )]
    InvalidLinePauseMultiplier { multiplier: f64 },

    #[error("Line pause of {char_delay:?} x {multiplier} does not fit in a Duration")]
    #[diagnostic(code(folio_typewriter::config::line_pause_overflow))]
    LinePauseOverflow {
        char_delay: Duration,
        multiplier: f64,
    },

    #[error("Cursor blink half period must be greater than zero")]
    #[diagnostic(
        code(folio_typewriter::cursor::invalid_blink_period),
        help("A zero period would toggle the cursor in a busy loop")
    )]
    InvalidBlinkPeriod,

    #[error("No tokio runtime is running on this thread")]
    #[diagnostic(
        code(folio_typewriter::no_runtime),
        help("Call `try_start()` from inside a tokio runtime, eg: from an async fn run by `#[tokio::main]`")
    )]
    NoRuntime,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Script(#[from] ScriptError),
}

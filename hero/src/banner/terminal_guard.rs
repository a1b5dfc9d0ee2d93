// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::stdout;

use crossterm::{cursor::{Hide, Show},
                execute,
                terminal::{EnterAlternateScreen, LeaveAlternateScreen,
                           disable_raw_mode, enable_raw_mode}};
use miette::IntoDiagnostic;

/// Puts the terminal in raw mode on the alternate screen, with the terminal's own cursor
/// hidden (the banner draws its own). Everything is restored on drop, including when
/// the launcher bails out with an error.
#[derive(Debug)]
pub struct TerminalGuard;

impl TerminalGuard {
    /// # Errors
    ///
    /// Returns an error if stdout is not a terminal, or the terminal can't be switched
    /// to raw mode.
    pub fn try_new() -> miette::Result<Self> {
        enable_raw_mode().into_diagnostic()?;
        // Construct the guard first, so a failure below still restores raw mode.
        let it = Self;
        execute!(stdout(), EnterAlternateScreen, Hide).into_diagnostic()?;
        Ok(it)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // We don't care about the result of these operations, there's nothing left to
        // do if restoring the terminal fails.
        execute!(stdout(), Show, LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    }
}

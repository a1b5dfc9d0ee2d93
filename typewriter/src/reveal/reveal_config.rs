// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{DEFAULT_CHAR_DELAY, DEFAULT_LINE_PAUSE_MULTIPLIER, TypewriterError};

/// Timing of a [`crate::Typewriter`].
///
/// - `char_delay`: wait before each grapheme cluster is revealed. Zero is allowed, and
///   means "as fast as the runtime allows". The task still yields between steps.
/// - `line_pause_multiplier`: the pause between two lines is `char_delay` times this.
///   Must be finite and `>= 0`.
///
/// The fields are public, so the values are checked when the config is used, by
/// [`Self::try_line_pause()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub char_delay: Duration,
    pub line_pause_multiplier: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            char_delay: DEFAULT_CHAR_DELAY,
            line_pause_multiplier: DEFAULT_LINE_PAUSE_MULTIPLIER,
        }
    }
}

impl RevealConfig {
    /// Builds a config from untyped numbers, eg: from command line args.
    ///
    /// # Errors
    ///
    /// - [`TypewriterError::InvalidCharDelay`] if `char_delay_ms` is negative, NaN, or
    ///   infinite.
    /// - Anything [`Self::try_line_pause()`] returns.
    pub fn try_from_millis(
        char_delay_ms: f64,
        line_pause_multiplier: f64,
    ) -> Result<Self, TypewriterError> {
        let char_delay = Duration::try_from_secs_f64(char_delay_ms / 1000.0)
            .map_err(|_| TypewriterError::InvalidCharDelay { char_delay_ms })?;
        let it = Self {
            char_delay,
            line_pause_multiplier,
        };
        it.try_line_pause()?;
        Ok(it)
    }

    /// Validates the multiplier and returns the pause between two lines.
    ///
    /// # Errors
    ///
    /// - [`TypewriterError::InvalidLinePauseMultiplier`] if the multiplier is negative,
    ///   NaN, or infinite.
    /// - [`TypewriterError::LinePauseOverflow`] if the product doesn't fit in a
    ///   [`Duration`].
    pub fn try_line_pause(&self) -> Result<Duration, TypewriterError> {
        let multiplier = self.line_pause_multiplier;
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(TypewriterError::InvalidLinePauseMultiplier { multiplier });
        }

        let overflow = || TypewriterError::LinePauseOverflow {
            char_delay: self.char_delay,
            multiplier,
        };

        // Whole multipliers stay exact.
        if multiplier.fract() == 0.0 && multiplier <= f64::from(u32::MAX) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let whole = multiplier as u32;
            return self.char_delay.checked_mul(whole).ok_or_else(overflow);
        }

        Duration::try_from_secs_f64(self.char_delay.as_secs_f64() * multiplier)
            .map_err(|_| overflow())
    }
}

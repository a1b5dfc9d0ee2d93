// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use clap::{Args, Parser};
use folio_typewriter::{DEFAULT_BLINK_HALF_PERIOD_MS, DEFAULT_LINE_PAUSE_MULTIPLIER,
                       RevealConfig, Script, TypewriterError};

use crate::HeroContent;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "hero")]
#[command(about = "Plays the folio hero banner in your terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    #[arg(
        long = "line",
        short = 'L',
        value_name = "TEXT",
        help = "A line of the typed headline. Repeat for more lines. Defaults to the site's headline"
    )]
    pub lines: Vec<String>,

    #[arg(
        long,
        short = 's',
        value_name = "MS",
        allow_negative_numbers = true,
        help = "Delay before each character is typed, in milliseconds [default: 70]"
    )]
    pub speed: Option<f64>,

    #[arg(
        long,
        short = 'p',
        value_name = "X",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_LINE_PAUSE_MULTIPLIER,
        help = "Pause between two lines, as a multiple of the character delay"
    )]
    pub pause_multiplier: f64,

    #[arg(
        long,
        short = 'b',
        value_name = "MS",
        default_value_t = DEFAULT_BLINK_HALF_PERIOD_MS,
        help = "Time between two cursor blinks, in milliseconds"
    )]
    pub blink_ms: u64,

    #[arg(
        long,
        value_name = "MS",
        help = "Exit this long after the headline is typed. Without it, wait for a key press"
    )]
    pub linger_ms: Option<u64>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

impl CLIArg {
    #[must_use]
    pub fn hero_content(&self) -> HeroContent {
        HeroContent::default().with_typed_lines(&self.lines)
    }

    /// # Errors
    ///
    /// Returns an error if the speed or the pause multiplier are invalid.
    pub fn reveal_config(&self) -> Result<RevealConfig, TypewriterError> {
        match self.speed {
            Some(char_delay_ms) => {
                RevealConfig::try_from_millis(char_delay_ms, self.pause_multiplier)
            }
            None => {
                let it = RevealConfig {
                    line_pause_multiplier: self.pause_multiplier,
                    ..RevealConfig::default()
                };
                it.try_line_pause()?;
                Ok(it)
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if a typed line contains a line break.
    pub fn script(&self, content: &HeroContent) -> Result<Script, TypewriterError> {
        Ok(Script::try_new(content.typed_lines.iter().cloned())?)
    }

    #[must_use]
    pub fn blink_half_period(&self) -> Duration { Duration::from_millis(self.blink_ms) }

    #[must_use]
    pub fn maybe_linger(&self) -> Option<Duration> {
        self.linger_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::parse_from(["hero"]);
        assert_eq!(cli_arg.reveal_config(), Ok(RevealConfig::default()));
        assert_eq!(cli_arg.blink_half_period(), Duration::from_millis(800));
        assert_eq!(cli_arg.maybe_linger(), None);
        assert!(!cli_arg.global_options.enable_logging);

        let content = cli_arg.hero_content();
        let script = cli_arg.script(&content).unwrap();
        assert_eq!(script.full_text(), "Building High-Scale\nData Solutions.");
    }

    #[test]
    fn test_overrides() {
        let cli_arg = CLIArg::parse_from([
            "hero", "-L", "Hello", "--line", "World", "-s", "10", "-p", "2", "-b", "500",
            "--linger-ms", "1000", "-l",
        ]);
        let config = cli_arg.reveal_config().unwrap();
        assert_eq!(config.char_delay, Duration::from_millis(10));
        assert_eq!(config.try_line_pause(), Ok(Duration::from_millis(20)));
        assert_eq!(cli_arg.blink_half_period(), Duration::from_millis(500));
        assert_eq!(cli_arg.maybe_linger(), Some(Duration::from_secs(1)));
        assert!(cli_arg.global_options.enable_logging);

        let content = cli_arg.hero_content();
        assert_eq!(cli_arg.script(&content).unwrap().full_text(), "Hello\nWorld");
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let cli_arg = CLIArg::parse_from(["hero", "--speed", "-5"]);
        assert!(matches!(
            cli_arg.reveal_config(),
            Err(TypewriterError::InvalidCharDelay { .. })
        ));

        let cli_arg = CLIArg::parse_from(["hero", "-p", "-1"]);
        assert!(matches!(
            cli_arg.reveal_config(),
            Err(TypewriterError::InvalidLinePauseMultiplier { .. })
        ));

        let cli_arg = CLIArg::parse_from(["hero", "-L", "two\nlines"]);
        let content = cli_arg.hero_content();
        assert!(matches!(
            cli_arg.script(&content),
            Err(TypewriterError::Script(_))
        ));
    }
}

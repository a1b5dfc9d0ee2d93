// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{LINE_BREAK, RevealConfig, Script, TypewriterError};

/// Where a [`RevealMachine`] is, and so what its next reveal will be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Next reveal is grapheme `char_index` of line `line_index`.
    Typing { line_index: usize, char_index: usize },
    /// Next reveal is the line break that ends line `line_index`.
    Pausing { line_index: usize },
    /// Everything is revealed. There is no next reveal.
    Done,
}

/// The reveal state machine, with no notion of time or tasks. Each call to
/// [`Self::advance()`] performs one reveal, and [`Self::pending_delay()`] says how long
/// to wait before the next one. [`crate::Typewriter`] drives this on a tokio task, but
/// any scheduler can.
///
/// # Rules
///
/// - A grapheme is revealed `char_delay` after the previous reveal.
/// - After the last grapheme of a line, the line break comes after the line pause
///   (`char_delay * line_pause_multiplier`). The first grapheme of the next line then
///   comes `char_delay` after the line break.
/// - An empty line spends no character delay. Its line break is revealed right away,
///   and the line pause is spent before whatever follows it instead.
/// - After the last grapheme of the last line, the machine is [`RevealPhase::Done`].
///   No line break is added after the last line.
///
/// So a script with `N` graphemes across `L` lines produces exactly `N + L - 1` reveals
/// (or none, for an empty script).
#[derive(Debug)]
pub struct RevealMachine {
    script: Script,
    char_delay: Duration,
    line_pause: Duration,
    phase: RevealPhase,
    pending_delay: Duration,
    revealed: String,
}

impl RevealMachine {
    /// # Errors
    ///
    /// Returns an error if `config` is invalid, see [`RevealConfig::try_line_pause()`].
    pub fn try_new(script: Script, config: RevealConfig) -> Result<Self, TypewriterError> {
        let line_pause = config.try_line_pause()?;
        let mut it = Self {
            script,
            char_delay: config.char_delay,
            line_pause,
            phase: RevealPhase::Done,
            pending_delay: Duration::ZERO,
            revealed: String::new(),
        };
        it.enter_line(0, false);
        Ok(it)
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase { self.phase }

    #[must_use]
    pub fn is_done(&self) -> bool { self.phase == RevealPhase::Done }

    /// Everything revealed so far.
    #[must_use]
    pub fn revealed(&self) -> &str { &self.revealed }

    /// How long to wait before calling [`Self::advance()`] again, or `None` if done.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        match self.phase {
            RevealPhase::Done => None,
            _ => Some(self.pending_delay),
        }
    }

    /// Reveals the next grapheme or line break, and returns the whole revealed text. Once
    /// done, this returns `None` and changes nothing.
    pub fn advance(&mut self) -> Option<&str> {
        match self.phase {
            RevealPhase::Done => return None,

            RevealPhase::Typing {
                line_index,
                char_index,
            } => {
                let line = &self.script.lines()[line_index];
                if let Some(grapheme) = line.grapheme(char_index) {
                    self.revealed.push_str(grapheme);
                }
                let char_index = char_index + 1;

                if char_index < line.grapheme_count() {
                    self.phase = RevealPhase::Typing {
                        line_index,
                        char_index,
                    };
                    self.pending_delay = self.char_delay;
                } else if self.is_last_line(line_index) {
                    self.phase = RevealPhase::Done;
                } else {
                    self.phase = RevealPhase::Pausing { line_index };
                    self.pending_delay = self.line_pause;
                }
            }

            RevealPhase::Pausing { line_index } => {
                self.revealed.push(LINE_BREAK);
                let ended_empty_line = self.script.lines()[line_index].is_empty();
                self.enter_line(line_index + 1, ended_empty_line);
            }
        }

        Some(&self.revealed)
    }

    fn is_last_line(&self, line_index: usize) -> bool {
        line_index + 1 >= self.script.line_count()
    }

    /// `after_empty_line` means the line pause hasn't been spent yet, because the line
    /// before this one was empty.
    fn enter_line(&mut self, line_index: usize, after_empty_line: bool) {
        let Some(line) = self.script.lines().get(line_index) else {
            self.phase = RevealPhase::Done;
            return;
        };

        if !line.is_empty() {
            self.phase = RevealPhase::Typing {
                line_index,
                char_index: 0,
            };
            self.pending_delay = if after_empty_line {
                self.line_pause
            } else {
                self.char_delay
            };
        } else if self.is_last_line(line_index) {
            self.phase = RevealPhase::Done;
        } else {
            self.phase = RevealPhase::Pausing { line_index };
            self.pending_delay = if after_empty_line {
                self.line_pause
            } else {
                Duration::ZERO
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const MS_10: Duration = Duration::from_millis(10);
    const MS_20: Duration = Duration::from_millis(20);

    fn new_machine(lines: &[&str], multiplier: f64) -> RevealMachine {
        RevealMachine::try_new(
            Script::try_new(lines.iter().copied()).unwrap(),
            RevealConfig {
                char_delay: MS_10,
                line_pause_multiplier: multiplier,
            },
        )
        .unwrap()
    }

    /// Runs the machine to the end, and returns each `(delay before, revealed)` pair.
    fn run_to_end(machine: &mut RevealMachine) -> Vec<(Duration, String)> {
        let mut acc = vec![];
        while let Some(delay) = machine.pending_delay() {
            let revealed = machine.advance().unwrap().to_string();
            acc.push((delay, revealed));
        }
        acc
    }

    #[test]
    fn test_single_line() {
        let mut machine = new_machine(&["Hi"], 5.0);
        assert_eq!(
            run_to_end(&mut machine),
            vec![(MS_10, "H".to_string()), (MS_10, "Hi".to_string())]
        );
        assert!(machine.is_done());
        assert_eq!(machine.advance(), None);
        assert_eq!(machine.revealed(), "Hi");
    }

    #[test]
    fn test_two_lines_pause_before_line_break() {
        let mut machine = new_machine(&["AB", "C"], 2.0);
        assert_eq!(
            run_to_end(&mut machine),
            vec![
                (MS_10, "A".to_string()),
                (MS_10, "AB".to_string()),
                (MS_20, "AB\n".to_string()),
                (MS_10, "AB\nC".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_first_line_breaks_immediately() {
        let mut machine = new_machine(&["", "X"], 2.0);
        assert_eq!(machine.phase(), RevealPhase::Pausing { line_index: 0 });
        assert_eq!(
            run_to_end(&mut machine),
            vec![
                (Duration::ZERO, "\n".to_string()),
                (MS_20, "\nX".to_string()),
            ]
        );
    }

    #[test]
    fn test_consecutive_empty_lines_each_pause() {
        let mut machine = new_machine(&["A", "", "", "B"], 2.0);
        assert_eq!(
            run_to_end(&mut machine),
            vec![
                (MS_10, "A".to_string()),
                (MS_20, "A\n".to_string()),
                (Duration::ZERO, "A\n\n".to_string()),
                (MS_20, "A\n\n\n".to_string()),
                (MS_20, "A\n\n\nB".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_empty_line_ends_with_line_break() {
        let mut machine = new_machine(&["A", ""], 2.0);
        assert_eq!(
            run_to_end(&mut machine),
            vec![(MS_10, "A".to_string()), (MS_20, "A\n".to_string())]
        );
    }

    #[test]
    fn test_empty_script_is_done_from_the_start() {
        let machine = new_machine(&[], 2.0);
        assert!(machine.is_done());
        assert_eq!(machine.pending_delay(), None);

        let machine = new_machine(&[""], 2.0);
        assert!(machine.is_done());
    }

    #[test]
    fn test_phase_tracks_position() {
        let mut machine = new_machine(&["AB", "C"], 2.0);
        assert_eq!(
            machine.phase(),
            RevealPhase::Typing {
                line_index: 0,
                char_index: 0
            }
        );
        machine.advance();
        assert_eq!(
            machine.phase(),
            RevealPhase::Typing {
                line_index: 0,
                char_index: 1
            }
        );
        machine.advance();
        assert_eq!(machine.phase(), RevealPhase::Pausing { line_index: 0 });
        machine.advance();
        assert_eq!(
            machine.phase(),
            RevealPhase::Typing {
                line_index: 1,
                char_index: 0
            }
        );
        machine.advance();
        assert_eq!(machine.phase(), RevealPhase::Done);
    }

    #[test_case(&["Hi"] ; "one line")]
    #[test_case(&["Building High-Scale", "Data Solutions."] ; "hero banner")]
    #[test_case(&["", "X"] ; "empty first line")]
    #[test_case(&["a", "", "b", ""] ; "empty lines between and after")]
    #[test_case(&["🇯🇵 ok", "e\u{301}t\u{e9}"] ; "multi code point graphemes")]
    fn test_reveal_count_and_prefixes(lines: &[&str]) {
        let script = Script::try_new(lines.iter().copied()).unwrap();
        let full_text = script.full_text();
        let expected_count = script.grapheme_count() + script.line_count() - 1;

        let mut machine = new_machine(lines, 3.0);
        let snapshots: Vec<String> =
            run_to_end(&mut machine).into_iter().map(|(_, it)| it).collect();

        assert_eq!(snapshots.len(), expected_count);
        for pair in snapshots.windows(2) {
            assert!(pair[1].len() > pair[0].len());
            assert!(pair[1].starts_with(pair[0].as_str()));
        }
        for snapshot in &snapshots {
            assert!(full_text.starts_with(snapshot.as_str()));
        }
        assert_eq!(snapshots.last(), Some(&full_text));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = RevealMachine::try_new(
            Script::try_new(["A"]).unwrap(),
            RevealConfig {
                char_delay: MS_10,
                line_pause_multiplier: -1.0,
            },
        );
        assert!(matches!(
            result,
            Err(TypewriterError::InvalidLinePauseMultiplier { .. })
        ));
    }
}

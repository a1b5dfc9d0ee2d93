// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{cursor::MoveTo,
                queue,
                style::Print,
                terminal::{Clear, ClearType}};
use folio_typewriter::{CURSOR_GLYPH, LINE_BREAK};
use unicode_width::UnicodeWidthStr;

use crate::{HeroContent, call_to_action_row, exit_hint, title_underline,
            typing_disabled_msg};

/// The narrowest the tagline gets wrapped to, no matter how small the terminal is.
pub const MIN_WRAP_WIDTH: u16 = 20;

/// Sent from the typewriter and cursor sinks to the launcher's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroSignal {
    /// Full snapshot of the typed headline so far.
    Revealed(String),
    CursorVisible(bool),
}

/// What the banner currently shows. Only the launcher's event loop mutates this, by
/// applying [`HeroSignal`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroDisplayState {
    pub revealed: String,
    pub cursor_visible: bool,
    /// Set when the headline couldn't be started. The banner then shows no typed text.
    pub maybe_typing_error: Option<String>,
}

impl Default for HeroDisplayState {
    fn default() -> Self {
        Self {
            revealed: String::new(),
            cursor_visible: true,
            maybe_typing_error: None,
        }
    }
}

impl HeroDisplayState {
    pub fn apply(&mut self, signal: HeroSignal) {
        match signal {
            HeroSignal::Revealed(revealed) => self.revealed = revealed,
            HeroSignal::CursorVisible(visible) => self.cursor_visible = visible,
        }
    }

    /// Lays out the whole banner, one `String` per terminal row.
    ///
    /// The typed block is always as tall as the headline will be once fully typed, so
    /// the rows below it don't move while typing.
    #[must_use]
    pub fn render_lines(&self, content: &HeroContent, width: u16) -> Vec<String> {
        let mut acc = vec![
            content.title_tag.clone(),
            title_underline(content.title_tag.width()),
            String::new(),
        ];

        let mut typed: Vec<String> = self
            .revealed
            .split(LINE_BREAK)
            .map(ToString::to_string)
            .collect();
        if let Some(last) = typed.last_mut() {
            last.push(if self.cursor_visible { CURSOR_GLYPH } else { ' ' });
        }
        while typed.len() < content.typed_lines.len() {
            typed.push(String::new());
        }
        acc.extend(typed);

        acc.push(String::new());
        let wrap_width = usize::from(width.max(MIN_WRAP_WIDTH));
        acc.extend(
            textwrap::wrap(&content.tagline, wrap_width)
                .into_iter()
                .map(|it| it.into_owned()),
        );

        acc.push(String::new());
        acc.push(call_to_action_row(&content.call_to_actions));

        if let Some(error) = &self.maybe_typing_error {
            acc.push(String::new());
            acc.push(typing_disabled_msg(error));
        }

        acc.push(String::new());
        acc.push(exit_hint().to_string());
        acc
    }
}

/// Paints `lines` from the top left corner, and clears whatever was below them.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn draw(out: &mut impl Write, lines: &[String]) -> std::io::Result<()> {
    let mut row: u16 = 0;
    for line in lines {
        queue!(out, MoveTo(0, row), Clear(ClearType::CurrentLine), Print(line))?;
        row = row.saturating_add(1);
    }
    queue!(out, MoveTo(0, row), Clear(ClearType::FromCursorDown))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn typed_rows(state: &HeroDisplayState) -> Vec<String> {
        // Title, underline, blank, then two typed rows.
        state.render_lines(&HeroContent::default(), 80)[3..5].to_vec()
    }

    #[test]
    fn test_apply_signals() {
        let mut state = HeroDisplayState::default();
        state.apply(HeroSignal::Revealed("Build".into()));
        state.apply(HeroSignal::CursorVisible(false));
        assert_eq!(state.revealed, "Build");
        assert!(!state.cursor_visible);
    }

    #[test_case("", true, &["▌", ""] ; "nothing typed yet")]
    #[test_case("Buil", true, &["Buil▌", ""] ; "first line typing")]
    #[test_case("Buil", false, &["Buil ", ""] ; "cursor hidden keeps width")]
    #[test_case("Building High-Scale\n", true, &["Building High-Scale", "▌"] ; "after line break")]
    #[test_case("Building High-Scale\nData", true, &["Building High-Scale", "Data▌"] ; "second line")]
    fn test_typed_block(revealed: &str, cursor_visible: bool, expected: &[&str]) {
        let state = HeroDisplayState {
            revealed: revealed.to_string(),
            cursor_visible,
            maybe_typing_error: None,
        };
        assert_eq!(typed_rows(&state), expected);
    }

    #[test]
    fn test_layout_does_not_move_while_typing() {
        let content = HeroContent::default();
        let empty = HeroDisplayState::default().render_lines(&content, 80);
        let done = HeroDisplayState {
            revealed: "Building High-Scale\nData Solutions.".into(),
            ..HeroDisplayState::default()
        }
        .render_lines(&content, 80);

        assert_eq!(empty.len(), done.len());
        assert_eq!(empty[0], "< Senior Data Engineer />");
        assert_eq!(empty.last(), done.last());
    }

    #[test]
    fn test_tagline_wraps_to_width() {
        let content = HeroContent::default();
        let narrow = HeroDisplayState::default().render_lines(&content, 30);
        let wide = HeroDisplayState::default().render_lines(&content, 200);
        assert!(narrow.len() > wide.len());
        assert!(narrow.iter().all(|line| line.width() <= 30 || line.contains('[')));
    }

    #[test]
    fn test_typing_error_is_shown_instead_of_headline() {
        let state = HeroDisplayState {
            maybe_typing_error: Some("bad speed".into()),
            ..HeroDisplayState::default()
        };
        let lines = state.render_lines(&HeroContent::default(), 80);
        assert!(lines.contains(&"Headline disabled: bad speed".to_string()));
        assert_eq!(lines[3], "▌");
    }

    #[test]
    fn test_draw_writes_every_line() {
        let mut out: Vec<u8> = vec![];
        let lines = vec!["first".to_string(), "second".to_string()];
        draw(&mut out, &lines).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("first"));
        assert!(output.contains("second"));
        assert!(output.find("first") < output.find("second"));
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_segmentation::UnicodeSegmentation;

use crate::{LINE_BREAK, ScriptError};

/// One line of a [`Script`], segmented into grapheme clusters once, up front. The
/// typewriter reveals one grapheme cluster per step, so a flag emoji or an `e` with a
/// combining accent never shows up half drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    text: String,
    /// Byte offset of the end of each grapheme cluster in `text`.
    grapheme_ends: Vec<usize>,
}

impl ScriptLine {
    fn new(text: String) -> Self {
        let grapheme_ends = text
            .grapheme_indices(true)
            .map(|(start, grapheme)| start + grapheme.len())
            .collect();
        Self {
            text,
            grapheme_ends,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    #[must_use]
    pub fn grapheme_count(&self) -> usize { self.grapheme_ends.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.grapheme_ends.is_empty() }

    /// Returns the grapheme cluster at `index`, or `None` past the end of the line.
    #[must_use]
    pub fn grapheme(&self, index: usize) -> Option<&str> {
        let end = *self.grapheme_ends.get(index)?;
        let start = match index {
            0 => 0,
            _ => self.grapheme_ends[index - 1],
        };
        Some(&self.text[start..end])
    }
}

/// The ordered lines a [`crate::Typewriter`] reveals. Immutable once built.
///
/// Input is normalized here, once, and never again while the animation runs:
/// - [`Script::try_new()`] takes lines as they are, and rejects any line that holds a
///   line break.
/// - [`Script::try_from_text()`] splits a single string into lines, with the same
///   checks.
///
/// An empty script (no lines at all) is valid. Starting it reveals nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<ScriptLine>,
}

impl Script {
    /// # Errors
    ///
    /// Returns [`ScriptError::EmbeddedLineBreak`] if a line contains `\n` or `\r`.
    pub fn try_new<I, S>(lines: I) -> Result<Self, ScriptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(line_index, line)| {
                let line: String = line.into();
                if line.contains([LINE_BREAK, '\r']) {
                    Err(ScriptError::EmbeddedLineBreak { line_index })
                } else {
                    Ok(ScriptLine::new(line))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lines })
    }

    /// Splits `text` on `\n`, dropping the `\r` of a CRLF line ending. Empty text gives
    /// an empty script.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmbeddedLineBreak`] if a `\r` is left anywhere else in a
    /// line, same as [`Script::try_new()`].
    pub fn try_from_text(text: &str) -> Result<Self, ScriptError> {
        if text.is_empty() {
            return Ok(Self::default());
        }
        Self::try_new(
            text.split(LINE_BREAK)
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    #[must_use]
    pub fn lines(&self) -> &[ScriptLine] { &self.lines }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Total number of grapheme clusters across all lines.
    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.lines.iter().map(ScriptLine::grapheme_count).sum()
    }

    /// The text the typewriter ends up showing once it is done: the lines joined with
    /// line breaks.
    #[must_use]
    pub fn full_text(&self) -> String {
        let mut acc = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                acc.push(LINE_BREAK);
            }
            acc.push_str(line.as_str());
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_try_new_keeps_lines_in_order() {
        let script = Script::try_new(["Building High-Scale", "Data Solutions."]).unwrap();
        assert_eq!(script.line_count(), 2);
        assert_eq!(script.lines()[0].as_str(), "Building High-Scale");
        assert_eq!(script.lines()[1].as_str(), "Data Solutions.");
        assert_eq!(script.full_text(), "Building High-Scale\nData Solutions.");
    }

    #[test]
    fn test_try_new_rejects_embedded_line_breaks() {
        assert_eq!(
            Script::try_new(["ok", "not\nok"]),
            Err(ScriptError::EmbeddedLineBreak { line_index: 1 })
        );
        assert_eq!(
            Script::try_new(["carriage\r"]),
            Err(ScriptError::EmbeddedLineBreak { line_index: 0 })
        );
    }

    #[test]
    fn test_try_new_accepts_empty_lines_and_empty_script() {
        let script = Script::try_new(["", "X"]).unwrap();
        assert!(script.lines()[0].is_empty());
        assert_eq!(script.grapheme_count(), 1);

        let script = Script::try_new(Vec::<String>::new()).unwrap();
        assert!(script.is_empty());
        assert_eq!(script.full_text(), "");
    }

    #[test]
    fn test_try_from_text_splits_lines() {
        let script = Script::try_from_text("one\r\ntwo\n\nfour").unwrap();
        let lines: Vec<&str> = script.lines().iter().map(ScriptLine::as_str).collect();
        assert_eq!(lines, vec!["one", "two", "", "four"]);
        assert!(Script::try_from_text("").unwrap().is_empty());
    }

    #[test]
    fn test_try_from_text_rejects_lone_carriage_return() {
        assert_eq!(
            Script::try_from_text("a\rb\nc"),
            Err(ScriptError::EmbeddedLineBreak { line_index: 0 })
        );
        assert_eq!(
            Script::try_from_text("a\nb\r\r\nc"),
            Err(ScriptError::EmbeddedLineBreak { line_index: 1 })
        );
        assert_eq!(
            Script::try_from_text("a\rb\nc"),
            Script::try_new(["a\rb", "c"])
        );
    }

    #[test]
    fn test_graphemes_are_not_split() {
        // Flag emoji is two code points, "é" here is "e" + combining acute accent.
        let script = Script::try_new(["a🇯🇵e\u{301}"]).unwrap();
        let line = &script.lines()[0];
        assert_eq!(line.grapheme_count(), 3);
        assert_eq!(line.grapheme(0), Some("a"));
        assert_eq!(line.grapheme(1), Some("🇯🇵"));
        assert_eq!(line.grapheme(2), Some("e\u{301}"));
        assert_eq!(line.grapheme(3), None);
    }
}

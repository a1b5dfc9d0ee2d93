// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Everything the banner shows, apart from the cursor. The defaults are the ones on the
/// live site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title_tag: String,
    /// Revealed by the typewriter, one line per entry.
    pub typed_lines: Vec<String>,
    pub tagline: String,
    pub call_to_actions: Vec<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title_tag: "< Senior Data Engineer />".into(),
            typed_lines: vec!["Building High-Scale".into(), "Data Solutions.".into()],
            tagline: "I design and implement robust ETL pipelines, optimize cloud \
                      infrastructure, and turn complex datasets into actionable business \
                      intelligence."
                .into(),
            call_to_actions: vec!["View My Work →".into(), "⤓ Download Resume".into()],
        }
    }
}

impl HeroContent {
    /// Replaces the typed lines, unless `lines` is empty.
    #[must_use]
    pub fn with_typed_lines(mut self, lines: &[String]) -> Self {
        if !lines.is_empty() {
            self.typed_lines = lines.to_vec();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_with_typed_lines() {
        let content = HeroContent::default().with_typed_lines(&[]);
        assert_eq!(content.typed_lines, vec!["Building High-Scale", "Data Solutions."]);

        let content = HeroContent::default().with_typed_lines(&["Hello".to_string()]);
        assert_eq!(content.typed_lines, vec!["Hello"]);
    }
}

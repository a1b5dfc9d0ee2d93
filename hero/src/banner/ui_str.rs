// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[must_use]
pub fn exit_hint() -> &'static str { "q / Esc / Ctrl+C to exit" }

#[must_use]
pub fn typing_disabled_msg(reason: &str) -> String {
    format!("Headline disabled: {reason}")
}

/// Drawn under the title tag.
#[must_use]
pub fn title_underline(title_width: usize) -> String {
    "━".repeat(title_width.clamp(1, 12))
}

/// The call to action labels, each in a pair of brackets, on one row.
#[must_use]
pub fn call_to_action_row(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| format!("[ {label} ]"))
        .collect::<Vec<_>>()
        .join("   ")
}

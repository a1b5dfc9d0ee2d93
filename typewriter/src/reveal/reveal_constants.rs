// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

pub const DEFAULT_CHAR_DELAY_MS: u64 = 70;
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(DEFAULT_CHAR_DELAY_MS);

/// The pause between two lines is this many character delays long.
pub const DEFAULT_LINE_PAUSE_MULTIPLIER: f64 = 5.0;

/// Appended to the revealed text at every line boundary.
pub const LINE_BREAK: char = '\n';

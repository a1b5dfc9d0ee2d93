// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

pub const DEFAULT_BLINK_HALF_PERIOD_MS: u64 = 800;

/// Time between two toggles of the cursor, so a full on / off cycle is twice this.
pub const DEFAULT_BLINK_HALF_PERIOD: Duration =
    Duration::from_millis(DEFAULT_BLINK_HALF_PERIOD_MS);

/// Drawn after the revealed text while the cursor is visible.
pub const CURSOR_GLYPH: char = '▌';

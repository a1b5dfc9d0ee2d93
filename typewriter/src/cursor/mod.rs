// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cursor_blinker;
pub mod cursor_constants;

// Re-export.
pub use cursor_blinker::*;
pub use cursor_constants::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod hero_content;
pub mod hero_display;
pub mod launcher;
pub mod terminal_guard;
pub mod ui_str;

// Reexport.
pub use clap_config::*;
pub use hero_content::*;
pub use hero_display::*;
pub use launcher::*;
pub use terminal_guard::*;
pub use ui_str::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod reveal_config;
pub mod reveal_constants;
pub mod reveal_error;
pub mod reveal_machine;
pub mod reveal_sink;
pub mod script;
pub mod typewriter;

// Re-export.
pub use reveal_config::*;
pub use reveal_constants::*;
pub use reveal_error::*;
pub use reveal_machine::*;
pub use reveal_sink::*;
pub use script::*;
pub use typewriter::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_types;
pub mod decl_macros;

// Re-export.
pub use common_types::*;

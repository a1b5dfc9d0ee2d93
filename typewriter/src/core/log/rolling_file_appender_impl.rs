// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Creates a file appender that never rolls over, so a whole banner session ends up in
/// one file. A bare file name (eg: `log.txt`) is created in the current folder.
///
/// Note that if you wrap this up in a non blocking writer, log lines written right
/// before the process exits can be lost, since the worker guard has to outlive them.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name, or the file name isn't valid UTF-8
/// - Insufficient permissions to create the file or its folder
pub fn try_create_log_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .ok_or_else(|| {
            miette::miette!(
                "Can't access file name {}. It might not exist, or don't have required permissions.",
                path.display()
            )
        })?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .into_diagnostic()
}

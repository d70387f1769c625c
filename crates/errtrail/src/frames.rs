// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Logical stack frames of the current thread.
//!
//! Every resolved symbol becomes one logical frame, so inlined functions count as frames of their
//! own. A physical frame without symbol information still yields one frame without a location.

use std::path::Path;

/// One logical frame of the current stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    /// Source file and line, when debug information is available.
    pub(crate) location: Option<(String, u32)>,
}

impl Frame {
    fn from_symbol(symbol: &backtrace::Symbol) -> Self {
        let location = match (symbol.filename(), symbol.lineno()) {
            (Some(file), Some(line)) => Some((file.to_string_lossy().into_owned(), line)),
            _ => None,
        };
        Self { location }
    }
}

/// Walks the current stack, innermost frame first.
///
/// Returns no frames when the platform does not support stack walking.
#[cfg_attr(test, mutants::skip)] // stack walking support is platform dependent
pub(crate) fn capture() -> Vec<Frame> {
    let mut frames = Vec::new();

    backtrace::trace(|raw| {
        let before = frames.len();
        backtrace::resolve_frame(raw, |symbol| frames.push(Frame::from_symbol(symbol)));
        if frames.len() == before {
            frames.push(Frame { location: None });
        }
        true
    });

    frames
}

/// Finds the innermost frame executing at `file:line`.
///
/// `file` is usually relative to the build root while stack frames report absolute paths, so
/// files match when one path ends with the other.
pub(crate) fn anchor(frames: &[Frame], file: &str, line: u32) -> Option<usize> {
    frames.iter().position(|frame| match &frame.location {
        Some((frame_file, frame_line)) => *frame_line == line && same_file(frame_file, file),
        None => false,
    })
}

/// Recovers the directory compiler locations are relative to.
///
/// `absolute` is the path a stack frame reports for the file the compiler calls `relative`.
/// Returns `None` when `relative` is itself absolute or is not a suffix of `absolute`.
pub(crate) fn build_root<'a>(absolute: &'a str, relative: &str) -> Option<&'a Path> {
    let (absolute, relative) = (Path::new(absolute), Path::new(relative));
    if relative.is_absolute() || !absolute.ends_with(relative) {
        return None;
    }

    let mut root = absolute;
    for _ in relative.components() {
        root = root.parent()?;
    }
    Some(root)
}

fn same_file(a: &str, b: &str) -> bool {
    let (a, b) = (Path::new(a), Path::new(b));
    a.ends_with(b) || b.ends_with(a)
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Call-site resolution.
//!
//! A [`CallSite`] identifies a source location as `path:line`. Locations are captured either from
//! the compiler-provided caller information ([`CallSite::caller`]) or, when frames further up the
//! stack are needed, by walking the stack ([`CallSite::resolve`]).
//!
//! Resolution is best effort. It never fails: when the location cannot be determined, the
//! placeholder [`CallSite::UNKNOWN`] is returned, which renders as `unknown:0`.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;

use crate::frames;

/// A source location, rendered as `path:line`.
///
/// # Examples
///
/// ```rust
/// use errtrail::CallSite;
///
/// let site = CallSite::new("src/main.rs", 42);
/// assert_eq!(site.to_string(), "src/main.rs:42");
/// assert!(CallSite::UNKNOWN.is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: Cow<'static, str>,
    line: u32,
}

impl CallSite {
    /// Placeholder used when the location cannot be resolved.
    pub const UNKNOWN: Self = Self {
        file: Cow::Borrowed("unknown"),
        line: 0,
    };

    /// Creates a call-site from a file path and line number.
    ///
    /// The path is used as given. Use [`CallSite::caller`] or [`CallSite::resolve`] to get paths
    /// the way the compiler reports them.
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self { file: file.into(), line }
    }

    /// Captures the location of the caller.
    ///
    /// Functions marked `#[track_caller]` are transparent, so a constructor marked that way
    /// reports the location of the code that invoked the constructor.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Resolves the location `skip` frames above the caller.
    ///
    /// With `skip == 0` this is the location where `resolve` is called, exactly like
    /// [`CallSite::caller`]. Every increment moves one frame up the call stack, so `skip == 1`
    /// reports where the calling function itself was called.
    ///
    /// Frames above the caller are discovered by walking the stack and require debug
    /// information. Their paths are reported in the same form as [`CallSite::caller`] paths. When
    /// the stack is shallower than requested or lacks symbols, the result is
    /// [`CallSite::UNKNOWN`].
    #[track_caller]
    #[must_use]
    pub fn resolve(skip: usize) -> Self {
        let caller = Location::caller();
        if skip == 0 {
            return Self::from_location(caller);
        }

        let frames = frames::capture();
        let resolved = frames::anchor(&frames, caller.file(), caller.line()).and_then(|anchor| {
            let (anchor_file, _) = frames.get(anchor)?.location.as_ref()?;
            let root = frames::build_root(anchor_file, caller.file());
            let (file, line) = frames.get(anchor.checked_add(skip)?)?.location.as_ref()?;
            Some((relative_to(file, root), *line))
        });

        match resolved {
            Some((file, line)) => Self {
                file: Cow::Owned(file.into_owned()),
                line,
            },
            None => {
                #[cfg(any(feature = "logs", test))]
                tracing::event!(
                    name: "errtrail.call_site.unresolved",
                    tracing::Level::TRACE,
                    call_site.skip = skip,
                    call_site.frames = frames.len(),
                );
                Self::UNKNOWN
            }
        }
    }

    /// The file path of this call-site.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line number of this call-site.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns `true` if this is the [`CallSite::UNKNOWN`] placeholder.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: strip_working_dir(location.file()),
            line: location.line(),
        }
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Returns the `path:line` of the location `skip` frames above the caller.
///
/// This is the string form of [`CallSite::resolve`].
///
/// # Examples
///
/// ```rust
/// let here = errtrail::resolve(0);
/// assert!(here.ends_with(&format!(":{}", line!() - 1)));
/// ```
#[track_caller]
#[must_use]
pub fn resolve(skip: usize) -> String {
    CallSite::resolve(skip).to_string()
}

/// Makes a stack frame path relative to the build root, so it reads like a compiler location.
///
/// Paths outside the build root, or without a known root, get the working directory stripped.
fn relative_to<'a>(path: &'a str, root: Option<&Path>) -> Cow<'a, str> {
    match root {
        Some(root) if Path::new(path).starts_with(root) => strip_dir(path, root),
        _ => strip_working_dir(path),
    }
}

/// Strips the current working directory from the front of `path`.
///
/// Working directory lookup failures leave the path untouched.
fn strip_working_dir(path: &str) -> Cow<'_, str> {
    match std::env::current_dir() {
        Ok(dir) => strip_dir(path, &dir),
        Err(_) => Cow::Borrowed(path),
    }
}

fn strip_dir<'a>(path: &'a str, dir: &Path) -> Cow<'a, str> {
    match Path::new(path).strip_prefix(dir) {
        Ok(relative) if !relative.as_os_str().is_empty() => Cow::Owned(relative.to_string_lossy().into_owned()),
        _ => Cow::Borrowed(path),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn caller_reports_this_file() {
        let site = CallSite::caller();
        assert!(site.file().ends_with("call_site.rs"), "{site}");
        assert_eq!(site.line(), line!() - 2);
    }

    #[test]
    fn resolve_zero_matches_caller() {
        let (a, b) = (CallSite::resolve(0), CallSite::caller());
        assert_eq!(a, b);
    }

    #[test]
    fn resolve_too_deep_is_unknown() {
        assert!(CallSite::resolve(usize::MAX).is_unknown());
        assert_eq!(resolve(100_000), "unknown:0");
    }

    #[test]
    fn unknown_display() {
        assert_eq!(CallSite::UNKNOWN.to_string(), "unknown:0");
        assert_eq!(CallSite::default(), CallSite::UNKNOWN);
        assert!(!CallSite::new("a.rs", 1).is_unknown());
    }

    #[test]
    fn strip_dir_removes_prefix() {
        let dir = PathBuf::from("/work/repo");
        let file = PathBuf::from("/work/repo").join("src").join("lib.rs");
        let stripped = strip_dir(file.to_str().unwrap(), &dir);
        assert_eq!(Path::new(stripped.as_ref()), Path::new("src").join("lib.rs"));
    }

    #[test]
    fn strip_dir_requires_component_boundary() {
        let dir = PathBuf::from("/work/repo");
        assert_eq!(strip_dir("/work/repository/src/lib.rs", &dir), "/work/repository/src/lib.rs");
        assert_eq!(strip_dir("src/lib.rs", &dir), "src/lib.rs");
    }

    #[test]
    fn relative_to_prefers_build_root() {
        let root = PathBuf::from("/work/repo");
        let file = root.join("crates").join("a").join("src").join("lib.rs");
        let relative = relative_to(file.to_str().unwrap(), Some(root.as_path()));
        assert_eq!(Path::new(relative.as_ref()), Path::new("crates").join("a").join("src").join("lib.rs"));

        let outside = "/registry/dep/src/lib.rs";
        assert_eq!(relative_to(outside, Some(root.as_path())), strip_working_dir(outside));
        assert_eq!(relative_to(outside, None), strip_working_dir(outside));
    }

    #[test]
    fn strip_dir_keeps_directory_itself() {
        let dir = PathBuf::from("/work/repo");
        assert_eq!(strip_dir("/work/repo", &dir), "/work/repo");
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

use crate::{ArgValue, CallSite, ErrorRecordBuilder};

/// Parent errors are owned, type-erased, and thread-safe.
pub(crate) type Parent = Box<dyn StdError + Send + Sync + 'static>;

/// Arguments keyed by name. Iteration is ordered by key.
pub(crate) type Arguments = BTreeMap<Cow<'static, str>, ArgValue>;

/// Record data, boxed to keep `ErrorRecord` a single pointer wide.
pub(crate) struct Inner {
    pub(crate) message: Cow<'static, str>,
    pub(crate) origin: CallSite,
    pub(crate) arguments: Arguments,
    pub(crate) parent: Option<Parent>,
}

/// An error decorated with a message, structured arguments, an optional parent, and the
/// call-site where it was constructed.
///
/// Records render as `"<message>; <parent>"`, so a chain of records reads from the outermost
/// operation down to the root cause. Arguments never appear in the rendered message, they are
/// meant for structured inspection (for example by a logging integration).
///
/// The parent is moved into the record that wraps it. A record therefore exclusively owns its
/// chain, and a record can never become its own ancestor.
///
/// # Examples
///
/// ```rust
/// use errtrail::ErrorRecord;
///
/// let io = std::io::Error::other("disk full");
/// let err = ErrorRecord::new("failed to save profile")
///     .with_parent(io)
///     .with_argument("user", "alice");
///
/// assert_eq!(err.to_string(), "failed to save profile; disk full");
/// assert_eq!(err.argument("user").and_then(|v| v.as_str()), Some("alice"));
/// ```
pub struct ErrorRecord {
    data: Box<Inner>,
}

impl ErrorRecord {
    /// Creates a record with the given message.
    ///
    /// The origin is set to the location of the code calling this constructor.
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_parts(message.into(), CallSite::caller())
    }

    /// Creates a record whose message is produced from format arguments.
    ///
    /// The [`record!`](crate::record) macro is the usual way to call this.
    ///
    /// ```rust
    /// use errtrail::ErrorRecord;
    ///
    /// let err = ErrorRecord::from_args(format_args!("operation {} failed", "update"));
    /// assert_eq!(err.to_string(), "operation update failed");
    /// ```
    #[track_caller]
    #[must_use]
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        let message = match args.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(fmt::format(args)),
        };
        Self::from_parts(message, CallSite::caller())
    }

    /// Creates a new [`ErrorRecordBuilder`].
    #[must_use]
    pub fn builder() -> ErrorRecordBuilder {
        ErrorRecordBuilder::new()
    }

    pub(crate) fn from_parts(message: Cow<'static, str>, origin: CallSite) -> Self {
        Self {
            data: Box::new(Inner {
                message,
                origin,
                arguments: Arguments::new(),
                parent: None,
            }),
        }
    }

    pub(crate) fn from_inner(inner: Inner) -> Self {
        Self { data: Box::new(inner) }
    }

    /// The message of this record alone, without any parent.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.data.message
    }

    /// The location where this record was constructed.
    #[must_use]
    pub fn origin(&self) -> &CallSite {
        &self.data.origin
    }

    /// The parent error, if one was attached.
    #[must_use]
    pub fn parent(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.data.parent.as_deref()
    }

    /// Detaches and returns the parent error.
    pub fn take_parent(&mut self) -> Option<Box<dyn StdError + Send + Sync>> {
        self.data.parent.take()
    }

    /// All arguments, ordered by key.
    #[must_use]
    pub fn arguments(&self) -> &BTreeMap<Cow<'static, str>, ArgValue> {
        &self.data.arguments
    }

    /// The argument stored under `key`.
    #[must_use]
    pub fn argument(&self, key: &str) -> Option<&ArgValue> {
        self.data.arguments.get(key)
    }

    /// Inserts an argument, replacing any previous value under the same key.
    pub fn set_argument(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) -> &mut Self {
        self.data.arguments.insert(key.into(), value.into());
        self
    }

    /// Attaches the parent error, replacing any previous parent.
    ///
    /// Anything convertible into a boxed error is accepted, including other records, standard
    /// library errors, and plain strings.
    pub fn set_parent(&mut self, parent: impl Into<Box<dyn StdError + Send + Sync>>) -> &mut Self {
        self.data.parent = Some(parent.into());
        self
    }

    /// Consuming variant of [`set_argument`](Self::set_argument).
    #[must_use]
    pub fn with_argument(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) -> Self {
        self.set_argument(key, value);
        self
    }

    /// Consuming variant of [`set_parent`](Self::set_parent).
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.set_parent(parent);
        self
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.parent {
            Some(parent) => write!(f, "{}; {parent}", self.data.message),
            None => f.write_str(&self.data.message),
        }
    }
}

impl fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRecord")
            .field("message", &self.data.message)
            .field("origin", &format_args!("{}", self.data.origin))
            .field("arguments", &self.data.arguments)
            .field("parent", &self.data.parent)
            .finish()
    }
}

impl StdError for ErrorRecord {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.data.parent.as_deref().map(|parent| parent as &(dyn StdError + 'static))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_parent_or_arguments() {
        let err = ErrorRecord::new("msg");
        assert_eq!(err.message(), "msg");
        assert!(err.parent().is_none());
        assert!(err.arguments().is_empty());
        assert!(err.origin().file().ends_with("record.rs"));
    }

    #[test]
    fn display_with_parent() {
        let err = ErrorRecord::new("outer").with_parent(ErrorRecord::new("middle").with_parent("inner"));
        assert_eq!(err.to_string(), "outer; middle; inner");
        assert_eq!(err.message(), "outer");
    }

    #[test]
    fn set_parent_replaces_previous() {
        let mut err = ErrorRecord::new("outer");
        err.set_parent("first").set_parent("second");
        assert_eq!(err.to_string(), "outer; second");
    }

    #[test]
    fn take_parent_detaches() {
        let mut err = ErrorRecord::new("outer").with_parent("cause");
        let parent = err.take_parent().unwrap();
        assert_eq!(parent.to_string(), "cause");
        assert!(err.parent().is_none());
        assert_eq!(err.to_string(), "outer");
    }

    #[test]
    fn from_args_literal_is_borrowed() {
        let err = ErrorRecord::from_args(format_args!("static"));
        assert!(matches!(err.data.message, Cow::Borrowed("static")));

        let n = 3;
        let err = ErrorRecord::from_args(format_args!("n = {n}"));
        assert_eq!(err.message(), "n = 3");
    }

    #[test]
    fn source_is_parent() {
        let err = ErrorRecord::new("outer").with_parent(std::io::Error::other("io"));
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
        assert!(ErrorRecord::new("alone").source().is_none());
    }

    #[test]
    fn debug_lists_fields() {
        let err = ErrorRecord::new("msg").with_argument("k", 1);
        let debug = format!("{err:?}");
        assert!(debug.starts_with("ErrorRecord { message: \"msg\", origin: "), "{debug}");
        assert!(debug.contains("arguments: {\"k\": I64(1)}"), "{debug}");
        assert!(debug.ends_with("parent: None }"), "{debug}");
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::record::{Arguments, Inner, Parent};
use crate::{ArgValue, CallSite, ErrorRecord};

/// Builder for creating [`ErrorRecord`] instances in one expression.
///
/// The origin is captured when [`build`](Self::build) is called, unless it was set explicitly
/// with [`origin`](Self::origin). Setting it explicitly is useful when relaying an error that was
/// detected elsewhere, for example in another process.
///
/// # Examples
///
/// ```rust
/// use errtrail::{CallSite, ErrorRecord};
///
/// let err = ErrorRecord::builder()
///     .message("upstream rejected the request")
///     .argument("status", 503)
///     .origin(CallSite::new("gateway/src/proxy.rs", 88))
///     .build();
///
/// assert_eq!(err.origin().to_string(), "gateway/src/proxy.rs:88");
/// ```
#[derive(Debug, Default)]
pub struct ErrorRecordBuilder {
    message: Cow<'static, str>,
    origin: Option<CallSite>,
    arguments: Arguments,
    parent: Option<Parent>,
}

impl ErrorRecordBuilder {
    /// Creates a new builder with an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds an argument, replacing any previous value under the same key.
    #[must_use]
    pub fn argument(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Sets the parent error.
    #[must_use]
    pub fn parent(mut self, parent: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the origin instead of capturing it at [`build`](Self::build).
    #[must_use]
    pub fn origin(mut self, origin: CallSite) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Builds the [`ErrorRecord`].
    #[track_caller]
    #[must_use]
    pub fn build(self) -> ErrorRecord {
        // Not `unwrap_or_else`: the caller location must be taken in this frame.
        let origin = match self.origin {
            Some(origin) => origin,
            None => CallSite::caller(),
        };

        ErrorRecord::from_inner(Inner {
            message: self.message,
            origin,
            arguments: self.arguments,
            parent: self.parent,
        })
    }
}

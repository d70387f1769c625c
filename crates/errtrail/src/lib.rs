// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Errors that remember where they came from.
//!
//! Errtrail decorates an error with a message, structured arguments, a causal parent, and the
//! call-site where it was constructed. Instead of flattening every detail into one formatted
//! string, calling code builds a chain of records that can be rendered for humans and inspected
//! by machines.
//!
//! # Key Features
//!
//! - [**`ErrorRecord`**](ErrorRecord): The decorated error value. It renders as
//!   `"<message>; <parent>"` and implements [`std::error::Error`].
//! - [**`record!`**](record): Constructs a record from a format string.
//! - [**`root_cause`**](root_cause) and [**`chain_as_list`**](chain_as_list): Chain queries that
//!   work on any error, decorated or not.
//! - [**`CallSite`**](CallSite) and [**`resolve`**](resolve): Call-site capture with the working
//!   directory stripped from the path.
//! - [**`ArgValue`**](ArgValue): Typed values for the structured arguments.
//!
//! # Quick Start
//!
//! ```rust
//! use errtrail::{ErrorRecord, chain_as_list, record, root_cause};
//!
//! let low = ErrorRecord::new("low-level failure");
//! let err = record!("operation {} failed", "update")
//!     .with_parent(low)
//!     .with_argument("id", 42);
//!
//! assert_eq!(err.to_string(), "operation update failed; low-level failure");
//! assert_eq!(err.argument("id").and_then(errtrail::ArgValue::as_i64), Some(42));
//! assert_eq!(root_cause(&err).to_string(), "low-level failure");
//! assert_eq!(chain_as_list(&err).len(), 2);
//! ```
//!
//! # Arguments
//!
//! Arguments exist for structured inspection only. They never show up in the rendered message,
//! which keeps messages stable while the attached diagnostics vary.
//!
//! ```rust
//! use errtrail::ErrorRecord;
//!
//! let mut err = ErrorRecord::new("request rejected");
//! err.set_argument("status", 429_u16).set_argument("retry", true);
//!
//! assert_eq!(err.to_string(), "request rejected");
//! assert_eq!(err.arguments().len(), 2);
//! ```
//!
//! # Origins
//!
//! Every record captures the location of the code that constructed it. Paths are reported the
//! way the compiler sees them, relative to the build root, and locations further up the stack
//! found by [`resolve`] use the same form.
//!
//! ```rust
//! use errtrail::ErrorRecord;
//!
//! let err = ErrorRecord::new("boom");
//! assert!(err.origin().to_string().ends_with(&format!(":{}", line!() - 1)));
//! ```
//!
//! # Logs
//!
//! With the `logs` feature enabled, [`ErrorRecord::emit`] reports a record and its arguments as
//! a single structured `tracing` event.

mod builder;
pub mod call_site;
mod chain;
mod frames;
#[cfg(any(feature = "logs", test))]
mod logs;
mod macros;
mod record;
mod value;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use builder::ErrorRecordBuilder;
pub use call_site::{CallSite, resolve};
pub use chain::{as_decorated, chain_as_list, is_decorated, root_cause};
pub use record::ErrorRecord;
pub use value::ArgValue;

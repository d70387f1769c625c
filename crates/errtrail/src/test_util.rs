// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the errtrail crate.
//!
//! This module is only available when the `test-util` feature is enabled.

use std::error::Error as StdError;

use crate::{as_decorated, chain_as_list};

/// The messages of every link in the chain of `err`, root cause first.
///
/// Records contribute their own message; other errors contribute their full rendering.
#[must_use]
pub fn chain_messages(err: &(dyn StdError + 'static)) -> Vec<String> {
    chain_as_list(err)
        .into_iter()
        .map(|link| as_decorated(link).map_or_else(|| link.to_string(), |record| record.message().to_owned()))
        .collect()
}

/// Assert that the chain of an error consists of the expected messages, root cause first.
///
/// Each record in the chain is compared by its own message, without its parents.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use errtrail::{ErrorRecord, assert_chain};
///
/// let err = ErrorRecord::new("outer").with_parent(ErrorRecord::new("inner"));
/// assert_chain!(err, ["inner", "outer"]);
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_chain {
    ($error:expr, [$($expected:expr),* $(,)?]) => {{
        let actual = $crate::test_util::chain_messages(&$error);
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($expected),*];
        if actual != expected {
            panic!("left : {expected:?}\nright: {actual:?}");
        }
    }};
}

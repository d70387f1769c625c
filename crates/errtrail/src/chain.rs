// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Chain queries.
//!
//! These are free functions rather than methods so they accept any error. Links that are not
//! [`ErrorRecord`]s are treated as opaque leaves: their own [`source`](StdError::source) chain
//! is not followed.

use std::error::Error as StdError;

use crate::ErrorRecord;

/// Returns `true` if `err` is an [`ErrorRecord`].
#[must_use]
pub fn is_decorated(err: &(dyn StdError + 'static)) -> bool {
    err.is::<ErrorRecord>()
}

/// Returns `err` as an [`ErrorRecord`], if it is one.
#[must_use]
pub fn as_decorated<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ErrorRecord> {
    err.downcast_ref::<ErrorRecord>()
}

fn decorated_parent<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    as_decorated(err)?.parent().map(|parent| parent as &(dyn StdError + 'static))
}

/// Returns the innermost cause of `err`.
///
/// Parents are followed while the current link is a record with a parent. The walk stops at the
/// first link that is not a record, or at a record without a parent. An error that is not a
/// record is its own root cause.
///
/// # Examples
///
/// ```rust
/// use errtrail::{ErrorRecord, root_cause};
///
/// let err = ErrorRecord::new("outer").with_parent(ErrorRecord::new("root"));
/// assert_eq!(root_cause(&err).to_string(), "root");
///
/// let io = std::io::Error::other("io");
/// assert_eq!(root_cause(&io).to_string(), "io");
/// ```
#[must_use]
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(parent) = decorated_parent(current) {
        current = parent;
    }
    current
}

/// Returns every link of the chain, root cause first and `err` last.
///
/// An error that is not a record yields a single-element list holding `err`.
///
/// # Examples
///
/// ```rust
/// use errtrail::{ErrorRecord, chain_as_list};
///
/// let err = ErrorRecord::new("outer").with_parent(ErrorRecord::new("root"));
/// let messages: Vec<_> = chain_as_list(&err).iter().map(ToString::to_string).collect();
/// assert_eq!(messages, ["root", "outer; root"]);
/// ```
#[must_use]
pub fn chain_as_list<'a>(err: &'a (dyn StdError + 'static)) -> Vec<&'a (dyn StdError + 'static)> {
    let mut chain = vec![err];
    let mut current = err;
    while let Some(parent) = decorated_parent(current) {
        chain.push(parent);
        current = parent;
    }
    chain.reverse();
    chain
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    fn same(a: &dyn StdError, b: &dyn StdError) -> bool {
        ptr::addr_eq(ptr::from_ref(a), ptr::from_ref(b))
    }

    #[test]
    fn decorated_checks() {
        let record = ErrorRecord::new("r");
        let io = std::io::Error::other("io");
        assert!(is_decorated(&record));
        assert!(!is_decorated(&io));
        assert_eq!(as_decorated(&record).map(ErrorRecord::message), Some("r"));
        assert!(as_decorated(&io).is_none());
    }

    #[test]
    fn root_cause_of_single_record_is_itself() {
        let err = ErrorRecord::new("alone");
        assert!(same(root_cause(&err), &err));
    }

    #[test]
    fn root_cause_stops_at_foreign_error() {
        #[derive(Debug)]
        struct Wrapper(std::io::Error);

        impl std::fmt::Display for Wrapper {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("wrapper")
            }
        }

        impl StdError for Wrapper {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                Some(&self.0)
            }
        }

        let err = ErrorRecord::new("outer").with_parent(Wrapper(std::io::Error::other("hidden")));
        let root = root_cause(&err);
        assert!(root.is::<Wrapper>());
        assert_eq!(chain_as_list(&err).len(), 2);
    }

    #[test]
    fn chain_order_is_root_first() {
        let err = ErrorRecord::new("c").with_parent(ErrorRecord::new("b").with_parent(ErrorRecord::new("a")));
        let chain = chain_as_list(&err);
        let messages: Vec<_> = chain.iter().filter_map(|e| as_decorated(*e)).map(ErrorRecord::message).collect();
        assert_eq!(messages, ["a", "b", "c"]);
        assert!(same(chain[2], &err));
        assert!(same(chain[0], root_cause(&err)));
    }

    #[test]
    fn foreign_error_is_single_link() {
        let io = std::io::Error::other("io");
        let chain = chain_as_list(&io);
        assert_eq!(chain.len(), 1);
        assert!(same(chain[0], &io));
    }
}

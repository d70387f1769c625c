// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(feature = "test-util")]
#![expect(missing_docs, reason = "Test code")]

use errtrail::test_util::chain_messages;
use errtrail::{ErrorRecord, assert_chain, record};

#[test]
fn operation_failed_chain() {
    let e1 = ErrorRecord::new("low-level failure");
    let e2 = record!("operation {} failed", "update").with_parent(e1).with_argument("id", 42);
    assert_chain!(e2, ["low-level failure", "operation update failed"]);
}

#[test]
fn foreign_root_contributes_full_rendering() {
    let err = ErrorRecord::new("save failed").with_parent(std::io::Error::other("disk full"));
    assert_chain!(err, ["disk full", "save failed"]);
}

#[test]
fn single_foreign_error() {
    let io = std::io::Error::other("io");
    assert_eq!(chain_messages(&io), ["io"]);
}

#[test]
#[should_panic(expected = "left : []")]
fn empty_expectation_never_matches() {
    assert_chain!(ErrorRecord::new("m"), []);
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "Test code")]

use std::mem;

use errtrail::{ErrorRecord, ErrorRecordBuilder};
use static_assertions::assert_impl_all;

assert_impl_all!(ErrorRecord: Send, Sync, std::error::Error);
assert_impl_all!(ErrorRecordBuilder: Send, Sync, Default);

#[test]
fn record_is_one_pointer() {
    assert_eq!(mem::size_of::<ErrorRecord>(), mem::size_of::<usize>());
}

#[test]
fn result_with_record_is_small() {
    let size = mem::size_of::<Result<String, ErrorRecord>>();
    assert!(size <= 32, "Result size should be reasonable: {size} bytes");
}

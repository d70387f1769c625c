// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Emits a record as a structured `tracing` event.

use errtrail::{ErrorRecord, record};

fn main() {
    tracing_subscriber::fmt().init();

    let err = record!("operation {} failed", "update")
        .with_parent(ErrorRecord::new("low-level failure"))
        .with_argument("id", 42)
        .with_argument("retry", false);

    err.emit();
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Constructs an [`ErrorRecord`](crate::ErrorRecord) from a format string.
///
/// Accepts the same arguments as [`format!`]. The origin of the record is the location of the
/// macro invocation.
///
/// # Examples
///
/// ```rust
/// use errtrail::record;
///
/// let op = "update";
/// let err = record!("operation {op} failed");
/// assert_eq!(err.to_string(), "operation update failed");
///
/// let err = record!("{} of {} items failed", 3, 10).with_argument("batch", 7);
/// assert_eq!(err.to_string(), "3 of 10 items failed");
/// ```
#[macro_export]
macro_rules! record {
    ($($arg:tt)+) => {
        $crate::ErrorRecord::from_args(::std::format_args!($($arg)+))
    };
}

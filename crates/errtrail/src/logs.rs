// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::record::Arguments;
use crate::{ErrorRecord, chain_as_list};

/// Writes arguments as `key=value` pairs separated by spaces.
struct ArgumentsFormatter<'a>(&'a Arguments);

impl fmt::Display for ArgumentsFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl ErrorRecord {
    /// Emits this record as a single `ERROR` level `tracing` event named `errtrail.error`.
    ///
    /// The event carries the record's own message, its origin, the full rendered chain, the
    /// chain depth, and the arguments as `key=value` pairs ordered by key.
    #[cfg_attr(docsrs, doc(cfg(feature = "logs")))]
    pub fn emit(&self) {
        tracing::event!(
            name: "errtrail.error",
            tracing::Level::ERROR,
            error.message = self.message(),
            error.origin = %self.origin(),
            error.chain = %self,
            error.depth = chain_as_list(self).len(),
            error.arguments = %ArgumentsFormatter(self.arguments()),
        );
    }
}

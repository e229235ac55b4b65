/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Diagnostic call-stack snapshots attached to failure values.

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

/// A call-stack snapshot captured when a failure value is constructed.
///
/// Traces are diagnostic only: they are rendered into unwrap/expect
/// panic messages but never participate in equality, hashing, or
/// serialization. Capture honors `RUST_BACKTRACE`, so an unset
/// environment keeps construction cheap.
///
/// Combinators that pass a failure through (`map`, `map_err`,
/// `and_then`, the collection combinators) carry the originating
/// trace along unchanged; the snapshot is shared, not re-captured.
#[derive(Clone)]
pub struct Trace(Option<Arc<Backtrace>>);

impl Trace {
    /// The empty trace, used where capture is impossible (const
    /// contexts, deserialized values).
    pub(crate) const DISABLED: Trace = Trace(None);

    /// Capture the current call stack.
    pub fn capture() -> Self {
        Trace(Some(Arc::new(Backtrace::capture())))
    }

    /// A trace that records nothing.
    pub fn disabled() -> Self {
        Self::DISABLED
    }

    /// True if a snapshot was taken at construction time.
    pub fn is_captured(&self) -> bool {
        self.0.is_some()
    }

    /// True if both traces share the same captured snapshot. Used to
    /// verify that combinators propagate rather than re-capture.
    pub fn same_capture(&self, other: &Trace) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(backtrace) => write!(f, "{}", backtrace),
            None => write!(f, "<no trace captured>"),
        }
    }
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_captured() {
            write!(f, "Trace(captured)")
        } else {
            write!(f, "Trace(disabled)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_is_shared_by_clone() {
        let trace = Trace::capture();
        let clone = trace.clone();
        assert!(trace.same_capture(&clone));
        assert!(trace.is_captured());
    }

    #[test]
    fn disabled_records_nothing() {
        let trace = Trace::disabled();
        assert!(!trace.is_captured());
        assert_eq!(trace.to_string(), "<no trace captured>");
        assert!(trace.same_capture(&Trace::DISABLED));
    }

    #[test]
    fn independent_captures_are_distinct() {
        let a = Trace::capture();
        let b = Trace::capture();
        assert!(!a.same_capture(&b));
    }
}

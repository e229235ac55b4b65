/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Contract-violation errors and captured panic payloads.
//!
//! Representable failures flow through containers as plain data and
//! are never raised. The only error this crate itself raises is
//! [`UnwrapError`], delivered as a panic payload when an unwrap/expect
//! operation is applied to the wrong variant. [`PanicPayload`] is the
//! inverse direction: a panic raised by caller code under
//! [`Outcome::wrap`](crate::Outcome::wrap) or
//! [`Outcome::wrap_async`](crate::Outcome::wrap_async), captured
//! verbatim as a failure value.

use std::any::Any;
use std::fmt;
use std::panic;

/// Raised (via [`std::panic::panic_any`]) when an unwrap/expect
/// operation is applied to the wrong variant.
///
/// The human-readable message embeds a rendering of the
/// opposite-variant payload and, for failures, the call-stack snapshot
/// captured at construction time. The raw payload itself travels as
/// the machine-readable [cause](UnwrapError::cause), so diagnostic
/// tooling that catches the unwind can recover the original value
/// rather than its string form.
///
/// # Example
///
/// ```
/// use std::panic::AssertUnwindSafe;
/// use std::panic::catch_unwind;
///
/// use outcome::Outcome;
/// use outcome::UnwrapError;
/// use outcome::err;
///
/// let failed: Outcome<i32, &str> = err("boom");
/// let panic = catch_unwind(AssertUnwindSafe(|| failed.unwrap())).unwrap_err();
/// let unwrap_error = panic.downcast::<UnwrapError>().unwrap();
/// assert_eq!(unwrap_error.cause_ref::<&str>(), Some(&"boom"));
/// ```
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
    cause: Box<dyn Any + Send>,
}

impl UnwrapError {
    pub(crate) fn new(message: String, cause: Box<dyn Any + Send>) -> Self {
        Self { message, cause }
    }

    /// The human-readable description of the contract violation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The opposite-variant payload that was present when the unwrap
    /// was attempted.
    pub fn cause(&self) -> &(dyn Any + Send) {
        self.cause.as_ref()
    }

    /// Downcast the cause to a concrete payload type.
    pub fn cause_ref<C: 'static>(&self) -> Option<&C> {
        self.cause.downcast_ref::<C>()
    }

    /// Take ownership of the cause.
    pub fn into_cause(self) -> Box<dyn Any + Send> {
        self.cause
    }
}

impl fmt::Debug for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnwrapError")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Raise an [`UnwrapError`]. The custom payload keeps the cause
/// recoverable through `catch_unwind` downcasting.
pub(crate) fn unwrap_failed(message: String, cause: Box<dyn Any + Send>) -> ! {
    panic::panic_any(UnwrapError::new(message, cause))
}

/// A panic value captured verbatim by
/// [`Outcome::wrap`](crate::Outcome::wrap) or
/// [`Outcome::wrap_async`](crate::Outcome::wrap_async).
///
/// The payload is stored exactly as raised, with no transformation.
/// Since most panics carry `&str` or `String` payloads,
/// [`message`](PanicPayload::message) extracts those as a convenience;
/// anything else is available through downcasting.
pub struct PanicPayload(Box<dyn Any + Send>);

impl PanicPayload {
    pub(crate) fn new(payload: Box<dyn Any + Send>) -> Self {
        Self(payload)
    }

    /// The panic message, when the payload is a `&str` or `String`.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.0.downcast_ref::<&'static str>() {
            Some(s)
        } else {
            self.0.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Downcast the payload to a concrete type.
    pub fn downcast_ref<C: 'static>(&self) -> Option<&C> {
        self.0.downcast_ref::<C>()
    }

    /// The raw payload, exactly as raised.
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.0
    }
}

impl fmt::Debug for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "PanicPayload({:?})", message),
            None => write!(f, "PanicPayload(<non-string payload>)"),
        }
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "<non-string panic payload>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_error_carries_cause() {
        let panic = panic::catch_unwind(|| {
            unwrap_failed("wrong variant".to_string(), Box::new(42i32))
        })
        .unwrap_err();
        let error = panic.downcast::<UnwrapError>().unwrap();
        assert_eq!(error.message(), "wrong variant");
        assert_eq!(error.to_string(), "wrong variant");
        assert_eq!(error.cause_ref::<i32>(), Some(&42));
        assert_eq!(error.cause_ref::<String>(), None);
    }

    #[test]
    fn panic_payload_extracts_str_messages() {
        let payload = PanicPayload::new(Box::new("boom"));
        assert_eq!(payload.message(), Some("boom"));
        assert_eq!(payload.to_string(), "boom");
    }

    #[test]
    fn panic_payload_extracts_string_messages() {
        let payload = PanicPayload::new(Box::new("boom".to_string()));
        assert_eq!(payload.message(), Some("boom"));
        assert_eq!(format!("{:?}", payload), "PanicPayload(\"boom\")");
    }

    #[test]
    fn panic_payload_preserves_arbitrary_values() {
        let payload = PanicPayload::new(Box::new(7u64));
        assert_eq!(payload.message(), None);
        assert_eq!(payload.downcast_ref::<u64>(), Some(&7));
        assert_eq!(payload.to_string(), "<non-string panic payload>");
    }
}

/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The success/failure container and its combinators.
//!
//! [`Outcome<T, E>`] represents the result of a fallible operation as
//! an ordinary value: either a success payload of type `T` or a
//! failure payload of type `E`. Failures flow through combinator
//! chains as data; nothing is ever raised except by the unwrap/expect
//! family, and only at the caller's explicit request.
//!
//! # Quick Start
//!
//! ```
//! use outcome::Outcome;
//! use outcome::err;
//! use outcome::ok;
//!
//! fn parse(s: &str) -> Outcome<i32, String> {
//!     match s.parse::<i32>() {
//!         Ok(n) => ok(n),
//!         Err(e) => err(e.to_string()),
//!     }
//! }
//!
//! let n = parse("21").map(|n| n * 2).unwrap_or(0);
//! assert_eq!(n, 42);
//! assert!(parse("nope").is_err());
//! ```
//!
//! # Laws
//!
//! The combinators obey the usual functor/monad laws (verified by the
//! property tests in `tests/laws.rs`):
//!
//! - Composition: `o.map(f).map(g) == o.map(|x| g(f(x)))`
//! - Associativity: `o.and_then(f).and_then(g) ==
//!   o.and_then(|x| f(x).and_then(g))`
//! - Failures are invariant under `map` and `and_then`; successes are
//!   invariant under `map_err` and `or_else`.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::panic;
use std::panic::UnwindSafe;

use serde::Deserialize;
use serde::Serialize;

use crate::error::PanicPayload;
use crate::error::unwrap_failed;
use crate::iter::IntoIter;
use crate::iter::Iter;
use crate::maybe::Maybe;
use crate::trace::Trace;

/// Construct a success.
///
/// This is the primary construction entry point;
/// `Outcome::Ok(value)` is the equivalent explicit form.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Construct a failure, capturing a diagnostic call-stack snapshot.
///
/// This is the primary construction entry point;
/// `Outcome::Err(error, Trace::capture())` is the equivalent explicit
/// form.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error, Trace::capture())
}

/// The success/failure container: exactly one of a success payload or
/// a failure payload, immutable after construction.
///
/// The failure variant additionally carries a [`Trace`], a call-stack
/// snapshot taken at construction. The trace is diagnostic only: it
/// is ignored by `PartialEq`, omitted from `Debug`/`Display` and the
/// serde representation, and shared (not re-captured) by combinators
/// that pass a failure through.
///
/// Variant tests ([`is_ok`](Outcome::is_ok) /
/// [`is_err`](Outcome::is_err)) pair with exhaustive pattern matching
/// for type narrowing:
///
/// ```
/// use outcome::Outcome;
/// use outcome::ok;
///
/// let o: Outcome<i32, String> = ok(1);
/// match o {
///     Outcome::Ok(n) => assert_eq!(n, 1),
///     Outcome::Err(e, _) => panic!("unexpected failure: {e}"),
/// }
/// ```
#[derive(Clone)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a payload.
    Ok(T),
    /// The operation failed with a payload, plus the diagnostic trace
    /// captured at construction.
    Err(E, Trace),
}

impl Outcome<(), Infallible> {
    /// The empty success: bare success with no meaningful data.
    pub const EMPTY: Self = Outcome::Ok(());
}

impl Outcome<Infallible, ()> {
    /// The empty failure: bare failure with no meaningful data.
    pub const EMPTY: Self = Outcome::Err((), Trace::DISABLED);
}

impl<T, E> Outcome<T, E> {
    /// True for the success variant.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// True for the failure variant. Exactly one of `is_ok`/`is_err`
    /// holds for any container.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Return the success payload, or raise an
    /// [`UnwrapError`](crate::UnwrapError) panic whose message renders
    /// the failure payload and its trace, and whose cause is the raw
    /// failure payload.
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error, trace) => unwrap_failed(
                format!("tried to unwrap an `Err` value: {:?}\n{}", error, trace),
                Box::new(error),
            ),
        }
    }

    /// Return the failure payload, or raise an
    /// [`UnwrapError`](crate::UnwrapError) panic whose cause is the
    /// raw success payload.
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug + Send + 'static,
    {
        match self {
            Outcome::Ok(value) => unwrap_failed(
                format!("tried to unwrap_err an `Ok` value: {:?}", value),
                Box::new(value),
            ),
            Outcome::Err(error, _) => error,
        }
    }

    /// Like [`unwrap`](Outcome::unwrap), with a caller-supplied
    /// message. The failure rendering and trace are appended.
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error, trace) => unwrap_failed(
                format!("{}: {:?}\n{}", message, error, trace),
                Box::new(error),
            ),
        }
    }

    /// Like [`unwrap_err`](Outcome::unwrap_err), with a
    /// caller-supplied message used verbatim.
    pub fn expect_err(self, message: &str) -> E
    where
        T: Send + 'static,
    {
        match self {
            Outcome::Ok(value) => unwrap_failed(message.to_string(), Box::new(value)),
            Outcome::Err(error, _) => error,
        }
    }

    /// Return the success payload, or the eagerly-supplied fallback.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(..) => fallback,
        }
    }

    /// Return the success payload, or compute one from the failure
    /// payload. `f` is invoked at most once, only on failure.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error, _) => f(error),
        }
    }

    /// Transform the success payload; a failure passes through with
    /// its original payload and trace.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }

    /// Transform the failure payload; the trace is preserved, not
    /// re-captured. A success passes through untouched.
    pub fn map_err<F, G>(self, f: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error, trace) => Outcome::Err(f(error), trace),
        }
    }

    /// Collapse to a plain value: `f(payload)` on success, else the
    /// eagerly-supplied default.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(..) => default,
        }
    }

    /// Collapse to a plain value: `f(payload)` on success, else
    /// `default(failure)` (lazy).
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error, _) => default(error),
        }
    }

    /// Monadic bind: on success, `f(payload)` becomes the new
    /// container; a failure passes through and `f` is never invoked.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error, trace) => Outcome::Err(error, trace),
        }
    }

    /// Self if success, else the eagerly-supplied alternative.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(..) => other,
        }
    }

    /// Self if success, else `f(failure)` (lazy, invoked only on
    /// failure).
    pub fn or_else<F, G>(self, f: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error, _) => f(error),
        }
    }

    /// Convert to the presence/absence container: success maps to
    /// present, failure maps to absent with its detail dropped.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Some(value),
            Outcome::Err(..) => Maybe::None,
        }
    }

    /// The mirror of [`ok`](Outcome::ok): the failure payload as a
    /// presence value, dropping any success.
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(error, _) => Maybe::Some(error),
        }
    }

    /// Borrow both variants, for combinator chains that must not
    /// consume the container.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error, trace) => Outcome::Err(error, trace.clone()),
        }
    }

    /// The diagnostic trace captured when this failure was
    /// constructed. `None` for the success variant.
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(_, trace) => Some(trace),
        }
    }

    /// A fresh iterator yielding the success payload exactly once, or
    /// nothing for a failure.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Outcome::Ok(value) => Iter::new(Some(value)),
            Outcome::Err(..) => Iter::new(None),
        }
    }
}

// Collection combinators.

impl<T, E> Outcome<T, E> {
    /// Conjunctive combination of an ordered sequence.
    ///
    /// Short-circuits at the first failure and returns it unchanged
    /// (original payload and trace); elements after it are never
    /// pulled from the iterator. If nothing fails, returns a success
    /// wrapping every payload in input order. An empty sequence is a
    /// success wrapping an empty vector.
    ///
    /// ```
    /// use outcome::Outcome;
    /// use outcome::err;
    /// use outcome::ok;
    ///
    /// let combined = Outcome::all([ok::<_, String>(1), ok(2), ok(3)]);
    /// assert_eq!(combined, ok(vec![1, 2, 3]));
    ///
    /// let failed = Outcome::all([ok(1), err("x".to_string()), ok(2)]);
    /// assert_eq!(failed, err("x".to_string()));
    /// ```
    pub fn all<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let outcomes = outcomes.into_iter();
        let mut values = Vec::with_capacity(outcomes.size_hint().0);
        for outcome in outcomes {
            match outcome {
                Outcome::Ok(value) => values.push(value),
                Outcome::Err(error, trace) => return Outcome::Err(error, trace),
            }
        }
        Outcome::Ok(values)
    }

    /// Conjunctive combination of keyed entries.
    ///
    /// Unlike [`all`](Outcome::all), this does **not** short-circuit:
    /// every entry is evaluated, and if any failed the result is a
    /// failure mapping only the failed keys to their failure payloads.
    /// This asymmetry is deliberate: collecting every field error
    /// serves validation-style callers, while the sequence form serves
    /// short-circuiting pipelines.
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use outcome::Outcome;
    /// use outcome::err;
    /// use outcome::ok;
    ///
    /// let combined = Outcome::all_entries([
    ///     ("a", ok::<_, String>(1)),
    ///     ("b", ok(2)),
    /// ]);
    /// assert_eq!(combined, ok(HashMap::from([("a", 1), ("b", 2)])));
    ///
    /// let failed = Outcome::all_entries([
    ///     ("a", ok(1)),
    ///     ("b", err("bad".to_string())),
    /// ]);
    /// assert_eq!(failed, err(HashMap::from([("b", "bad".to_string())])));
    /// ```
    pub fn all_entries<K, I>(entries: I) -> Outcome<HashMap<K, T>, HashMap<K, E>>
    where
        K: Eq + Hash,
        I: IntoIterator<Item = (K, Outcome<T, E>)>,
    {
        let mut values = HashMap::new();
        let mut errors = HashMap::new();
        for (key, outcome) in entries {
            match outcome {
                Outcome::Ok(value) => {
                    values.insert(key, value);
                }
                Outcome::Err(error, _) => {
                    errors.insert(key, error);
                }
            }
        }
        if errors.is_empty() {
            Outcome::Ok(values)
        } else {
            err(errors)
        }
    }

    /// Disjunctive combination: short-circuits at the first success
    /// and returns it unchanged. If everything fails, returns a
    /// failure wrapping every failure payload in input order.
    ///
    /// ```
    /// use outcome::Outcome;
    /// use outcome::err;
    /// use outcome::ok;
    ///
    /// let first = Outcome::any([err("a"), err("b"), ok(3), err("c")]);
    /// assert_eq!(first, ok(3));
    ///
    /// let none: Outcome<i32, _> = Outcome::any([err("a"), err("b")]);
    /// assert_eq!(none, err(vec!["a", "b"]));
    /// ```
    pub fn any<I>(outcomes: I) -> Outcome<T, Vec<E>>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Ok(value) => return Outcome::Ok(value),
                Outcome::Err(error, _) => errors.push(error),
            }
        }
        err(errors)
    }

    /// Split a sequence into its success payloads and failure
    /// payloads, each in input order. Never short-circuits.
    pub fn partition<I>(outcomes: I) -> (Vec<T>, Vec<E>)
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Ok(value) => values.push(value),
                Outcome::Err(error, _) => errors.push(error),
            }
        }
        (values, errors)
    }
}

impl<T> Outcome<T, PanicPayload> {
    /// Run a closure, converting a panic into a failure.
    ///
    /// Normal completion wraps the return value as a success; a panic
    /// is captured verbatim as a [`PanicPayload`] failure, with no
    /// transformation of the raised value.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let fine = Outcome::wrap(|| 42);
    /// assert_eq!(fine.unwrap(), 42);
    ///
    /// let boom = Outcome::wrap(|| -> i32 { panic!("boom") });
    /// assert_eq!(boom.unwrap_err().message(), Some("boom"));
    /// ```
    pub fn wrap<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => Outcome::Ok(value),
            Err(payload) => Outcome::Err(PanicPayload::new(payload), Trace::capture()),
        }
    }
}

// Trait implementations. Equality, ordering of concerns: the trace
// never participates.

impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => a == b,
            (Outcome::Err(a, _), Outcome::Err(b, _)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Outcome::Err(error, _) => f.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({:?})", value),
            Outcome::Err(error, _) => write!(f, "Err({:?})", error),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self {
            Outcome::Ok(value) => IntoIter::new(Some(value)),
            Outcome::Err(..) => IntoIter::new(None),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// Serde representation: externally tagged like a plain two-variant
// enum, with the trace skipped on the way out and restored disabled on
// the way in.

#[derive(Serialize)]
#[serde(rename = "Outcome")]
enum WireRef<'a, T, E> {
    Ok(&'a T),
    Err(&'a E),
}

#[derive(Deserialize)]
#[serde(rename = "Outcome")]
enum Wire<T, E> {
    Ok(T),
    Err(E),
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let wire = match self {
            Outcome::Ok(value) => WireRef::Ok(value),
            Outcome::Err(error, _) => WireRef::Err(error),
        };
        wire.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Wire::deserialize(deserializer)? {
            Wire::Ok(value) => Ok(Outcome::Ok(value)),
            Wire::Err(error) => Ok(Outcome::Err(error, Trace::DISABLED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::AssertUnwindSafe;
    use std::panic::catch_unwind;

    use super::*;
    use crate::error::UnwrapError;

    #[test]
    fn exactly_one_variant_test_holds() {
        let success: Outcome<i32, &str> = ok(1);
        let failure: Outcome<i32, &str> = err("e");
        assert!(success.is_ok() && !success.is_err());
        assert!(failure.is_err() && !failure.is_ok());
    }

    #[test]
    fn unwrap_returns_success_payload() {
        assert_eq!(ok::<_, String>(5).unwrap(), 5);
    }

    #[test]
    fn unwrap_on_failure_carries_cause() {
        let failure: Outcome<i32, &str> = err("boom");
        let panic = catch_unwind(AssertUnwindSafe(|| failure.unwrap())).unwrap_err();
        let error = panic.downcast::<UnwrapError>().unwrap();
        assert_eq!(error.cause_ref::<&str>(), Some(&"boom"));
        assert!(error.message().contains("boom"));
    }

    #[test]
    fn unwrap_err_on_success_carries_cause() {
        let success: Outcome<i32, String> = ok(9);
        let panic = catch_unwind(AssertUnwindSafe(|| success.unwrap_err())).unwrap_err();
        let error = panic.downcast::<UnwrapError>().unwrap();
        assert_eq!(error.cause_ref::<i32>(), Some(&9));
    }

    #[test]
    fn expect_uses_caller_message() {
        let failure: Outcome<i32, &str> = err("boom");
        let panic =
            catch_unwind(AssertUnwindSafe(|| failure.expect("should have parsed"))).unwrap_err();
        let error = panic.downcast::<UnwrapError>().unwrap();
        assert!(error.message().starts_with("should have parsed"));
        assert!(error.message().contains("boom"));
    }

    #[test]
    fn expect_err_uses_caller_message_verbatim() {
        let success: Outcome<i32, &str> = ok(1);
        let panic = catch_unwind(AssertUnwindSafe(|| success.expect_err("wanted a failure")))
            .unwrap_err();
        let error = panic.downcast::<UnwrapError>().unwrap();
        assert_eq!(error.message(), "wanted a failure");
        assert_eq!(error.cause_ref::<i32>(), Some(&1));
    }

    #[test]
    fn fallbacks_are_eager_and_lazy() {
        let failure: Outcome<i32, i32> = err(3);
        assert_eq!(failure.clone().unwrap_or(7), 7);
        assert_eq!(failure.unwrap_or_else(|e| e * 2), 6);

        let invoked = Cell::new(false);
        let success: Outcome<i32, i32> = ok(1);
        assert_eq!(
            success.unwrap_or_else(|_| {
                invoked.set(true);
                0
            }),
            1
        );
        assert!(!invoked.get());
    }

    #[test]
    fn map_composes_and_preserves_failures() {
        let success: Outcome<i32, &str> = ok(2);
        assert_eq!(success.map(|n| n + 1).map(|n| n * 10), ok(30));

        let failure: Outcome<i32, &str> = err("e");
        let mapped = failure.clone().map(|n| n + 1);
        assert_eq!(mapped, err("e"));
        // The failure is passed through, not reconstructed.
        assert!(
            failure
                .trace()
                .unwrap()
                .same_capture(mapped.trace().unwrap())
        );
    }

    #[test]
    fn map_err_transforms_payload_and_keeps_trace() {
        let failure: Outcome<i32, i32> = err(4);
        let original = failure.trace().unwrap().clone();
        let mapped = failure.map_err(|e| e.to_string());
        assert_eq!(mapped, err("4".to_string()));
        assert!(original.same_capture(mapped.trace().unwrap()));
    }

    #[test]
    fn map_or_variants_collapse() {
        let success: Outcome<i32, &str> = ok(3);
        assert_eq!(success.map_or(0, |n| n * 2), 6);
        let failure: Outcome<i32, &str> = err("e");
        assert_eq!(failure.clone().map_or(0, |n| n * 2), 0);
        assert_eq!(failure.map_or_else(|e| e.len() as i32, |n| n), 1);
    }

    #[test]
    fn and_then_binds_only_on_success() {
        let success: Outcome<i32, &str> = ok(2);
        assert_eq!(success.and_then(|n| ok::<_, &str>(n * 2)), ok(4));

        let failure: Outcome<i32, &str> = err("e");
        let chained = failure.and_then(|_| -> Outcome<i32, &str> { panic!("never invoked") });
        assert_eq!(chained, err("e"));
    }

    #[test]
    fn or_and_or_else() {
        let success: Outcome<i32, &str> = ok(1);
        assert_eq!(success.clone().or(err::<i32, i32>(9)), ok(1));
        assert_eq!(success.or_else(|_| ok::<_, i32>(0)), ok(1));

        let failure: Outcome<i32, &str> = err("e");
        assert_eq!(failure.clone().or(ok::<_, i32>(5)), ok(5));
        assert_eq!(failure.or_else(|e| err::<i32, _>(e.len())), err(1));
    }

    #[test]
    fn conversion_to_maybe_drops_failure_detail() {
        assert_eq!(ok::<_, &str>(1).ok(), Maybe::Some(1));
        assert_eq!(err::<i32, _>("e").ok(), Maybe::None);
        assert_eq!(err::<i32, _>("e").err(), Maybe::Some("e"));
        assert_eq!(ok::<_, &str>(1).err(), Maybe::None);
    }

    #[test]
    fn empty_singletons() {
        assert!(Outcome::<(), Infallible>::EMPTY.is_ok());
        assert!(Outcome::<Infallible, ()>::EMPTY.is_err());
        assert!(
            !Outcome::<Infallible, ()>::EMPTY
                .trace()
                .unwrap()
                .is_captured()
        );
    }

    #[test]
    fn iteration_yields_success_payload_once() {
        let success: Outcome<i32, &str> = ok(7);
        assert_eq!(success.iter().copied().collect::<Vec<_>>(), vec![7]);
        assert_eq!(success.into_iter().collect::<Vec<_>>(), vec![7]);

        let failure: Outcome<i32, &str> = err("e");
        assert_eq!(failure.iter().count(), 0);
        // Restartable: a fresh iterator each call.
        assert_eq!(failure.iter().count(), 0);
        assert_eq!(failure.into_iter().count(), 0);
    }

    #[test]
    fn equality_ignores_trace() {
        let a: Outcome<i32, &str> = err("e");
        let b: Outcome<i32, &str> = err("e");
        assert!(!a.trace().unwrap().same_capture(b.trace().unwrap()));
        assert_eq!(a, b);
        assert_ne!(a, ok(1));
    }

    #[test]
    fn rendering() {
        assert_eq!(ok::<_, &str>(1).to_string(), "Ok(1)");
        assert_eq!(err::<i32, _>(1).to_string(), "Err(1)");
        assert_eq!(err::<i32, _>("x").to_string(), "Err(\"x\")");
        assert_eq!(format!("{:?}", ok::<_, &str>(vec![1, 2])), "Ok([1, 2])");
    }

    #[test]
    fn all_collects_in_order() {
        let combined = Outcome::all([ok::<_, &str>(1), ok(2), ok(3)]);
        assert_eq!(combined, ok(vec![1, 2, 3]));
        assert_eq!(Outcome::<i32, &str>::all([]), ok(vec![]));
    }

    #[test]
    fn all_short_circuits_at_first_failure() {
        let failed = Outcome::all([ok(1), err("x"), ok(2)]);
        assert_eq!(failed, err("x"));

        // Elements after the first failure are never pulled.
        let pulled = Cell::new(0);
        let outcomes = (0..4).map(|n| {
            pulled.set(pulled.get() + 1);
            if n == 1 { err("x") } else { ok(n) }
        });
        assert_eq!(Outcome::all(outcomes), err("x"));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn all_entries_evaluates_everything() {
        let failed = Outcome::all_entries([
            ("a", ok(1)),
            ("b", err("bad b".to_string())),
            ("c", err("bad c".to_string())),
        ]);
        assert_eq!(
            failed,
            err(HashMap::from([
                ("b", "bad b".to_string()),
                ("c", "bad c".to_string()),
            ]))
        );

        let empty: Outcome<HashMap<&str, i32>, HashMap<&str, String>> =
            Outcome::all_entries([]);
        assert_eq!(empty, ok(HashMap::new()));
    }

    #[test]
    fn any_returns_first_success() {
        assert_eq!(Outcome::any([err("a"), err("b"), ok(3), err("c")]), ok(3));
        assert_eq!(
            Outcome::<i32, &str>::any([err("a"), err("b")]),
            err(vec!["a", "b"])
        );
    }

    #[test]
    fn partition_keeps_both_orders() {
        let (values, errors) = Outcome::partition([ok(1), err("a"), ok(2), err("b")]);
        assert_eq!(values, vec![1, 2]);
        assert_eq!(errors, vec!["a", "b"]);
    }

    #[test]
    fn wrap_captures_panics_verbatim() {
        assert_eq!(Outcome::wrap(|| 42).unwrap(), 42);

        let boom = Outcome::wrap(|| -> i32 { panic!("boom") });
        assert_eq!(boom.unwrap_err().message(), Some("boom"));
    }

    #[test]
    fn serde_round_trip_skips_trace() {
        let success: Outcome<i32, String> = ok(1);
        assert_eq!(serde_json::to_string(&success).unwrap(), "{\"Ok\":1}");

        let failure: Outcome<i32, String> = err("e".to_string());
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, "{\"Err\":\"e\"}");

        let restored: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, failure);
        assert!(!restored.trace().unwrap().is_captured());
    }
}

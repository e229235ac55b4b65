/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The presence/absence container and its combinators.
//!
//! [`Maybe<T>`] mirrors [`Outcome<T, E>`](crate::Outcome) with
//! absence as the empty state: the absent variant carries no payload,
//! so there is nothing to render, convert, or collect from it.
//! Absence values are stateless and value-identical (a unit variant),
//! making every `Maybe::None` interchangeable with every other.
//!
//! # Quick Start
//!
//! ```
//! use outcome::Maybe;
//! use outcome::some;
//!
//! let found: Maybe<i32> = some(2);
//! let missing: Maybe<i32> = Maybe::None;
//!
//! assert_eq!(found.map(|n| n * 2), some(4));
//! assert_eq!(missing.or(some(7)), some(7));
//! ```

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::unwrap_failed;
use crate::iter::IntoIter;
use crate::iter::Iter;
use crate::outcome::Outcome;
use crate::outcome::err;

/// Construct a presence value.
///
/// This is the primary construction entry point;
/// `Maybe::Some(value)` is the equivalent explicit form. Absence is
/// the shared `Maybe::None` variant.
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// The presence/absence container: either a payload or nothing.
///
/// Combinators mirror [`Outcome`](crate::Outcome), with absence
/// standing in for failure. Because the absent variant has no state,
/// the lazy providers (`unwrap_or_else`, `or_else`, `map_or_else`)
/// take zero-argument closures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// A payload is present.
    Some(T),
    /// No payload. All absence values are value-identical.
    None,
}

impl Maybe<()> {
    /// The empty presence: bare presence with no meaningful data.
    pub const EMPTY: Self = Maybe::Some(());
}

impl<T> Maybe<T> {
    /// True for the present variant.
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// True for the absent variant. Exactly one of
    /// `is_some`/`is_none` holds for any container.
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Return the payload, or raise an
    /// [`UnwrapError`](crate::UnwrapError) panic. Absence has no
    /// payload, so the message is fixed and the cause is unit.
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => {
                unwrap_failed("tried to unwrap an absent value".to_string(), Box::new(()))
            }
        }
    }

    /// Like [`unwrap`](Maybe::unwrap), with a caller-supplied
    /// message used verbatim.
    pub fn expect(self, message: &str) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => unwrap_failed(message.to_string(), Box::new(())),
        }
    }

    /// Return the payload, or the eagerly-supplied fallback.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    /// Return the payload, or compute a fallback. `f` is invoked at
    /// most once, only on absence.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => f(),
        }
    }

    /// Transform the payload; absence passes through.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Collapse to a plain value: `f(payload)` when present, else the
    /// eagerly-supplied default.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => default,
        }
    }

    /// Collapse to a plain value: `f(payload)` when present, else
    /// `default()` (lazy).
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => default(),
        }
    }

    /// Monadic bind: when present, `f(payload)` becomes the new
    /// container; absence passes through and `f` is never invoked.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Self when present, else the eagerly-supplied alternative.
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => other,
        }
    }

    /// Self when present, else `f()` (lazy, invoked only on absence).
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => f(),
        }
    }

    /// Keep the payload only if it satisfies the predicate.
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) if predicate(&value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// Convert to the success/failure container, with the caller
    /// supplying the failure payload absence maps to. A fresh trace
    /// is captured for the manufactured failure.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => err(error),
        }
    }

    /// Like [`ok_or`](Maybe::ok_or), computing the failure payload
    /// lazily, only on absence.
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => err(f()),
        }
    }

    /// Borrow the payload, for chains that must not consume the
    /// container.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// A fresh iterator yielding the payload exactly once, or nothing
    /// when absent.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Maybe::Some(value) => Iter::new(Some(value)),
            Maybe::None => Iter::new(None),
        }
    }

    /// Conjunctive combination: short-circuits at the first absence;
    /// otherwise a presence wrapping every payload in input order. An
    /// empty sequence is a presence wrapping an empty vector.
    ///
    /// ```
    /// use outcome::Maybe;
    /// use outcome::some;
    ///
    /// assert_eq!(Maybe::all([some(1), some(2)]), some(vec![1, 2]));
    /// assert_eq!(Maybe::all([some(1), Maybe::None]), Maybe::None);
    /// ```
    pub fn all<I>(maybes: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        let maybes = maybes.into_iter();
        let mut values = Vec::with_capacity(maybes.size_hint().0);
        for maybe in maybes {
            match maybe {
                Maybe::Some(value) => values.push(value),
                Maybe::None => return Maybe::None,
            }
        }
        Maybe::Some(values)
    }

    /// Disjunctive combination: short-circuits at the first presence
    /// and returns it unchanged; absent if everything is absent.
    pub fn any<I>(maybes: I) -> Maybe<T>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        for maybe in maybes {
            if maybe.is_some() {
                return maybe;
            }
        }
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// Rust has a single absence sentinel, so the conversion is
    /// total: `None` maps to absent, everything else to present.
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(value) => write!(f, "Some({:?})", value),
            Maybe::None => write!(f, "None"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self {
            Maybe::Some(value) => IntoIter::new(Some(value)),
            Maybe::None => IntoIter::new(None),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

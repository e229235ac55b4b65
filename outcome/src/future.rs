/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Async wrappers deferring combinator application until a pending
//! container settles.
//!
//! [`AsyncOutcome`] and [`AsyncMaybe`] each hold exactly one pending
//! computation of the corresponding container and expose the same
//! combinator vocabulary. Combinator calls are synchronous: each
//! returns a new wrapper whose pending computation chains on the old
//! one; only the final `.await` suspends the caller. Within one
//! chain, each step settles fully (including any future its mapper
//! returned) before the next step's mapper runs.
//!
//! Combinator arguments that may be "plain, pending, or wrapper" are
//! normalized through [`IntoAsyncOutcome`] / [`IntoAsyncMaybe`],
//! implemented for the synchronous container, the wrapper itself, and
//! a boxed future of the container (use
//! [`FutureExt::boxed`](futures::FutureExt::boxed) on an arbitrary
//! future).
//!
//! ```
//! use outcome::ok;
//!
//! # tokio_test::block_on(async {
//! let doubled = ok::<_, String>(1)
//!     .into_async()
//!     .and_then(|n| ok(n * 2))
//!     .await;
//! assert_eq!(doubled, ok(2));
//! # })
//! ```

use std::fmt;
use std::future::Future;
use std::future::IntoFuture;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::panic::UnwindSafe;

use futures::FutureExt;
use futures::future;
use futures::future::BoxFuture;

use crate::error::PanicPayload;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::trace::Trace;

/// A pending [`Outcome`]: one deferred computation, settled at most
/// once, awaitable to the synchronous container.
pub struct AsyncOutcome<T, E> {
    future: BoxFuture<'static, Outcome<T, E>>,
}

/// A pending [`Maybe`]: one deferred computation, settled at most
/// once, awaitable to the synchronous container.
pub struct AsyncMaybe<T> {
    future: BoxFuture<'static, Maybe<T>>,
}

/// Normalization of the input shapes accepted by [`AsyncOutcome`]
/// combinators: a settled container, another wrapper, or a boxed
/// future of a container.
pub trait IntoAsyncOutcome<T, E> {
    /// Convert into the async wrapper.
    fn into_async_outcome(self) -> AsyncOutcome<T, E>;
}

/// Normalization of the input shapes accepted by [`AsyncMaybe`]
/// combinators.
pub trait IntoAsyncMaybe<T> {
    /// Convert into the async wrapper.
    fn into_async_maybe(self) -> AsyncMaybe<T>;
}

impl<T: Send + 'static, E: Send + 'static> IntoAsyncOutcome<T, E> for Outcome<T, E> {
    fn into_async_outcome(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::settled(self)
    }
}

impl<T, E> IntoAsyncOutcome<T, E> for AsyncOutcome<T, E> {
    fn into_async_outcome(self) -> AsyncOutcome<T, E> {
        self
    }
}

impl<T, E> IntoAsyncOutcome<T, E> for BoxFuture<'static, Outcome<T, E>> {
    fn into_async_outcome(self) -> AsyncOutcome<T, E> {
        AsyncOutcome { future: self }
    }
}

impl<T: Send + 'static> IntoAsyncMaybe<T> for Maybe<T> {
    fn into_async_maybe(self) -> AsyncMaybe<T> {
        AsyncMaybe::settled(self)
    }
}

impl<T> IntoAsyncMaybe<T> for AsyncMaybe<T> {
    fn into_async_maybe(self) -> AsyncMaybe<T> {
        self
    }
}

impl<T> IntoAsyncMaybe<T> for BoxFuture<'static, Maybe<T>> {
    fn into_async_maybe(self) -> AsyncMaybe<T> {
        AsyncMaybe { future: self }
    }
}

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Wrap a pending computation of a container.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Wrap an already-settled container.
    pub fn settled(outcome: Outcome<T, E>) -> Self {
        Self::new(future::ready(outcome))
    }

    /// Transform the eventual success payload; a failure passes
    /// through untouched. For an asynchronous transform, see
    /// [`map_async`](AsyncOutcome::map_async).
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOutcome::new(async move { self.future.await.map(f) })
    }

    /// Transform the eventual success payload with an asynchronous
    /// mapper; its future settles before the wrapper does.
    pub fn map_async<U, Fut, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => Outcome::Ok(f(value).await),
                Outcome::Err(error, trace) => Outcome::Err(error, trace),
            }
        })
    }

    /// Transform the eventual failure payload; a success passes
    /// through untouched.
    pub fn map_err<F, G>(self, f: G) -> AsyncOutcome<T, F>
    where
        F: Send + 'static,
        G: FnOnce(E) -> F + Send + 'static,
    {
        AsyncOutcome::new(async move { self.future.await.map_err(f) })
    }

    /// Transform the eventual failure payload with an asynchronous
    /// mapper.
    pub fn map_err_async<F, Fut, G>(self, f: G) -> AsyncOutcome<T, F>
    where
        F: Send + 'static,
        Fut: Future<Output = F> + Send + 'static,
        G: FnOnce(E) -> Fut + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error, trace) => Outcome::Err(f(error).await, trace),
            }
        })
    }

    /// Monadic bind over the pending container: once it settles, a
    /// success runs the mapper and the mapper's (normalized) result
    /// becomes the new pending computation; a failure passes through
    /// untouched and the mapper is never invoked.
    pub fn and_then<U, R, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        R: IntoAsyncOutcome<U, E>,
        F: FnOnce(T) -> R + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => {
                    let next = f(value).into_async_outcome();
                    next.await
                }
                Outcome::Err(error, trace) => Outcome::Err(error, trace),
            }
        })
    }

    /// The eventual self if success, else the eagerly-supplied
    /// alternative (any accepted shape).
    pub fn or<F, R>(self, other: R) -> AsyncOutcome<T, F>
    where
        F: Send + 'static,
        R: IntoAsyncOutcome<T, F> + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(..) => other.into_async_outcome().await,
            }
        })
    }

    /// The eventual self if success, else `f(failure)` (lazy, any
    /// accepted shape).
    pub fn or_else<F, R, G>(self, f: G) -> AsyncOutcome<T, F>
    where
        F: Send + 'static,
        R: IntoAsyncOutcome<T, F>,
        G: FnOnce(E) -> R + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error, _) => {
                    let next = f(error).into_async_outcome();
                    next.await
                }
            }
        })
    }

    /// Convert to a pending presence/absence container: the eventual
    /// success maps to present, the eventual failure to absent.
    pub fn ok(self) -> AsyncMaybe<T> {
        AsyncMaybe::new(async move { self.future.await.ok() })
    }
}

impl<T: Send + 'static> AsyncMaybe<T> {
    /// Wrap a pending computation of a container.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Maybe<T>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Wrap an already-settled container.
    pub fn settled(maybe: Maybe<T>) -> Self {
        Self::new(future::ready(maybe))
    }

    /// Transform the eventual payload; absence passes through.
    pub fn map<U, F>(self, f: F) -> AsyncMaybe<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncMaybe::new(async move { self.future.await.map(f) })
    }

    /// Transform the eventual payload with an asynchronous mapper.
    pub fn map_async<U, Fut, F>(self, f: F) -> AsyncMaybe<U>
    where
        U: Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
    {
        AsyncMaybe::new(async move {
            match self.future.await {
                Maybe::Some(value) => Maybe::Some(f(value).await),
                Maybe::None => Maybe::None,
            }
        })
    }

    /// Monadic bind over the pending container; absence passes
    /// through and the mapper is never invoked.
    pub fn and_then<U, R, F>(self, f: F) -> AsyncMaybe<U>
    where
        U: Send + 'static,
        R: IntoAsyncMaybe<U>,
        F: FnOnce(T) -> R + Send + 'static,
    {
        AsyncMaybe::new(async move {
            match self.future.await {
                Maybe::Some(value) => {
                    let next = f(value).into_async_maybe();
                    next.await
                }
                Maybe::None => Maybe::None,
            }
        })
    }

    /// The eventual self when present, else the eagerly-supplied
    /// alternative (any accepted shape).
    pub fn or<R>(self, other: R) -> AsyncMaybe<T>
    where
        R: IntoAsyncMaybe<T> + Send + 'static,
    {
        AsyncMaybe::new(async move {
            match self.future.await {
                Maybe::Some(value) => Maybe::Some(value),
                Maybe::None => other.into_async_maybe().await,
            }
        })
    }

    /// The eventual self when present, else `f()` (lazy, any accepted
    /// shape).
    pub fn or_else<R, F>(self, f: F) -> AsyncMaybe<T>
    where
        R: IntoAsyncMaybe<T>,
        F: FnOnce() -> R + Send + 'static,
    {
        AsyncMaybe::new(async move {
            match self.future.await {
                Maybe::Some(value) => Maybe::Some(value),
                Maybe::None => {
                    let next = f().into_async_maybe();
                    next.await
                }
            }
        })
    }

    /// Convert to a pending success/failure container, with the
    /// caller supplying the failure payload absence maps to.
    pub fn ok_or<E>(self, error: E) -> AsyncOutcome<T, E>
    where
        E: Send + 'static,
    {
        AsyncOutcome::new(async move { self.future.await.ok_or(error) })
    }
}

impl<T: Send + 'static, E: Send + 'static> Outcome<T, E> {
    /// Wrap self in the async wrapper, pending computation already
    /// settled.
    pub fn into_async(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::settled(self)
    }
}

impl<T: Send + 'static> Maybe<T> {
    /// Wrap self in the async wrapper, pending computation already
    /// settled.
    pub fn into_async(self) -> AsyncMaybe<T> {
        AsyncMaybe::settled(self)
    }
}

impl<T: Send + 'static> Outcome<T, PanicPayload> {
    /// Run a closure producing a future, converting a panic anywhere
    /// into an eventual failure.
    ///
    /// A panic while invoking `f` (before any future exists) and a
    /// panic inside the returned future are captured identically, as
    /// [`PanicPayload`] failures. Normal completion wraps the
    /// future's output as a success.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let fine = Outcome::wrap_async(|| async { 42 }).await;
    /// assert_eq!(fine.unwrap(), 42);
    ///
    /// let boom = Outcome::wrap_async(|| async { panic!("boom") }).await;
    /// assert_eq!(boom.unwrap_err().message(), Some("boom"));
    /// # })
    /// ```
    pub fn wrap_async<F, Fut>(f: F) -> AsyncOutcome<T, PanicPayload>
    where
        F: FnOnce() -> Fut + UnwindSafe,
        Fut: Future<Output = T> + Send + 'static,
    {
        match panic::catch_unwind(f) {
            Ok(fut) => AsyncOutcome::new(async move {
                match AssertUnwindSafe(fut).catch_unwind().await {
                    Ok(value) => Outcome::Ok(value),
                    Err(payload) => Outcome::Err(PanicPayload::new(payload), Trace::capture()),
                }
            }),
            Err(payload) => {
                AsyncOutcome::settled(Outcome::Err(PanicPayload::new(payload), Trace::capture()))
            }
        }
    }
}

impl<T: Send + 'static, E: Send + 'static> From<Outcome<T, E>> for AsyncOutcome<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        AsyncOutcome::settled(outcome)
    }
}

impl<T: Send + 'static> From<Maybe<T>> for AsyncMaybe<T> {
    fn from(maybe: Maybe<T>) -> Self {
        AsyncMaybe::settled(maybe)
    }
}

impl<T, E> IntoFuture for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;
    type IntoFuture = BoxFuture<'static, Outcome<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.future
    }
}

impl<T> IntoFuture for AsyncMaybe<T> {
    type Output = Maybe<T>;
    type IntoFuture = BoxFuture<'static, Maybe<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.future
    }
}

impl<T, E> fmt::Debug for AsyncOutcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsyncOutcome(<pending>)")
    }
}

impl<T> fmt::Debug for AsyncMaybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsyncMaybe(<pending>)")
    }
}

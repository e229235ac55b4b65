/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Algebraic containers for fallible and optional values.
//!
//! This crate provides two closed two-variant containers and a
//! combinator surface over them, so that "may fail" and "may be
//! absent" outcomes travel as ordinary values instead of panics or
//! sentinel values:
//!
//! - [`Outcome<T, E>`]: a success payload or a failure payload. The
//!   failure additionally carries a diagnostic call-stack snapshot
//!   ([`Trace`]) captured at construction.
//! - [`Maybe<T>`]: a payload or nothing. Absence is stateless and
//!   value-identical.
//!
//! # Quick Start
//!
//! ```
//! use outcome::Outcome;
//! use outcome::err;
//! use outcome::ok;
//!
//! fn checked_div(n: i32, d: i32) -> Outcome<i32, String> {
//!     if d == 0 {
//!         err("division by zero".to_string())
//!     } else {
//!         ok(n / d)
//!     }
//! }
//!
//! let quotient = checked_div(10, 2).map(|q| q + 1);
//! assert_eq!(quotient, ok(6));
//!
//! let failed = checked_div(1, 0);
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```
//!
//! # Core Concepts
//!
//! - **Failures are data.** Combinator chains (`map`, `and_then`,
//!   `or_else`, ...) propagate the failure/absent variant by value;
//!   nothing is raised. Only the unwrap/expect family converts a
//!   failure into a panic ([`UnwrapError`]), on demand, at the point
//!   the caller chooses to assume success.
//!
//! - **Collection combinators.** [`Outcome::all`] (short-circuiting,
//!   first failure wins), [`Outcome::all_entries`] (keyed,
//!   collects every failure), [`Outcome::any`] (first success wins),
//!   and [`Outcome::partition`] combine many containers into one.
//!   Evaluation is sequential in input order; output order matches
//!   input order.
//!
//! - **Async wrappers.** [`AsyncOutcome`] and [`AsyncMaybe`] hold a
//!   single pending computation of a container and defer the same
//!   combinator vocabulary until it settles; only the final `.await`
//!   suspends.
//!
//! - **Panic capture at the boundary.** [`Outcome::wrap`] and
//!   [`Outcome::wrap_async`] run caller code and capture a panic
//!   verbatim as a [`PanicPayload`] failure.
//!
//! # Laws
//!
//! The combinators satisfy the functor and monad laws (see
//! `tests/laws.rs` for the property-based verification):
//!
//! ```
//! use outcome::Outcome;
//! use outcome::ok;
//!
//! let o: Outcome<i32, String> = ok(2);
//! let f = |n: i32| n + 3;
//! let g = |n: i32| n * 2;
//! assert_eq!(o.clone().map(f).map(g), o.map(|x| g(f(x))));
//! ```

mod error;
mod future;
mod iter;
mod maybe;
mod outcome;
mod trace;

pub use error::PanicPayload;
pub use error::UnwrapError;
pub use future::AsyncMaybe;
pub use future::AsyncOutcome;
pub use future::IntoAsyncMaybe;
pub use future::IntoAsyncOutcome;
pub use iter::IntoIter;
pub use iter::Iter;
pub use maybe::Maybe;
pub use maybe::some;
pub use outcome::Outcome;
pub use outcome::err;
pub use outcome::ok;
pub use trace::Trace;

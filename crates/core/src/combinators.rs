//! Synchronous combinators over [`Outcome`].
//!
//! Every combinator short-circuits on failure: once an outcome has failed,
//! later steps are skipped without calling user code and the original error
//! flows through unchanged. Only [`Outcome::match_with`] looks at both sides.

use crate::error::Error;
use crate::outcome::Outcome;

impl<T> Outcome<T> {
    /// Transform the value with an infallible function.
    pub fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_result() {
            Ok(value) => Outcome::success_with(transform(value)),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Chain a step that may itself fail.
    ///
    /// The outcome returned by `transform` is passed through as-is, so there
    /// is never an `Outcome<Outcome<U>>`.
    pub fn bind<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.into_result() {
            Ok(value) => transform(value),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Run `action` for its side effect on success; return `self` unchanged.
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.value() {
            action(value);
        }
        self
    }

    /// Turn a failed check on the value into a failure carrying `error`.
    ///
    /// A failed outcome is returned untouched and `predicate` is not called.
    pub fn ensure<F>(self, predicate: F, error: Error) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        let rejected = self.value().is_some_and(|value| !predicate(value));
        if rejected {
            tracing::trace!(target: "outcome_core", code = error.code(), "ensure rejected value");
            return Outcome::failure(error);
        }
        self
    }

    /// Consume the outcome into a plain value, calling exactly one branch.
    pub fn match_with<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Error) -> U,
    {
        match self.into_result() {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}

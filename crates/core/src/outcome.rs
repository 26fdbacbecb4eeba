//! The success/failure value returned in place of raising an error.

use thiserror::Error as ThisError;

use crate::error::Error;

/// Raised by [`Outcome::try_failure`] when the failure would be meaningless.
#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum PreconditionError {
    /// The "no error" sentinel cannot describe a failure.
    #[error("cannot build a failed outcome from the `Error::NONE` sentinel")]
    NoneSentinelAsFailure,
}

#[derive(Debug, Clone, PartialEq)]
enum State<T> {
    Success(T),
    Failure(Error),
}

/// Either a success carrying a `T`, or a failure carrying an [`Error`].
///
/// `Outcome` (with the default `T = ()`) is the value-less form: it only
/// signals success or failure.
///
/// Exactly one side holds at any time, so a successful outcome always has a
/// value and reports [`Error::NONE`] as its error, and a failed one never has
/// a value. Outcomes are immutable; every combinator consumes `self` and
/// returns a new outcome.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "an outcome may be a failure that should be handled"]
pub struct Outcome<T = ()> {
    state: State<T>,
}

impl Outcome<()> {
    /// A value-less success.
    pub fn success() -> Self {
        Self::success_with(())
    }
}

impl<T> Outcome<T> {
    /// A success carrying `value`.
    pub fn success_with(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Alias of [`Outcome::success_with`] named for symmetry with [`Outcome::from_error`].
    pub fn from_value(value: T) -> Self {
        Self::success_with(value)
    }

    /// A failure carrying `error`.
    ///
    /// # Panics
    ///
    /// Panics if `error` is the [`Error::NONE`] sentinel. Building a failure
    /// from "no error" is a programmer error; use [`Outcome::try_failure`]
    /// when the error comes from untrusted input.
    pub fn failure(error: Error) -> Self {
        assert!(
            !error.is_none(),
            "Outcome::failure called with the `Error::NONE` sentinel"
        );
        Self {
            state: State::Failure(error),
        }
    }

    /// Checked form of [`Outcome::failure`].
    pub fn try_failure(error: Error) -> Result<Self, PreconditionError> {
        if error.is_none() {
            return Err(PreconditionError::NoneSentinelAsFailure);
        }
        Ok(Self {
            state: State::Failure(error),
        })
    }

    /// Alias of [`Outcome::failure`].
    pub fn from_error(error: Error) -> Self {
        Self::failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value, or `None` when failed.
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// The failure, or [`Error::NONE`] when successful.
    pub fn error(&self) -> &Error {
        match &self.state {
            State::Success(_) => Error::none(),
            State::Failure(error) => error,
        }
    }

    pub fn into_error(self) -> Error {
        match self.state {
            State::Success(_) => Error::NONE,
            State::Failure(error) => error,
        }
    }

    /// Split into `(is_success, value, error)`.
    ///
    /// The error slot holds [`Error::NONE`] on success.
    pub fn into_parts(self) -> (bool, Option<T>, Error) {
        match self.state {
            State::Success(value) => (true, Some(value), Error::NONE),
            State::Failure(error) => (false, None, error),
        }
    }

    pub fn as_result(&self) -> Result<&T, &Error> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }

    /// Convert into a std `Result` so `?` can be used at the boundary.
    pub fn into_result(self) -> Result<T, Error> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success_with(value),
            Err(error) => Self::failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Lift any value into a successful [`Outcome`].
///
/// Stands in for an implicit `T -> Outcome<T>` conversion, which cannot
/// coexist with `From<Error>` as a blanket `From` impl. [`Error`] has an
/// inherent `into_outcome` that yields a failure instead, so method-call
/// syntax keeps the same branch as `From<Error>`.
pub trait IntoOutcome: Sized {
    fn into_outcome(self) -> Outcome<Self> {
        Outcome::success_with(self)
    }
}

impl<T> IntoOutcome for T {}

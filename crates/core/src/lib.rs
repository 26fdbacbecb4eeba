//! `outcome-core`: failures as values.
//!
//! An [`Outcome`] is either a success (optionally carrying a value) or a
//! failure carrying a structured [`Error`]. Code that can fail in expected
//! ways returns an `Outcome` instead of panicking, and callers compose the
//! result with [`map`](Outcome::map), [`bind`](Outcome::bind),
//! [`tap`](Outcome::tap), [`ensure`](Outcome::ensure) and finally
//! [`match_with`](Outcome::match_with). The [`future`] module lifts the same
//! vocabulary over pending computations.

pub mod combinators;
pub mod error;
pub mod error_type;
pub mod factory;
pub mod future;
pub mod maybe;
pub mod outcome;
pub mod value_object;

pub use error::{Error, Metadata};
pub use error_type::{ErrorType, UnknownErrorType};
pub use factory::{fail, fail_with_type, ok, ok_value};
pub use future::OutcomeFutureExt;
pub use maybe::Maybe;
pub use outcome::{IntoOutcome, Outcome, PreconditionError};
pub use value_object::ValueObject;

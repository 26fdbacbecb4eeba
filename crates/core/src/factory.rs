//! Short constructors for the common cases.
//!
//! ```ignore
//! use outcome_core::{ErrorType, Outcome};
//! use outcome_core::factory::{fail_with_type, ok_value};
//!
//! fn find(id: u32) -> Outcome<User> {
//!     match USERS.get(&id) {
//!         Some(user) => ok_value(user.clone()),
//!         None => fail_with_type("user.not_found", "no such user", ErrorType::NotFound),
//!     }
//! }
//! ```

use std::borrow::Cow;

use crate::error::Error;
use crate::error_type::ErrorType;
use crate::outcome::Outcome;

/// Value-less success.
pub fn ok() -> Outcome {
    Outcome::success()
}

/// Success carrying `value`.
pub fn ok_value<T>(value: T) -> Outcome<T> {
    Outcome::success_with(value)
}

/// Failure with an unclassified error.
pub fn fail<T>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> Outcome<T> {
    fail_with_type(code, message, ErrorType::Failure)
}

/// Failure with an error of the given classification.
pub fn fail_with_type<T>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
    kind: ErrorType,
) -> Outcome<T> {
    Outcome::failure(Error::new(code, message).with_type(kind))
}

//! Value object marker: immutable, compared by value, cheap to share.

use crate::error::Error;
use crate::error_type::ErrorType;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Marker for the crate's value types.
///
/// Two instances with the same contents are interchangeable. None of these
/// types exposes a mutating method, so they can be read from any number of
/// threads without synchronisation whenever their payload is `Send + Sync`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for ErrorType {}
impl ValueObject for Error {}
impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for Maybe<T> {}
impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for Outcome<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_value_object<V: ValueObject>() {}
    fn assert_shareable<V: Send + Sync>() {}

    #[test]
    fn crate_types_are_value_objects() {
        assert_value_object::<ErrorType>();
        assert_value_object::<Error>();
        assert_value_object::<Maybe<String>>();
        assert_value_object::<Outcome<Vec<u8>>>();
        assert_value_object::<Outcome>();
    }

    #[test]
    fn crate_types_are_thread_safe() {
        assert_shareable::<Error>();
        assert_shareable::<Outcome<String>>();
        assert_shareable::<Maybe<String>>();
    }

    #[test]
    fn clones_compare_equal() {
        let error = Error::conflict("c", "m").with_inner_error(Error::new("i", "i"));
        let outcome: Outcome<u8> = error.clone().into();
        assert_eq!(outcome.clone(), outcome);
        assert_eq!(error.clone(), error);
    }
}

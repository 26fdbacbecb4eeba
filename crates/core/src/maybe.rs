//! Optional value that is absent without that absence being an error.

use serde::{Deserialize, Serialize};

/// A value that may or may not be present.
///
/// Unlike [`Outcome`](crate::Outcome), an empty `Maybe` carries no error:
/// absence is a legitimate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    pub const fn none() -> Self {
        Self(None)
    }

    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

/// `None` becomes an empty `Maybe`, `Some(v)` a populated one.
impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        let empty = Maybe::<String>::none();
        assert!(!empty.has_value());
        assert_eq!(empty.value(), None);
        assert_eq!(Maybe::<String>::default(), empty);
    }

    #[test]
    fn from_option() {
        let present = Maybe::from(Some(3));
        assert!(present.has_value());
        assert_eq!(present.value(), Some(&3));

        let absent: Maybe<i32> = None.into();
        assert!(!absent.has_value());
    }

    #[test]
    fn falsy_values_still_count_as_present() {
        assert!(Maybe::some(0).has_value());
        assert!(Maybe::some(String::new()).has_value());
        assert!(Maybe::some(false).has_value());
    }

    #[test]
    fn serializes_as_nullable_value() {
        assert_eq!(serde_json::to_string(&Maybe::some(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), "null");

        let back: Maybe<i32> = serde_json::from_str("null").unwrap();
        assert!(!back.has_value());
    }
}

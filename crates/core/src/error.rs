//! Structured failure description carried by a failed [`Outcome`](crate::Outcome).

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error_type::ErrorType;
use crate::outcome::Outcome;

/// Free-form metadata attached to an [`Error`].
pub type Metadata = BTreeMap<String, JsonValue>;

/// Sentinel backing [`Error::none`].
static NONE_SENTINEL: Error = Error::NONE;

/// Immutable description of an expected failure.
///
/// `code` is meant for machines (stable identifiers such as `"user.not_found"`),
/// `message` for humans. Both are always present; empty strings are allowed.
///
/// Errors are plain values: compared structurally, cloned freely and never
/// mutated once built. The `with_*` builders consume and return `self`, so
/// an error is assembled in one expression at the failure site.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("{code} ({kind:?}): {message}")]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,

    #[serde(rename = "type", default)]
    kind: ErrorType,

    /// Logical area the failure belongs to (e.g. `"billing"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    domain: Option<String>,

    /// Nested causes, in the order they were supplied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    inner_errors: Vec<Error>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
}

impl Error {
    /// The "no error" sentinel held by successful outcomes.
    ///
    /// It is never a real failure: [`Outcome::failure`](crate::Outcome::failure)
    /// refuses it. Recognition is structural, so an error built or
    /// deserialized with code `"None"`, message `"No error"`, type `Failure`
    /// and no other fields *is* the sentinel. Treat that pair as reserved.
    pub const NONE: Error = Error {
        code: Cow::Borrowed("None"),
        message: Cow::Borrowed("No error"),
        kind: ErrorType::Failure,
        domain: None,
        inner_errors: Vec::new(),
        metadata: None,
    };

    /// Create an unclassified ([`ErrorType::Failure`]) error.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: ErrorType::Failure,
            domain: None,
            inner_errors: Vec::new(),
            metadata: None,
        }
    }

    /// Shared reference to [`Error::NONE`].
    pub fn none() -> &'static Error {
        &NONE_SENTINEL
    }

    pub fn not_found(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_type(ErrorType::NotFound)
    }

    pub fn validation(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_type(ErrorType::Validation)
    }

    pub fn conflict(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_type(ErrorType::Conflict)
    }

    pub fn unauthorized(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_type(ErrorType::Unauthorized)
    }

    pub fn forbidden(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_type(ErrorType::Forbidden)
    }

    pub fn precondition_failed(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_type(ErrorType::PreconditionFailed)
    }

    pub fn with_type(mut self, kind: ErrorType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Replace the nested causes.
    pub fn with_inner_errors(mut self, inner: impl IntoIterator<Item = Error>) -> Self {
        self.inner_errors = inner.into_iter().collect();
        self
    }

    /// Append one nested cause.
    pub fn with_inner_error(mut self, inner: Error) -> Self {
        self.inner_errors.push(inner);
        self
    }

    /// Replace the whole metadata map.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Insert a single metadata entry, creating the map if needed.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorType {
        self.kind
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn inner_errors(&self) -> &[Error] {
        &self.inner_errors
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Look up one metadata entry.
    pub fn meta(&self, key: &str) -> Option<&JsonValue> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }

    /// `true` if this is (structurally) the [`Error::NONE`] sentinel.
    pub fn is_none(&self) -> bool {
        *self == Error::NONE
    }

    /// Lift into a failed [`Outcome`], the same branch `From<Error>` picks.
    ///
    /// Shadows [`IntoOutcome::into_outcome`](crate::IntoOutcome::into_outcome),
    /// which would otherwise wrap the error as a success value.
    pub fn into_outcome<T>(self) -> Outcome<T> {
        Outcome::failure(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn simple_error_has_defaults() {
        let error = Error::new("code", "description");

        assert_eq!(error.code(), "code");
        assert_eq!(error.message(), "description");
        assert_eq!(error.kind(), ErrorType::Failure);
        assert_eq!(error.domain(), None);
        assert!(error.inner_errors().is_empty());
        assert!(error.metadata().is_none());
        assert!(!error.is_none());
    }

    #[test]
    fn inner_errors_keep_their_order() {
        let error = Error::new("code", "description")
            .with_domain("domain")
            .with_inner_errors([
                Error::new("code_1", "description_1"),
                Error::new("code_2", "description_2"),
            ]);

        assert_eq!(error.code(), "code");
        assert_eq!(error.message(), "description");
        assert_eq!(error.domain(), Some("domain"));
        assert_eq!(error.inner_errors().len(), 2);
        assert_eq!(error.inner_errors()[0].code(), "code_1");
        assert_eq!(error.inner_errors()[1].code(), "code_2");
        assert_eq!(error.inner_errors()[0].message(), "description_1");
        assert_eq!(error.inner_errors()[1].message(), "description_2");
    }

    #[test]
    fn with_inner_error_appends() {
        let error = Error::new("outer", "outer")
            .with_inner_error(Error::new("a", "a"))
            .with_inner_error(Error::new("b", "b"));

        let codes: Vec<_> = error.inner_errors().iter().map(Error::code).collect();
        assert_eq!(codes, ["a", "b"]);
    }

    #[test]
    fn metadata_entries_are_readable() {
        let error = Error::validation("user.email", "email is malformed")
            .with_meta("field", "email")
            .with_meta("max_len", 254);

        assert_eq!(error.kind(), ErrorType::Validation);
        assert_eq!(error.meta("field"), Some(&json!("email")));
        assert_eq!(error.meta("max_len"), Some(&json!(254)));
        assert_eq!(error.meta("missing"), None);
        assert_eq!(error.metadata().map(|m| m.len()), Some(2));
    }

    #[test]
    fn classified_constructors_set_type() {
        assert_eq!(Error::not_found("c", "m").kind(), ErrorType::NotFound);
        assert_eq!(Error::validation("c", "m").kind(), ErrorType::Validation);
        assert_eq!(Error::conflict("c", "m").kind(), ErrorType::Conflict);
        assert_eq!(Error::unauthorized("c", "m").kind(), ErrorType::Unauthorized);
        assert_eq!(Error::forbidden("c", "m").kind(), ErrorType::Forbidden);
        assert_eq!(
            Error::precondition_failed("c", "m").kind(),
            ErrorType::PreconditionFailed
        );
    }

    #[test]
    fn equality_is_structural() {
        let a = Error::conflict("stale", "version mismatch").with_meta("expected", 3);
        let b = Error::conflict("stale", "version mismatch").with_meta("expected", 3);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_meta("expected", 4));
    }

    #[test]
    fn none_sentinel_is_recognised() {
        assert!(Error::NONE.is_none());
        assert!(Error::none().is_none());
        assert_eq!(Error::none().code(), "None");
        assert_eq!(Error::none().message(), "No error");
        assert!(Error::new("None", "No error").is_none());
        assert!(!Error::new("None", "No error").with_domain("x").is_none());
    }

    #[test]
    fn display_includes_code_type_and_message() {
        let error = Error::not_found("user.missing", "no such user");
        assert_eq!(error.to_string(), "user.missing (NotFound): no such user");
    }

    #[test]
    fn empty_strings_are_allowed() {
        let error = Error::new("", "");
        assert_eq!(error.code(), "");
        assert_eq!(error.message(), "");
    }

    #[test]
    fn serializes_without_empty_optionals() {
        let error = Error::forbidden("acl", "denied");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(
            value,
            json!({ "code": "acl", "message": "denied", "type": "forbidden" })
        );

        let back: Error = serde_json::from_value(value).unwrap();
        assert_eq!(back, error);
    }
}

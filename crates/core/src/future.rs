//! Combinators over pending computations that resolve to an [`Outcome`].
//!
//! Each adapter awaits its input, then applies the synchronous semantics from
//! [`crate::combinators`]. Steps run strictly in sequence: a continuation is
//! never started before the computation it depends on has settled.
//!
//! Nothing here spawns tasks or adds timeouts. Dropping an adapter drops the
//! computation it is awaiting, so cancellation behaves exactly like the
//! underlying future's.
//!
//! The free functions are the primitives; [`OutcomeFutureExt`] exposes the
//! same operations in method position for chaining:
//!
//! ```ignore
//! let name = load_user(id)
//!     .ensure_outcome(|u| u.active, Error::forbidden("user.inactive", "user is inactive"))
//!     .bind_outcome(|u| load_profile(u.id))
//!     .map_outcome(|p| p.display_name)
//!     .await;
//! ```

use core::future::Future;

use crate::error::Error;
use crate::outcome::Outcome;

fn trace_short_circuit(step: &'static str, error: &Error) {
    tracing::trace!(
        target: "outcome_core",
        step,
        code = error.code(),
        "short-circuit on failed outcome"
    );
}

/// Await `pending`, then [`Outcome::map`].
pub async fn map<T, U, Fut, F>(pending: Fut, transform: F) -> Outcome<U>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    match pending.await.into_result() {
        Ok(value) => Outcome::success_with(transform(value)),
        Err(error) => {
            trace_short_circuit("map", &error);
            Outcome::failure(error)
        }
    }
}

/// Await `pending`, then await the computation `transform` starts from its value.
pub async fn bind<T, U, Fut, F, Next>(pending: Fut, transform: F) -> Outcome<U>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Next,
    Next: Future<Output = Outcome<U>>,
{
    match pending.await.into_result() {
        Ok(value) => transform(value).await,
        Err(error) => {
            trace_short_circuit("bind", &error);
            Outcome::failure(error)
        }
    }
}

/// Await `pending`, then [`Outcome::tap`].
pub async fn tap<T, Fut, F>(pending: Fut, action: F) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(&T),
{
    pending.await.tap(action)
}

/// Await `pending`, then await the side effect `action` starts from its value.
///
/// The original outcome is returned unchanged once the effect completes.
pub async fn tap_async<T, Fut, F, Effect>(pending: Fut, action: F) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(&T) -> Effect,
    Effect: Future<Output = ()>,
{
    let outcome = pending.await;
    if let Some(value) = outcome.value() {
        action(value).await;
    }
    outcome
}

/// Await `pending`, then [`Outcome::ensure`].
pub async fn ensure<T, Fut, F>(pending: Fut, predicate: F, error: Error) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(&T) -> bool,
{
    pending.await.ensure(predicate, error)
}

/// Await `pending`, then [`Outcome::match_with`].
pub async fn match_with<T, U, Fut, S, F>(pending: Fut, on_success: S, on_failure: F) -> U
where
    Fut: Future<Output = Outcome<T>>,
    S: FnOnce(T) -> U,
    F: FnOnce(Error) -> U,
{
    pending.await.match_with(on_success, on_failure)
}

/// Method-position access to the adapters in this module.
///
/// Implemented for every future whose output is an [`Outcome`].
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    fn map_outcome<U, F>(self, transform: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        map(self, transform)
    }

    fn bind_outcome<U, F, Next>(self, transform: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Next,
        Next: Future<Output = Outcome<U>>,
    {
        bind(self, transform)
    }

    fn tap_outcome<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        tap(self, action)
    }

    fn tap_outcome_async<F, Effect>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Effect,
        Effect: Future<Output = ()>,
    {
        tap_async(self, action)
    }

    fn ensure_outcome<F>(self, predicate: F, error: Error) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> bool,
    {
        ensure(self, predicate, error)
    }

    fn match_outcome<U, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Error) -> U,
    {
        match_with(self, on_success, on_failure)
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

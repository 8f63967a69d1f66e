use futures_util::{
    future::{BoxFuture, Shared},
    FutureExt,
};
use std::{fmt::Debug, future::Future, sync::Arc};

/// A lazy, memoized, multi-subscriber asynchronous result.
///
/// The wrapped computation is not started until the first subscriber awaits it and is
/// driven at most once; every subscriber, including ones arriving after completion,
/// receives a clone of the same outcome. Failures are delivered as [`Arc`]-shared
/// errors so a single failure can be replayed to any number of subscribers.
///
/// Cloning a handle is cheap and shares the underlying computation.
pub struct ReplayHandle<T, E> {
    shared: Shared<BoxFuture<'static, Result<T, Arc<E>>>>,
}

impl<T, E> ReplayHandle<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    pub fn new<F>(source: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            shared: source.map(|result| result.map_err(Arc::new)).boxed().shared(),
        }
    }

    /// Await the outcome. The first caller to be polled drives the computation; everyone
    /// else, whether already waiting or subscribing later, gets the same value or the
    /// same error.
    pub async fn get(&self) -> Result<T, Arc<E>> {
        self.shared.clone().await
    }

    /// The resolved outcome, or `None` while the computation is pending.
    pub fn peek(&self) -> Option<Result<T, Arc<E>>> {
        self.shared.peek().cloned()
    }
}

impl<T, E> Clone for ReplayHandle<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, E> Debug for ReplayHandle<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplayHandle")
            .field("state", &if self.shared.peek().is_some() { "ready" } else { "pending" })
            .finish()
    }
}

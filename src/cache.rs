use crate::{
    eviction::{EvictionPolicy, Lru},
    handle::ReplayHandle,
};
use fieldx::fxstruct;
use std::{collections::HashMap, future::Future, num::NonZeroUsize};

/// Capacity used when the builder doesn't specify one.
pub const DEFAULT_CAPACITY: usize = 256;

/// A bounded, key-addressed store of single-flight, replayable asynchronous results.
///
/// ```ignore
/// let cache = ReplayCache::builder()
///     .name("regions")
///     .max_capacity(NonZeroUsize::new(64).unwrap())
///     .build()?;
///
/// let handle = cache.get_or_populate(&key, || {
///     let client = client.clone();
///     async move { client.fetch_regions().await }
/// });
/// let regions = handle.get().await?;
/// ```
///
/// The stored handles compute at most once: the remote operation behind a key runs a
/// single time per cache lifetime, no matter how many callers arrive before or after it
/// resolves. A failed computation stays cached and replays the same error until the key
/// is overwritten or evicted; there is no TTL and no cancellation.
#[fxstruct(sync, no_new, default(off), builder)]
pub struct ReplayCache<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Cache name. Most useful for debugging and trace output.
    #[fieldx(get(clone), default(String::new()), builder(into))]
    name: String,

    /// Hard bound on the number of cached keys.
    #[fieldx(get(copy), default(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap()))]
    max_capacity: NonZeroUsize,

    #[fieldx(private, inner_mut, get, get_mut, builder(off))]
    slots: HashMap<String, ReplayHandle<T, E>>,

    #[fieldx(private, inner_mut, get_mut, default(Box::new(Lru::new()) as Box<dyn EvictionPolicy>), builder(vis(pub)))]
    policy: Box<dyn EvictionPolicy>,
}

impl<T, E> ReplayCache<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// The cached handle for `key`, if any. A hit counts as a use for eviction purposes;
    /// a miss has no side effect and is the caller's signal to populate.
    pub fn get(&self, key: &str) -> Option<ReplayHandle<T, E>> {
        let slots = self.slots();
        let found = slots.get(key).cloned();
        if found.is_some() {
            self.policy_mut().on_hit(key);
            tracing::debug!("[{}] HIT({key})", self.label());
        }
        else {
            tracing::trace!("[{}] MISS({key})", self.label());
        }
        found
    }

    /// Wrap `source` into a replayable handle and store it under `key`, evicting the
    /// policy's victim first when a new key would exceed capacity. Overwriting an
    /// existing key promotes it and never evicts.
    ///
    /// Returns the stored handle; callers must await that handle, not `source`, to get
    /// the caching benefit.
    pub fn put<F>(&self, key: impl Into<String>, source: F) -> ReplayHandle<T, E>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let key = key.into();
        let handle = ReplayHandle::new(source);
        let mut slots = self.slots_mut();
        self.store(&mut slots, key, handle.clone());
        handle
    }

    /// The cached handle for `key`, populating it from `factory` on a miss.
    ///
    /// The factory only builds the future; nothing is awaited here. The wrapped handle
    /// lands in the map before the slot lock is released, so every interleaved caller of
    /// the same key observes the same in-flight computation.
    pub fn get_or_populate<F, Fut>(&self, key: &str, factory: F) -> ReplayHandle<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let mut slots = self.slots_mut();
        if let Some(handle) = slots.get(key) {
            let handle = handle.clone();
            self.policy_mut().on_hit(key);
            tracing::debug!("[{}] HIT({key})", self.label());
            return handle;
        }

        let handle = ReplayHandle::new(factory());
        self.store(&mut slots, key.to_owned(), handle.clone());
        handle
    }

    /// Whether `key` is present. Does not count as a use.
    pub fn contains(&self, key: &str) -> bool {
        self.slots().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    fn store(&self, slots: &mut HashMap<String, ReplayHandle<T, E>>, key: String, handle: ReplayHandle<T, E>) {
        let mut policy = self.policy_mut();

        if slots.contains_key(&key) {
            tracing::debug!("[{}] REPLACE({key})", self.label());
        }
        else {
            if slots.len() >= self.max_capacity().get() {
                if let Some(victim) = policy.victim() {
                    slots.remove(&victim);
                    policy.on_remove(&victim);
                    tracing::debug!("[{}] EVICT({victim})", self.label());
                }
            }
            tracing::debug!("[{}] PUT({key})", self.label());
        }

        policy.on_insert(&key);
        slots.insert(key, handle);
    }

    fn label(&self) -> String {
        let name = self.name();
        if name.is_empty() {
            std::any::type_name::<T>().to_string()
        }
        else {
            name
        }
    }
}

impl<T, E> ReplayCacheBuilder<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Replace the default LRU policy with any [`EvictionPolicy`] implementation.
    pub fn eviction<P: EvictionPolicy>(self, policy: P) -> Self {
        self.policy(Box::new(policy))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_defaults() {
        let cache = ReplayCache::<u32, String>::builder().build().unwrap();
        assert_eq!(cache.max_capacity().get(), DEFAULT_CAPACITY);
        assert_eq!(cache.name(), "");
        assert!(cache.is_empty());
    }

    #[test]
    fn contains_does_not_promote() {
        let cache = ReplayCache::<u32, String>::builder()
            .max_capacity(NonZeroUsize::new(2).unwrap())
            .build()
            .unwrap();

        cache.put("a", async { Ok(1) });
        cache.put("b", async { Ok(2) });

        // Probing "a" must not protect it from eviction.
        assert!(cache.contains("a"));
        cache.put("c", async { Ok(3) });

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }
}

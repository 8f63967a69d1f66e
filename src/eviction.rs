use std::{collections::VecDeque, fmt::Debug};

/// Decides which key leaves the cache when a new one has to be admitted at capacity.
///
/// The cache reports every insert, hit, and removal to the policy; [`victim()`] is
/// consulted only when an insert would exceed the capacity bound.
///
/// [`victim()`]: EvictionPolicy::victim
pub trait EvictionPolicy: Debug + Send + Sync + 'static {
    /// A key was inserted or overwritten.
    fn on_insert(&mut self, key: &str);
    /// A key was read.
    fn on_hit(&mut self, key: &str);
    /// A key left the cache.
    fn on_remove(&mut self, key: &str);
    /// The key to displace next, if any is tracked.
    fn victim(&mut self) -> Option<String>;
}

/// Least-recently-used ordering. Both reads and writes count as use.
#[derive(Debug, Default)]
pub struct Lru {
    order: VecDeque<String>,
}

impl Lru {
    pub fn new() -> Self {
        Self::default()
    }

    fn unlink(&mut self, key: &str) -> Option<String> {
        self.order
            .iter()
            .position(|tracked| tracked == key)
            .and_then(|pos| self.order.remove(pos))
    }

    fn promote(&mut self, key: &str) {
        let owned = self.unlink(key).unwrap_or_else(|| key.to_owned());
        self.order.push_back(owned);
    }
}

impl EvictionPolicy for Lru {
    fn on_insert(&mut self, key: &str) {
        self.promote(key);
    }

    fn on_hit(&mut self, key: &str) {
        self.promote(key);
    }

    fn on_remove(&mut self, key: &str) {
        self.unlink(key);
    }

    fn victim(&mut self) -> Option<String> {
        self.order.pop_front()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn oldest_untouched_key_is_the_victim() {
        let mut lru = Lru::new();
        lru.on_insert("x");
        lru.on_insert("y");
        lru.on_insert("z");
        lru.on_hit("x");

        assert_eq!(lru.victim().as_deref(), Some("y"));
        assert_eq!(lru.victim().as_deref(), Some("z"));
        assert_eq!(lru.victim().as_deref(), Some("x"));
        assert_eq!(lru.victim(), None);
    }

    #[test]
    fn overwrite_promotes() {
        let mut lru = Lru::new();
        lru.on_insert("a");
        lru.on_insert("b");
        lru.on_insert("a");

        assert_eq!(lru.victim().as_deref(), Some("b"));
    }

    #[test]
    fn removed_keys_are_forgotten() {
        let mut lru = Lru::new();
        lru.on_insert("a");
        lru.on_insert("b");
        lru.on_remove("a");

        assert_eq!(lru.victim().as_deref(), Some("b"));
        assert_eq!(lru.victim(), None);
    }
}

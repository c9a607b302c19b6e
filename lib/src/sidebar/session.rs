use rustc_hash::FxHashMap;

/// Default storage key for the persisted scroll offset.
pub const SCROLL_KEY: &str = "sidebar-scroll";

/// Session-scoped key-value storage.
///
/// The sidebar persists exactly one value across page loads: the container's
/// scroll offset, written on sidebar link clicks and consumed on the next
/// mount. Hosts with native session storage implement this over it; tests
/// and storage-less hosts use [`MemoryStore`].
pub trait Session {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);

    /// Remove `key`, returning its value. Reading and clearing in one step
    /// is what makes the stored scroll offset single-use.
    fn remove(&mut self, key: &str) -> Option<String>;
}

/// An in-memory [`Session`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore(FxHashMap<String, String>);

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl Session for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.into(), value.into());
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_consumes() {
        let mut store = MemoryStore::new();
        store.set(SCROLL_KEY, "125.5");

        assert_eq!(store.get(SCROLL_KEY).as_deref(), Some("125.5"));
        assert_eq!(store.remove(SCROLL_KEY).as_deref(), Some("125.5"));
        assert_eq!(store.get(SCROLL_KEY), None);
        assert_eq!(store.remove(SCROLL_KEY), None);
    }
}

use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::Link;
    use crate::store::{save_links, save_theme};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        links: Vec<Link>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                links: Vec::new(),
            }
        }

        /// Appends a link; fixtures list links in display order.
        pub fn with_link(mut self, id: &str, name: &str, url: &str) -> Self {
            self.links.push(Link::new(id, name, url));
            save_links(&mut self.store, &self.links).unwrap();
            self
        }

        pub fn with_links(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = count - i;
                self = self.with_link(
                    &n.to_string(),
                    &format!("Link {}", n),
                    &format!("https://link{}.example.com", n),
                );
            }
            self
        }

        pub fn with_theme(mut self, name: &str) -> Self {
            save_theme(&mut self.store, name).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }

    /// Reads succeed with nothing stored; every write fails, like a full quota.
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(ShelfError::Store(format!("quota exceeded writing {}", key)))
        }
    }
}

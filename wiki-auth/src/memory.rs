// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;
use std::convert::Infallible;

use crate::category::CategoryConfig;
use crate::traits::CategoryStore;

/// In-memory category store, keyed by category name.
#[derive(Clone, Debug, Default)]
pub struct MemoryCategoryStore {
    categories: HashMap<String, CategoryConfig>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a category configuration, returning the one previously stored under its name.
    pub fn insert(&mut self, config: CategoryConfig) -> Option<CategoryConfig> {
        self.categories.insert(config.name.clone(), config)
    }

    pub fn remove(&mut self, name: &str) -> Option<CategoryConfig> {
        self.categories.remove(name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<CategoryConfig> for MemoryCategoryStore {
    fn from_iter<T: IntoIterator<Item = CategoryConfig>>(iter: T) -> Self {
        let mut store = Self::new();
        for config in iter {
            store.insert(config);
        }
        store
    }
}

impl CategoryStore for MemoryCategoryStore {
    type Error = Infallible;

    fn category(&self, name: &str) -> Result<Option<CategoryConfig>, Self::Error> {
        Ok(self.categories.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use crate::category::{CategoryConfig, CategoryFlags};
    use crate::traits::CategoryStore;

    use super::MemoryCategoryStore;

    #[test]
    fn insert_replace_remove() {
        let mut store = MemoryCategoryStore::new();
        assert!(store.is_empty());

        let open = CategoryConfig::new("open", CategoryFlags::PERMISSIVE);
        assert_eq!(store.insert(open.clone()), None);
        assert_eq!(store.category("open").unwrap(), Some(open.clone()));

        let closed = CategoryConfig::new("open", CategoryFlags::RESTRICTIVE);
        assert_eq!(store.insert(closed.clone()), Some(open));
        assert_eq!(store.len(), 1);
        assert_eq!(store.category("open").unwrap(), Some(closed.clone()));

        assert_eq!(store.remove("open"), Some(closed));
        assert_eq!(store.category("open").unwrap(), None);
    }

    #[test]
    fn collect_and_share() {
        let store: MemoryCategoryStore = [
            CategoryConfig::new("a", CategoryFlags::PERMISSIVE),
            CategoryConfig::new("b", CategoryFlags::RESTRICTIVE),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.len(), 2);

        fn is_stored<S: CategoryStore>(store: S, name: &str) -> bool {
            matches!(store.category(name), Ok(Some(_)))
        }

        // Shared references and smart pointers are stores as well.
        assert!(is_stored(&store, "a"));

        let shared = std::sync::Arc::new(store);
        assert!(is_stored(shared.clone(), "b"));
        assert!(!is_stored(shared, "c"));
    }
}

//! Shared handle that lets a registry be replaced while readers hold snapshots.

use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use super::Registry;

/// Cloneable handle to the current [`Registry`].
///
/// Readers take an `Arc` snapshot and keep using it for as long as they need;
/// [`SharedRegistry::replace`] swaps the whole registry at once, so a reader
/// sees either the old registry or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    /// Registry currently in effect
    current: Arc<RwLock<Arc<Registry>>>,
}

impl SharedRegistry {
    /// Handle whose current registry is `registry`.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(registry))) }
    }

    /// Returns the registry in effect right now.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Registry> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Installs `registry` and returns the one it replaced.
    pub fn replace(&self, registry: Registry) -> Arc<Registry> {
        let next = Arc::new(registry);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!("Replacing locale registry");
        std::mem::replace(&mut *guard, next)
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::thread;

    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::dictionary::Dictionary;

    fn registry_with_title(title: &str) -> Registry {
        Registry::builder(Dictionary::from_iter([("hero.title", title)])).build()
    }

    #[rstest]
    fn test_snapshot_survives_replace() {
        let shared = SharedRegistry::new(registry_with_title("old"));
        let before = shared.snapshot();

        let replaced = shared.replace(registry_with_title("new"));

        assert!(Arc::ptr_eq(&before, &replaced));
        assert_that!(before.resolve_dictionary("en").get("hero.title"), some(eq("old")));
        let after = shared.snapshot();
        assert_that!(after.resolve_dictionary("en").get("hero.title"), some(eq("new")));
    }

    #[rstest]
    fn test_concurrent_readers_see_whole_registry() {
        let shared = SharedRegistry::new(registry_with_title("v0"));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = shared.snapshot();
                        let title = snapshot.default_dictionary().get("hero.title").unwrap();
                        assert!(title.starts_with('v'));
                    }
                })
            })
            .collect();

        for version in 1..=10 {
            shared.replace(registry_with_title(&format!("v{version}")));
        }

        for reader in readers {
            reader.join().unwrap();
        }

        let latest = shared.snapshot();
        assert_that!(latest.default_dictionary().get("hero.title"), some(eq("v10")));
    }
}

//! Shared policy storage for long-running consumers.
//!
//! A crawler that refreshes robots.txt periodically needs to swap in a new
//! policy while queries are in flight. [`PolicyStore`] holds the current
//! [`Policy`] behind an `Arc` that is replaced whole: readers clone the
//! `Arc` out and keep evaluating against the snapshot they took, so no
//! query ever observes a partially updated policy. Fetching and scheduling
//! the refresh remain the caller's concern.

use std::sync::{Arc, PoisonError, RwLock};

use crate::policy::Policy;

/// The current policy behind an atomically replaceable reference.
///
/// # Example
///
/// ```
/// use crawlcap::{Policy, PolicyStore};
///
/// let store = PolicyStore::new(Policy::parse("User-agent: *\nDisallow: /\n"));
/// assert!(!store.load().is_allowed("bot", "/page"));
///
/// // A refresh produces a brand-new policy and swaps it in.
/// store.replace(Policy::parse("User-agent: *\nAllow: /\n"));
/// assert!(store.load().is_allowed("bot", "/page"));
/// ```
#[derive(Debug)]
pub struct PolicyStore {
    inner: RwLock<Arc<Policy>>,
}

impl PolicyStore {
    /// Creates a store holding an initial policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            inner: RwLock::new(Arc::new(policy)),
        }
    }

    /// Returns the current policy snapshot.
    ///
    /// The lock is held only long enough to clone the `Arc`; evaluation
    /// happens entirely against the returned snapshot.
    pub fn load(&self) -> Arc<Policy> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the stored policy with a freshly parsed one.
    ///
    /// Queries already running against a previous snapshot are unaffected;
    /// subsequent [`load`](PolicyStore::load) calls see the new policy.
    pub fn replace(&self, policy: Policy) {
        let next = Arc::new(policy);
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = next;
        tracing::debug!(groups = slot.groups().len(), "policy replaced");
    }
}

impl Default for PolicyStore {
    /// A store holding the empty policy, which allows everything.
    fn default() -> Self {
        Self::new(Policy::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_survives_replace() {
        let store = PolicyStore::new(Policy::parse("User-agent: *\nDisallow: /old\n"));
        let snapshot = store.load();

        store.replace(Policy::parse("User-agent: *\nDisallow: /new\n"));

        // The old snapshot still answers from the old policy.
        assert!(!snapshot.is_allowed("bot", "/old"));
        assert!(snapshot.is_allowed("bot", "/new"));
        // A fresh load sees the replacement.
        let current = store.load();
        assert!(current.is_allowed("bot", "/old"));
        assert!(!current.is_allowed("bot", "/new"));
    }

    #[test]
    fn test_default_store_allows_everything() {
        let store = PolicyStore::default();
        assert!(store.load().is_allowed("bot", "/anything"));
    }

    #[test]
    fn test_concurrent_readers() {
        let store = Arc::new(PolicyStore::new(Policy::parse(
            "User-agent: *\nDisallow: /private/\n",
        )));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let policy = store.load();
                        assert!(!policy.is_allowed("bot", "/private/x"));
                        assert!(policy.is_allowed("bot", "/public/x"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}

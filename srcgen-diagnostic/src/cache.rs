//! Run-to-run memoization of outcomes.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::Outcome;

/// How an outcome compares with the one cached for the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Nothing was cached for the key.
    Added,
    /// The cached outcome differed and was replaced.
    Modified,
    /// An equal outcome was already cached; downstream work can be skipped.
    Unchanged,
}

impl Freshness {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Freshness::Unchanged)
    }
}

/// Last outcome produced for each input key.
///
/// Outcomes are compared by value, so an unchanged input that produces the
/// same value and the same diagnostics is recognised as unchanged.
#[derive(Debug, Clone)]
pub struct OutcomeCache<K, T> {
    entries: IndexMap<K, Outcome<T>>,
}

impl<K, T> OutcomeCache<K, T>
where
    K: Hash + Eq,
    T: PartialEq,
{
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Store `outcome` under `key` and report how it relates to the
    /// previous one.
    pub fn update(&mut self, key: K, outcome: Outcome<T>) -> Freshness {
        let freshness = match self.entries.get_mut(&key) {
            Some(cached) if *cached == outcome => Freshness::Unchanged,
            Some(cached) => {
                *cached = outcome;
                Freshness::Modified
            }
            None => {
                self.entries.insert(key, outcome);
                Freshness::Added
            }
        };
        tracing::debug!(?freshness, entries = self.entries.len(), "outcome cache update");
        freshness
    }

    pub fn get(&self, key: &K) -> Option<&Outcome<T>> {
        self.entries.get(key)
    }

    /// Forget the outcome for an input that no longer exists.
    pub fn remove(&mut self, key: &K) -> Option<Outcome<T>> {
        self.entries.shift_remove(key)
    }

    /// Drop every entry whose key fails `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.entries.retain(|key, _| keep(key));
    }

    /// Cached outcomes in insertion order.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome<T>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, T> Default for OutcomeCache<K, T>
where
    K: Hash + Eq,
    T: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

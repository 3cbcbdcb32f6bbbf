//! The append-only comparator table.

use crate::comparator::{Comparator, ComparatorEntry, always, equatable};
use argmatch_types::{TypeDescriptor, TypeIdentity};
use std::sync::Arc;
use tracing::{trace, warn};

/// An insertion-ordered table of comparator registrations.
///
/// Entries are never reordered or removed. Duplicate identities are legal:
/// lookup returns the most recently appended one, so a later registration
/// overrides an earlier one by shadowing it. Cloning produces an
/// independent snapshot.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<ComparatorEntry>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a comparator for `T`.
    pub fn register<T, F>(&mut self, comparator: F)
    where
        T: 'static,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.register_comparator::<T>(Arc::new(comparator));
    }

    /// Appends an already-shared comparator for `T`.
    pub fn register_comparator<T: 'static>(&mut self, comparator: Comparator<T>) {
        self.push(ComparatorEntry::new(comparator));
    }

    /// Appends a comparator for `T` backed by its `PartialEq`.
    pub fn register_equatable<T: PartialEq + 'static>(&mut self) {
        self.register_comparator::<T>(equatable::<T>());
    }

    /// Appends an always-matching comparator for the descriptor of `T`.
    ///
    /// Descriptors carry no instance state, so any two descriptors of `T`
    /// are considered equal.
    pub fn register_type_descriptor<T: ?Sized + 'static>(&mut self) {
        self.register_comparator::<TypeDescriptor<T>>(always::<TypeDescriptor<T>>());
    }

    /// Appends a pre-built entry.
    pub fn push(&mut self, entry: ComparatorEntry) {
        trace!(
            "Registered comparator for {} (entry #{})",
            entry.identity(),
            self.entries.len()
        );
        self.entries.push(entry);
    }

    /// Returns the most recently registered comparator for `T`.
    ///
    /// An entry whose comparator does not downcast to `T` is treated as a
    /// miss and the scan continues towards older entries.
    #[must_use]
    pub fn lookup<T: 'static>(&self) -> Option<Comparator<T>> {
        let identity = TypeIdentity::of::<T>();
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.identity() == identity)
            .find_map(|entry| {
                let comparator = entry.comparator().downcast::<T>();
                if comparator.is_none() {
                    warn!("Comparator registered for {identity} has a mismatched type; skipping");
                }
                comparator
            })
    }

    /// Returns true if at least one entry is registered for `T`.
    #[must_use]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let identity = TypeIdentity::of::<T>();
        self.entries.iter().any(|entry| entry.identity() == identity)
    }

    /// Returns how many entries (live and shadowed) exist for `T`.
    #[must_use]
    pub fn registrations_of<T: ?Sized + 'static>(&self) -> usize {
        let identity = TypeIdentity::of::<T>();
        self.entries
            .iter()
            .filter(|entry| entry.identity() == identity)
            .count()
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ComparatorEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

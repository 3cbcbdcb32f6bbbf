use argmatch_types::TypeIdentity;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A binary predicate deciding whether two values of `T` match.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Returns a comparator backed by `T`'s own `PartialEq`.
#[must_use]
pub fn equatable<T: PartialEq + 'static>() -> Comparator<T> {
    Arc::new(|a: &T, b: &T| a == b)
}

/// Returns a comparator that reports a match for every pair.
#[must_use]
pub fn always<T: 'static>() -> Comparator<T> {
    Arc::new(|_: &T, _: &T| true)
}

/// A [`Comparator<T>`] with `T` erased.
///
/// Recovering the typed comparator is a checked downcast; a failed
/// downcast yields `None` rather than panicking.
#[derive(Clone)]
pub struct ErasedComparator(Arc<dyn Any + Send + Sync>);

impl ErasedComparator {
    /// Erases a typed comparator.
    #[must_use]
    pub fn new<T: 'static>(comparator: Comparator<T>) -> Self {
        Self(Arc::new(comparator))
    }

    /// Recovers the typed comparator, if this entry was built for `T`.
    #[must_use]
    pub fn downcast<T: 'static>(&self) -> Option<Comparator<T>> {
        self.0.downcast_ref::<Comparator<T>>().cloned()
    }
}

impl fmt::Debug for ErasedComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErasedComparator")
    }
}

/// One registration: the type it applies to and its erased comparator.
///
/// Entries are immutable once created.
#[derive(Debug, Clone)]
pub struct ComparatorEntry {
    identity: TypeIdentity,
    comparator: ErasedComparator,
}

impl ComparatorEntry {
    /// Creates an entry keyed by `T`'s identity.
    #[must_use]
    pub fn new<T: 'static>(comparator: Comparator<T>) -> Self {
        Self {
            identity: TypeIdentity::of::<T>(),
            comparator: ErasedComparator::new(comparator),
        }
    }

    /// Creates an entry from an already-erased comparator.
    ///
    /// The caller is responsible for pairing the identity with a comparator
    /// of the same type; a mismatched pair simply never resolves.
    #[must_use]
    pub fn from_parts(identity: TypeIdentity, comparator: ErasedComparator) -> Self {
        Self {
            identity,
            comparator,
        }
    }

    #[must_use]
    pub const fn identity(&self) -> TypeIdentity {
        self.identity
    }

    #[must_use]
    pub const fn comparator(&self) -> &ErasedComparator {
        &self.comparator
    }
}

//! Comparator registry for argmatch.
//!
//! Defines the storage half of the value-equality engine:
//! - [`Comparator<T>`]: a shareable binary predicate over two `T`s
//! - [`ErasedComparator`]: a comparator with `T` erased, so entries of
//!   different types can live in one table
//! - [`ComparatorEntry`]: an immutable `(TypeIdentity, ErasedComparator)` pair
//! - [`Registry`]: the append-only, insertion-ordered table of entries
//!
//! Lookup scans from the most recent entry to the oldest, so registering a
//! second comparator for a type shadows the first without removing it.

mod comparator;
mod registry;

pub use comparator::{Comparator, ComparatorEntry, ErasedComparator, always, equatable};
pub use registry::Registry;

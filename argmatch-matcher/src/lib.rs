//! Argument matching for test doubles.
//!
//! A [`Matcher`] decides whether an observed call argument matches an
//! expected one, for argument types only known at the mock's call site.
//! Resolution of a comparator for `T` follows a fixed priority chain:
//!
//! 1. an explicit registration for `T` (the most recent one wins)
//! 2. sequence synthesis, when `T` is a container whose element type resolves
//! 3. `T`'s own equality, when the type declares one
//! 4. nothing: "cannot judge", surfaced as [`MatchError::NoComparator`]
//!
//! Types opt into the engine through the [`Argument`] trait. Scalars, the
//! standard containers and the descriptor types implement it here; caller
//! types use [`equatable_argument!`] or [`opaque_argument!`].

mod argument;
mod bootstrap;
mod config;
mod error;
pub mod global;
mod location;
mod matcher;
mod parameter;
mod sequence;

pub use argmatch_registry::{Comparator, Registry, always, equatable};
pub use argmatch_types::{
    AnyTypeDescriptor, Blob, ContainerCategory, SourceLocation, TypeDescriptor, TypeIdentity,
};
pub use argument::Argument;
pub use config::{MatcherConfig, UnorderedStrategy};
pub use error::{MatchError, MatchResult};
pub use location::{LocationContext, MismatchHandler};
pub use matcher::Matcher;
pub use parameter::Parameter;
pub use sequence::{Sequence, match_ordered, match_unordered_greedy, match_unordered_maximum};

//! Expected-argument wrappers consumed by generated mocks.

use crate::error::MatchResult;
use crate::{Argument, Matcher};
use std::fmt;
use std::sync::Arc;

/// What a mock expects for one argument position.
pub enum Parameter<T> {
    /// Matches every value without consulting a comparator.
    Any,
    /// Matches values the matcher considers equal to this one.
    Value(T),
    /// Matches values accepted by the predicate.
    Matching(Arc<dyn Fn(&T) -> bool + Send + Sync>),
}

impl<T: Argument> Parameter<T> {
    #[must_use]
    pub fn any() -> Self {
        Self::Any
    }

    #[must_use]
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    #[must_use]
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::Matching(Arc::new(predicate))
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks `actual` against this expectation.
    ///
    /// Only [`Parameter::Value`] needs a comparator, so only it can fail
    /// with [`MatchError::NoComparator`](crate::MatchError::NoComparator).
    pub fn matches(&self, actual: &T, matcher: &Matcher) -> MatchResult<bool> {
        match self {
            Self::Any => Ok(true),
            Self::Value(expected) => matcher.compare(expected, actual),
            Self::Matching(predicate) => Ok(predicate(actual)),
        }
    }
}

impl<T: Argument> From<T> for Parameter<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Clone> Clone for Parameter<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Any => Self::Any,
            Self::Value(value) => Self::Value(value.clone()),
            Self::Matching(predicate) => Self::Matching(Arc::clone(predicate)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Parameter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Matching(_) => f.write_str("Matching(<predicate>)"),
        }
    }
}

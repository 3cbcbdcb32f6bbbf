use crate::error::MatchResult;
use serde::{Deserialize, Serialize};

/// How two unordered containers are paired up element by element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnorderedStrategy {
    /// Each left element consumes the first remaining right element it
    /// matches. Can miss a valid pairing when the element comparator is
    /// not an equivalence relation.
    #[default]
    Greedy,
    /// Matches iff a perfect pairing exists (maximum bipartite matching).
    Maximum,
}

/// Construction-time settings for a [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Pre-register comparators for the built-in scalar types.
    pub builtins: bool,
    /// Strategy for unordered container comparison.
    pub unordered: UnorderedStrategy,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            unordered: UnorderedStrategy::Greedy,
        }
    }
}

impl MatcherConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MatchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

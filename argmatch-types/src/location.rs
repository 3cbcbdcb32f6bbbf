//! Source locations used to attribute a mismatch to the assertion that
//! produced it.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A file/line/column position in the caller's source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    file: String,
    line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
}

impl SourceLocation {
    /// Creates a location without a column.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column: None,
        }
    }

    /// Returns this location with a column attached.
    #[must_use]
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    /// Captures the location of the caller.
    ///
    /// Propagates through any chain of `#[track_caller]` functions, so an
    /// assertion helper marked `#[track_caller]` reports the test's line.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(std::panic::Location::caller())
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> Option<u32> {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}:{}", self.file, self.line, column),
            None => write!(f, "{}:{}", self.file, self.line),
        }
    }
}

impl From<&std::panic::Location<'_>> for SourceLocation {
    fn from(location: &std::panic::Location<'_>) -> Self {
        Self::new(location.file(), location.line()).with_column(location.column())
    }
}

impl FromStr for SourceLocation {
    type Err = Error;

    /// Parses `file:line` or `file:line:column`. Numbers are taken from the
    /// right, so the file part may itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, last) = s
            .rsplit_once(':')
            .ok_or_else(|| Error::InvalidLocation(s.to_string()))?;

        let location = match head.rsplit_once(':') {
            Some((file, line)) if !file.is_empty() && line.parse::<u32>().is_ok() => {
                Self::new(file, line.parse()?).with_column(last.parse()?)
            }
            _ => Self::new(head, last.parse()?),
        };

        if location.file.is_empty() {
            return Err(Error::InvalidLocation(s.to_string()));
        }
        Ok(location)
    }
}

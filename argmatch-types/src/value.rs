//! Value-level building blocks: the byte-blob scalar and container categories.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An opaque byte blob.
///
/// Distinct from `Vec<u8>`, which is an ordered container of `u8` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blob(Vec<u8>);

impl Blob {
    /// Wraps the given bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the blob, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Whether element position is significant when comparing two containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerCategory {
    /// Position matters (lists, arrays).
    Ordered,
    /// Position is incidental (sets, heaps).
    Unordered,
}

impl ContainerCategory {
    /// Returns true for [`ContainerCategory::Ordered`].
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::Ordered)
    }
}

//! Core type definitions for argmatch.
//!
//! This crate defines the small, dependency-light vocabulary shared by the
//! registry and the matcher:
//! - [`TypeIdentity`] tokens naming a runtime type
//! - [`TypeDescriptor<T>`] and [`AnyTypeDescriptor`] values ("metatype of T")
//! - [`Blob`], the opaque byte-blob scalar
//! - [`ContainerCategory`] for ordered vs unordered sequences
//! - [`SourceLocation`] for attributing mismatches to a call site

mod identity;
mod location;
mod value;

pub use identity::{AnyTypeDescriptor, TypeDescriptor, TypeIdentity};
pub use location::SourceLocation;
pub use value::{Blob, ContainerCategory};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid source location: {0}")]
    InvalidLocation(String),

    #[error("invalid line number: {0}")]
    InvalidLine(#[from] std::num::ParseIntError),
}

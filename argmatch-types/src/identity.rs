//! Runtime type identity tokens.
//!
//! Identity is exact: no subtype or structural matching is performed, so
//! `T`, `Option<T>` and `TypeDescriptor<T>` are three distinct identities.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// An opaque, comparable token uniquely identifying a runtime type.
///
/// Equality and hashing only consider the underlying [`TypeId`]; the type
/// name is carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Returns the identity of `T`.
    #[must_use]
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the underlying [`TypeId`].
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.id
    }

    /// Returns the type name, as reported by [`std::any::type_name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this identity names `T`.
    #[must_use]
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeIdentity").field(&self.name).finish()
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The type descriptor ("metatype") of `T`, as a value.
///
/// Carries no instance state, so two descriptors of the same `T` are
/// indistinguishable. Its identity differs from both `T` and `Option<T>`.
pub struct TypeDescriptor<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized + Any> TypeDescriptor<T> {
    /// Creates the descriptor of `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Returns the identity of the described type `T` (not of the descriptor).
    #[must_use]
    pub fn described(&self) -> TypeIdentity {
        TypeIdentity::of::<T>()
    }

    /// Erases the described type.
    #[must_use]
    pub fn erase(&self) -> AnyTypeDescriptor {
        AnyTypeDescriptor::of::<T>()
    }
}

impl<T: ?Sized + Any> Default for TypeDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for TypeDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeDescriptor<T> {}

impl<T: ?Sized> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor<{}>", std::any::type_name::<T>())
    }
}

/// A type descriptor with the described type erased.
///
/// Used for placeholder "any value" arguments, where the framework compares
/// descriptors without knowing their static type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyTypeDescriptor(TypeIdentity);

impl AnyTypeDescriptor {
    /// Creates an erased descriptor of `T`.
    #[must_use]
    pub fn of<T: ?Sized + Any>() -> Self {
        Self(TypeIdentity::of::<T>())
    }

    /// Returns the identity of the described type.
    #[must_use]
    pub const fn described(&self) -> TypeIdentity {
        self.0
    }
}

impl From<TypeIdentity> for AnyTypeDescriptor {
    fn from(identity: TypeIdentity) -> Self {
        Self(identity)
    }
}

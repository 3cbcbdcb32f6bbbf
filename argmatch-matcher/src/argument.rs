//! The [`Argument`] trait: how a type tells the resolver what it supports.

use crate::Matcher;
use argmatch_registry::Comparator;
use argmatch_types::{AnyTypeDescriptor, Blob, TypeDescriptor, TypeIdentity};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::hash::{BuildHasher, Hash};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

/// A type that can appear as a mocked call argument.
///
/// Both methods default to `None`, which leaves explicit registration as the
/// only way to compare the type. Containers override
/// [`synthesize`](Argument::synthesize); types with a meaningful
/// `PartialEq` override [`intrinsic`](Argument::intrinsic).
pub trait Argument: Sized + 'static {
    /// The type's own equality, if it has one.
    fn intrinsic() -> Option<Comparator<Self>> {
        None
    }

    /// Builds a comparator from the matcher's comparators for component
    /// types. Returns `None` when the type is not decomposable or a
    /// component does not resolve.
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        let _ = matcher;
        None
    }
}

/// Implements [`Argument`] for types whose `PartialEq` is their equality.
///
/// ```
/// use argmatch_matcher::{Matcher, equatable_argument};
///
/// #[derive(PartialEq)]
/// struct UserId(u64);
/// equatable_argument!(UserId);
///
/// let matcher = Matcher::new();
/// assert!(matcher.compare(&UserId(7), &UserId(7)).unwrap());
/// ```
#[macro_export]
macro_rules! equatable_argument {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Argument for $ty {
                fn intrinsic() -> ::core::option::Option<$crate::Comparator<Self>> {
                    ::core::option::Option::Some($crate::equatable::<Self>())
                }
            }
        )+
    };
}

/// Implements [`Argument`] for types that can only be compared through an
/// explicit registration.
///
/// ```
/// use argmatch_matcher::{Matcher, opaque_argument};
///
/// struct Handle(std::fs::File);
/// opaque_argument!(Handle);
///
/// assert!(Matcher::new().resolve::<Handle>().is_none());
/// ```
#[macro_export]
macro_rules! opaque_argument {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::Argument for $ty {})+
    };
}

equatable_argument!(
    (),
    bool,
    char,
    String,
    &'static str,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    Blob,
    TypeIdentity,
    AnyTypeDescriptor,
    Duration,
    Instant,
    SystemTime,
    PathBuf,
    OsString,
    Cow<'static, str>,
    std::cmp::Ordering,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
);

// Descriptors have no intrinsic equality here; they need
// `register_type_descriptor` or the erased wildcard.
impl<T: ?Sized + 'static> Argument for TypeDescriptor<T> {}

// ── Wrappers ─────────────────────────────────────────────────────

/// Implements [`Argument`] for a pointer type by resolving its pointee.
macro_rules! pointer_argument {
    ($($ptr:ident),+ $(,)?) => {
        $(
            impl<T: Argument> Argument for $ptr<T> {
                fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
                    let inner = matcher.resolve::<T>()?;
                    Some(Arc::new(move |lhs: &Self, rhs: &Self| inner(&**lhs, &**rhs)))
                }
            }
        )+
    };
}

pointer_argument!(Box, Rc, Arc);

/// `Ok` and `Err` never match each other.
impl<T: Argument, E: Argument> Argument for Result<T, E> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        let ok = matcher.resolve::<T>()?;
        let err = matcher.resolve::<E>()?;
        Some(Arc::new(move |lhs: &Self, rhs: &Self| match (lhs, rhs) {
            (Ok(l), Ok(r)) => ok(l, r),
            (Err(l), Err(r)) => err(l, r),
            _ => false,
        }))
    }
}

// ── Tuples ───────────────────────────────────────────────────────

/// Tuples match when every component matches under its own resolved
/// comparator.
macro_rules! tuple_argument {
    ($(($($name:ident $idx:tt),+))+) => {
        $(
            impl<$($name: Argument),+> Argument for ($($name,)+) {
                fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
                    let components = ($(matcher.resolve::<$name>()?,)+);
                    Some(Arc::new(move |lhs: &Self, rhs: &Self| {
                        true $(&& (components.$idx)(&lhs.$idx, &rhs.$idx))+
                    }))
                }
            }
        )+
    };
}

tuple_argument! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11)
}

// ── Maps ─────────────────────────────────────────────────────────

// Keys are matched by the map's own key equality; values go through the
// resolved value comparator.

impl<K, V, S> Argument for HashMap<K, V, S>
where
    K: Eq + Hash + 'static,
    V: Argument,
    S: BuildHasher + 'static,
{
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        let value = matcher.resolve::<V>()?;
        Some(Arc::new(move |lhs: &Self, rhs: &Self| {
            lhs.len() == rhs.len()
                && lhs
                    .iter()
                    .all(|(key, l)| rhs.get(key).is_some_and(|r| value(l, r)))
        }))
    }
}

impl<K, V> Argument for BTreeMap<K, V>
where
    K: Ord + 'static,
    V: Argument,
{
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        let value = matcher.resolve::<V>()?;
        Some(Arc::new(move |lhs: &Self, rhs: &Self| {
            lhs.len() == rhs.len()
                && lhs
                    .iter()
                    .all(|(key, l)| rhs.get(key).is_some_and(|r| value(l, r)))
        }))
    }
}

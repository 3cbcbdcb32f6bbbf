//! Built-in registrations applied when a matcher is constructed.

use argmatch_registry::{Registry, always};
use argmatch_types::{AnyTypeDescriptor, Blob, TypeIdentity};
use tracing::debug;

/// Registers `T`, `Option<T>`, `Vec<T>` and `Option<Vec<T>>` with equality
/// for every listed scalar.
macro_rules! register_scalars {
    ($registry:expr; $($ty:ty),+ $(,)?) => {
        $(
            $registry.register_equatable::<$ty>();
            $registry.register_equatable::<Option<$ty>>();
            $registry.register_equatable::<Vec<$ty>>();
            $registry.register_equatable::<Option<Vec<$ty>>>();
        )+
    };
}

pub(crate) fn register_builtins(registry: &mut Registry) {
    register_scalars!(
        registry;
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
    );

    // Type values and erased descriptors carry no instance state.
    registry.register_comparator::<TypeIdentity>(always());
    registry.register_comparator::<AnyTypeDescriptor>(always());

    debug!("Registered {} built-in comparators", registry.len());
}

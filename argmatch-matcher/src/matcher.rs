//! The [`Matcher`]: a registry plus the resolution chain over it.

use crate::bootstrap::register_builtins;
use crate::error::{MatchError, MatchResult};
use crate::sequence;
use crate::{Argument, LocationContext, MatcherConfig, MismatchHandler, Sequence};
use argmatch_registry::{Comparator, Registry};
use argmatch_types::{SourceLocation, TypeIdentity};
use std::any::type_name;
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};
use tracing::{trace, warn};

thread_local! {
    /// `(matcher address, type)` pairs whose synthesis is running on this thread.
    static RESOLVING: RefCell<Vec<(usize, TypeIdentity)>> = const { RefCell::new(Vec::new()) };
}

/// Marks a type as being resolved by one matcher until dropped.
struct ResolveGuard {
    key: (usize, TypeIdentity),
}

impl ResolveGuard {
    /// Returns `None` if the type is already being resolved by this matcher.
    fn enter(matcher: &Matcher, identity: TypeIdentity) -> Option<Self> {
        let key = (std::ptr::from_ref(matcher) as usize, identity);
        RESOLVING.with_borrow_mut(|stack| {
            if stack.contains(&key) {
                None
            } else {
                stack.push(key);
                Some(Self { key })
            }
        })
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        RESOLVING.with_borrow_mut(|stack| {
            if let Some(index) = stack.iter().rposition(|key| *key == self.key) {
                stack.remove(index);
            }
        });
    }
}

/// Decides whether two argument values match.
///
/// Owns its registry exclusively. Registration needs `&mut self`, so a
/// matcher shared between threads must sit behind a lock (see
/// [`global`](crate::global)); concurrent resolution through `&self` is fine.
#[derive(Debug, Clone)]
pub struct Matcher {
    registry: Registry,
    config: MatcherConfig,
    location: LocationContext,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Creates a matcher with the built-in comparators registered.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    /// Creates a matcher with an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_config(MatcherConfig {
            builtins: false,
            ..MatcherConfig::default()
        })
    }

    #[must_use]
    pub fn with_config(config: MatcherConfig) -> Self {
        let mut registry = Registry::new();
        if config.builtins {
            register_builtins(&mut registry);
        }
        Self {
            registry,
            config,
            location: LocationContext::default(),
        }
    }

    /// Returns an independent copy of this matcher's registrations.
    ///
    /// Later registrations on either matcher do not affect the other. The
    /// copy shares the mismatch handler but starts with no location set.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            config: self.config,
            location: self.location.detached(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    // ── Registration ─────────────────────────────────────────────

    /// Registers explicit comparison logic for `T`, shadowing any earlier
    /// registration for the same type.
    pub fn register<T, F>(&mut self, comparator: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.registry.register::<T, F>(comparator);
        self
    }

    /// Registers `T`'s own `PartialEq` as its comparator.
    pub fn register_equatable<T: PartialEq + 'static>(&mut self) -> &mut Self {
        self.registry.register_equatable::<T>();
        self
    }

    /// Registers an always-matching comparator for descriptors of `T`.
    pub fn register_type_descriptor<T: ?Sized + 'static>(&mut self) -> &mut Self {
        self.registry.register_type_descriptor::<T>();
        self
    }

    // ── Resolution ───────────────────────────────────────────────

    /// Returns the most recent comparator registered for exactly `T`.
    ///
    /// Performs no synthesis or fallback; see [`resolve`](Self::resolve).
    #[must_use]
    pub fn lookup<T: 'static>(&self) -> Option<Comparator<T>> {
        self.registry.lookup::<T>()
    }

    /// Resolves a comparator for `T`.
    ///
    /// Tries, in order: an explicit registration, sequence synthesis from
    /// the element comparator, and `T`'s intrinsic equality. `None` means
    /// the matcher cannot judge `T` at all.
    ///
    /// A type requested again while its own synthesis is in progress (a
    /// container whose element type is itself) resolves to its intrinsic
    /// equality if it has one, and otherwise to a comparator that resolves
    /// `T` on first use.
    #[must_use]
    pub fn resolve<T: Argument>(&self) -> Option<Comparator<T>> {
        let name = type_name::<T>();

        if let Some(comparator) = self.registry.lookup::<T>() {
            trace!("Resolved {name} from registry");
            return Some(comparator);
        }

        match ResolveGuard::enter(self, TypeIdentity::of::<T>()) {
            Some(_guard) => {
                if let Some(comparator) = T::synthesize(self) {
                    trace!("Resolved {name} by synthesis");
                    return Some(comparator);
                }
            }
            None => {
                if let Some(comparator) = T::intrinsic() {
                    trace!("Resolved recursive {name} by intrinsic equality");
                    return Some(comparator);
                }
                trace!("Deferring recursive resolution of {name}");
                return Some(self.deferred::<T>());
            }
        }

        if let Some(comparator) = T::intrinsic() {
            trace!("Resolved {name} by intrinsic equality");
            return Some(comparator);
        }

        trace!("No comparator for {name}");
        None
    }

    /// A comparator that resolves `T` against a snapshot of this matcher the
    /// first time it is called.
    fn deferred<T: Argument>(&self) -> Comparator<T> {
        let snapshot = self.snapshot();
        let resolved: OnceLock<Option<Comparator<T>>> = OnceLock::new();
        Arc::new(move |lhs: &T, rhs: &T| {
            match resolved.get_or_init(|| snapshot.resolve::<T>()) {
                Some(comparator) => comparator(lhs, rhs),
                None => {
                    warn!("Deferred comparator for {} did not resolve", type_name::<T>());
                    false
                }
            }
        })
    }

    /// Synthesizes a comparator for the container `S` from its element
    /// comparator, ignoring any registration for `S` itself.
    ///
    /// Custom containers call this from [`Argument::synthesize`].
    #[must_use]
    pub fn synthesize_sequence<S: Sequence>(&self) -> Option<Comparator<S>> {
        sequence::synthesize::<S>(self)
    }

    /// Compares two values of `T`.
    ///
    /// Fails with [`MatchError::NoComparator`] when `T` does not resolve,
    /// which is distinct from `Ok(false)`.
    pub fn compare<T: Argument>(&self, lhs: &T, rhs: &T) -> MatchResult<bool> {
        let comparator = self.resolve::<T>().ok_or(MatchError::NoComparator {
            type_name: type_name::<T>(),
        })?;
        Ok(comparator(lhs, rhs))
    }

    /// Compares `expected` against `actual` and reports a mismatch through
    /// the location context when they differ.
    ///
    /// The default mismatch handler panics, so with a location set and no
    /// custom handler installed a mismatch never returns `Ok(false)`. Install
    /// a handler with [`set_mismatch_handler`](Self::set_mismatch_handler)
    /// to get the result back instead.
    pub fn verify<T: Argument>(&self, expected: &T, actual: &T) -> MatchResult<bool> {
        let matched = self.compare(expected, actual)?;
        if !matched {
            self.report_mismatch(&format!(
                "argument of type `{}` did not match the expected value",
                type_name::<T>()
            ));
        }
        Ok(matched)
    }

    // ── Failure location ─────────────────────────────────────────

    pub fn set_location(&mut self, location: Option<SourceLocation>) {
        self.location.set_location(location);
    }

    #[must_use]
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.location()
    }

    pub fn set_mismatch_handler(&mut self, handler: MismatchHandler) {
        self.location.set_handler(handler);
    }

    /// Forwards `message` to the mismatch handler if a location is set.
    pub fn report_mismatch(&self, message: &str) {
        self.location.report_mismatch(message);
    }

    #[must_use]
    pub const fn location_context(&self) -> &LocationContext {
        &self.location
    }

    pub fn location_context_mut(&mut self) -> &mut LocationContext {
        &mut self.location
    }
}

//! The process-wide default matcher.
//!
//! Initialized explicitly with [`init`] or [`init_with`], or implicitly with
//! built-ins on first access. Lives for the rest of the process. Tests that
//! need isolation should construct their own [`Matcher`] instead of
//! registering into this one.

use crate::{Matcher, MatcherConfig};
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

static SHARED: OnceLock<RwLock<Matcher>> = OnceLock::new();

/// Initializes the default matcher with built-ins.
///
/// Returns `false` if it was already initialized.
pub fn init() -> bool {
    init_with(MatcherConfig::default())
}

/// Initializes the default matcher from `config`.
///
/// Returns `false`, leaving the existing matcher untouched, if it was
/// already initialized.
pub fn init_with(config: MatcherConfig) -> bool {
    let mut created = false;
    SHARED.get_or_init(|| {
        created = true;
        debug!("Initializing default matcher: {config:?}");
        RwLock::new(Matcher::with_config(config))
    });
    created
}

/// Returns the default matcher, initializing it with built-ins if needed.
pub fn shared() -> &'static RwLock<Matcher> {
    SHARED.get_or_init(|| RwLock::new(Matcher::new()))
}

/// Runs `f` with shared access to the default matcher.
pub fn with<R>(f: impl FnOnce(&Matcher) -> R) -> R {
    let guard = shared().read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Runs `f` with exclusive access to the default matcher.
pub fn with_mut<R>(f: impl FnOnce(&mut Matcher) -> R) -> R {
    let mut guard = shared().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

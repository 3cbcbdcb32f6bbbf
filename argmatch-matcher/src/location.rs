//! Failure-location side channel.
//!
//! Holds at most one "current" source location and forwards mismatch
//! messages to an injected handler while a location is set. Unrelated to
//! comparator resolution.

use argmatch_types::SourceLocation;
use std::fmt;
use std::sync::Arc;

/// Receives `(message, location)` for every reported mismatch.
pub type MismatchHandler = Arc<dyn Fn(&str, &SourceLocation) + Send + Sync>;

/// The current failure location plus the handler that reports against it.
#[derive(Clone)]
pub struct LocationContext {
    location: Option<SourceLocation>,
    handler: MismatchHandler,
}

impl LocationContext {
    /// Creates a context that reports through `handler`.
    #[must_use]
    pub fn new(handler: MismatchHandler) -> Self {
        Self {
            location: None,
            handler,
        }
    }

    /// Sets or clears the current location.
    pub fn set_location(&mut self, location: Option<SourceLocation>) {
        self.location = location;
    }

    pub fn clear_location(&mut self) {
        self.location = None;
    }

    #[must_use]
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    /// Replaces the handler. The current location is kept.
    pub fn set_handler(&mut self, handler: MismatchHandler) {
        self.handler = handler;
    }

    /// Forwards `message` to the handler if a location is set; otherwise
    /// does nothing.
    pub fn report_mismatch(&self, message: &str) {
        if let Some(location) = &self.location {
            (self.handler)(message, location);
        }
    }

    /// Returns a context sharing this handler but with no location set.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self::new(Arc::clone(&self.handler))
    }
}

/// The default handler fails the running test.
impl Default for LocationContext {
    fn default() -> Self {
        Self::new(Arc::new(fail_test))
    }
}

fn fail_test(message: &str, location: &SourceLocation) {
    panic!("{location}: {message}");
}

impl fmt::Debug for LocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationContext")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

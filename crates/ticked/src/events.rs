//! Startup event subscription.
//!
//! User configuration registers handlers against an event kind; the host
//! fires `Startup` exactly once during bootstrap, invoking handlers
//! sequentially in registration order on the bootstrapping thread, strictly
//! before the render loop starts.
//!
//! A handler that fails (or panics) aborts startup with a diagnostic naming
//! the failing handler. Partial initialization — theme set but bar not set —
//! is a user-visible inconsistent state, so remaining handlers are not run.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;
use tracing::{debug, info};

use crate::api::Api;

/// Event kinds configuration code can subscribe to.
///
/// `Startup` is the only kind today; the enum keeps the registration surface
/// stable if the host grows shutdown or resize hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// One-shot initialization signal, fired before interactive use begins.
    Startup,
}

/// Error type startup handlers report through.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A startup handler: receives the capability object, runs once.
pub type HandlerFn = Box<dyn Fn(&mut Api) -> Result<(), HandlerError> + Send + Sync>;

/// Errors aborting the startup sequence.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A handler returned an error.
    #[error("startup handler `{name}` failed")]
    Handler {
        name: String,
        #[source]
        source: HandlerError,
    },

    /// A handler panicked.
    #[error("startup handler `{name}` panicked")]
    HandlerPanic { name: String },

    /// `Startup` fires once per process lifetime.
    #[error("startup event already fired")]
    AlreadyFired,
}

struct Subscription {
    name: String,
    handler: HandlerFn,
}

/// Ordered event-to-handler registry.
///
/// Registration order is invocation order; this is the only ordering
/// guarantee configuration code gets, and the only one it needs.
#[derive(Default)]
pub struct ExtensionRegistry {
    startup: Vec<Subscription>,
    fired: bool,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler to the ordered list for an event kind.
    ///
    /// The name identifies the handler in abort diagnostics.
    pub fn subscribe<F>(&mut self, kind: EventKind, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut Api) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let name = name.into();
        match kind {
            EventKind::Startup => {
                debug!(
                    event.kind = "startup",
                    handler.name = %name,
                    handler.position = self.startup.len(),
                    "Handler subscribed"
                );
                self.startup.push(Subscription {
                    name,
                    handler: Box::new(handler),
                });
            }
        }
    }

    /// Number of handlers registered for an event kind.
    pub fn len(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Startup => self.startup.len(),
        }
    }

    /// Returns true if no handler is registered for the kind.
    pub fn is_empty(&self, kind: EventKind) -> bool {
        self.len(kind) == 0
    }

    /// Fires the `Startup` event: all handlers, in order, exactly once.
    ///
    /// # Errors
    /// Returns [`StartupError`] naming the failing handler on the first
    /// error or panic; remaining handlers do not run. Returns
    /// [`StartupError::AlreadyFired`] on a second call.
    pub fn fire_startup(&mut self, api: &mut Api) -> Result<(), StartupError> {
        if self.fired {
            return Err(StartupError::AlreadyFired);
        }
        self.fired = true;

        for sub in &self.startup {
            debug!(handler.name = %sub.name, "Running startup handler");
            let outcome = catch_unwind(AssertUnwindSafe(|| (sub.handler)(&mut *api)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(source)) => {
                    return Err(StartupError::Handler {
                        name: sub.name.clone(),
                        source,
                    });
                }
                Err(_) => {
                    return Err(StartupError::HandlerPanic {
                        name: sub.name.clone(),
                    });
                }
            }
        }

        info!(event.handlers = self.startup.len(), "Startup complete");
        Ok(())
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("startup", &self.startup.len())
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

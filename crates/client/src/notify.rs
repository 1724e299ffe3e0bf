//! Service traits injected into form controllers.
//!
//! The original admin UI reached for globally-mounted toast and router
//! providers; here those capabilities are explicit handles passed in at
//! construction.

/// Emits transient, non-blocking status messages to the user.
pub trait Notifier: Send + Sync {
    /// Report a completed operation.
    fn success(&self, message: &str);

    /// Report a failed operation. The form stays interactive afterwards.
    fn error(&self, message: &str);
}

/// The calling context's view of the world: what to do after a mutation
/// settles.
pub trait ViewContext: Send + Sync {
    /// Reload the current entity state so the view reflects what was just
    /// written.
    fn refresh(&self);

    /// Navigate to `path` (e.g. back to the root after a delete).
    fn navigate(&self, path: &str);
}

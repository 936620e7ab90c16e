//! View host trait.
//!
//! The [`ViewHost`] trait decouples the submission runtime from whatever
//! displays the control. A dashboard frontend re-renders a modal; the CLI
//! logs; tests record.

use crate::SubmitPhase;

/// The view that owns a submission control.
///
/// # Implementations
///
/// - **CLI**: prints progress and the final state
/// - **Simulation**: records renders and close calls for assertions
pub trait ViewHost: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Render the control in its current phase.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails. The runtime logs it and carries
    /// on; a failed render never changes the submission.
    fn render(&mut self, phase: &SubmitPhase) -> Result<(), Self::Error>;

    /// Close or reset the view.
    fn close(&mut self);
}

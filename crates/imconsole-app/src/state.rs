//! Observable submission state.

/// Where a submission is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Nothing attempted yet.
    #[default]
    Idle,
    /// A call is in flight.
    Submitting,
    /// Last attempt succeeded.
    Succeeded,
    /// Last attempt failed.
    Failed {
        /// Message shown to the user.
        error: String,
    },
}

impl SubmitPhase {
    /// Whether a call is in flight. Drives the spinner on the confirm button.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Failure message of the last attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

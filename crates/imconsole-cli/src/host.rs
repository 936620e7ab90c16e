//! Terminal view host.

use std::convert::Infallible;

use imconsole_app::{SubmitPhase, ViewHost};

/// Hosts a confirm control in the terminal. Progress goes to the log.
#[derive(Debug, Default)]
pub struct CliHost;

impl ViewHost for CliHost {
    type Error = Infallible;

    fn render(&mut self, phase: &SubmitPhase) -> Result<(), Self::Error> {
        match phase {
            SubmitPhase::Submitting => tracing::info!("submitting"),
            other => tracing::debug!(phase = ?other, "render"),
        }
        Ok(())
    }

    fn close(&mut self) {
        tracing::debug!("view closed");
    }
}

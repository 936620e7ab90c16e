//! Confirm controls of the console's modals.
//!
//! Each constructor returns a [`Submission`] configured the way its modal
//! behaves: which operation it issues and whether a phrase must be typed.

use imconsole_core::ops::{
    CreateDataStream, DeleteAliases, DeleteTemplates, FlushIndices, FlushTarget,
};

use crate::{ConfirmGate, Submission};

/// Flush modal. Confirms without a phrase and closes on any outcome.
pub fn flush<S: Into<String>>(
    target: FlushTarget,
    items: impl IntoIterator<Item = S>,
) -> Submission<FlushIndices> {
    Submission::new(FlushIndices { target, items: items.into_iter().map(Into::into).collect() })
}

/// Delete-aliases modal. Requires typing `delete`; stays open on failure.
pub fn delete_aliases<S: Into<String>>(
    aliases: impl IntoIterator<Item = S>,
) -> Submission<DeleteAliases> {
    Submission::new(DeleteAliases { aliases: aliases.into_iter().map(Into::into).collect() })
        .with_gate(ConfirmGate::delete())
}

/// Delete-templates modal. Requires typing `delete`; stays open on failure.
pub fn delete_templates<S: Into<String>>(
    templates: impl IntoIterator<Item = S>,
) -> Submission<DeleteTemplates> {
    Submission::new(DeleteTemplates { templates: templates.into_iter().map(Into::into).collect() })
        .with_gate(ConfirmGate::delete())
}

/// Create-data-stream form. Stays open on failure.
pub fn create_data_stream(name: impl Into<String>) -> Submission<CreateDataStream> {
    Submission::new(CreateDataStream { name: name.into() })
}

/// Title of the flush modal.
pub fn flush_title(target: FlushTarget) -> String {
    format!("Flush {}", target.as_str())
}

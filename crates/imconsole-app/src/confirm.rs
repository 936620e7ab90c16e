//! Typed confirmation for destructive actions.

/// Phrase the user types to enable a delete.
pub const DELETE_PHRASE: &str = "delete";

/// Enables a destructive action only once the exact phrase is typed.
///
/// Matching is case-sensitive and nothing is trimmed: `"Delete"` and
/// `"delete "` keep the gate closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmGate {
    phrase: String,
    input: String,
}

impl ConfirmGate {
    /// Gate requiring `phrase`.
    pub fn new(phrase: impl Into<String>) -> Self {
        Self { phrase: phrase.into(), input: String::new() }
    }

    /// Gate requiring [`DELETE_PHRASE`].
    pub fn delete() -> Self {
        Self::new(DELETE_PHRASE)
    }

    /// Replace the typed text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Phrase the user must type; also the field's placeholder.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Whether the action is enabled.
    pub fn is_open(&self) -> bool {
        self.input == self.phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_phrase_opens() {
        let mut gate = ConfirmGate::delete();
        assert!(!gate.is_open());

        for text in ["delet", "Delete", "delete ", " delete", "DELETE", ""] {
            gate.set_input(text);
            assert!(!gate.is_open(), "{text:?} must not open the gate");
        }

        gate.set_input("delete");
        assert!(gate.is_open());
    }
}

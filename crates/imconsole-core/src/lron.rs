//! Long-running-operation notification (lron) configs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Operation kinds that have a default lron config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Reindex.
    Reindex,
    /// Split index.
    Split,
    /// Shrink index.
    Shrink,
    /// Open index.
    Open,
    /// Force merge.
    ForceMerge,
}

impl ActionType {
    /// All action types, in display order.
    pub const ALL: [Self; 5] = [Self::Reindex, Self::Split, Self::Shrink, Self::Open, Self::ForceMerge];

    /// Name used in the `LRON:<name>` config key.
    pub fn lron_name(self) -> &'static str {
        match self {
            Self::Reindex => "reindex",
            Self::Split => "split",
            Self::Shrink => "shrink",
            Self::Open => "open",
            Self::ForceMerge => "forcemerge",
        }
    }

    /// Parse an lron name back into an action type.
    pub fn from_lron_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.lron_name() == name)
    }
}

/// When to notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LronCondition {
    /// Notify on success.
    #[serde(default)]
    pub success: bool,
    /// Notify on failure.
    #[serde(default)]
    pub failure: bool,
}

/// Notification channel reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel id.
    pub id: String,
}

/// One lron config document.
///
/// Unknown fields are kept in `extra` so configs survive a read-modify-write.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LronConfig {
    /// Task the config is bound to. `None` for per-action defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Action the config applies to. `None` for per-task configs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    /// When to notify.
    #[serde(default)]
    pub lron_condition: LronCondition,
    /// Where to notify.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Fields this console does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrapper the backend puts around each config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LronConfigEntry {
    /// The config.
    pub lron_config: LronConfig,
}

/// Response of an lron config lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LronConfigList {
    /// Matching configs.
    #[serde(default)]
    pub lron_configs: Vec<LronConfigEntry>,
    /// Total number of matches.
    #[serde(default)]
    pub total_number: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lron_names_round_trip() {
        for action in ActionType::ALL {
            assert_eq!(ActionType::from_lron_name(action.lron_name()), Some(action));
        }
        assert_eq!(ActionType::from_lron_name("delete"), None);
    }

    #[test]
    fn config_keeps_unknown_fields() {
        let raw = json!({
            "action_name": "reindex",
            "lron_condition": { "success": true, "failure": false },
            "channels": [{ "id": "chan" }],
            "priority": 3
        });
        let config: LronConfig = serde_json::from_value(raw.clone()).expect("config");

        assert_eq!(config.action_name.as_deref(), Some("reindex"));
        assert!(config.lron_condition.success);
        assert_eq!(config.extra.get("priority"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&config).ok(), Some(raw));
    }
}

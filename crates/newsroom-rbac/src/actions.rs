//! # Actions
//!
//! Defines all actions that can be performed on resources. An action never
//! implies another action: the capability table grants each one explicitly,
//! so a role holding `update` does not automatically hold `read`.

use serde::{Deserialize, Serialize};

/// Actions that can be performed on resources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read/view resource.
    Read,

    /// Create new resource.
    Create,

    /// Update existing resource.
    Update,

    /// Delete resource.
    Delete,

    /// Publish content, making it publicly visible.
    Publish,

    /// Administer resource settings.
    Manage,

    /// View and invite organization members.
    Members,

    /// Change organization settings.
    Settings,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Publish => "publish",
            Action::Manage => "manage",
            Action::Members => "members",
            Action::Settings => "settings",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(Action)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" | "view" | "get" => Some(Action::Read),
            "create" | "add" | "new" => Some(Action::Create),
            "update" | "edit" | "write" | "modify" | "patch" => Some(Action::Update),
            "delete" | "remove" | "destroy" => Some(Action::Delete),
            "publish" => Some(Action::Publish),
            "manage" | "admin" | "administer" => Some(Action::Manage),
            "members" | "invite" => Some(Action::Members),
            "settings" | "configure" => Some(Action::Settings),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::Read,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::Publish,
            Action::Manage,
            Action::Members,
            Action::Settings,
        ]
    }

    /// Check if this is a read-only action.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::Read)
    }

    /// Check if this is a write action.
    pub fn is_write(&self) -> bool {
        !self.is_read_only()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(Action::parse("read"), Some(Action::Read));
        assert_eq!(Action::parse("view"), Some(Action::Read));
        assert_eq!(Action::parse("update"), Some(Action::Update));
        assert_eq!(Action::parse("edit"), Some(Action::Update));
        assert_eq!(Action::parse("publish"), Some(Action::Publish));
        assert_eq!(Action::parse("members"), Some(Action::Members));
        assert_eq!(Action::parse("invalid"), None);
    }

    #[test]
    fn test_action_as_str() {
        assert_eq!(Action::Read.as_str(), "read");
        assert_eq!(Action::Publish.as_str(), "publish");
        assert_eq!(Action::Members.as_str(), "members");
        assert_eq!(Action::Settings.as_str(), "settings");
    }

    #[test]
    fn test_read_only() {
        assert!(Action::Read.is_read_only());
        assert!(!Action::Publish.is_read_only());
        assert!(Action::Update.is_write());
    }

    #[test]
    fn test_all_actions_count() {
        assert_eq!(Action::all().len(), 8);
    }
}

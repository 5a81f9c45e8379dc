//! Editorial roles
//!
//! This module defines the four roles a member can hold within an
//! organization. Capabilities are assigned explicitly per role by the
//! capability table in [`crate::resolver`]; there is no implicit
//! hierarchy — a check that should accept several roles must list
//! every one of them.

use serde::{Deserialize, Serialize};

/// Member role within an organization.
///
/// A membership carries exactly one of these roles. The role is immutable
/// once assigned; changing it means replacing the membership record.
///
/// # Permission Model
///
/// - **Owner**: full organization control, every permission
/// - **Editor**: full post lifecycle including publish, may invite members
/// - **Writer**: creates and edits their own posts, cannot publish
/// - **Viewer**: read-only access to posts
///
/// # Examples
///
/// ```
/// use newsroom_rbac::Role;
///
/// assert_eq!(Role::parse("editor"), Some(Role::Editor));
/// assert_eq!(Role::Editor.as_str(), "editor");
/// assert_eq!(Role::parse("superuser"), None);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full organization control
    Owner,

    /// Full post lifecycle, may invite members
    Editor,

    /// Creates and edits own posts
    Writer,

    /// Read-only access
    Viewer,
}

impl Role {
    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "owner" => Some(Self::Owner),
            "editor" => Some(Self::Editor),
            "writer" => Some(Self::Writer),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Editor => "editor",
            Self::Writer => "writer",
            Self::Viewer => "viewer",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Editor => "Editor",
            Self::Writer => "Writer",
            Self::Viewer => "Viewer",
        }
    }

    /// Get all roles.
    ///
    /// Useful for exhaustive capability checks and admin UIs.
    pub fn all() -> Vec<Self> {
        vec![Self::Owner, Self::Editor, Self::Writer, Self::Viewer]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("owner"), Some(Role::Owner));
        assert_eq!(Role::parse("EDITOR"), Some(Role::Editor));
        assert_eq!(Role::parse("writer"), Some(Role::Writer));
        assert_eq!(Role::parse("viewer"), Some(Role::Viewer));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_all_roles_count() {
        assert_eq!(Role::all().len(), 4);
    }
}

//! # Resource Types
//!
//! Defines the resource types permissions can be attached to. The
//! authorization core only reasons about posts, organizations, and user
//! accounts; everything else on the platform is gated at coarser levels.

use serde::{Deserialize, Serialize};

/// Resource types that can have permissions assigned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Editorial content (drafts through published articles).
    Post,
    /// The organization itself (settings, membership roster).
    Org,
    /// User accounts within the organization.
    User,
}

impl ResourceType {
    /// Get the string representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Post => "post",
            ResourceType::Org => "org",
            ResourceType::User => "user",
        }
    }

    /// Parse resource type from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "post" => Some(ResourceType::Post),
            "org" | "organization" => Some(ResourceType::Org),
            "user" => Some(ResourceType::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

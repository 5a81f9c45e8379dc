//! # Permissions
//!
//! Core permission types and sets. A permission combines a resource type
//! with an action, rendered as `resource:action` on the wire.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::actions::Action;
use crate::resources::ResourceType;

/// A permission is a combination of resource type and action.
///
/// # Example
///
/// ```
/// use newsroom_rbac::{Action, Permission, ResourceType};
///
/// let perm = Permission::new(ResourceType::Post, Action::Publish);
/// assert_eq!(perm.to_string(), "post:publish");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Permission {
    /// The resource type this permission applies to.
    pub resource: ResourceType,
    /// The action allowed on the resource.
    pub action: Action,
}

impl Permission {
    /// Create a new permission.
    ///
    /// # Arguments
    ///
    /// * `resource` - The resource type
    /// * `action` - The action allowed
    pub fn new(resource: ResourceType, action: Action) -> Self {
        Self { resource, action }
    }

    /// Parse from string (e.g., "post:publish").
    ///
    /// # Arguments
    ///
    /// * `s` - The permission string to parse
    ///
    /// # Returns
    ///
    /// `Some(Permission)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use newsroom_rbac::{Action, Permission, ResourceType};
    ///
    /// let perm = Permission::from_string("org:members").unwrap();
    /// assert_eq!(perm.resource, ResourceType::Org);
    /// assert_eq!(perm.action, Action::Members);
    /// assert!(Permission::from_string("org").is_none());
    /// ```
    pub fn from_string(s: &str) -> Option<Self> {
        let (resource, action) = s.split_once(':')?;
        Some(Self {
            resource: ResourceType::parse(resource)?,
            action: Action::parse(action)?,
        })
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

/// A set of permissions assigned to a role.
///
/// # Example
///
/// ```
/// use newsroom_rbac::{Action, Permission, PermissionSet, ResourceType};
///
/// let mut set = PermissionSet::new();
/// set.add(Permission::new(ResourceType::Post, Action::Read));
/// set.add(Permission::new(ResourceType::Post, Action::Create));
///
/// assert!(set.has(&Permission::new(ResourceType::Post, Action::Read)));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    permissions: HashSet<Permission>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Add a permission to the set.
    pub fn add(&mut self, permission: Permission) {
        self.permissions.insert(permission);
    }

    /// Add multiple permissions to the set.
    pub fn add_all<I>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = Permission>,
    {
        for perm in permissions {
            self.add(perm);
        }
    }

    /// Remove a permission from the set.
    ///
    /// # Returns
    ///
    /// `true` if the permission was present, `false` otherwise
    pub fn remove(&mut self, permission: &Permission) -> bool {
        self.permissions.remove(permission)
    }

    /// Check if the set contains a permission.
    ///
    /// Exact membership only: holding `post:update` does not grant
    /// `post:read` unless `post:read` is also in the set.
    pub fn has(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Get all permissions in the set.
    pub fn all(&self) -> Vec<Permission> {
        self.permissions.iter().copied().collect()
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        for perm in &other.permissions {
            self.permissions.insert(*perm);
        }
    }

    /// Create from a list of permission strings.
    ///
    /// Unparseable entries are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use newsroom_rbac::PermissionSet;
    ///
    /// let set = PermissionSet::from_strings(&["post:read", "post:create"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_strings(perms: &[&str]) -> Self {
        let mut set = Self::new();
        for perm in perms {
            if let Some(p) = Permission::from_string(perm) {
                set.add(p);
            }
        }
        set
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Check if this set contains all permissions from another set.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.permissions.iter().all(|perm| self.has(perm))
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        let mut set = PermissionSet::new();
        for perm in iter {
            set.add(perm);
        }
        set
    }
}

//! Membership domain model
//!
//! A membership binds a user to an organization with a role. Each user holds
//! at most one membership per organization; the storage layer enforces the
//! (organization, user) uniqueness. The role on a membership does not change
//! in place — updating a member's role replaces the record.

use chrono::{DateTime, Utc};
use newsroom_rbac::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization membership linking a user to an organization.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use newsroom_org::Membership;
/// use newsroom_rbac::Role;
///
/// let org_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let membership = Membership::new(org_id, user_id, Role::Writer);
/// assert_eq!(membership.role, Role::Writer);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Unique membership ID
    pub id: Uuid,

    /// Organization ID
    pub organization_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the organization
    pub role: Role,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who invited this user (if applicable)
    pub invited_by: Option<Uuid>,
}

impl Membership {
    /// Creates a new organization membership.
    ///
    /// The membership is created with a newly generated UUID v7 ID and the
    /// current timestamp for `joined_at`.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The organization ID
    /// * `user_id` - The user ID
    /// * `role` - The user's role in the organization
    pub fn new(organization_id: Uuid, user_id: Uuid, role: Role) -> Self {
        Self {
            id: Uuid::now_v7(),
            organization_id,
            user_id,
            role,
            joined_at: Utc::now(),
            invited_by: None,
        }
    }

    /// Set who invited this user.
    ///
    /// # Arguments
    ///
    /// * `inviter_id` - The user ID of who invited this user
    pub fn with_inviter(mut self, inviter_id: Uuid) -> Self {
        self.invited_by = Some(inviter_id);
        self
    }

    /// Replace this membership with one carrying a different role.
    ///
    /// Keeps the identity and join date of the original record; only the
    /// role (and optionally the inviter) changes. Used when an existing
    /// member accepts an invitation for a new role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_creation() {
        let org_id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let membership = Membership::new(org_id, user_id, Role::Editor);

        assert_eq!(membership.organization_id, org_id);
        assert_eq!(membership.user_id, user_id);
        assert_eq!(membership.role, Role::Editor);
        assert!(membership.invited_by.is_none());
    }

    #[test]
    fn test_membership_with_inviter() {
        let inviter_id = Uuid::now_v7();
        let membership = Membership::new(Uuid::now_v7(), Uuid::now_v7(), Role::Viewer)
            .with_inviter(inviter_id);

        assert_eq!(membership.invited_by, Some(inviter_id));
    }

    #[test]
    fn test_membership_role_replacement() {
        let membership = Membership::new(Uuid::now_v7(), Uuid::now_v7(), Role::Writer);
        let original_id = membership.id;
        let joined_at = membership.joined_at;

        let replaced = membership.with_role(Role::Editor);
        assert_eq!(replaced.role, Role::Editor);
        assert_eq!(replaced.id, original_id);
        assert_eq!(replaced.joined_at, joined_at);
    }
}

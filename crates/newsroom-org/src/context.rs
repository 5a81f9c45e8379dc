//! Request context
//!
//! Authorization decisions consume a verified identity and an organization
//! scope. Both arrive as plain values passed into every operation — there is
//! no process-wide "current user" state, and nothing here authenticates:
//! the principal and role claim were already validated upstream.

use newsroom_rbac::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A verified identity, as produced by the external authenticator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// User ID
    pub user_id: Uuid,

    /// Verified email address
    pub email: String,
}

impl Principal {
    /// Creates a principal from a verified identity.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The authenticated user's ID
    /// * `email` - The authenticated user's email
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}

/// A principal acting within a specific organization.
///
/// Carries the caller's role in that organization, resolved by the external
/// membership lookup before the request reaches the authorization core.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use newsroom_org::{OrgContext, Principal};
/// use newsroom_rbac::Role;
///
/// let principal = Principal::new(Uuid::now_v7(), "ann@example.com");
/// let ctx = OrgContext::new(principal, Uuid::now_v7(), Role::Editor);
/// assert_eq!(ctx.role, Role::Editor);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgContext {
    /// The verified identity making the request
    pub principal: Principal,

    /// The organization the request targets
    pub organization_id: Uuid,

    /// The caller's role within that organization
    pub role: Role,
}

impl OrgContext {
    /// Creates an organization-scoped context.
    ///
    /// # Arguments
    ///
    /// * `principal` - The verified identity
    /// * `organization_id` - The target organization
    /// * `role` - The caller's role within the organization
    pub fn new(principal: Principal, organization_id: Uuid, role: Role) -> Self {
        Self {
            principal,
            organization_id,
            role,
        }
    }

    /// The acting user's ID.
    pub fn user_id(&self) -> Uuid {
        self.principal.user_id
    }
}

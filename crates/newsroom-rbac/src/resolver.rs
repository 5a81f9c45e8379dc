//! # Permission Resolver
//!
//! Resolves what a role may do via a fixed capability table. The table is
//! not configurable at call time, and it is deliberately explicit: each role
//! lists every permission it holds, with no inheritance between roles and no
//! implication between actions.

use crate::actions::Action;
use crate::permissions::{Permission, PermissionSet};
use crate::resources::ResourceType;
use crate::roles::Role;

/// Answers capability queries against the static role capability table.
///
/// The resolver is pure: it has no state and never touches storage, so
/// callers may invoke it freely on any request path. Anything it cannot
/// interpret resolves to "no permission" — it never errors.
///
/// # Examples
///
/// ```
/// use newsroom_rbac::{Action, Permission, PermissionResolver, ResourceType, Role};
///
/// let publish = Permission::new(ResourceType::Post, Action::Publish);
/// assert!(PermissionResolver::has_permission(Role::Editor, &publish));
/// assert!(!PermissionResolver::has_permission(Role::Writer, &publish));
/// ```
pub struct PermissionResolver;

impl PermissionResolver {
    /// Get the full permission set for a role.
    ///
    /// Capability table:
    /// - **owner**: every permission
    /// - **editor**: post:create/read/update/delete/publish, org:members
    /// - **writer**: post:create/read/update (ownership enforced by the
    ///   post workflow, not here)
    /// - **viewer**: post:read
    pub fn role_permissions(role: Role) -> PermissionSet {
        use Action::*;
        use ResourceType::*;

        let perms: &[Permission] = match role {
            Role::Owner => &[
                Permission::new(Post, Create),
                Permission::new(Post, Read),
                Permission::new(Post, Update),
                Permission::new(Post, Delete),
                Permission::new(Post, Publish),
                Permission::new(Org, Manage),
                Permission::new(Org, Members),
                Permission::new(Org, Settings),
                Permission::new(User, Manage),
            ],
            Role::Editor => &[
                Permission::new(Post, Create),
                Permission::new(Post, Read),
                Permission::new(Post, Update),
                Permission::new(Post, Delete),
                Permission::new(Post, Publish),
                Permission::new(Org, Members),
            ],
            Role::Writer => &[
                Permission::new(Post, Create),
                Permission::new(Post, Read),
                Permission::new(Post, Update),
            ],
            Role::Viewer => &[Permission::new(Post, Read)],
        };

        perms.iter().copied().collect()
    }

    /// Check whether a role holds a permission.
    pub fn has_permission(role: Role, permission: &Permission) -> bool {
        Self::role_permissions(role).has(permission)
    }

    /// Check whether a role string holds a permission string.
    ///
    /// Fails closed: an unknown role or unparseable permission yields
    /// `false`, never an error.
    pub fn has_permission_str(role: &str, permission: &str) -> bool {
        match (Role::parse(role), Permission::from_string(permission)) {
            (Some(role), Some(permission)) => Self::has_permission(role, &permission),
            _ => false,
        }
    }

    /// Check whether the actual role is one of the required roles.
    ///
    /// Set membership only — there is no hierarchy inference, so a check
    /// that should accept owners must list `Role::Owner` explicitly.
    pub fn has_role(actual: Role, required: &[Role]) -> bool {
        required.contains(&actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(s: &str) -> Permission {
        Permission::from_string(s).unwrap()
    }

    /// The full capability table, verified entry by entry.
    #[test]
    fn test_capability_table_exhaustive() {
        let table: &[(&str, &[&str])] = &[
            (
                "owner",
                &[
                    "post:create",
                    "post:read",
                    "post:update",
                    "post:delete",
                    "post:publish",
                    "org:manage",
                    "org:members",
                    "org:settings",
                    "user:manage",
                ],
            ),
            (
                "editor",
                &[
                    "post:create",
                    "post:read",
                    "post:update",
                    "post:delete",
                    "post:publish",
                    "org:members",
                ],
            ),
            ("writer", &["post:create", "post:read", "post:update"]),
            ("viewer", &["post:read"]),
        ];

        let all_perms: Vec<Permission> = PermissionResolver::role_permissions(Role::Owner).all();

        for (role_str, granted) in table {
            let role = Role::parse(role_str).unwrap();
            let expected: Vec<Permission> = granted.iter().map(|s| perm(s)).collect();

            for p in &all_perms {
                assert_eq!(
                    PermissionResolver::has_permission(role, p),
                    expected.contains(p),
                    "role {} permission {}",
                    role_str,
                    p
                );
            }
            assert_eq!(
                PermissionResolver::role_permissions(role).len(),
                expected.len()
            );
        }
    }

    #[test]
    fn test_editor_cannot_manage_org() {
        assert!(!PermissionResolver::has_permission(
            Role::Editor,
            &perm("org:manage")
        ));
        assert!(!PermissionResolver::has_permission(
            Role::Editor,
            &perm("user:manage")
        ));
        assert!(PermissionResolver::has_permission(
            Role::Editor,
            &perm("org:members")
        ));
    }

    #[test]
    fn test_writer_cannot_publish_or_delete() {
        assert!(!PermissionResolver::has_permission(
            Role::Writer,
            &perm("post:publish")
        ));
        assert!(!PermissionResolver::has_permission(
            Role::Writer,
            &perm("post:delete")
        ));
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        assert!(!PermissionResolver::has_permission_str("superadmin", "post:read"));
        assert!(!PermissionResolver::has_permission_str("", "post:read"));
        assert!(!PermissionResolver::has_permission_str("owner", "post:teleport"));
        assert!(PermissionResolver::has_permission_str("owner", "post:read"));
    }

    #[test]
    fn test_has_role_is_set_membership() {
        assert!(PermissionResolver::has_role(
            Role::Editor,
            &[Role::Owner, Role::Editor]
        ));
        // Owner does not satisfy an editor-only check implicitly
        assert!(!PermissionResolver::has_role(Role::Owner, &[Role::Editor]));
        assert!(!PermissionResolver::has_role(Role::Viewer, &[]));
    }
}

//! # Newsroom RBAC (Role-Based Access Control)
//!
//! This crate provides role and permission resolution for the Newsroom
//! platform, shared by every service that gates editorial operations.
//!
//! ## Overview
//!
//! The newsroom-rbac crate handles:
//! - **Roles**: The four member roles (owner, editor, writer, viewer)
//! - **Resources**: Resource types permissions attach to
//! - **Actions**: Operations that can be performed on resources
//! - **Permissions**: Resource + Action combinations
//! - **Resolution**: The fixed role capability table
//!
//! ## Architecture
//!
//! ```text
//! Permission = Resource + Action
//!
//! Examples:
//!   "post:publish"  - Publish posts
//!   "org:members"   - View and invite organization members
//! ```
//!
//! ## Capability model
//!
//! Capabilities are explicit per role. There is no role hierarchy to
//! infer from and no action implication: a role holds exactly the
//! permissions the table lists for it, and unknown input fails closed.
//!
//! ## Usage
//!
//! ```rust
//! use newsroom_rbac::{Action, Permission, PermissionResolver, ResourceType, Role};
//!
//! let perm = Permission::new(ResourceType::Post, Action::Publish);
//! assert_eq!(perm.to_string(), "post:publish");
//!
//! assert!(PermissionResolver::has_permission(Role::Owner, &perm));
//! assert!(!PermissionResolver::has_permission(Role::Viewer, &perm));
//!
//! // Role checks are set membership, never hierarchy
//! assert!(PermissionResolver::has_role(Role::Editor, &[Role::Owner, Role::Editor]));
//! ```

pub mod actions;
pub mod permissions;
pub mod resolver;
pub mod resources;
pub mod roles;

// Re-export main types for convenience
pub use actions::Action;
pub use permissions::{Permission, PermissionSet};
pub use resolver::PermissionResolver;
pub use resources::ResourceType;
pub use roles::Role;

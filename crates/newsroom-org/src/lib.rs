//! # Newsroom Organization Management
//!
//! This crate provides the multi-tenant domain models for the Newsroom
//! platform: memberships, invitations, posts, and the per-request context
//! consumed by the authorization core.
//!
//! ## Overview
//!
//! The newsroom-org crate handles:
//! - **Memberships**: User-organization bindings with a role
//! - **Invitations**: Token-bearing, time-limited membership offers
//! - **Posts**: Editorial content with a workflow status
//! - **Context**: Verified principal + organization scope per request
//!
//! ## Architecture
//!
//! ```text
//! User
//!   ├─ Membership ─→ Organization (role: owner/editor/writer/viewer)
//!   ├─ Invitation ─→ Organization (pending → accepted/canceled/expired)
//!   └─ Post (draft → in_review → published/rejected)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Duration;
//! use uuid::Uuid;
//! use newsroom_org::{Invitation, Membership, Post};
//! use newsroom_rbac::Role;
//!
//! let org_id = Uuid::now_v7();
//! let owner_id = Uuid::now_v7();
//!
//! // Invite a new editor
//! let invitation = Invitation::new(
//!     org_id,
//!     "bob@example.com",
//!     Role::Editor,
//!     owner_id,
//!     Some(Duration::days(14)),
//! );
//!
//! // A writer's new draft
//! let post = Post::new(org_id, owner_id, "Headline", "Body");
//! # let _ = (invitation, post);
//! ```
//!
//! ## Cross-crate integration
//!
//! This crate is designed to work with:
//! - `newsroom-rbac`: Role and permission resolution
//! - `newsroom-authz`: The workflow and lifecycle services that own all
//!   writes to these records

pub mod context;
pub mod invitation;
pub mod membership;
pub mod post;
pub mod user;

// Re-export main types for convenience
pub use context::{OrgContext, Principal};
pub use invitation::{Invitation, InvitationStatus};
pub use membership::Membership;
pub use post::{Post, PostStatus};
pub use user::User;

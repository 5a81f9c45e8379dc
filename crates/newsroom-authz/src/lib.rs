//! # Newsroom Authorization Core
//!
//! This crate is the authorization and workflow core of the Newsroom
//! platform: it decides what a role may do, enforces the editorial state
//! machine over posts, and manages the invitation lifecycle including the
//! exactly-once conversion of an accepted invitation into a membership.
//!
//! ## Overview
//!
//! The newsroom-authz crate handles:
//! - **Gateway**: The single entry point wrapping every protected operation
//! - **Workflow**: The post-status state machine (role + ownership gated)
//! - **Invitations**: Issue, resend, cancel, accept with lazy expiry
//! - **Membership transaction**: The atomic accept-to-membership write
//! - **Storage**: Transactional store traits plus an in-memory backend
//!
//! ## Control flow
//!
//! ```text
//! request (verified principal + org role)
//!   └─ AuthorizationGateway
//!        ├─ PermissionResolver      "may this role do X?"
//!        ├─ PostWorkflow            post status transitions
//!        └─ InvitationLifecycle     invitation state
//!              └─ MembershipTransaction   atomic accept commit
//! ```
//!
//! ## Concurrency
//!
//! Each check or accept runs on its own task; correctness under concurrent
//! accepts of the same token is enforced at the storage layer, not by
//! in-process coordination. The membership transaction re-verifies the
//! invitation under its own transaction, so exactly one of N racing
//! accepts commits and the rest observe `InvitationAlreadyResolved`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use newsroom_authz::{AuthorizationGateway, AuthzConfig, MemoryStore};
//! use newsroom_org::{OrgContext, Principal};
//! use newsroom_rbac::Role;
//!
//! # async fn example() -> Result<(), newsroom_authz::AuthzError> {
//! let store = Arc::new(MemoryStore::new());
//! let gateway = AuthorizationGateway::new(store, AuthzConfig::from_env());
//!
//! let ctx = OrgContext::new(
//!     Principal::new(Uuid::now_v7(), "ann@example.com"),
//!     Uuid::now_v7(),
//!     Role::Editor,
//! );
//! let invitation = gateway.create_invitation(&ctx, "bob@example.com", Role::Writer).await?;
//! # let _ = invitation;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod invitations;
pub mod memory;
pub mod retry;
pub mod store;
pub mod transaction;
pub mod workflow;

// Re-export main types for convenience
pub use config::AuthzConfig;
pub use error::{AuthzError, AuthzResult};
pub use gateway::{AuthorizationGateway, Requirement};
pub use invitations::InvitationLifecycle;
pub use memory::MemoryStore;
pub use store::{Store, StoreError, StoreResult, Transaction};
pub use transaction::MembershipTransaction;
pub use workflow::{PostUpdate, PostWorkflow};

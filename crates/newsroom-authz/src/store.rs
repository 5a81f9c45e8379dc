//! Storage abstraction
//!
//! Membership, invitation, and post rows are the only mutable shared
//! resources in the authorization core, and all mutation flows through a
//! [`Transaction`]: writes are staged against a transaction and become
//! visible only on [`Transaction::commit`]. Dropping a transaction without
//! committing discards its staged writes.
//!
//! Correctness under concurrent accepts relies on the backend's isolation:
//! at minimum, two transactions must not both observe the same invitation
//! as `pending` and both commit. The in-memory backend serializes
//! transactions outright; a SQL backend would use read-committed plus a
//! compare-and-set on the invitation status.

use async_trait::async_trait;
use newsroom_org::{Invitation, Membership, Post, User};
use thiserror::Error;
use uuid::Uuid;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend unreachable or timed out; the operation may be retried
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A transactional store for the authorization core's rows.
#[async_trait]
pub trait Store: Send + Sync {
    /// Begin a new transaction.
    async fn begin(&self) -> StoreResult<Box<dyn Transaction>>;
}

/// A single atomic unit of work against the store.
///
/// Reads observe committed state plus this transaction's own staged
/// writes. All staged writes are applied together by `commit` or
/// discarded together when the transaction is dropped.
#[async_trait]
pub trait Transaction: Send {
    /// Look up a registered user by email.
    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Look up an invitation by ID.
    async fn invitation(&self, id: Uuid) -> StoreResult<Option<Invitation>>;

    /// Look up an invitation by its bearer token.
    async fn invitation_by_token(&self, token: &str) -> StoreResult<Option<Invitation>>;

    /// Find the pending invitation for an (organization, email) pair, if any.
    ///
    /// Only rows whose persisted status is `pending` are returned; the
    /// caller applies lazy expiry on top.
    async fn pending_invitation(
        &self,
        organization_id: Uuid,
        email: &str,
    ) -> StoreResult<Option<Invitation>>;

    /// Look up a membership by (organization, user).
    async fn membership(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Option<Membership>>;

    /// Look up a post by ID.
    async fn post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Stage an invitation insert or update.
    async fn put_invitation(&mut self, invitation: Invitation) -> StoreResult<()>;

    /// Stage a membership upsert, keyed on (organization, user).
    async fn put_membership(&mut self, membership: Membership) -> StoreResult<()>;

    /// Stage a post insert or update.
    async fn put_post(&mut self, post: Post) -> StoreResult<()>;

    /// Apply all staged writes atomically.
    async fn commit(self: Box<Self>) -> StoreResult<()>;
}

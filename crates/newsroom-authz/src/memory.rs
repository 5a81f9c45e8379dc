//! In-memory store backend
//!
//! Backs the [`Store`] traits with plain hash maps behind a tokio mutex.
//! A transaction holds the mutex for its whole lifetime, so transactions
//! are fully serialized — stronger isolation than required, which makes
//! this backend a correctness reference for tests as well as a usable
//! store for single-process deployments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use newsroom_org::{Invitation, Membership, Post, User};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::store::{Store, StoreError, StoreResult, Transaction};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    invitations: HashMap<Uuid, Invitation>,
    memberships: HashMap<(Uuid, Uuid), Membership>,
    posts: HashMap<Uuid, Post>,
}

/// In-memory transactional store.
///
/// Cloneable handle; all clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    fail_begins: Arc<AtomicU32>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` transactions fail with `StoreError::Unavailable`.
    ///
    /// Test hook for exercising transient-failure handling.
    pub fn fail_next_begins(&self, n: u32) {
        self.fail_begins.store(n, Ordering::SeqCst);
    }

    /// Insert a user record, auto-committed.
    pub async fn insert_user(&self, user: User) {
        self.tables.lock().await.users.insert(user.id, user);
    }

    /// Insert an invitation row, auto-committed.
    ///
    /// Bypasses the lifecycle; intended for seeding fixtures.
    pub async fn insert_invitation(&self, invitation: Invitation) {
        self.tables
            .lock()
            .await
            .invitations
            .insert(invitation.id, invitation);
    }

    /// Insert a membership row, auto-committed.
    pub async fn insert_membership(&self, membership: Membership) {
        self.tables.lock().await.memberships.insert(
            (membership.organization_id, membership.user_id),
            membership,
        );
    }

    /// Insert a post row, auto-committed.
    pub async fn insert_post(&self, post: Post) {
        self.tables.lock().await.posts.insert(post.id, post);
    }

    /// Read an invitation by ID.
    pub async fn get_invitation(&self, id: Uuid) -> Option<Invitation> {
        self.tables.lock().await.invitations.get(&id).cloned()
    }

    /// Read a membership by (organization, user).
    pub async fn get_membership(&self, organization_id: Uuid, user_id: Uuid) -> Option<Membership> {
        self.tables
            .lock()
            .await
            .memberships
            .get(&(organization_id, user_id))
            .cloned()
    }

    /// Read a post by ID.
    pub async fn get_post(&self, id: Uuid) -> Option<Post> {
        self.tables.lock().await.posts.get(&id).cloned()
    }

    /// Count memberships in an organization.
    pub async fn membership_count(&self, organization_id: Uuid) -> usize {
        self.tables
            .lock()
            .await
            .memberships
            .keys()
            .filter(|(org, _)| *org == organization_id)
            .count()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin(&self) -> StoreResult<Box<dyn Transaction>> {
        let failing = self
            .fail_begins
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(StoreError::Unavailable("injected failure".into()));
        }

        let guard = self.tables.clone().lock_owned().await;
        Ok(Box::new(MemoryTxn {
            guard,
            staged: Staged::default(),
        }))
    }
}

#[derive(Default)]
struct Staged {
    invitations: HashMap<Uuid, Invitation>,
    memberships: HashMap<(Uuid, Uuid), Membership>,
    posts: HashMap<Uuid, Post>,
}

/// A transaction over the in-memory tables.
///
/// Holds the table mutex until committed or dropped; staged writes overlay
/// the committed state for this transaction's own reads.
struct MemoryTxn {
    guard: OwnedMutexGuard<Tables>,
    staged: Staged,
}

impl MemoryTxn {
    fn invitations(&self) -> impl Iterator<Item = &Invitation> {
        self.staged.invitations.values().chain(
            self.guard
                .invitations
                .values()
                .filter(|inv| !self.staged.invitations.contains_key(&inv.id)),
        )
    }
}

#[async_trait]
impl Transaction for MemoryTxn {
    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .guard
            .users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn invitation(&self, id: Uuid) -> StoreResult<Option<Invitation>> {
        Ok(self
            .staged
            .invitations
            .get(&id)
            .or_else(|| self.guard.invitations.get(&id))
            .cloned())
    }

    async fn invitation_by_token(&self, token: &str) -> StoreResult<Option<Invitation>> {
        Ok(self.invitations().find(|inv| inv.token == token).cloned())
    }

    async fn pending_invitation(
        &self,
        organization_id: Uuid,
        email: &str,
    ) -> StoreResult<Option<Invitation>> {
        Ok(self
            .invitations()
            .find(|inv| {
                inv.organization_id == organization_id
                    && inv.email.eq_ignore_ascii_case(email)
                    && inv.status == newsroom_org::InvitationStatus::Pending
            })
            .cloned())
    }

    async fn membership(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Option<Membership>> {
        let key = (organization_id, user_id);
        Ok(self
            .staged
            .memberships
            .get(&key)
            .or_else(|| self.guard.memberships.get(&key))
            .cloned())
    }

    async fn post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        Ok(self
            .staged
            .posts
            .get(&id)
            .or_else(|| self.guard.posts.get(&id))
            .cloned())
    }

    async fn put_invitation(&mut self, invitation: Invitation) -> StoreResult<()> {
        self.staged.invitations.insert(invitation.id, invitation);
        Ok(())
    }

    async fn put_membership(&mut self, membership: Membership) -> StoreResult<()> {
        self.staged.memberships.insert(
            (membership.organization_id, membership.user_id),
            membership,
        );
        Ok(())
    }

    async fn put_post(&mut self, post: Post) -> StoreResult<()> {
        self.staged.posts.insert(post.id, post);
        Ok(())
    }

    async fn commit(mut self: Box<Self>) -> StoreResult<()> {
        let staged = std::mem::take(&mut self.staged);
        for (id, invitation) in staged.invitations {
            self.guard.invitations.insert(id, invitation);
        }
        for (key, membership) in staged.memberships {
            self.guard.memberships.insert(key, membership);
        }
        for (id, post) in staged.posts {
            self.guard.posts.insert(id, post);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use newsroom_rbac::Role;

    fn invitation() -> Invitation {
        Invitation::new(
            Uuid::now_v7(),
            "bob@example.com",
            Role::Writer,
            Uuid::now_v7(),
            Some(Duration::days(14)),
        )
    }

    #[tokio::test]
    async fn test_commit_makes_writes_visible() {
        let store = MemoryStore::new();
        let inv = invitation();
        let id = inv.id;

        let mut txn = store.begin().await.unwrap();
        txn.put_invitation(inv).await.unwrap();
        txn.commit().await.unwrap();

        assert!(store.get_invitation(id).await.is_some());
    }

    #[tokio::test]
    async fn test_drop_discards_staged_writes() {
        let store = MemoryStore::new();
        let inv = invitation();
        let id = inv.id;

        {
            let mut txn = store.begin().await.unwrap();
            txn.put_invitation(inv).await.unwrap();
            // dropped without commit
        }

        assert!(store.get_invitation(id).await.is_none());
    }

    #[tokio::test]
    async fn test_transaction_reads_own_staged_writes() {
        let store = MemoryStore::new();
        let inv = invitation();
        let token = inv.token.clone();

        let mut txn = store.begin().await.unwrap();
        txn.put_invitation(inv).await.unwrap();
        let found = txn.invitation_by_token(&token).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_staged_update_shadows_committed_row() {
        let store = MemoryStore::new();
        let mut inv = invitation();
        let id = inv.id;
        store.insert_invitation(inv.clone()).await;

        let mut txn = store.begin().await.unwrap();
        inv.status = newsroom_org::InvitationStatus::Canceled;
        txn.put_invitation(inv).await.unwrap();

        let seen = txn.invitation(id).await.unwrap().unwrap();
        assert_eq!(seen.status, newsroom_org::InvitationStatus::Canceled);
        // pending lookup must not surface the shadowed committed row
        let pending = txn
            .pending_invitation(seen.organization_id, &seen.email)
            .await
            .unwrap();
        assert!(pending.is_none());
    }

    #[tokio::test]
    async fn test_user_lookup_is_case_insensitive() {
        let store = MemoryStore::new();
        store.insert_user(User::new("Bob@Example.com")).await;

        let txn = store.begin().await.unwrap();
        assert!(txn.user_by_email("bob@example.com").await.unwrap().is_some());
        assert!(txn.user_by_email("carol@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fail_next_begins() {
        let store = MemoryStore::new();
        store.fail_next_begins(1);

        assert!(store.begin().await.is_err());
        assert!(store.begin().await.is_ok());
    }
}

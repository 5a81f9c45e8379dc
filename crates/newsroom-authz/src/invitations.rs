//! Invitation lifecycle
//!
//! Issuance, resend, cancellation, and acceptance of invitations. The
//! lifecycle owns every write to invitation rows except the final accept
//! commit, which belongs to [`MembershipTransaction`].
//!
//! Expiry is lazy: there is no background sweeper. Whenever an operation
//! observes a pending row whose deadline has passed, it persists the
//! `Expired` correction before reporting the outcome, so a stale pending
//! row can never be accepted after its deadline.

use std::sync::Arc;

use chrono::{Duration, Utc};
use newsroom_org::{Invitation, InvitationStatus, Membership};
use newsroom_rbac::Role;
use uuid::Uuid;

use crate::error::{AuthzError, AuthzResult};
use crate::store::Store;
use crate::transaction::MembershipTransaction;

/// Manages invitation records from issuance to resolution.
#[derive(Clone)]
pub struct InvitationLifecycle {
    store: Arc<dyn Store>,
    ttl: Option<Duration>,
}

impl InvitationLifecycle {
    /// Creates a lifecycle service over a store.
    ///
    /// # Arguments
    ///
    /// * `store` - The transactional store holding invitation rows
    /// * `ttl` - Time-to-live applied to new and resent invitations;
    ///   `None` means invitations never expire
    pub fn new(store: Arc<dyn Store>, ttl: Option<Duration>) -> Self {
        Self { store, ttl }
    }

    /// Issue a new pending invitation.
    ///
    /// Fails with `DuplicatePendingInvitation` if a live pending invitation
    /// already exists for the same (organization, email) — callers should
    /// resend that one instead. An expired-but-unmarked pending row does
    /// not count as a duplicate; it is corrected to `Expired` in the same
    /// transaction.
    pub async fn create(
        &self,
        organization_id: Uuid,
        email: &str,
        role: Role,
        invited_by: Uuid,
    ) -> AuthzResult<Invitation> {
        let now = Utc::now();
        let mut txn = self.store.begin().await?;

        if let Some(mut existing) = txn.pending_invitation(organization_id, email).await? {
            if existing.is_expired(now) {
                existing.status = InvitationStatus::Expired;
                txn.put_invitation(existing).await?;
            } else {
                return Err(AuthzError::DuplicatePendingInvitation);
            }
        }

        let invitation = Invitation::new(organization_id, email, role, invited_by, self.ttl);
        txn.put_invitation(invitation.clone()).await?;
        txn.commit().await?;

        tracing::info!(
            invitation_id = %invitation.id,
            organization_id = %organization_id,
            role = %role,
            "invitation created"
        );
        Ok(invitation)
    }

    /// Rotate the token and deadline of a live pending invitation.
    ///
    /// The previous token stops resolving immediately. Email and role are
    /// unchanged. Fails with `InvalidState` on terminal or expired
    /// invitations.
    pub async fn resend(
        &self,
        organization_id: Uuid,
        invitation_id: Uuid,
    ) -> AuthzResult<Invitation> {
        let now = Utc::now();
        let mut txn = self.store.begin().await?;

        let Some(mut invitation) = txn.invitation(invitation_id).await? else {
            return Err(AuthzError::InvitationNotFound);
        };
        if invitation.organization_id != organization_id {
            return Err(AuthzError::InvitationNotFound);
        }
        if invitation.is_terminal() {
            return Err(AuthzError::InvalidState(format!(
                "cannot resend a {} invitation",
                invitation.status.as_str()
            )));
        }
        if invitation.is_expired(now) {
            invitation.status = InvitationStatus::Expired;
            txn.put_invitation(invitation).await?;
            txn.commit().await?;
            return Err(AuthzError::InvalidState(
                "cannot resend an expired invitation".into(),
            ));
        }

        invitation.rotate_token(self.ttl, now);
        txn.put_invitation(invitation.clone()).await?;
        txn.commit().await?;

        tracing::info!(invitation_id = %invitation.id, "invitation resent, token rotated");
        Ok(invitation)
    }

    /// Cancel a pending invitation.
    ///
    /// Canceling an invitation that is already terminal — including one
    /// that expired without being marked — is a no-op success: the
    /// practical outcome is identical either way.
    pub async fn cancel(&self, organization_id: Uuid, invitation_id: Uuid) -> AuthzResult<()> {
        let now = Utc::now();
        let mut txn = self.store.begin().await?;

        let Some(mut invitation) = txn.invitation(invitation_id).await? else {
            return Err(AuthzError::InvitationNotFound);
        };
        if invitation.organization_id != organization_id {
            return Err(AuthzError::InvitationNotFound);
        }
        if invitation.is_terminal() {
            return Ok(());
        }

        invitation.status = if invitation.is_expired(now) {
            InvitationStatus::Expired
        } else {
            InvitationStatus::Canceled
        };
        txn.put_invitation(invitation).await?;
        txn.commit().await?;

        tracing::info!(invitation_id = %invitation_id, "invitation canceled");
        Ok(())
    }

    /// Accept an invitation by token, creating (or updating) a membership.
    ///
    /// Validates the token against the current lifecycle state, then
    /// delegates the atomic write to [`MembershipTransaction`], which
    /// re-verifies under its own transaction. Repeated accepts of the same
    /// token never create a second membership: the losers of the race see
    /// `InvitationAlreadyResolved`.
    pub async fn accept(&self, token: &str) -> AuthzResult<Membership> {
        let now = Utc::now();

        // Lifecycle pre-check in its own transaction. It must end before
        // the membership transaction begins — backends like the in-memory
        // store serialize transactions, and the atomic accept re-verifies
        // everything anyway.
        {
            let mut txn = self.store.begin().await?;
            let Some(mut invitation) = txn.invitation_by_token(token).await? else {
                return Err(AuthzError::InvitationNotFound);
            };
            match invitation.status {
                InvitationStatus::Pending => {}
                InvitationStatus::Expired => return Err(AuthzError::InvitationExpired),
                InvitationStatus::Accepted | InvitationStatus::Canceled => {
                    return Err(AuthzError::InvitationAlreadyResolved)
                }
            }
            if invitation.is_expired(now) {
                tracing::debug!(invitation_id = %invitation.id, "stale pending invitation expired");
                invitation.status = InvitationStatus::Expired;
                txn.put_invitation(invitation).await?;
                txn.commit().await?;
                return Err(AuthzError::InvitationExpired);
            }
        }

        MembershipTransaction::execute(self.store.as_ref(), token, now).await
    }
}

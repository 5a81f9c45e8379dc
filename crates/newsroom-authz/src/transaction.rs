//! Membership transaction
//!
//! The atomic unit that converts an accepted invitation into an
//! organization membership. Everything here happens inside one store
//! transaction: the invitation is re-read and re-verified under the
//! transaction, so a second accept racing past the lifecycle's own check
//! still loses — only one transaction observes `pending` and commits.

use chrono::{DateTime, Utc};
use newsroom_org::{Invitation, InvitationStatus, Membership};

use crate::error::{AuthzError, AuthzResult};
use crate::store::Store;

/// Converts a pending invitation into a membership, all-or-nothing.
pub struct MembershipTransaction;

impl MembershipTransaction {
    /// Execute the accept for `token` as of `now`.
    ///
    /// Steps, inside a single transaction:
    /// 1. Re-read the invitation by token and verify it is still pending
    ///    and unexpired.
    /// 2. Resolve the invited email to a registered user; abort with
    ///    `UserNotRegistered` if no account exists.
    /// 3. Upsert the membership: a brand-new member gets a fresh record,
    ///    an existing member has their record replaced with the invited
    ///    role (acceptance stays idempotent in spirit).
    /// 4. Mark the invitation accepted and commit.
    ///
    /// On any failure the transaction is dropped and every staged write is
    /// discarded; the invitation remains pending and the caller may retry
    /// with the same token.
    pub async fn execute(
        store: &dyn Store,
        token: &str,
        now: DateTime<Utc>,
    ) -> AuthzResult<Membership> {
        let mut txn = store.begin().await?;

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
            // Lazy expiry: persist the correction so the stale pending row
            // can never be accepted later.
            invitation.status = InvitationStatus::Expired;
            txn.put_invitation(invitation).await?;
            txn.commit().await?;
            return Err(AuthzError::InvitationExpired);
        }

        let Some(user) = txn.user_by_email(&invitation.email).await? else {
            // Account creation is external; nothing was staged, drop rolls back.
            return Err(AuthzError::UserNotRegistered);
        };

        let membership = match txn
            .membership(invitation.organization_id, user.id)
            .await?
        {
            Some(existing) => existing.with_role(invitation.role),
            None => Membership::new(invitation.organization_id, user.id, invitation.role)
                .with_inviter(invitation.invited_by),
        };
        txn.put_membership(membership.clone()).await?;

        invitation.status = InvitationStatus::Accepted;
        let invitation_id = invitation.id;
        let organization_id = invitation.organization_id;
        txn.put_invitation(invitation).await?;
        txn.commit().await?;

        tracing::info!(
            invitation_id = %invitation_id,
            organization_id = %organization_id,
            user_id = %membership.user_id,
            role = %membership.role,
            "invitation accepted, membership committed"
        );
        Ok(membership)
    }
}

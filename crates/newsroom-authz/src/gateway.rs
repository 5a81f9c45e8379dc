//! Authorization gateway
//!
//! The single entry point surrounding every protected operation. HTTP
//! handlers call nothing below this layer: the gateway resolves the role's
//! capabilities, routes post mutations through the workflow, and routes
//! invitation operations through the lifecycle.
//!
//! Each operation declares its requirement as a plain value — a permission
//! or an explicit set of acceptable roles — evaluated before the operation
//! body runs. There is no reflective handler metadata and no global
//! registry; the requirement travels with the call.

use std::sync::Arc;

use chrono::Utc;
use newsroom_org::{Invitation, Membership, OrgContext, Post, Principal};
use newsroom_rbac::{Action, Permission, PermissionResolver, ResourceType, Role};
use uuid::Uuid;

use crate::config::AuthzConfig;
use crate::error::{AuthzError, AuthzResult};
use crate::invitations::InvitationLifecycle;
use crate::retry::{with_retry_if, RetryConfig};
use crate::store::Store;
use crate::workflow::{PostUpdate, PostWorkflow};

/// What an operation demands of the caller before its body runs.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// Caller's role must hold this permission
    Permission(Permission),

    /// Caller's role must be one of these (explicit set, no hierarchy)
    AnyRole(Vec<Role>),
}

impl Requirement {
    /// Require a permission.
    pub fn permission(resource: ResourceType, action: Action) -> Self {
        Self::Permission(Permission::new(resource, action))
    }

    /// Require membership in an explicit role set.
    pub fn any_role(roles: impl Into<Vec<Role>>) -> Self {
        Self::AnyRole(roles.into())
    }

    fn satisfied_by(&self, role: Role) -> bool {
        match self {
            Self::Permission(permission) => PermissionResolver::has_permission(role, permission),
            Self::AnyRole(roles) => PermissionResolver::has_role(role, roles),
        }
    }
}

/// Entry point composing the resolver, workflow, and invitation lifecycle.
#[derive(Clone)]
pub struct AuthorizationGateway {
    store: Arc<dyn Store>,
    invitations: InvitationLifecycle,
    read_retry: RetryConfig,
}

impl AuthorizationGateway {
    /// Creates a gateway over a store.
    pub fn new(store: Arc<dyn Store>, config: AuthzConfig) -> Self {
        let invitations = InvitationLifecycle::new(store.clone(), config.invitation_ttl());
        Self {
            store,
            invitations,
            read_retry: config.read_retry(),
        }
    }

    /// Check a declared requirement against the caller's role.
    ///
    /// Returns `Forbidden` on a negative decision; the resolver itself
    /// never errors.
    pub fn authorize(&self, ctx: &OrgContext, requirement: &Requirement) -> AuthzResult<()> {
        if requirement.satisfied_by(ctx.role) {
            Ok(())
        } else {
            tracing::debug!(
                user_id = %ctx.user_id(),
                organization_id = %ctx.organization_id,
                role = %ctx.role,
                requirement = ?requirement,
                "authorization denied"
            );
            Err(AuthzError::Forbidden)
        }
    }

    /// Issue an invitation. Requires `org:members`.
    pub async fn create_invitation(
        &self,
        ctx: &OrgContext,
        email: &str,
        role: Role,
    ) -> AuthzResult<Invitation> {
        self.authorize(ctx, &Requirement::permission(ResourceType::Org, Action::Members))?;
        self.invitations
            .create(ctx.organization_id, email, role, ctx.user_id())
            .await
    }

    /// Rotate an invitation's token and deadline. Requires `org:members`.
    pub async fn resend_invitation(
        &self,
        ctx: &OrgContext,
        invitation_id: Uuid,
    ) -> AuthzResult<Invitation> {
        self.authorize(ctx, &Requirement::permission(ResourceType::Org, Action::Members))?;
        self.invitations
            .resend(ctx.organization_id, invitation_id)
            .await
    }

    /// Cancel a pending invitation. Requires `org:members`.
    pub async fn cancel_invitation(
        &self,
        ctx: &OrgContext,
        invitation_id: Uuid,
    ) -> AuthzResult<()> {
        self.authorize(ctx, &Requirement::permission(ResourceType::Org, Action::Members))?;
        self.invitations
            .cancel(ctx.organization_id, invitation_id)
            .await
    }

    /// Accept an invitation by token.
    ///
    /// The token is the credential — no role requirement applies, only a
    /// verified identity. Never auto-retried: a transient failure must be
    /// resubmitted by the caller, which is safe because accept is
    /// idempotent per token.
    pub async fn accept_invitation(
        &self,
        principal: &Principal,
        token: &str,
    ) -> AuthzResult<Membership> {
        tracing::debug!(user_id = %principal.user_id, "invitation accept requested");
        self.invitations.accept(token).await
    }

    /// Create a draft post authored by the caller. Requires `post:create`.
    pub async fn create_post(
        &self,
        ctx: &OrgContext,
        title: &str,
        content: &str,
    ) -> AuthzResult<Post> {
        self.authorize(ctx, &Requirement::permission(ResourceType::Post, Action::Create))?;

        let post = Post::new(ctx.organization_id, ctx.user_id(), title, content);
        let mut txn = self.store.begin().await?;
        txn.put_post(post.clone()).await?;
        txn.commit().await?;

        tracing::info!(post_id = %post.id, author_id = %post.author_id, "post created");
        Ok(post)
    }

    /// Apply a post update through the workflow. Requires `post:update`.
    ///
    /// The role check, the workflow decision, and the field writes happen
    /// against one transaction-scoped read of the post, so a concurrent
    /// update cannot slip between the check and the write.
    pub async fn update_post(
        &self,
        ctx: &OrgContext,
        post_id: Uuid,
        update: &PostUpdate,
    ) -> AuthzResult<Post> {
        self.authorize(ctx, &Requirement::permission(ResourceType::Post, Action::Update))?;

        let mut txn = self.store.begin().await?;
        let Some(post) = txn.post(post_id).await? else {
            return Err(AuthzError::PostNotFound);
        };
        if post.organization_id != ctx.organization_id {
            return Err(AuthzError::PostNotFound);
        }

        let updated = PostWorkflow::apply(&post, ctx, update, Utc::now())?;
        txn.put_post(updated.clone()).await?;
        txn.commit().await?;

        tracing::info!(
            post_id = %post_id,
            from = %post.status,
            to = %updated.status,
            "post updated"
        );
        Ok(updated)
    }

    /// Read a post. Requires `post:read`.
    ///
    /// Read-only, so transient storage failures are retried once.
    pub async fn get_post(&self, ctx: &OrgContext, post_id: Uuid) -> AuthzResult<Post> {
        self.authorize(ctx, &Requirement::permission(ResourceType::Post, Action::Read))?;

        let store = Arc::clone(&self.store);
        let organization_id = ctx.organization_id;
        with_retry_if(
            &self.read_retry,
            move || {
                let store = Arc::clone(&store);
                async move {
                    let txn = store.begin().await?;
                    match txn.post(post_id).await? {
                        Some(post) if post.organization_id == organization_id => Ok(post),
                        _ => Err(AuthzError::PostNotFound),
                    }
                }
            },
            AuthzError::is_transient,
        )
        .await
    }
}

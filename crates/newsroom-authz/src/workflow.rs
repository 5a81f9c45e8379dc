//! Post editorial workflow
//!
//! The state machine over a post's status. Given the post's current state,
//! the actor's role, and whether the actor authored the post, it decides
//! which updates are legal. Evaluation is pure — it never touches storage —
//! and it never partially applies: the gateway persists the evaluated
//! result in one transaction or not at all.
//!
//! Transition table:
//!
//! | Actor           | Source          | Allowed                           |
//! |-----------------|-----------------|-----------------------------------|
//! | editor/owner    | any             | any target, any field             |
//! | writer (author) | draft           | in_review, or content edit        |
//! | writer (author) | in_review       | content edit only                 |
//! | writer (author) | published       | nothing                           |
//! | writer (author) | rejected        | nothing                           |
//! | anyone else     | *               | nothing                           |
//!
//! Review feedback (`rejection_reason`) is editorial: writers never write
//! it, even on their own posts.

use chrono::{DateTime, Utc};
use newsroom_org::{OrgContext, Post, PostStatus};
use newsroom_rbac::{PermissionResolver, Role};
use serde::{Deserialize, Serialize};

use crate::error::{AuthzError, AuthzResult};

/// A requested change to a post.
///
/// Absent fields are left untouched. A `status` equal to the post's current
/// status is a plain content edit, not a transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdate {
    /// Target workflow status, if the caller wants a transition
    pub status: Option<PostStatus>,

    /// New title
    pub title: Option<String>,

    /// New body content
    pub content: Option<String>,

    /// Review feedback (editor/owner only)
    pub rejection_reason: Option<String>,
}

impl PostUpdate {
    /// An update that only moves the status.
    pub fn to_status(status: PostStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set review feedback.
    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }
}

/// The post-status state machine.
pub struct PostWorkflow;

impl PostWorkflow {
    /// Decide whether `ctx` may apply `update` to `post`.
    ///
    /// Pure decision; returns the taxonomy error the gateway will surface.
    /// A denied status change reports `ForbiddenTransition` with the
    /// source, target, and role; a denied field write without a transition
    /// reports `Forbidden`.
    pub fn evaluate(post: &Post, ctx: &OrgContext, update: &PostUpdate) -> AuthzResult<()> {
        // Editors and owners hold full rewrite rights over every state,
        // including retargeting status on published content.
        if PermissionResolver::has_role(ctx.role, &[Role::Owner, Role::Editor]) {
            return Ok(());
        }

        let from = post.status;
        let deny = |to: Option<PostStatus>| match to {
            Some(to) if to != from => Err(AuthzError::ForbiddenTransition {
                from,
                to,
                role: ctx.role,
            }),
            _ => Err(AuthzError::Forbidden),
        };

        if ctx.role != Role::Writer || !post.is_author(ctx.user_id()) {
            return deny(update.status);
        }

        // Writer-author from here on.
        if update.rejection_reason.is_some() {
            return Err(AuthzError::Forbidden);
        }
        match from {
            // Published content is immutable for writers, author included.
            // Rejected posts come back to the writer only via an editor.
            PostStatus::Published | PostStatus::Rejected => deny(update.status),
            PostStatus::Draft | PostStatus::InReview => match update.status {
                None => Ok(()),
                Some(to) if to == from => Ok(()),
                Some(PostStatus::InReview) if from == PostStatus::Draft => Ok(()),
                to => deny(to),
            },
        }
    }

    /// Evaluate and, if allowed, build the updated post.
    ///
    /// Status and content fields change together in the returned copy; the
    /// caller persists it atomically or discards it.
    pub fn apply(
        post: &Post,
        ctx: &OrgContext,
        update: &PostUpdate,
        now: DateTime<Utc>,
    ) -> AuthzResult<Post> {
        Self::evaluate(post, ctx, update)?;

        let mut updated = post.clone();
        if let Some(status) = update.status {
            updated.status = status;
        }
        if let Some(ref title) = update.title {
            updated.title = title.clone();
        }
        if let Some(ref content) = update.content {
            updated.content = content.clone();
        }
        if let Some(ref reason) = update.rejection_reason {
            updated.rejection_reason = Some(reason.clone());
        }
        updated.updated_at = now;
        Ok(updated)
    }
}

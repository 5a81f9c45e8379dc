//! Error types for authorization operations
//!
//! This module defines the full error taxonomy surfaced by the
//! authorization gateway. Every rejected operation maps to a specific,
//! stable kind so callers can distinguish "try again" from "permanently
//! not allowed" without parsing messages.

use newsroom_org::PostStatus;
use newsroom_rbac::Role;
use thiserror::Error;

use crate::store::StoreError;

/// Authorization error taxonomy.
///
/// The permission resolver and the post workflow never throw for "no
/// permission" internally — they return decisions, and the gateway converts
/// a negative decision into one of these kinds at the boundary.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// No valid identity on the request
    #[error("Unauthorized: no valid identity")]
    Unauthorized,

    /// Valid identity, insufficient role or permission
    #[error("Forbidden: insufficient permissions")]
    Forbidden,

    /// Role/ownership does not permit this specific status change
    #[error("Forbidden transition {from} -> {to} for role {role}")]
    ForbiddenTransition {
        /// Status the post was in
        from: PostStatus,
        /// Status the actor asked for
        to: PostStatus,
        /// Role of the actor
        role: Role,
    },

    /// Operation not valid for the entity's current lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Invitation deadline has passed
    #[error("Invitation has expired")]
    InvitationExpired,

    /// No invitation matches the given token or ID
    #[error("Invitation not found")]
    InvitationNotFound,

    /// Invitation was already accepted or canceled
    #[error("Invitation already resolved")]
    InvitationAlreadyResolved,

    /// A live pending invitation already exists for this email
    #[error("A pending invitation already exists for this email")]
    DuplicatePendingInvitation,

    /// The invited email has no registered account
    #[error("No registered account for the invited email")]
    UserNotRegistered,

    /// No post matches the given ID within the organization
    #[error("Post not found")]
    PostNotFound,

    /// Transient storage failure; safe to retry
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Result type for authorization operations.
pub type AuthzResult<T> = Result<T, AuthzError>;

impl AuthzError {
    /// Check whether retrying the same call may succeed.
    ///
    /// Only storage-layer failures are transient; every taxonomy kind is a
    /// stable decision about the request.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthzError::Storage(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthzError::Unauthorized => 401,
            AuthzError::Forbidden | AuthzError::ForbiddenTransition { .. } => 403,
            AuthzError::InvitationNotFound | AuthzError::PostNotFound => 404,
            AuthzError::InvalidState(_)
            | AuthzError::InvitationAlreadyResolved
            | AuthzError::DuplicatePendingInvitation => 409,
            AuthzError::InvitationExpired => 410,
            AuthzError::UserNotRegistered => 422,
            AuthzError::Storage(_) => 503,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthzError::Unauthorized => "UNAUTHORIZED",
            AuthzError::Forbidden => "FORBIDDEN",
            AuthzError::ForbiddenTransition { .. } => "FORBIDDEN_TRANSITION",
            AuthzError::InvalidState(_) => "INVALID_STATE",
            AuthzError::InvitationExpired => "INVITATION_EXPIRED",
            AuthzError::InvitationNotFound => "INVITATION_NOT_FOUND",
            AuthzError::InvitationAlreadyResolved => "INVITATION_ALREADY_RESOLVED",
            AuthzError::DuplicatePendingInvitation => "DUPLICATE_PENDING_INVITATION",
            AuthzError::UserNotRegistered => "USER_NOT_REGISTERED",
            AuthzError::PostNotFound => "POST_NOT_FOUND",
            AuthzError::Storage(_) => "STORAGE_UNAVAILABLE",
        }
    }
}

//! Invitation domain model
//!
//! An invitation is a token-bearing offer of membership. The token is the
//! sole credential for acceptance, so it is generated from OS randomness and
//! is single-use: once the invitation leaves `Pending` the token can never
//! authorize a membership again.
//!
//! Expiry is evaluated lazily. A row whose `expires_at` has passed is
//! functionally expired even while its persisted status still reads
//! `Pending`; callers observing that state are expected to persist the
//! correction.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use newsroom_rbac::Role;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of random bytes backing an invitation token (43 chars base64).
const TOKEN_BYTES: usize = 32;

/// Lifecycle status of an invitation.
///
/// `Pending` is the only live state. The three terminal states are
/// immutable: exactly one of them is reached, exactly once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    /// Awaiting acceptance
    Pending,

    /// Accepted; a membership was created
    Accepted,

    /// Canceled by an organization member
    Canceled,

    /// Deadline passed before acceptance
    Expired,
}

impl InvitationStatus {
    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Canceled => "canceled",
            Self::Expired => "expired",
        }
    }

    /// Check if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A time-limited, token-bearing offer of organization membership.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use uuid::Uuid;
/// use newsroom_org::{Invitation, InvitationStatus};
/// use newsroom_rbac::Role;
///
/// let inv = Invitation::new(
///     Uuid::now_v7(),
///     "bob@example.com",
///     Role::Editor,
///     Uuid::now_v7(),
///     Some(Duration::days(14)),
/// );
/// assert_eq!(inv.status, InvitationStatus::Pending);
/// assert!(!inv.is_expired(Utc::now()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// Unique invitation ID
    pub id: Uuid,

    /// Organization the invitee would join
    pub organization_id: Uuid,

    /// Invitee email (account may not exist yet)
    pub email: String,

    /// Role the membership will carry on acceptance
    pub role: Role,

    /// Lifecycle status
    pub status: InvitationStatus,

    /// Bearer token; unique, unpredictable, single-use
    pub token: String,

    /// Member who issued the invitation
    pub invited_by: Uuid,

    /// When the invitation was created
    pub created_at: DateTime<Utc>,

    /// Acceptance deadline; `None` means the invitation never expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Creates a new pending invitation with a freshly generated token.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The organization the invitee would join
    /// * `email` - The invitee's email address
    /// * `role` - The role granted on acceptance
    /// * `invited_by` - The member issuing the invitation
    /// * `ttl` - Time until the invitation expires, if any
    pub fn new(
        organization_id: Uuid,
        email: impl Into<String>,
        role: Role,
        invited_by: Uuid,
        ttl: Option<Duration>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            organization_id,
            email: email.into(),
            role,
            status: InvitationStatus::Pending,
            token: generate_token(),
            invited_by,
            created_at: now,
            expires_at: ttl.map(|ttl| now + ttl),
        }
    }

    /// Check whether the invitation deadline has passed.
    ///
    /// This is independent of the persisted `status`: a `Pending` row with
    /// a past deadline is functionally expired and must not be accepted.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(deadline) if deadline < now)
    }

    /// Check whether the invitation has reached a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check whether the invitation can still be accepted.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.status == InvitationStatus::Pending && !self.is_expired(now)
    }

    /// Rotate the token and extend the deadline for a resend.
    ///
    /// Invalidates the previously issued token; email and role are
    /// untouched. Only meaningful on a live pending invitation — callers
    /// guard the state.
    ///
    /// # Arguments
    ///
    /// * `ttl` - New time-to-live measured from `now`, if any
    /// * `now` - Current time
    pub fn rotate_token(&mut self, ttl: Option<Duration>, now: DateTime<Utc>) {
        self.token = generate_token();
        self.expires_at = ttl.map(|ttl| now + ttl);
    }
}

/// Generate a URL-safe bearer token from OS randomness.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ttl: Option<Duration>) -> Invitation {
        Invitation::new(
            Uuid::now_v7(),
            "bob@example.com",
            Role::Editor,
            Uuid::now_v7(),
            ttl,
        )
    }

    #[test]
    fn test_new_invitation_is_pending() {
        let inv = sample(Some(Duration::days(14)));
        assert_eq!(inv.status, InvitationStatus::Pending);
        assert!(!inv.is_terminal());
        assert!(inv.is_live(Utc::now()));
        assert!(inv.expires_at.is_some());
    }

    #[test]
    fn test_token_entropy() {
        let a = sample(None);
        let b = sample(None);
        // 32 random bytes, URL-safe base64 without padding
        assert_eq!(a.token.len(), 43);
        assert_ne!(a.token, b.token);
        assert!(!a.token.contains('='));
    }

    #[test]
    fn test_lazy_expiry() {
        let mut inv = sample(Some(Duration::days(7)));
        let now = Utc::now();
        assert!(!inv.is_expired(now));

        // Deadline one second in the past: expired even though status
        // still reads Pending
        inv.expires_at = Some(now - Duration::seconds(1));
        assert!(inv.is_expired(now));
        assert_eq!(inv.status, InvitationStatus::Pending);
        assert!(!inv.is_live(now));
    }

    #[test]
    fn test_no_deadline_never_expires() {
        let inv = sample(None);
        assert!(!inv.is_expired(Utc::now() + Duration::days(365 * 10)));
    }

    #[test]
    fn test_rotate_token() {
        let mut inv = sample(Some(Duration::days(1)));
        let old_token = inv.token.clone();
        let old_deadline = inv.expires_at;

        let now = Utc::now();
        inv.rotate_token(Some(Duration::days(14)), now);

        assert_ne!(inv.token, old_token);
        assert_ne!(inv.expires_at, old_deadline);
        assert_eq!(inv.expires_at, Some(now + Duration::days(14)));
        assert_eq!(inv.email, "bob@example.com");
        assert_eq!(inv.role, Role::Editor);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!InvitationStatus::Pending.is_terminal());
        assert!(InvitationStatus::Accepted.is_terminal());
        assert!(InvitationStatus::Canceled.is_terminal());
        assert!(InvitationStatus::Expired.is_terminal());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&InvitationStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}

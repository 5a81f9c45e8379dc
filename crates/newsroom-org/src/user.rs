//! User account record
//!
//! The minimal account shape the authorization core needs: enough to
//! resolve an invitation email to a registered user. Account creation and
//! profile data live elsewhere.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,

    /// Primary email address (unique across the platform)
    pub email: String,
}

impl User {
    /// Creates a new user record.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            email: email.into(),
        }
    }
}

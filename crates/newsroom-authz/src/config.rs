//! Authorization core configuration.
//!
//! Loaded from environment variables with sensible defaults; nothing here
//! is consulted at decision time except through the values handed to the
//! gateway at construction.

use std::time::Duration as StdDuration;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::retry::RetryConfig;

/// Configuration for the authorization gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Days until a new or resent invitation expires; 0 disables expiry.
    pub invitation_ttl_days: i64,

    /// Extra attempts for read-only checks on transient storage errors.
    /// Mutations are never retried.
    pub read_retries: u32,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            invitation_ttl_days: 14,
            read_retries: 1,
        }
    }
}

impl AuthzConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INVITATION_TTL_DAYS`: invitation time-to-live in days, 0 to
    ///   disable expiry (default: 14)
    /// - `AUTHZ_READ_RETRIES`: extra attempts for read-only checks
    ///   (default: 1)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            invitation_ttl_days: std::env::var("INVITATION_TTL_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.invitation_ttl_days),
            read_retries: std::env::var("AUTHZ_READ_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.read_retries),
        }
    }

    /// The invitation time-to-live, or `None` when expiry is disabled.
    pub fn invitation_ttl(&self) -> Option<Duration> {
        (self.invitation_ttl_days > 0).then(|| Duration::days(self.invitation_ttl_days))
    }

    /// Retry configuration for read-only checks.
    pub fn read_retry(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.read_retries + 1,
            delay: StdDuration::from_millis(50),
        }
    }
}

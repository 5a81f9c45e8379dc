//! Post domain model
//!
//! A post is the unit of editorial content. Its status, its author, and the
//! acting member's role jointly decide every mutation; the transition rules
//! themselves live in the workflow layer, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editorial status of a post.
///
/// `Draft` is the creation state. No status is permanently terminal — an
/// editor may move a post back to `Draft` from any state (including a
/// published retraction).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Being written; visible to the author and editors
    Draft,

    /// Submitted for editorial review
    InReview,

    /// Publicly visible; content frozen for writers
    Published,

    /// Sent back by an editor with feedback
    Rejected,
}

impl PostStatus {
    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InReview => "in_review",
            Self::Published => "published",
            Self::Rejected => "rejected",
        }
    }

    /// Parse status from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "in_review" | "in-review" => Some(Self::InReview),
            "published" => Some(Self::Published),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A piece of editorial content moving through the review workflow.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use newsroom_org::{Post, PostStatus};
///
/// let author = Uuid::now_v7();
/// let post = Post::new(Uuid::now_v7(), author, "Headline", "Body");
/// assert_eq!(post.status, PostStatus::Draft);
/// assert!(post.is_author(author));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,

    /// Owning organization
    pub organization_id: Uuid,

    /// The member who created the post
    pub author_id: Uuid,

    /// Title
    pub title: String,

    /// Body content
    pub content: String,

    /// Workflow status
    pub status: PostStatus,

    /// Review feedback set by an editor on rejection
    pub rejection_reason: Option<String>,

    /// When the post was created
    pub created_at: DateTime<Utc>,

    /// When the post was last updated
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Creates a new draft post.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The owning organization
    /// * `author_id` - The creating member
    /// * `title` - Post title
    /// * `content` - Post body
    pub fn new(
        organization_id: Uuid,
        author_id: Uuid,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            organization_id,
            author_id,
            title: title.into(),
            content: content.into(),
            status: PostStatus::Draft,
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user authored this post.
    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_is_draft() {
        let author = Uuid::now_v7();
        let post = Post::new(Uuid::now_v7(), author, "Title", "Content");

        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.rejection_reason.is_none());
        assert!(post.is_author(author));
        assert!(!post.is_author(Uuid::now_v7()));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(PostStatus::parse("draft"), Some(PostStatus::Draft));
        assert_eq!(PostStatus::parse("in_review"), Some(PostStatus::InReview));
        assert_eq!(PostStatus::parse("in-review"), Some(PostStatus::InReview));
        assert_eq!(PostStatus::parse("published"), Some(PostStatus::Published));
        assert_eq!(PostStatus::parse("rejected"), Some(PostStatus::Rejected));
        assert_eq!(PostStatus::parse("archived"), None);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&PostStatus::InReview).unwrap();
        assert_eq!(json, "\"in_review\"");
    }
}

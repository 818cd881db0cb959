//! Comment domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fauxgram_core::{CommentId, PostId, UserId};

use super::user::UserSnapshot;

/// A comment on a post (domain type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment ID.
    pub id: CommentId,
    /// ID of the post this comment belongs to. Not validated against the
    /// post service; there is no referential integrity between collections.
    pub post_id: PostId,
    /// ID of the authoring user.
    pub user_id: UserId,
    /// Denormalized copy of the author taken at creation. Not live.
    pub user: UserSnapshot,
    /// Comment text.
    pub text: String,
    /// Creation timestamp. Comment threads sort on this, oldest first.
    pub created_at: DateTime<Utc>,
}

/// Draft for creating a comment.
///
/// `post_id` and `text` are required; the service fills in a fresh ID, the
/// acting user and `now` for anything left unset, and a supplied value
/// always wins over the computed default.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// Override the generated ID.
    pub id: Option<CommentId>,
    /// Post the comment is attached to.
    pub post_id: PostId,
    /// Override the acting user as author.
    pub user_id: Option<UserId>,
    /// Override the embedded author snapshot.
    pub user: Option<UserSnapshot>,
    /// Comment text.
    pub text: String,
    /// Override the `now` creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewComment {
    /// Draft a comment with the two required fields; everything else
    /// defaults at create time.
    #[must_use]
    pub fn new(post_id: impl Into<PostId>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            post_id: post_id.into(),
            user_id: None,
            user: None,
            text: text.into(),
            created_at: None,
        }
    }
}

/// Partial update for a comment. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    /// Replace the post reference.
    pub post_id: Option<PostId>,
    /// Replace the authoring user ID.
    pub user_id: Option<UserId>,
    /// Replace the embedded author snapshot.
    pub user: Option<UserSnapshot>,
    /// Replace the text.
    pub text: Option<String>,
    /// Replace the creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl CommentPatch {
    /// Shallow-merge this patch over an existing record.
    pub fn apply(self, comment: &mut Comment) {
        if let Some(post_id) = self.post_id {
            comment.post_id = post_id;
        }
        if let Some(user_id) = self.user_id {
            comment.user_id = user_id;
        }
        if let Some(user) = self.user {
            comment.user = user;
        }
        if let Some(text) = self.text {
            comment.text = text;
        }
        if let Some(created_at) = self.created_at {
            comment.created_at = created_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_serializes_camel_case() {
        let comment = Comment {
            id: CommentId::new("c1"),
            post_id: PostId::new("p1"),
            user_id: UserId::new("u1"),
            user: UserSnapshot {
                id: UserId::new("u1"),
                username: "alice".to_owned(),
                display_name: "Alice A".to_owned(),
                avatar: None,
            },
            text: "nice".to_owned(),
            created_at: "2024-01-01T00:00:00Z".parse().expect("timestamp"),
        };
        let json = serde_json::to_string(&comment).expect("serialize");
        assert!(json.contains("\"postId\":\"p1\""));
        assert!(json.contains("\"text\":\"nice\""));
    }
}

//! Post domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fauxgram_core::{PostId, UserId};

use super::user::UserSnapshot;

/// A feed post (domain type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID, generated from the creation timestamp.
    pub id: PostId,
    /// ID of the authoring user.
    pub user_id: UserId,
    /// Denormalized copy of the author taken at creation. Not live; see
    /// [`UserSnapshot`].
    pub user: UserSnapshot,
    /// Image URL, if the post has one.
    pub image_url: Option<String>,
    /// Caption text.
    #[serde(default)]
    pub caption: String,
    /// Like count. Adjusted in lockstep with `is_liked`.
    #[serde(default)]
    pub likes: u64,
    /// Comment count. Maintained independently of the comment service and
    /// can drift from the true number of comment records.
    #[serde(default)]
    pub comments: u64,
    /// Whether the current user has liked this post.
    #[serde(default)]
    pub is_liked: bool,
    /// Whether the current user has saved this post.
    #[serde(default)]
    pub is_saved: bool,
    /// Creation timestamp. Feed ordering sorts on this, newest first.
    pub created_at: DateTime<Utc>,
}

/// Draft for creating a post.
///
/// Every field is optional: the service fills in a fresh ID, the acting
/// user, zeroed counters and `now` for anything left unset, and a supplied
/// value always wins over the computed default.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    /// Override the generated ID.
    pub id: Option<PostId>,
    /// Override the acting user as author.
    pub user_id: Option<UserId>,
    /// Override the embedded author snapshot.
    pub user: Option<UserSnapshot>,
    /// Image URL.
    pub image_url: Option<String>,
    /// Caption text. Defaults to empty.
    pub caption: Option<String>,
    /// Override the zero like count.
    pub likes: Option<u64>,
    /// Override the zero comment count.
    pub comments: Option<u64>,
    /// Override the default unliked state.
    pub is_liked: Option<bool>,
    /// Override the default unsaved state.
    pub is_saved: Option<bool>,
    /// Override the `now` creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial update for a post. `None` fields are left untouched; nullable
/// fields use a nested `Option` so they can be cleared explicitly.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    /// Replace the authoring user ID.
    pub user_id: Option<UserId>,
    /// Replace the embedded author snapshot.
    pub user: Option<UserSnapshot>,
    /// Replace (`Some(Some(_))`) or clear (`Some(None)`) the image URL.
    pub image_url: Option<Option<String>>,
    /// Replace the caption.
    pub caption: Option<String>,
    /// Replace the like count.
    pub likes: Option<u64>,
    /// Replace the comment count.
    pub comments: Option<u64>,
    /// Replace the liked state.
    pub is_liked: Option<bool>,
    /// Replace the saved state.
    pub is_saved: Option<bool>,
    /// Replace the creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl PostPatch {
    /// Shallow-merge this patch over an existing record.
    pub fn apply(self, post: &mut Post) {
        if let Some(user_id) = self.user_id {
            post.user_id = user_id;
        }
        if let Some(user) = self.user {
            post.user = user;
        }
        if let Some(image_url) = self.image_url {
            post.image_url = image_url;
        }
        if let Some(caption) = self.caption {
            post.caption = caption;
        }
        if let Some(likes) = self.likes {
            post.likes = likes;
        }
        if let Some(comments) = self.comments {
            post.comments = comments;
        }
        if let Some(is_liked) = self.is_liked {
            post.is_liked = is_liked;
        }
        if let Some(is_saved) = self.is_saved {
            post.is_saved = is_saved;
        }
        if let Some(created_at) = self.created_at {
            post.created_at = created_at;
        }
    }
}

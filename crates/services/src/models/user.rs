//! User domain types.

use serde::{Deserialize, Serialize};

use fauxgram_core::UserId;

/// A user account (domain type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique handle shown as `@username`.
    pub username: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Avatar image URL, if the user has one.
    pub avatar: Option<String>,
    /// Profile bio text.
    #[serde(default)]
    pub bio: String,
    /// Number of followers. Adjusted in lockstep with `is_following`.
    #[serde(default)]
    pub followers_count: u64,
    /// Number of accounts this user follows.
    #[serde(default)]
    pub following_count: u64,
    /// Number of posts attributed to this user.
    #[serde(default)]
    pub posts_count: u64,
    /// Whether the current user follows this user.
    #[serde(default)]
    pub is_following: bool,
    /// Whether this record is the current user. Derived at read time by
    /// [`UserService`](crate::services::UserService); never meaningful in
    /// stored or seeded data.
    #[serde(default)]
    pub is_current_user: bool,
}

impl User {
    /// Take a denormalized snapshot for embedding in posts and comments.
    ///
    /// The snapshot is a point-in-time copy: later mutations of this user
    /// record do not propagate into records that embedded it.
    #[must_use]
    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id.clone(),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Denormalized user copy embedded in posts and comments.
///
/// This is NOT live data. It is captured when the post or comment is
/// created and is never refreshed when the referenced user changes, so it
/// can drift from the owning `User` record. Callers must not treat it as a
/// source of truth for anything beyond rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    /// ID of the user this snapshot was taken from.
    pub id: UserId,
    /// Username at capture time.
    pub username: String,
    /// Display name at capture time.
    pub display_name: String,
    /// Avatar URL at capture time.
    pub avatar: Option<String>,
}

/// Draft for creating a user.
///
/// `username` and `display_name` are required; everything else defaults
/// (fresh ID, empty bio, zero counts). A supplied value always wins over
/// the computed default.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    /// Override the generated ID.
    pub id: Option<UserId>,
    /// Unique handle for the new account.
    pub username: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Profile bio. Defaults to empty.
    pub bio: Option<String>,
    /// Override the zero follower count.
    pub followers_count: Option<u64>,
    /// Override the zero following count.
    pub following_count: Option<u64>,
    /// Override the zero post count.
    pub posts_count: Option<u64>,
    /// Override the default not-following state.
    pub is_following: Option<bool>,
}

impl NewUser {
    /// Draft a user with the two required fields; everything else defaults
    /// at create time.
    #[must_use]
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

/// Partial update for a user. `None` fields are left untouched; nullable
/// fields use a nested `Option` so they can be cleared explicitly.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// Replace the username.
    pub username: Option<String>,
    /// Replace the display name.
    pub display_name: Option<String>,
    /// Replace (`Some(Some(_))`) or clear (`Some(None)`) the avatar.
    pub avatar: Option<Option<String>>,
    /// Replace the bio.
    pub bio: Option<String>,
    /// Replace the follower count.
    pub followers_count: Option<u64>,
    /// Replace the following count.
    pub following_count: Option<u64>,
    /// Replace the post count.
    pub posts_count: Option<u64>,
    /// Replace the following state.
    pub is_following: Option<bool>,
}

impl UserPatch {
    /// Shallow-merge this patch over an existing record.
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(display_name) = self.display_name {
            user.display_name = display_name;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
        if let Some(bio) = self.bio {
            user.bio = bio;
        }
        if let Some(followers_count) = self.followers_count {
            user.followers_count = followers_count;
        }
        if let Some(following_count) = self.following_count {
            user.following_count = following_count;
        }
        if let Some(posts_count) = self.posts_count {
            user.posts_count = posts_count;
        }
        if let Some(is_following) = self.is_following {
            user.is_following = is_following;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new("u1"),
            username: "alice".to_owned(),
            display_name: "Alice A".to_owned(),
            avatar: None,
            bio: "hi".to_owned(),
            followers_count: 10,
            following_count: 3,
            posts_count: 1,
            is_following: false,
            is_current_user: false,
        }
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let json = serde_json::to_string(&sample_user()).expect("serialize");
        assert!(json.contains("\"displayName\":\"Alice A\""));
        assert!(json.contains("\"followersCount\":10"));
        assert!(json.contains("\"isCurrentUser\":false"));
    }

    #[test]
    fn test_user_deserializes_with_defaults() {
        // Seed records may omit counters and flags entirely.
        let user: User = serde_json::from_str(
            r#"{"id":"u2","username":"bob","displayName":"Bob B","avatar":null}"#,
        )
        .expect("deserialize");
        assert_eq!(user.followers_count, 0);
        assert!(!user.is_following);
        assert!(!user.is_current_user);
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let mut user = sample_user();
        let snapshot = user.snapshot();
        user.username = "renamed".to_owned();
        assert_eq!(snapshot.username, "alice");
    }

    #[test]
    fn test_patch_clears_nullable_field() {
        let mut user = sample_user();
        user.avatar = Some("https://example.com/a.jpg".to_owned());
        UserPatch {
            avatar: Some(None),
            ..UserPatch::default()
        }
        .apply(&mut user);
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn test_patch_leaves_unset_fields_alone() {
        let mut user = sample_user();
        UserPatch {
            bio: Some("new bio".to_owned()),
            ..UserPatch::default()
        }
        .apply(&mut user);
        assert_eq!(user.bio, "new bio");
        assert_eq!(user.username, "alice");
        assert_eq!(user.followers_count, 10);
    }
}

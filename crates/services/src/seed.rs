//! Bundled seed data.
//!
//! Each collection is seeded from a static JSON document compiled into the
//! binary. The documents are parsed once at service construction and never
//! reloaded; everything after that lives in memory only.

use crate::error::SeedError;
use crate::models::{Comment, Post, User};

/// The designated current-user ID. Follow and create operations act as
/// this user; [`crate::services::UserService::get_current_user`] requires
/// it to exist in the seeded users.
pub const CURRENT_USER_ID: &str = "user1";

const USERS_JSON: &str = include_str!("../seed/users.json");
const POSTS_JSON: &str = include_str!("../seed/posts.json");
const COMMENTS_JSON: &str = include_str!("../seed/comments.json");

/// Parse the bundled user records.
///
/// # Errors
///
/// Returns [`SeedError::Malformed`] if the document does not match the
/// schema.
pub fn users() -> Result<Vec<User>, SeedError> {
    serde_json::from_str(USERS_JSON).map_err(|source| SeedError::Malformed {
        document: "users.json",
        source,
    })
}

/// Parse the bundled post records.
///
/// # Errors
///
/// Returns [`SeedError::Malformed`] if the document does not match the
/// schema.
pub fn posts() -> Result<Vec<Post>, SeedError> {
    serde_json::from_str(POSTS_JSON).map_err(|source| SeedError::Malformed {
        document: "posts.json",
        source,
    })
}

/// Parse the bundled comment records.
///
/// # Errors
///
/// Returns [`SeedError::Malformed`] if the document does not match the
/// schema.
pub fn comments() -> Result<Vec<Comment>, SeedError> {
    serde_json::from_str(COMMENTS_JSON).map_err(|source| SeedError::Malformed {
        document: "comments.json",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_documents_parse() {
        assert!(!users().expect("users").is_empty());
        assert!(!posts().expect("posts").is_empty());
        assert!(!comments().expect("comments").is_empty());
    }

    #[test]
    fn test_current_user_is_seeded() {
        let users = users().expect("users");
        assert!(users.iter().any(|u| u.id.as_str() == CURRENT_USER_ID));
    }

    #[test]
    fn test_seeded_ids_are_unique() {
        let posts = posts().expect("posts");
        let mut ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn test_embedded_snapshots_reference_seeded_users() {
        // Snapshots are denormalized on purpose, but the seed itself should
        // start out consistent.
        let users = users().expect("users");
        for post in posts().expect("posts") {
            assert_eq!(post.user.id, post.user_id);
            let owner = users
                .iter()
                .find(|u| u.id == post.user_id)
                .expect("post owner seeded");
            assert_eq!(owner.username, post.user.username);
        }
    }
}

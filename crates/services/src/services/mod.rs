//! The three mock services and their composition root.
//!
//! Each service is an explicit object constructed with its initial dataset
//! and a latency policy - there is no hidden module-level state. The three
//! collections are fully independent: posts and comments reference users by
//! ID plus a point-in-time snapshot, and no service validates references
//! against another's collection.

pub mod comment;
pub mod post;
pub mod user;

use std::sync::Arc;

pub use comment::CommentService;
pub use post::PostService;
pub use user::UserService;

use fauxgram_core::UserId;

use crate::error::SeedError;
use crate::latency::LatencyPolicy;
use crate::models::User;
use crate::seed;

/// The wired-up mock data layer.
///
/// This is the composition root the presentation layer (or the CLI) holds:
/// the three services seeded from the bundled documents, sharing one
/// latency policy and acting as the seeded current user.
pub struct Services {
    /// Post collection.
    pub posts: PostService,
    /// User collection, holding the current-user identity.
    pub users: UserService,
    /// Comment collection.
    pub comments: CommentService,
}

impl Services {
    /// Build all three services from the bundled seed data, acting as the
    /// seeded current user.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if a bundled document fails to parse or the
    /// designated current user is missing from the seeded users.
    pub fn from_seed(latency: Arc<dyn LatencyPolicy>) -> Result<Self, SeedError> {
        Self::from_seed_as(UserId::new(seed::CURRENT_USER_ID), latency)
    }

    /// Build all three services from the bundled seed data, acting as the
    /// given user instead of the seeded default.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if a bundled document fails to parse or
    /// `current_user_id` is missing from the seeded users.
    pub fn from_seed_as(
        current_user_id: UserId,
        latency: Arc<dyn LatencyPolicy>,
    ) -> Result<Self, SeedError> {
        let users = seed::users()?;
        let actor = users
            .iter()
            .find(|u| u.id == current_user_id)
            .map(User::snapshot)
            .ok_or_else(|| SeedError::MissingCurrentUser(current_user_id.to_string()))?;

        Ok(Self {
            posts: PostService::new(seed::posts()?, actor.clone(), Arc::clone(&latency)),
            users: UserService::new(users, current_user_id, Arc::clone(&latency)),
            comments: CommentService::new(seed::comments()?, actor, latency),
        })
    }
}

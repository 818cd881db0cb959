//! User service: accounts, search and the current-user identity.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, instrument};

use fauxgram_core::UserId;

use crate::error::ServiceError;
use crate::ids;
use crate::latency::{self, LatencyPolicy};
use crate::models::{NewUser, User, UserPatch};

// Nominal per-operation latencies the UI loading states are tuned against.
const LIST_LATENCY: Duration = Duration::from_millis(300);
const LOOKUP_LATENCY: Duration = Duration::from_millis(200);
const SEARCH_LATENCY: Duration = Duration::from_millis(400);
const TRENDING_LATENCY: Duration = Duration::from_millis(300);
const TOGGLE_LATENCY: Duration = Duration::from_millis(300);
const CREATE_LATENCY: Duration = Duration::from_millis(400);
const UPDATE_LATENCY: Duration = Duration::from_millis(400);
const DELETE_LATENCY: Duration = Duration::from_millis(300);

/// How many users a trending query returns at most.
const TRENDING_LIMIT: usize = 8;

/// In-memory user collection with simulated latency.
///
/// Holds the designated current-user identity: follow toggles act on its
/// behalf, and two lookups annotate their result's `is_current_user` flag
/// against it. Locking and copy-isolation rules match
/// [`PostService`](super::PostService).
pub struct UserService {
    users: Mutex<Vec<User>>,
    current_user_id: UserId,
    latency: Arc<dyn LatencyPolicy>,
}

impl UserService {
    /// Create a user service owning the given records.
    #[must_use]
    pub fn new(seed: Vec<User>, current_user_id: UserId, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            users: Mutex::new(seed),
            current_user_id,
            latency,
        }
    }

    /// The ID follow and create operations act as.
    #[must_use]
    pub fn current_user_id(&self) -> &UserId {
        &self.current_user_id
    }

    fn store(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All users, in collection order.
    pub async fn get_all(&self) -> Vec<User> {
        latency::pause(self.latency.as_ref(), LIST_LATENCY).await;
        self.store().clone()
    }

    /// Look up a single user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UserNotFound`] if no user has this ID.
    pub async fn get_by_id(&self, id: &UserId) -> Result<User, ServiceError> {
        latency::pause(self.latency.as_ref(), LOOKUP_LATENCY).await;
        self.store()
            .iter()
            .find(|u| u.id == *id)
            .cloned()
            .ok_or(ServiceError::UserNotFound)
    }

    /// Look up a single user by username, with `is_current_user` annotated
    /// on the returned copy.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UserNotFound`] if no user has this username.
    pub async fn get_by_username(&self, username: &str) -> Result<User, ServiceError> {
        latency::pause(self.latency.as_ref(), LOOKUP_LATENCY).await;
        let mut user = self
            .store()
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(ServiceError::UserNotFound)?;
        user.is_current_user = user.id == self.current_user_id;
        Ok(user)
    }

    /// The current user's record, annotated `is_current_user: true`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::CurrentUserNotFound`] if the designated ID
    /// is missing from the collection. That is a seed-integrity failure,
    /// not something callers are expected to recover from.
    pub async fn get_current_user(&self) -> Result<User, ServiceError> {
        latency::pause(self.latency.as_ref(), LOOKUP_LATENCY).await;
        let mut user = self
            .store()
            .iter()
            .find(|u| u.id == self.current_user_id)
            .cloned()
            .ok_or(ServiceError::CurrentUserNotFound)?;
        user.is_current_user = true;
        Ok(user)
    }

    /// Case-insensitive substring search over username and display name.
    ///
    /// An empty query substring-matches everything; avoiding that is the
    /// caller's job.
    pub async fn search(&self, query: &str) -> Vec<User> {
        latency::pause(self.latency.as_ref(), SEARCH_LATENCY).await;
        let needle = query.to_lowercase();
        self.store()
            .iter()
            .filter(|u| {
                u.username.to_lowercase().contains(&needle)
                    || u.display_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Top users by follower count, capped at eight.
    ///
    /// The sort is stable, so ties keep their collection order.
    pub async fn get_trending(&self) -> Vec<User> {
        latency::pause(self.latency.as_ref(), TRENDING_LATENCY).await;
        let mut users = self.store().clone();
        users.sort_by(|a, b| b.followers_count.cmp(&a.followers_count));
        users.truncate(TRENDING_LIMIT);
        users
    }

    /// Flip whether the current user follows `id`, moving the follower
    /// count with it.
    ///
    /// The count clamps at zero on decrement instead of underflowing.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UserNotFound`] if no user has this ID.
    #[instrument(skip(self))]
    pub async fn toggle_follow(&self, id: &UserId) -> Result<User, ServiceError> {
        latency::pause(self.latency.as_ref(), TOGGLE_LATENCY).await;
        let mut users = self.store();
        let user = users
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or(ServiceError::UserNotFound)?;
        if user.is_following {
            user.followers_count = user.followers_count.saturating_sub(1);
        } else {
            user.followers_count += 1;
        }
        user.is_following = !user.is_following;
        debug!(
            following = user.is_following,
            followers = user.followers_count,
            "toggled follow"
        );
        Ok(user.clone())
    }

    /// Create a user, appending them to the collection.
    ///
    /// Unset draft fields default to a fresh time-based ID, an empty bio
    /// and zeroed counters; supplied fields win.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: NewUser) -> User {
        latency::pause(self.latency.as_ref(), CREATE_LATENCY).await;
        let user = User {
            id: draft.id.unwrap_or_else(|| UserId::new(ids::generate("user"))),
            username: draft.username,
            display_name: draft.display_name,
            avatar: draft.avatar,
            bio: draft.bio.unwrap_or_default(),
            followers_count: draft.followers_count.unwrap_or(0),
            following_count: draft.following_count.unwrap_or(0),
            posts_count: draft.posts_count.unwrap_or(0),
            is_following: draft.is_following.unwrap_or(false),
            is_current_user: false,
        };
        self.store().push(user.clone());
        debug!(user_id = %user.id, "created user");
        user
    }

    /// Shallow-merge a patch over an existing user.
    ///
    /// The embedded snapshots other records hold of this user are NOT
    /// refreshed; they stay whatever they were at capture time.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UserNotFound`] if no user has this ID.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &UserId, patch: UserPatch) -> Result<User, ServiceError> {
        latency::pause(self.latency.as_ref(), UPDATE_LATENCY).await;
        let mut users = self.store();
        let user = users
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or(ServiceError::UserNotFound)?;
        patch.apply(user);
        Ok(user.clone())
    }

    /// Remove a user. Their posts and comments are left in place, snapshots
    /// and all; there is no cascade.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UserNotFound`] if no user has this ID.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &UserId) -> Result<(), ServiceError> {
        latency::pause(self.latency.as_ref(), DELETE_LATENCY).await;
        let mut users = self.store();
        let index = users
            .iter()
            .position(|u| u.id == *id)
            .ok_or(ServiceError::UserNotFound)?;
        users.remove(index);
        debug!(user_id = %id, "deleted user");
        Ok(())
    }
}

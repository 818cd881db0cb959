//! Post service: the feed's post collection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, instrument};

use fauxgram_core::{PostId, UserId};

use crate::error::ServiceError;
use crate::ids;
use crate::latency::{self, LatencyPolicy};
use crate::models::{NewPost, Post, PostPatch, UserSnapshot};

// Nominal per-operation latencies the UI loading states are tuned against.
const LIST_LATENCY: Duration = Duration::from_millis(400);
const LOOKUP_LATENCY: Duration = Duration::from_millis(200);
const FILTER_LATENCY: Duration = Duration::from_millis(300);
const TOGGLE_LATENCY: Duration = Duration::from_millis(200);
const CREATE_LATENCY: Duration = Duration::from_millis(500);
const UPDATE_LATENCY: Duration = Duration::from_millis(400);
const DELETE_LATENCY: Duration = Duration::from_millis(300);

/// In-memory post collection with simulated latency.
///
/// The service exclusively owns its records. Every operation waits out its
/// artificial latency first, then takes the collection lock for a plain
/// read-modify-write; the lock is never held across an await, and callers
/// only ever receive clones of stored records.
pub struct PostService {
    posts: Mutex<Vec<Post>>,
    /// Snapshot of the acting user, embedded into created posts.
    actor: UserSnapshot,
    latency: Arc<dyn LatencyPolicy>,
}

impl PostService {
    /// Create a post service owning the given records.
    #[must_use]
    pub fn new(seed: Vec<Post>, actor: UserSnapshot, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            posts: Mutex::new(seed),
            actor,
            latency,
        }
    }

    fn store(&self) -> MutexGuard<'_, Vec<Post>> {
        // A panic while holding the lock leaves plain data behind; keep
        // serving it rather than poisoning every later call.
        self.posts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All posts, newest first.
    pub async fn get_all(&self) -> Vec<Post> {
        latency::pause(self.latency.as_ref(), LIST_LATENCY).await;
        let mut posts = self.store().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Look up a single post.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    pub async fn get_by_id(&self, id: &PostId) -> Result<Post, ServiceError> {
        latency::pause(self.latency.as_ref(), LOOKUP_LATENCY).await;
        self.store()
            .iter()
            .find(|p| p.id == *id)
            .cloned()
            .ok_or(ServiceError::PostNotFound)
    }

    /// All posts by one user, newest first.
    pub async fn get_by_user_id(&self, user_id: &UserId) -> Vec<Post> {
        latency::pause(self.latency.as_ref(), FILTER_LATENCY).await;
        let mut posts: Vec<Post> = self
            .store()
            .iter()
            .filter(|p| p.user_id == *user_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// All posts the current user saved, newest first.
    pub async fn get_saved(&self) -> Vec<Post> {
        latency::pause(self.latency.as_ref(), FILTER_LATENCY).await;
        let mut posts: Vec<Post> = self
            .store()
            .iter()
            .filter(|p| p.is_saved)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Flip the liked state, moving the like count with it.
    ///
    /// The count clamps at zero on decrement instead of underflowing.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    #[instrument(skip(self))]
    pub async fn toggle_like(&self, id: &PostId) -> Result<Post, ServiceError> {
        latency::pause(self.latency.as_ref(), TOGGLE_LATENCY).await;
        let mut posts = self.store();
        let post = posts
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(ServiceError::PostNotFound)?;
        if post.is_liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes += 1;
        }
        post.is_liked = !post.is_liked;
        debug!(liked = post.is_liked, likes = post.likes, "toggled like");
        Ok(post.clone())
    }

    /// Flip the saved state. No count moves with this one.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    #[instrument(skip(self))]
    pub async fn toggle_save(&self, id: &PostId) -> Result<Post, ServiceError> {
        latency::pause(self.latency.as_ref(), TOGGLE_LATENCY).await;
        let mut posts = self.store();
        let post = posts
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(ServiceError::PostNotFound)?;
        post.is_saved = !post.is_saved;
        debug!(saved = post.is_saved, "toggled save");
        Ok(post.clone())
    }

    /// Create a post, prepending it to the collection.
    ///
    /// Unset draft fields default to a fresh time-based ID, the acting user
    /// as author, zeroed counters and `now`; supplied fields win. The feed
    /// is re-sorted on every read anyway, but prepending keeps the stored
    /// order newest-first too.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: NewPost) -> Post {
        latency::pause(self.latency.as_ref(), CREATE_LATENCY).await;
        let post = Post {
            id: draft.id.unwrap_or_else(|| PostId::new(ids::generate("post"))),
            user_id: draft.user_id.unwrap_or_else(|| self.actor.id.clone()),
            user: draft.user.unwrap_or_else(|| self.actor.clone()),
            image_url: draft.image_url,
            caption: draft.caption.unwrap_or_default(),
            likes: draft.likes.unwrap_or(0),
            comments: draft.comments.unwrap_or(0),
            is_liked: draft.is_liked.unwrap_or(false),
            is_saved: draft.is_saved.unwrap_or(false),
            created_at: draft.created_at.unwrap_or_else(Utc::now),
        };
        self.store().insert(0, post.clone());
        debug!(post_id = %post.id, "created post");
        post
    }

    /// Shallow-merge a patch over an existing post.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &PostId, patch: PostPatch) -> Result<Post, ServiceError> {
        latency::pause(self.latency.as_ref(), UPDATE_LATENCY).await;
        let mut posts = self.store();
        let post = posts
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(ServiceError::PostNotFound)?;
        patch.apply(post);
        Ok(post.clone())
    }

    /// Remove a post.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &PostId) -> Result<(), ServiceError> {
        latency::pause(self.latency.as_ref(), DELETE_LATENCY).await;
        let mut posts = self.store();
        let index = posts
            .iter()
            .position(|p| p.id == *id)
            .ok_or(ServiceError::PostNotFound)?;
        posts.remove(index);
        debug!(post_id = %id, "deleted post");
        Ok(())
    }
}

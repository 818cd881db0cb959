//! Comment service: per-post comment threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, instrument};

use fauxgram_core::{CommentId, PostId};

use crate::error::ServiceError;
use crate::ids;
use crate::latency::{self, LatencyPolicy};
use crate::models::{Comment, CommentPatch, NewComment, UserSnapshot};

// Nominal per-operation latencies the UI loading states are tuned against.
const LIST_LATENCY: Duration = Duration::from_millis(300);
const LOOKUP_LATENCY: Duration = Duration::from_millis(200);
const FILTER_LATENCY: Duration = Duration::from_millis(300);
const CREATE_LATENCY: Duration = Duration::from_millis(400);
const UPDATE_LATENCY: Duration = Duration::from_millis(400);
const DELETE_LATENCY: Duration = Duration::from_millis(300);

/// In-memory comment collection with simulated latency.
///
/// Comments reference posts by ID only; nothing here checks the post
/// exists, and creating a comment never touches the parent post's comment
/// counter. Locking and copy-isolation rules match
/// [`PostService`](super::PostService).
pub struct CommentService {
    comments: Mutex<Vec<Comment>>,
    /// Snapshot of the acting user, embedded into created comments.
    actor: UserSnapshot,
    latency: Arc<dyn LatencyPolicy>,
}

impl CommentService {
    /// Create a comment service owning the given records.
    #[must_use]
    pub fn new(seed: Vec<Comment>, actor: UserSnapshot, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            comments: Mutex::new(seed),
            actor,
            latency,
        }
    }

    fn store(&self) -> MutexGuard<'_, Vec<Comment>> {
        self.comments.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All comments, in collection order.
    pub async fn get_all(&self) -> Vec<Comment> {
        latency::pause(self.latency.as_ref(), LIST_LATENCY).await;
        self.store().clone()
    }

    /// Look up a single comment.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::CommentNotFound`] if no comment has this ID.
    pub async fn get_by_id(&self, id: &CommentId) -> Result<Comment, ServiceError> {
        latency::pause(self.latency.as_ref(), LOOKUP_LATENCY).await;
        self.store()
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or(ServiceError::CommentNotFound)
    }

    /// A post's comment thread, oldest first.
    ///
    /// Note the asymmetry with the feed: posts list newest-first, threads
    /// read top-down.
    pub async fn get_by_post_id(&self, post_id: &PostId) -> Vec<Comment> {
        latency::pause(self.latency.as_ref(), FILTER_LATENCY).await;
        let mut comments: Vec<Comment> = self
            .store()
            .iter()
            .filter(|c| c.post_id == *post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        comments
    }

    /// Create a comment, appending it to the collection.
    ///
    /// Unset draft fields default to a fresh time-based ID, the acting user
    /// as author and `now`; supplied fields win. The parent post's comment
    /// counter is NOT incremented.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: NewComment) -> Comment {
        latency::pause(self.latency.as_ref(), CREATE_LATENCY).await;
        let comment = Comment {
            id: draft
                .id
                .unwrap_or_else(|| CommentId::new(ids::generate("comment"))),
            post_id: draft.post_id,
            user_id: draft.user_id.unwrap_or_else(|| self.actor.id.clone()),
            user: draft.user.unwrap_or_else(|| self.actor.clone()),
            text: draft.text,
            created_at: draft.created_at.unwrap_or_else(Utc::now),
        };
        self.store().push(comment.clone());
        debug!(comment_id = %comment.id, post_id = %comment.post_id, "created comment");
        comment
    }

    /// Shallow-merge a patch over an existing comment.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::CommentNotFound`] if no comment has this ID.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &CommentId, patch: CommentPatch) -> Result<Comment, ServiceError> {
        latency::pause(self.latency.as_ref(), UPDATE_LATENCY).await;
        let mut comments = self.store();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or(ServiceError::CommentNotFound)?;
        patch.apply(comment);
        Ok(comment.clone())
    }

    /// Remove a comment. The parent post's counter is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::CommentNotFound`] if no comment has this ID.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &CommentId) -> Result<(), ServiceError> {
        latency::pause(self.latency.as_ref(), DELETE_LATENCY).await;
        let mut comments = self.store();
        let index = comments
            .iter()
            .position(|c| c.id == *id)
            .ok_or(ServiceError::CommentNotFound)?;
        comments.remove(index);
        debug!(comment_id = %id, "deleted comment");
        Ok(())
    }
}

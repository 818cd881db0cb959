//! Mutating commands: toggles, creates, deletes.
//!
//! # Usage
//!
//! ```bash
//! # Toggle like/save on a post, follow on a user
//! fauxgram like post1
//! fauxgram save post1
//! fauxgram follow user3
//!
//! # Create a post or a comment as the current user
//! fauxgram post "new caption" --image-url https://example.com/x.jpg
//! fauxgram comment post1 "nice shot"
//!
//! # Remove a post
//! fauxgram delete-post post1
//! ```

use fauxgram_services::{NewComment, NewPost, ServiceError, Services};

/// Toggle the liked state of a post and print the result.
///
/// # Errors
///
/// Returns `ServiceError::PostNotFound` if no post has this ID.
#[allow(clippy::print_stdout)]
pub async fn like(services: &Services, post_id: &str) -> Result<(), ServiceError> {
    let post = services.posts.toggle_like(&post_id.into()).await?;
    println!(
        "{} is now {} ({} likes)",
        post.id,
        if post.is_liked { "liked" } else { "unliked" },
        post.likes
    );
    Ok(())
}

/// Toggle the saved state of a post and print the result.
///
/// # Errors
///
/// Returns `ServiceError::PostNotFound` if no post has this ID.
#[allow(clippy::print_stdout)]
pub async fn save(services: &Services, post_id: &str) -> Result<(), ServiceError> {
    let post = services.posts.toggle_save(&post_id.into()).await?;
    println!(
        "{} is now {}",
        post.id,
        if post.is_saved { "saved" } else { "unsaved" }
    );
    Ok(())
}

/// Toggle whether the current user follows another user.
///
/// # Errors
///
/// Returns `ServiceError::UserNotFound` if no user has this ID.
#[allow(clippy::print_stdout)]
pub async fn follow(services: &Services, user_id: &str) -> Result<(), ServiceError> {
    let user = services.users.toggle_follow(&user_id.into()).await?;
    println!(
        "@{} is now {} ({} followers)",
        user.username,
        if user.is_following {
            "followed"
        } else {
            "unfollowed"
        },
        user.followers_count
    );
    Ok(())
}

/// Create a post as the current user.
#[allow(clippy::print_stdout)]
pub async fn create_post(services: &Services, caption: String, image_url: Option<String>) {
    let post = services
        .posts
        .create(NewPost {
            caption: Some(caption),
            image_url,
            ..NewPost::default()
        })
        .await;
    println!("created {}", post.id);
}

/// Create a comment as the current user.
#[allow(clippy::print_stdout)]
pub async fn create_comment(services: &Services, post_id: &str, text: String) {
    let comment = services.comments.create(NewComment::new(post_id, text)).await;
    println!("created {} on {}", comment.id, comment.post_id);
}

/// Delete a post.
///
/// # Errors
///
/// Returns `ServiceError::PostNotFound` if no post has this ID.
#[allow(clippy::print_stdout)]
pub async fn delete_post(services: &Services, post_id: &str) -> Result<(), ServiceError> {
    services.posts.delete(&post_id.into()).await?;
    println!("deleted {post_id}");
    Ok(())
}

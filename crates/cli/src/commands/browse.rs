//! Read-only browse commands.
//!
//! # Usage
//!
//! ```bash
//! # The home feed, newest first
//! fauxgram feed
//!
//! # One user's profile and their posts
//! fauxgram profile lenscraft
//!
//! # Search, trending, saved posts, a comment thread
//! fauxgram search ali
//! fauxgram trending
//! fauxgram saved
//! fauxgram comments post1
//! ```

use fauxgram_services::{Comment, Post, ServiceError, Services, User};

/// Print the home feed.
#[allow(clippy::print_stdout)]
pub async fn feed(services: &Services) {
    for post in services.posts.get_all().await {
        print_post(&post);
    }
}

/// Print the current user's saved posts.
#[allow(clippy::print_stdout)]
pub async fn saved(services: &Services) {
    for post in services.posts.get_saved().await {
        print_post(&post);
    }
}

/// Print a user's profile and their posts, newest first.
///
/// # Errors
///
/// Returns `ServiceError::UserNotFound` if no user has this username.
#[allow(clippy::print_stdout)]
pub async fn profile(services: &Services, username: &str) -> Result<(), ServiceError> {
    let user = services.users.get_by_username(username).await?;
    print_user(&user);
    for post in services.posts.get_by_user_id(&user.id).await {
        print_post(&post);
    }
    Ok(())
}

/// Print users matching a search query.
#[allow(clippy::print_stdout)]
pub async fn search(services: &Services, query: &str) {
    let users = services.users.search(query).await;
    if users.is_empty() {
        println!("no users match {query:?}");
        return;
    }
    for user in users {
        print_user(&user);
    }
}

/// Print the trending users.
#[allow(clippy::print_stdout)]
pub async fn trending(services: &Services) {
    for user in services.users.get_trending().await {
        print_user(&user);
    }
}

/// Print a post's comment thread, oldest first.
#[allow(clippy::print_stdout)]
pub async fn comments(services: &Services, post_id: &str) {
    let thread = services.comments.get_by_post_id(&post_id.into()).await;
    if thread.is_empty() {
        println!("no comments on {post_id}");
        return;
    }
    for comment in thread {
        print_comment(&comment);
    }
}

#[allow(clippy::print_stdout)]
fn print_post(post: &Post) {
    println!(
        "[{}] @{} ({} likes, {} comments){}{}",
        post.id,
        post.user.username,
        post.likes,
        post.comments,
        if post.is_liked { " \u{2764}" } else { "" },
        if post.is_saved { " \u{1f516}" } else { "" },
    );
    if !post.caption.is_empty() {
        println!("    {}", post.caption);
    }
}

#[allow(clippy::print_stdout)]
fn print_user(user: &User) {
    println!(
        "@{} - {} ({} followers){}{}",
        user.username,
        user.display_name,
        user.followers_count,
        if user.is_following { " [following]" } else { "" },
        if user.is_current_user { " [you]" } else { "" },
    );
}

#[allow(clippy::print_stdout)]
fn print_comment(comment: &Comment) {
    println!("@{}: {}", comment.user.username, comment.text);
}

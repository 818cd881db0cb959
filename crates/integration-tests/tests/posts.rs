//! Integration tests for the post service.
//!
//! All suites run against `Instant` latency; the waits are a UI-facing
//! contract, not something the data semantics depend on.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use fauxgram_core::{PostId, UserId};
use fauxgram_integration_tests::seeded_services;
use fauxgram_services::latency::Instant;
use fauxgram_services::{NewPost, Post, PostPatch, PostService, ServiceError, UserSnapshot};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("timestamp")
}

fn snapshot(id: &str, username: &str) -> UserSnapshot {
    UserSnapshot {
        id: UserId::new(id),
        username: username.to_owned(),
        display_name: username.to_owned(),
        avatar: None,
    }
}

fn post(id: &str, user_id: &str, created_at: &str) -> Post {
    Post {
        id: PostId::new(id),
        user_id: UserId::new(user_id),
        user: snapshot(user_id, user_id),
        image_url: None,
        caption: String::new(),
        likes: 0,
        comments: 0,
        is_liked: false,
        is_saved: false,
        created_at: ts(created_at),
    }
}

fn service_with(seed: Vec<Post>) -> PostService {
    PostService::new(seed, snapshot("user1", "you"), Arc::new(Instant))
}

// =============================================================================
// Ordering and Filtering
// =============================================================================

#[tokio::test]
async fn test_get_all_is_sorted_newest_first() {
    let services = seeded_services();
    let feed = services.posts.get_all().await;
    assert!(feed.len() > 1);
    for pair in feed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_get_by_user_id_filters_and_sorts() {
    let services = seeded_services();
    let posts = services.posts.get_by_user_id(&UserId::new("user2")).await;
    assert!(!posts.is_empty());
    for post in &posts {
        assert_eq!(post.user_id, UserId::new("user2"));
    }
    for pair in posts.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_get_saved_returns_only_saved_posts() {
    let services = seeded_services();
    let saved = services.posts.get_saved().await;
    assert!(!saved.is_empty());
    assert!(saved.iter().all(|p| p.is_saved));
}

// =============================================================================
// Copy Isolation
// =============================================================================

#[tokio::test]
async fn test_returned_copies_are_isolated_from_the_store() {
    let services = seeded_services();
    let id = PostId::new("post1");

    let mut copy = services.posts.get_by_id(&id).await.expect("post1 seeded");
    copy.caption = "mutated by caller".to_owned();
    copy.likes = 999_999;

    let fresh = services.posts.get_by_id(&id).await.expect("post1 seeded");
    assert_ne!(fresh.caption, "mutated by caller");
    assert_ne!(fresh.likes, 999_999);
}

// =============================================================================
// Toggles
// =============================================================================

#[tokio::test]
async fn test_toggle_like_flips_state_and_count_in_lockstep() {
    // Seed scenario: likes 5, not liked.
    let service = service_with(vec![{
        let mut p = post("p1", "u1", "2024-01-01T00:00:00Z");
        p.likes = 5;
        p
    }]);

    let toggled = service
        .toggle_like(&PostId::new("p1"))
        .await
        .expect("p1 exists");
    assert!(toggled.is_liked);
    assert_eq!(toggled.likes, 6);

    let toggled_back = service
        .toggle_like(&PostId::new("p1"))
        .await
        .expect("p1 exists");
    assert!(!toggled_back.is_liked);
    assert_eq!(toggled_back.likes, 5);
}

#[tokio::test]
async fn test_toggle_like_clamps_at_zero() {
    // A liked post with zero likes is inconsistent data, but unliking it
    // must not underflow the count.
    let service = service_with(vec![{
        let mut p = post("p1", "u1", "2024-01-01T00:00:00Z");
        p.is_liked = true;
        p.likes = 0;
        p
    }]);

    let toggled = service
        .toggle_like(&PostId::new("p1"))
        .await
        .expect("p1 exists");
    assert!(!toggled.is_liked);
    assert_eq!(toggled.likes, 0);
}

#[tokio::test]
async fn test_toggle_save_is_an_involution_with_no_count_effect() {
    let services = seeded_services();
    let id = PostId::new("post1");
    let before = services.posts.get_by_id(&id).await.expect("post1 seeded");

    let saved = services.posts.toggle_save(&id).await.expect("post1 seeded");
    assert_eq!(saved.is_saved, !before.is_saved);
    assert_eq!(saved.likes, before.likes);

    let restored = services.posts.toggle_save(&id).await.expect("post1 seeded");
    assert_eq!(restored.is_saved, before.is_saved);
}

// =============================================================================
// Create / Update / Delete
// =============================================================================

#[tokio::test]
async fn test_create_defaults_and_prepends() {
    let services = seeded_services();
    let before = services.posts.get_all().await;

    let created = services
        .posts
        .create(NewPost {
            caption: Some("fresh".to_owned()),
            ..NewPost::default()
        })
        .await;

    assert!(!created.id.as_str().is_empty());
    assert_eq!(created.likes, 0);
    assert_eq!(created.comments, 0);
    assert!(!created.is_liked);
    assert!(!created.is_saved);
    // Acting user becomes the author when the draft does not say otherwise.
    assert_eq!(created.user_id, UserId::new("user1"));
    assert_eq!(created.user.id, UserId::new("user1"));

    // Fresh ID never collides with anything already in the collection.
    assert!(before.iter().all(|p| p.id != created.id));

    let after = services.posts.get_all().await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.first().map(|p| p.id.clone()), Some(created.id));
}

#[tokio::test]
async fn test_create_ids_are_unique_across_a_burst() {
    let services = seeded_services();
    let mut ids = Vec::new();
    for _ in 0..20 {
        ids.push(services.posts.create(NewPost::default()).await.id);
    }
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_create_lets_supplied_fields_win() {
    let services = seeded_services();
    let created = services
        .posts
        .create(NewPost {
            id: Some(PostId::new("my-own-id")),
            likes: Some(41),
            is_liked: Some(true),
            created_at: Some(ts("2023-06-01T12:00:00Z")),
            user_id: Some(UserId::new("user4")),
            ..NewPost::default()
        })
        .await;

    assert_eq!(created.id, PostId::new("my-own-id"));
    assert_eq!(created.likes, 41);
    assert!(created.is_liked);
    assert_eq!(created.created_at, ts("2023-06-01T12:00:00Z"));
    assert_eq!(created.user_id, UserId::new("user4"));
    // The embedded snapshot still defaults to the acting user; the draft
    // only overrode the ID reference.
    assert_eq!(created.user.id, UserId::new("user1"));
}

#[tokio::test]
async fn test_update_merges_shallowly() {
    let services = seeded_services();
    let id = PostId::new("post3");
    let before = services.posts.get_by_id(&id).await.expect("post3 seeded");

    let updated = services
        .posts
        .update(
            &id,
            PostPatch {
                caption: Some("edited".to_owned()),
                ..PostPatch::default()
            },
        )
        .await
        .expect("post3 seeded");

    assert_eq!(updated.caption, "edited");
    assert_eq!(updated.likes, before.likes);
    assert_eq!(updated.created_at, before.created_at);
}

#[tokio::test]
async fn test_delete_removes_the_record() {
    let services = seeded_services();
    let id = PostId::new("post6");

    services.posts.delete(&id).await.expect("post6 seeded");

    assert_eq!(
        services.posts.get_by_id(&id).await,
        Err(ServiceError::PostNotFound)
    );
    assert_eq!(
        services.posts.delete(&id).await,
        Err(ServiceError::PostNotFound)
    );
}

// =============================================================================
// Not Found
// =============================================================================

#[tokio::test]
async fn test_missing_post_fails_with_fixed_message() {
    let services = seeded_services();
    let missing = PostId::new("nonexistent");

    let err = services
        .posts
        .get_by_id(&missing)
        .await
        .expect_err("lookup must miss");
    assert!(err.to_string().contains("not found"));
    assert_eq!(err.to_string(), "Post not found");

    assert!(
        services
            .posts
            .update(&missing, PostPatch::default())
            .await
            .is_err()
    );
    assert!(services.posts.toggle_like(&missing).await.is_err());
    assert!(services.posts.toggle_save(&missing).await.is_err());
}

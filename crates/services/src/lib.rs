//! Fauxgram Services - the in-memory mock data layer.
//!
//! Three services (posts, users, comments) each own an in-memory collection
//! seeded from bundled JSON and expose async CRUD-style operations that
//! resolve after an injectable artificial latency, emulating a network the
//! presentation layer can show loading states against.
//!
//! # Contract
//!
//! - Every operation returns clones; mutating a returned record never
//!   changes stored state.
//! - Lookups that miss fail with one of four fixed messages ("Post not
//!   found", ...); that is the only failure mode.
//! - Posts and comments embed a point-in-time snapshot of their author that
//!   is never refreshed - there is no referential integrity across the
//!   three collections, by design.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fauxgram_services::{Services, latency};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let services = Services::from_seed(Arc::new(latency::Instant))?;
//! let feed = services.posts.get_all().await;
//! assert!(!feed.is_empty());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod ids;
pub mod latency;
pub mod models;
pub mod seed;
pub mod services;

pub use error::{SeedError, ServiceError};
pub use latency::{Instant, LatencyPolicy, Simulated};
pub use models::{
    Comment, CommentPatch, NewComment, NewPost, NewUser, Post, PostPatch, User, UserPatch,
    UserSnapshot,
};
pub use services::{CommentService, PostService, Services, UserService};

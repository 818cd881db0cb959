//! Domain types for the mock data layer.
//!
//! All types serialize with camelCase field names so they match the seed
//! JSON schema and the shapes the presentation layer expects.

pub mod comment;
pub mod post;
pub mod user;

pub use comment::{Comment, CommentPatch, NewComment};
pub use post::{NewPost, Post, PostPatch};
pub use user::{NewUser, User, UserPatch, UserSnapshot};

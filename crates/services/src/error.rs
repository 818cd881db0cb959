//! Error types for the mock data layer.

use thiserror::Error;

/// Errors surfaced by the mock services.
///
/// The service layer has exactly one failure mode: a lookup by ID missed.
/// The display strings are part of the contract; the presentation layer
/// shows them verbatim and matches on nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Post lookup by ID missed.
    #[error("Post not found")]
    PostNotFound,

    /// User lookup by ID or username missed.
    #[error("User not found")]
    UserNotFound,

    /// Comment lookup by ID missed.
    #[error("Comment not found")]
    CommentNotFound,

    /// The designated current-user ID is missing from the collection. This
    /// is a seed-data integrity failure, not a recoverable runtime case.
    #[error("Current user not found")]
    CurrentUserNotFound,
}

/// Errors raised while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A bundled seed document does not parse against the schema.
    #[error("malformed seed document {document}: {source}")]
    Malformed {
        /// Which bundled document failed.
        document: &'static str,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The seed users do not contain the designated current-user ID.
    #[error("seed users are missing current user {0}")]
    MissingCurrentUser(String),
}

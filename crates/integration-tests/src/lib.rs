//! Integration tests for Fauxgram.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fauxgram-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `posts` - Post service tests (feed ordering, toggles, CRUD)
//! - `users` - User service tests (identity, search, trending, follows)
//! - `comments` - Comment service tests (threads, append order, drift)
//!
//! All suites run against the bundled seed with the [`Instant`] latency
//! policy, so nothing actually sleeps.
//!
//! [`Instant`]: fauxgram_services::latency::Instant

use std::sync::Arc;

use fauxgram_services::Services;
use fauxgram_services::latency::Instant;

/// The bundled seed wired up with no artificial latency.
///
/// # Panics
///
/// Panics if the bundled seed is malformed; that is a bug in the crate
/// under test, so failing loudly here is the point.
#[must_use]
pub fn seeded_services() -> Services {
    Services::from_seed(Arc::new(Instant)).expect("bundled seed is well-formed")
}

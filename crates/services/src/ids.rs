//! Time-based ID generation.
//!
//! IDs follow the `{prefix}_{millis}_{seq}` shape: the creation timestamp
//! keeps them human-readable and roughly ordered, and a process-wide
//! sequence counter keeps two creates in the same millisecond distinct.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh time-based ID with the given entity prefix.
#[must_use]
pub fn generate(prefix: &str) -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{}_{seq}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_ids_carry_prefix() {
        let id = generate("post");
        assert!(id.starts_with("post_"));
    }

    #[test]
    fn test_generated_ids_are_unique_within_a_burst() {
        let ids: HashSet<String> = (0..1000).map(|_| generate("comment")).collect();
        assert_eq!(ids.len(), 1000);
    }
}

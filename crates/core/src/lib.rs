//! Fauxgram Core - Shared types library.
//!
//! This crate provides common types used across all Fauxgram components:
//! - `services` - The in-memory mock data layer
//! - `cli` - Command-line tool for driving the services by hand
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clocks, no async. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe entity IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Ember Match - matching service core for the Ember dating app
//!
//! This library provides the decision core used by the Ember dating app:
//! an eligibility filter over candidate profiles and the like/match
//! formation handshake, both running against an injected repository.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod store;

// Re-export commonly used types
pub use core::{MatchEngine, MatchError};
pub use models::{Gender, Like, Match, Preferences, Profile};
pub use store::{MemoryStore, Repository};

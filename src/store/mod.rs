// Store exports
pub mod memory;

use thiserror::Error;

use crate::models::{Like, Match, Profile};

pub use memory::MemoryStore;

/// Errors that can occur when writing to the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

/// Capability set over the three named collections (profiles, likes, matches)
///
/// Both core operations take the repository by reference, so the decision
/// logic carries no hidden global state and can be tested against any
/// implementation. List methods return records in insertion order.
pub trait Repository: Send + Sync {
    fn list_profiles(&self) -> Vec<Profile>;

    fn profile_by_user_id(&self, user_id: &str) -> Option<Profile>;

    fn list_likes(&self) -> Vec<Like>;

    fn list_matches(&self) -> Vec<Match>;

    /// Insert a profile, replacing any existing profile for the same user
    fn append_profile(&self, profile: Profile) -> Result<(), StoreError>;

    /// Record a like; a duplicate (liker, liked) pair is a no-op
    fn append_like(&self, like: Like);

    /// Record a like unless the reverse like already exists
    ///
    /// Returns true when the reverse like (liked -> liker) is present, in
    /// which case nothing is appended and the caller should form the match.
    /// The reverse check and the insert happen under one write lock, so two
    /// crossing likes cannot both take the one-sided path.
    fn append_like_unless_reciprocal(&self, like: Like) -> bool;

    /// Record a match, at most once per unordered pair
    ///
    /// Returns the surviving record: the existing match when the pair is
    /// already matched, otherwise the one just inserted. The check and the
    /// insert happen under a single write lock, so concurrent reciprocal
    /// likes cannot produce duplicate matches.
    fn append_match(&self, candidate: Match) -> Match;
}

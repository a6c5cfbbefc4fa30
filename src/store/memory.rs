use std::sync::RwLock;

use crate::models::{Like, Match, Profile};
use crate::store::{Repository, StoreError};

#[derive(Debug, Default)]
struct Collections {
    profiles: Vec<Profile>,
    likes: Vec<Like>,
    matches: Vec<Match>,
}

/// In-memory implementation of the repository
///
/// All three collections live behind one `RwLock`, preserving insertion
/// order. Lock poisoning is not recoverable here, so the guards use
/// `expect`; a poisoned lock means a panic already happened mid-write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Collections> {
        self.state.read().expect("store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Collections> {
        self.state.write().expect("store lock poisoned")
    }
}

impl Repository for MemoryStore {
    fn list_profiles(&self) -> Vec<Profile> {
        self.read().profiles.clone()
    }

    fn profile_by_user_id(&self, user_id: &str) -> Option<Profile> {
        self.read()
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
    }

    fn list_likes(&self) -> Vec<Like> {
        self.read().likes.clone()
    }

    fn list_matches(&self) -> Vec<Match> {
        self.read().matches.clone()
    }

    fn append_profile(&self, profile: Profile) -> Result<(), StoreError> {
        if profile.user_id.is_empty() {
            return Err(StoreError::InvalidProfile(
                "user id must not be empty".to_string(),
            ));
        }

        let mut state = self.write();
        // Owner update keeps the profile's original position in store order
        if let Some(existing) = state
            .profiles
            .iter_mut()
            .find(|p| p.user_id == profile.user_id)
        {
            *existing = profile;
        } else {
            state.profiles.push(profile);
        }
        Ok(())
    }

    fn append_like(&self, like: Like) {
        let mut state = self.write();
        let duplicate = state
            .likes
            .iter()
            .any(|l| l.liker_id == like.liker_id && l.liked_id == like.liked_id);
        if !duplicate {
            state.likes.push(like);
        }
    }

    fn append_like_unless_reciprocal(&self, like: Like) -> bool {
        let mut state = self.write();
        let reciprocal = state
            .likes
            .iter()
            .any(|l| l.liker_id == like.liked_id && l.liked_id == like.liker_id);
        if reciprocal {
            return true;
        }
        let duplicate = state
            .likes
            .iter()
            .any(|l| l.liker_id == like.liker_id && l.liked_id == like.liked_id);
        if !duplicate {
            state.likes.push(like);
        }
        false
    }

    fn append_match(&self, candidate: Match) -> Match {
        let mut state = self.write();
        if let Some(existing) = state
            .matches
            .iter()
            .find(|m| m.involves_pair(&candidate.user1_id, &candidate.user2_id))
        {
            return existing.clone();
        }
        state.matches.push(candidate.clone());
        candidate
    }
}

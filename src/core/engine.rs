use std::sync::Arc;

use thiserror::Error;

use crate::core::filters::{has_prior_interaction, matches_preferences};
use crate::models::{Like, Match, Profile};
use crate::store::Repository;

/// Errors rejected by match formation
///
/// A repeated reciprocal like is not an error: formation is idempotent and
/// returns the existing match.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no profile found for user {0}")]
    ProfileNotFound(String),

    #[error("user {0} cannot like themselves")]
    SelfLike(String),
}

/// The decision core: eligibility filtering and match formation
///
/// Stateless over the injected repository; both operations re-read the
/// collections on every call.
pub struct MatchEngine<R: Repository> {
    repo: Arc<R>,
}

impl<R: Repository> Clone for MatchEngine<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: Repository> MatchEngine<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Find profiles the user may currently browse
    ///
    /// Candidates are taken in store insertion order and must pass, in
    /// order: age bounds, gender preference, no prior interaction. The
    /// result is truncated to `limit`. Returns empty when the requester has
    /// no profile.
    pub fn potential_matches(&self, user_id: &str, limit: usize) -> Vec<Profile> {
        let requester = match self.repo.profile_by_user_id(user_id) {
            Some(profile) => profile,
            None => {
                tracing::debug!("No profile for {}, returning no candidates", user_id);
                return Vec::new();
            }
        };

        let likes = self.repo.list_likes();
        let matches = self.repo.list_matches();

        self.repo
            .list_profiles()
            .into_iter()
            .filter(|candidate| candidate.user_id != requester.user_id)
            .filter(|candidate| matches_preferences(candidate, &requester))
            .filter(|candidate| {
                !has_prior_interaction(&requester.user_id, &candidate.user_id, &likes, &matches)
            })
            .take(limit)
            .collect()
    }

    /// Record a like from `liker_id` toward `liked_id`
    ///
    /// Returns `Some(Match)` when this like completes a mutual pair (or when
    /// the pair was already matched), `None` when the like is one-sided.
    pub fn register_like(
        &self,
        liker_id: &str,
        liked_id: &str,
    ) -> Result<Option<Match>, MatchError> {
        if liker_id == liked_id {
            return Err(MatchError::SelfLike(liker_id.to_string()));
        }

        if self.repo.profile_by_user_id(liker_id).is_none() {
            return Err(MatchError::ProfileNotFound(liker_id.to_string()));
        }

        // Already matched: idempotent success, no new records
        if let Some(existing) = self
            .repo
            .list_matches()
            .into_iter()
            .find(|m| m.involves_pair(liker_id, liked_id))
        {
            tracing::debug!("Pair {} / {} already matched", liker_id, liked_id);
            return Ok(Some(existing));
        }

        // The reverse check and the like insert are one atomic store step,
        // so crossing reciprocal likes cannot both take the one-sided path;
        // append_match then guards the unordered pair
        let reciprocal = self
            .repo
            .append_like_unless_reciprocal(Like::new(liker_id, liked_id));

        if reciprocal {
            let matched = self.repo.append_match(Match::new(liker_id, liked_id));
            tracing::info!("Mutual like: matched {} with {}", liker_id, liked_id);
            return Ok(Some(matched));
        }

        tracing::debug!("Recorded one-sided like {} -> {}", liker_id, liked_id);
        Ok(None)
    }

    /// List the user's existing matches, in store insertion order
    pub fn matches_for_user(&self, user_id: &str) -> Vec<Match> {
        self.repo
            .list_matches()
            .into_iter()
            .filter(|m| m.involves_user(user_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Preferences};
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn engine_with_profiles(profiles: Vec<Profile>) -> MatchEngine<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        for profile in profiles {
            store.append_profile(profile).unwrap();
        }
        MatchEngine::new(store)
    }

    fn profile(user_id: &str, age: u8, gender: Gender) -> Profile {
        Profile {
            user_id: user_id.to_string(),
            name: format!("User {}", user_id),
            age,
            gender,
            location: "Berlin".to_string(),
            bio: String::new(),
            interests: vec![],
            photo_ids: vec![],
            preferences: Preferences::new(18, 99, 50, vec![]).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn requester(user_id: &str) -> Profile {
        let mut p = profile(user_id, 30, Gender::Male);
        p.preferences = Preferences::new(25, 35, 50, vec![Gender::Female]).unwrap();
        p
    }

    #[test]
    fn test_filter_scenario_from_requirements() {
        // age 30, prefers 25-35 female; only the 28yo female survives
        let engine = engine_with_profiles(vec![
            requester("req"),
            profile("a", 28, Gender::Female),
            profile("b", 40, Gender::Female),
            profile("c", 29, Gender::Male),
        ]);

        let result = engine.potential_matches("req", 10);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user_id, "a");
    }

    #[test]
    fn test_filter_excludes_self_and_respects_limit() {
        let mut profiles = vec![requester("req")];
        for i in 0..15 {
            profiles.push(profile(&format!("u{}", i), 28, Gender::Female));
        }
        let engine = engine_with_profiles(profiles);

        let result = engine.potential_matches("req", 10);
        assert_eq!(result.len(), 10);
        assert!(result.iter().all(|p| p.user_id != "req"));
    }

    #[test]
    fn test_filter_preserves_store_order() {
        let engine = engine_with_profiles(vec![
            requester("req"),
            profile("first", 26, Gender::Female),
            profile("second", 27, Gender::Female),
            profile("third", 28, Gender::Female),
        ]);

        let ids: Vec<String> = engine
            .potential_matches("req", 10)
            .into_iter()
            .map(|p| p.user_id)
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filter_unknown_requester_returns_empty() {
        let engine = engine_with_profiles(vec![profile("a", 28, Gender::Female)]);
        assert!(engine.potential_matches("ghost", 10).is_empty());
    }

    #[test]
    fn test_filter_excludes_liked_and_matched() {
        let engine = engine_with_profiles(vec![
            requester("req"),
            profile("liked", 28, Gender::Female),
            profile("matched", 29, Gender::Female),
            profile("fresh", 30, Gender::Female),
        ]);
        engine.repository().append_like(Like::new("req", "liked"));
        engine.repository().append_match(Match::new("matched", "req"));

        let ids: Vec<String> = engine
            .potential_matches("req", 10)
            .into_iter()
            .map(|p| p.user_id)
            .collect();
        assert_eq!(ids, vec!["fresh"]);
    }

    #[test]
    fn test_one_sided_like_records_no_match() {
        let engine = engine_with_profiles(vec![
            requester("a"),
            profile("b", 28, Gender::Female),
        ]);

        let outcome = engine.register_like("a", "b").unwrap();
        assert!(outcome.is_none());
        assert_eq!(engine.repository().list_likes().len(), 1);
        assert!(engine.repository().list_matches().is_empty());
    }

    #[test]
    fn test_reciprocal_like_forms_exactly_one_match() {
        let engine = engine_with_profiles(vec![
            requester("a"),
            profile("b", 28, Gender::Female),
        ]);

        assert!(engine.register_like("a", "b").unwrap().is_none());
        let matched = engine.register_like("b", "a").unwrap();
        assert!(matched.is_some());
        assert_eq!(engine.repository().list_matches().len(), 1);
        // The reciprocating like forms the match instead of a second record
        assert_eq!(engine.repository().list_likes().len(), 1);

        // A third like in either direction adds nothing
        let again = engine.register_like("a", "b").unwrap().unwrap();
        assert_eq!(again.match_id, matched.unwrap().match_id);
        assert_eq!(engine.repository().list_matches().len(), 1);
    }

    #[test]
    fn test_matches_for_user_lists_both_orientations() {
        let engine = engine_with_profiles(vec![
            profile("a", 28, Gender::Female),
            profile("b", 29, Gender::Female),
            profile("c", 30, Gender::Female),
            profile("d", 31, Gender::Female),
        ]);
        engine.repository().append_match(Match::new("a", "b"));
        engine.repository().append_match(Match::new("c", "a"));
        engine.repository().append_match(Match::new("b", "d"));

        let for_a = engine.matches_for_user("a");
        assert_eq!(for_a.len(), 2);
        assert!(for_a[0].involves_pair("a", "b"));
        assert!(for_a[1].involves_pair("a", "c"));

        assert!(engine.matches_for_user("ghost").is_empty());
    }

    #[test]
    fn test_self_like_rejected() {
        let engine = engine_with_profiles(vec![requester("a")]);
        assert!(matches!(
            engine.register_like("a", "a"),
            Err(MatchError::SelfLike(_))
        ));
    }

    #[test]
    fn test_like_without_profile_rejected() {
        let engine = engine_with_profiles(vec![profile("b", 28, Gender::Female)]);
        assert!(matches!(
            engine.register_like("ghost", "b"),
            Err(MatchError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_liked_user_still_sees_liker() {
        // A's like excludes B from A's browse, but not the reverse
        let engine = engine_with_profiles(vec![
            profile("a", 28, Gender::Female),
            profile("b", 29, Gender::Female),
        ]);
        engine.register_like("a", "b").unwrap();

        assert!(engine.potential_matches("a", 10).is_empty());
        let seen_by_b: Vec<String> = engine
            .potential_matches("b", 10)
            .into_iter()
            .map(|p| p.user_id)
            .collect();
        assert_eq!(seen_by_b, vec!["a"]);
    }
}

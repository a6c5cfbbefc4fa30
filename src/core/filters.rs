use crate::models::{Like, Match, Profile};

/// Check if a candidate satisfies the requester's hard preferences
///
/// Age bounds are inclusive; an empty preferred-gender set imposes no
/// restriction. Distance preference is not consulted.
#[inline]
pub fn matches_preferences(candidate: &Profile, requester: &Profile) -> bool {
    let prefs = &requester.preferences;

    // Age bounds
    if candidate.age < prefs.min_age || candidate.age > prefs.max_age {
        return false;
    }

    // Gender preference
    if !prefs.accepts_gender(candidate.gender) {
        return false;
    }

    true
}

/// Check if the requester has already interacted with a candidate
///
/// A candidate is interacted-with when the requester has an outbound like
/// toward them, or when a match exists between the pair in either
/// orientation. Duplicate like records are harmless here: `any` treats the
/// collection as a set.
#[inline]
pub fn has_prior_interaction(
    requester_id: &str,
    candidate_id: &str,
    likes: &[Like],
    matches: &[Match],
) -> bool {
    if likes
        .iter()
        .any(|l| l.liker_id == requester_id && l.liked_id == candidate_id)
    {
        return true;
    }

    matches
        .iter()
        .any(|m| m.involves_pair(requester_id, candidate_id))
}

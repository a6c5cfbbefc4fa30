use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gender identity, from the fixed set the app supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
}

/// Errors raised when constructing domain records with invalid fields
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid age range: min {min} exceeds max {max}")]
    InvalidAgeRange { min: u8, max: u8 },
}

/// A user's matching preferences, embedded in their profile
///
/// `max_distance_km` is carried in the data model but not consulted by the
/// eligibility filter. An empty `preferred_genders` set imposes no gender
/// restriction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "minAge")]
    pub min_age: u8,
    #[serde(rename = "maxAge")]
    pub max_age: u8,
    #[serde(rename = "maxDistanceKm")]
    pub max_distance_km: u16,
    #[serde(rename = "preferredGenders", default)]
    pub preferred_genders: Vec<Gender>,
}

impl Preferences {
    /// Build preferences, rejecting an inverted age range
    pub fn new(
        min_age: u8,
        max_age: u8,
        max_distance_km: u16,
        preferred_genders: Vec<Gender>,
    ) -> Result<Self, DomainError> {
        if min_age > max_age {
            return Err(DomainError::InvalidAgeRange {
                min: min_age,
                max: max_age,
            });
        }

        Ok(Self {
            min_age,
            max_age,
            max_distance_km,
            preferred_genders,
        })
    }

    /// True when the given gender satisfies this preference set
    pub fn accepts_gender(&self, gender: Gender) -> bool {
        self.preferred_genders.is_empty() || self.preferred_genders.contains(&gender)
    }
}

/// A user's public dating attributes plus their private preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "photoIds", default)]
    pub photo_ids: Vec<String>,
    pub preferences: Preferences,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A one-directional expression of interest from one user toward another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "likerId")]
    pub liker_id: String,
    #[serde(rename = "likedId")]
    pub liked_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(liker_id: impl Into<String>, liked_id: impl Into<String>) -> Self {
        Self {
            liker_id: liker_id.into(),
            liked_id: liked_id.into(),
            created_at: Utc::now(),
        }
    }
}

/// A mutual, undirected pairing formed once both directions of Like exist
///
/// The pair is unordered: a match between A and B is the same record whether
/// it was completed by A's like or B's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "user1Id")]
    pub user1_id: String,
    #[serde(rename = "user2Id")]
    pub user2_id: String,
    #[serde(rename = "matchedAt")]
    pub matched_at: DateTime<Utc>,
}

impl Match {
    pub fn new(user_a: impl Into<String>, user_b: impl Into<String>) -> Self {
        Self {
            match_id: uuid::Uuid::new_v4().to_string(),
            user1_id: user_a.into(),
            user2_id: user_b.into(),
            matched_at: Utc::now(),
        }
    }

    /// True when this match joins the given unordered pair
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        (self.user1_id == a && self.user2_id == b) || (self.user1_id == b && self.user2_id == a)
    }

    /// True when either side of this match is the given user
    pub fn involves_user(&self, user_id: &str) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }
}

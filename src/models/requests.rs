use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Gender;

/// Request to browse eligible candidate profiles
///
/// A missing `limit` falls back to the configured `matching.default_limit`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrowseRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to record a like (or a dislike, which is not persisted)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InteractionRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "liker_id", rename = "likerId")]
    pub liker_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "liked_id", rename = "likedId")]
    pub liked_id: String,
}

/// Request to create or update a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(alias = "photo_ids", rename = "photoIds", default)]
    pub photo_ids: Vec<String>,
    #[serde(alias = "min_age", rename = "minAge")]
    pub min_age: u8,
    #[serde(alias = "max_age", rename = "maxAge")]
    pub max_age: u8,
    #[serde(alias = "max_distance_km", rename = "maxDistanceKm", default = "default_distance")]
    pub max_distance_km: u16,
    #[serde(alias = "preferred_genders", rename = "preferredGenders", default)]
    pub preferred_genders: Vec<Gender>,
}

fn default_distance() -> u16 {
    50
}

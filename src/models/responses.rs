use serde::{Deserialize, Serialize};

use crate::models::domain::{Match, Profile};

/// Response for the browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub profiles: Vec<Profile>,
    #[serde(rename = "totalEligible")]
    pub total_eligible: usize,
}

/// Response for the like endpoint
///
/// `matched` is true exactly when this like completed a mutual pair; the
/// caller decides whether to surface a match notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub matched: bool,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub matched_pair: Option<Match>,
}

/// Response listing a user's existing matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListResponse {
    pub matches: Vec<Match>,
    pub total: usize,
}

/// Response for the dislike endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DislikeResponse {
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

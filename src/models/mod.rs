// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{DomainError, Gender, Like, Match, Preferences, Profile};
pub use requests::{BrowseRequest, CreateProfileRequest, InteractionRequest};
pub use responses::{
    BrowseResponse, DislikeResponse, ErrorResponse, HealthResponse, LikeResponse,
    MatchListResponse,
};

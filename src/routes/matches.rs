use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{MatchEngine, MatchError};
use crate::models::{
    BrowseRequest, BrowseResponse, DislikeResponse, ErrorResponse, HealthResponse,
    InteractionRequest, LikeResponse, MatchListResponse,
};
use crate::store::MemoryStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchEngine<MemoryStore>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/browse", web::post().to(browse))
        .route("/matches/like", web::post().to(like))
        .route("/matches/dislike", web::post().to(dislike))
        .route("/matches/{user_id}", web::get().to(list_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Browse eligible candidates
///
/// POST /api/v1/matches/browse
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 10
/// }
/// ```
async fn browse(state: web::Data<AppState>, req: web::Json<BrowseRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for browse request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Configured default when the request omits a limit, capped to prevent
    // excessive scans
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::info!("Browsing candidates for user: {}, limit: {}", req.user_id, limit);

    let profiles = state.engine.potential_matches(&req.user_id, limit);
    let total_eligible = profiles.len();

    tracing::debug!("Returning {} candidates for {}", total_eligible, req.user_id);

    HttpResponse::Ok().json(BrowseResponse {
        profiles,
        total_eligible,
    })
}

/// Record a like, forming a match when it is mutual
///
/// POST /api/v1/matches/like
///
/// Request body:
/// ```json
/// {
///   "likerId": "string",
///   "likedId": "string"
/// }
/// ```
async fn like(state: web::Data<AppState>, req: web::Json<InteractionRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.engine.register_like(&req.liker_id, &req.liked_id) {
        Ok(matched_pair) => HttpResponse::Ok().json(LikeResponse {
            matched: matched_pair.is_some(),
            matched_pair,
        }),
        Err(MatchError::SelfLike(user_id)) => {
            tracing::info!("Rejected self-like from {}", user_id);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid interaction".to_string(),
                message: format!("user {} cannot like themselves", user_id),
                status_code: 400,
            })
        }
        Err(MatchError::ProfileNotFound(user_id)) => {
            tracing::info!("Like rejected, no profile for {}", user_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("no profile found for user {}", user_id),
                status_code: 404,
            })
        }
    }
}

/// List a user's existing matches
///
/// GET /api/v1/matches/{user_id}
///
/// Returns an empty list for users with no matches (or no profile).
async fn list_matches(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    let matches = state.engine.matches_for_user(&user_id);

    tracing::debug!("Listing {} matches for {}", matches.len(), user_id);

    HttpResponse::Ok().json(MatchListResponse {
        total: matches.len(),
        matches,
    })
}

/// Record a dislike
///
/// POST /api/v1/matches/dislike
///
/// Dislikes are not persisted: the profile may reappear in later browses.
async fn dislike(req: web::Json<InteractionRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::debug!("Dislike {} -> {} (not persisted)", req.liker_id, req.liked_id);

    HttpResponse::Ok().json(DislikeResponse { success: true })
}

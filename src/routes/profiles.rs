use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateProfileRequest, ErrorResponse, Preferences, Profile};
use crate::routes::matches::AppState;
use crate::store::Repository;

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles", web::post().to(create_profile))
        .route("/profiles/{user_id}", web::get().to(get_profile));
}

/// Create or update a profile
///
/// POST /api/v1/profiles
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for profile request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let preferences = match Preferences::new(
        req.min_age,
        req.max_age,
        req.max_distance_km,
        req.preferred_genders.clone(),
    ) {
        Ok(prefs) => prefs,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid preferences".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let profile = Profile {
        user_id: req.user_id.clone(),
        name: req.name.clone(),
        age: req.age,
        gender: req.gender,
        location: req.location.clone(),
        bio: req.bio.clone(),
        interests: req.interests.clone(),
        photo_ids: req.photo_ids.clone(),
        preferences,
        created_at: chrono::Utc::now(),
    };

    match state.engine.repository().append_profile(profile.clone()) {
        Ok(()) => {
            tracing::info!("Stored profile for {}", profile.user_id);
            HttpResponse::Created().json(profile)
        }
        Err(e) => {
            tracing::error!("Failed to store profile for {}: {}", req.user_id, e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid profile".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}

/// Fetch a profile by user id
///
/// GET /api/v1/profiles/{user_id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.engine.repository().profile_by_user_id(&user_id) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("no profile found for user {}", user_id),
            status_code: 404,
        }),
    }
}

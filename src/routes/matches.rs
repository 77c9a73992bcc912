use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ContactQuery, ContactResponse, ErrorResponse, FindMatchesQuery, FindMatchesResponse,
    HealthResponse, ListProfilesQuery, ListProfilesResponse, Profile, SubmitProfileRequest,
};
use crate::services::{mailto_link, ProfileStore, StoreError};
use crate::core::{compute_matches, filter_profiles};
use std::sync::Arc;

pub const NO_PROFILE_MESSAGE: &str = "No profile found. Please fill your skill journey first!";
pub const NO_USERS_MESSAGE: &str = "No users yet.";
pub const NO_MUTUAL_MESSAGE: &str = "No mutual matches found right now.";
pub const NO_ONE_SIDED_MESSAGE: &str = "No one-sided interest matches found.";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }
}

/// Configure all profile and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles", web::post().to(submit_profile))
        .route("/profiles", web::get().to(list_profiles))
        .route("/matches", web::get().to(find_matches))
        .route("/contact", web::get().to(contact_link));
}

fn store_failure(context: &str, e: StoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

fn profile_not_found(message: String) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Profile not found".to_string(),
        message,
        status_code: 404,
    })
}

/// Latest profile registered under `name`
fn find_by_name<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    profiles.iter().rev().find(|p| p.name == name)
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = match state.store.load_profiles() {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::warn!("Profile store unavailable: {}", e);
            "degraded"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Submit profile endpoint
///
/// POST /api/v1/profiles
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "skillOffer": "guitar, cooking",
///   "skillWant": "piano",
///   "location": "string",
///   "email": "string"
/// }
/// ```
async fn submit_profile(
    state: web::Data<AppState>,
    req: web::Json<SubmitProfileRequest>,
) -> impl Responder {
    let req = req.into_inner().trimmed();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for submit_profile request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_profile();

    match state.store.append_profile(profile.clone()) {
        Ok(()) => {
            tracing::info!("Saved profile for {}", profile.name);
            HttpResponse::Created().json(profile)
        }
        Err(e) => store_failure("Failed to save profile", e),
    }
}

/// List profiles endpoint
///
/// GET /api/v1/profiles?q={query}
async fn list_profiles(
    state: web::Data<AppState>,
    query: web::Query<ListProfilesQuery>,
) -> impl Responder {
    let profiles = match state.store.load_profiles() {
        Ok(profiles) => profiles,
        Err(e) => return store_failure("Failed to load profiles", e),
    };

    if profiles.is_empty() {
        return HttpResponse::Ok().json(ListProfilesResponse {
            profiles,
            total: 0,
            message: Some(NO_USERS_MESSAGE.to_string()),
        });
    }

    let filtered = filter_profiles(query.q.as_deref().unwrap_or_default(), &profiles);

    HttpResponse::Ok().json(ListProfilesResponse {
        total: filtered.len(),
        profiles: filtered,
        message: None,
    })
}

/// Find matches endpoint
///
/// GET /api/v1/matches?name={name}
///
/// Without a non-blank `name`, matches are computed for the most recently
/// added profile. The name is trimmed the same way submissions are.
async fn find_matches(
    state: web::Data<AppState>,
    query: web::Query<FindMatchesQuery>,
) -> impl Responder {
    let profiles = match state.store.load_profiles() {
        Ok(profiles) => profiles,
        Err(e) => return store_failure("Failed to load profiles", e),
    };

    let name = query.name.as_deref().map(str::trim).filter(|name| !name.is_empty());

    let current = match name {
        Some(name) => find_by_name(&profiles, name),
        None => profiles.last(),
    };

    let Some(current) = current else {
        tracing::info!("No current profile for match request (name={:?})", query.name);
        return profile_not_found(NO_PROFILE_MESSAGE.to_string());
    };

    tracing::info!("Finding matches for {} among {} profiles", current.name, profiles.len());

    let result = compute_matches(current, &profiles);

    let response = FindMatchesResponse {
        current_user: current.clone(),
        mutual_message: result.mutual.is_empty().then(|| NO_MUTUAL_MESSAGE.to_string()),
        one_sided_message: result.one_sided.is_empty().then(|| NO_ONE_SIDED_MESSAGE.to_string()),
        mutual: result.mutual,
        one_sided: result.one_sided,
    };

    HttpResponse::Ok().json(response)
}

/// Contact link endpoint
///
/// GET /api/v1/contact?from={name}&to={name}
async fn contact_link(
    state: web::Data<AppState>,
    query: web::Query<ContactQuery>,
) -> impl Responder {
    let profiles = match state.store.load_profiles() {
        Ok(profiles) => profiles,
        Err(e) => return store_failure("Failed to load profiles", e),
    };

    let (from, to) = (query.from.trim(), query.to.trim());

    let Some(sender) = find_by_name(&profiles, from) else {
        return profile_not_found(format!("No profile named {}", from));
    };
    let Some(recipient) = find_by_name(&profiles, to) else {
        return profile_not_found(format!("No profile named {}", to));
    };

    match mailto_link(sender, recipient) {
        Ok(mailto) => HttpResponse::Ok().json(ContactResponse { mailto }),
        Err(e) => {
            tracing::debug!("Contact link refused for {}: {}", recipient.name, e);
            HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "No contact available".to_string(),
                message: e.to_string(),
                status_code: 422,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_prefers_latest() {
        let profiles = vec![
            Profile::new("Ana", "guitar", "piano", "Lisbon"),
            Profile::new("Ana", "drums", "piano", "Porto"),
        ];

        let found = find_by_name(&profiles, "Ana").unwrap();
        assert_eq!(found.location, "Porto");
        assert!(find_by_name(&profiles, "Ben").is_none());
    }
}

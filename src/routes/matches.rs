use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::FamilyMatcher;
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, PeopleResponse,
    PersonId, RelationshipsRequest, RelationshipsResponse,
};
use crate::services::PeopleDataset;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<PeopleDataset>,
    pub matcher: FamilyMatcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/people", web::get().to(list_people))
        .route("/people/{id}/matches", web::get().to(matches_for_person))
        .route("/match", web::post().to(find_matches))
        .route("/relationships", web::post().to(find_relationships));
}

fn missing_data(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Missing required data".to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the loaded dataset
///
/// GET /api/v1/people
async fn list_people(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PeopleResponse {
        people: state.dataset.people(),
        count: state.dataset.len(),
    })
}

/// Rank the rest of the dataset against one of its people
///
/// GET /api/v1/people/{id}/matches
async fn matches_for_person(
    state: web::Data<AppState>,
    path: web::Path<PersonId>,
) -> impl Responder {
    let target_id = path.into_inner();

    let Some(target) = state.dataset.find(target_id) else {
        tracing::info!("Match requested for unknown person {}", target_id);
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Person not found".to_string(),
            message: format!("No person with id {}", target_id),
            status_code: 404,
        });
    };

    let matches = state
        .matcher
        .find_family_matches(target, state.dataset.pool_excluding(target_id));

    tracing::info!(
        "Returning {} matches for person {}",
        matches.len(),
        target_id
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        total_candidates: state.dataset.len().saturating_sub(1),
        matches,
    })
}

/// Find matches endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "targetPerson": { "id": 4, "firstName": "Emily", "lastName": "Smith", "age": 13, "location": "New York" },
///   "peoplePool": [ ... ]
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return missing_data(errors.to_string());
    }

    let (Some(target), Some(pool)) = (&req.target_person, &req.people_pool) else {
        return missing_data("targetPerson and peoplePool are required".to_string());
    };

    tracing::info!(
        "Finding matches for {} {} in a pool of {}",
        target.first_name,
        target.last_name,
        pool.len()
    );

    let matches = state.matcher.find_family_matches(target, pool);

    HttpResponse::Ok().json(FindMatchesResponse {
        total_candidates: pool.len(),
        matches,
    })
}

/// Every relationship finding for a pair of people
///
/// POST /api/v1/relationships
///
/// Request body:
/// ```json
/// { "personA": { ... }, "personB": { ... } }
/// ```
async fn find_relationships(
    state: web::Data<AppState>,
    req: web::Json<RelationshipsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_relationships request: {:?}", errors);
        return missing_data(errors.to_string());
    }

    let (Some(a), Some(b)) = (&req.person_a, &req.person_b) else {
        return missing_data("personA and personB are required".to_string());
    };

    let relationships = state.matcher.find_possible_relationships(a, b);
    tracing::debug!(
        "Found {} relationships between {} and {}",
        relationships.len(),
        a.id,
        b.id
    );

    HttpResponse::Ok().json(RelationshipsResponse { relationships })
}

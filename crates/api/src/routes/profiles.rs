//! Profile setup, lookup, and budget edit routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use watersaver_core::allocation::BudgetAllocator;
use watersaver_core::input::{self, LooseValue};
use watersaver_core::period::days_in_month;
use watersaver_core::profile::ProfileDraft;
use watersaver_core::restriction::RestrictionLevel;
use watersaver_core::units::to_kilolitres;
use watersaver_db::entities::users;
use watersaver_db::repositories::zone::to_domain;
use watersaver_db::{ProfileRepository, ZoneRepository};
use watersaver_shared::AppError;

use super::today;
use super::zones::ZoneResponse;
use crate::AppState;
use crate::error::{error_response, from_profile_error, from_setup_error};

/// Creates the profile routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", post(create_profile))
        .route("/profiles/{username}", get(get_profile))
        .route("/profiles/{username}/budget", put(update_budget))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Budget edit request.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    /// New monthly budget in kilolitres; blank or invalid means zero.
    #[serde(default)]
    pub monthly_kilolitres: Option<LooseValue>,
}

/// Profile response.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Username.
    pub username: String,
    /// Town.
    pub town: String,
    /// Restriction level.
    pub restriction_level: RestrictionLevel,
    /// Daily budget in litres.
    pub daily_budget_litres: Decimal,
    /// Monthly budget in litres.
    pub monthly_budget_litres: Decimal,
    /// Monthly budget in kilolitres.
    pub monthly_budget_kilolitres: Decimal,
    /// The user's zones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<ZoneResponse>>,
}

impl ProfileResponse {
    fn new(user: users::Model, zones: Option<Vec<ZoneResponse>>) -> Self {
        Self {
            username: user.username,
            town: user.town,
            restriction_level: user.restriction_level.into(),
            daily_budget_litres: user.daily_budget_litres,
            monthly_budget_litres: user.monthly_budget_litres,
            monthly_budget_kilolitres: to_kilolitres(user.monthly_budget_litres),
            zones,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn create_profile(
    State(state): State<AppState>,
    Json(draft): Json<ProfileDraft>,
) -> Response {
    let profile = match draft.validate(&state.restrictions, today()) {
        Ok(profile) => profile,
        Err(e) => return error_response(&from_setup_error(&e)),
    };

    let repo = ProfileRepository::new((*state.db).clone());
    match repo.create_profile(&profile).await {
        Ok((user, zones)) => {
            let zones = zones
                .into_iter()
                .map(|z| ZoneResponse::from(to_domain(z)))
                .collect();
            (
                StatusCode::CREATED,
                Json(ProfileResponse::new(user, Some(zones))),
            )
                .into_response()
        }
        Err(e) => error_response(&from_profile_error(&e)),
    }
}

async fn get_profile(State(state): State<AppState>, Path(username): Path<String>) -> Response {
    let repo = ProfileRepository::new((*state.db).clone());
    let user = match repo.find_by_username(&username).await {
        Ok(Some(user)) => user,
        Ok(None) => return error_response(&AppError::ProfileRequired(username)),
        Err(e) => return error_response(&AppError::Database(e.to_string())),
    };

    let zones = match ZoneRepository::new((*state.db).clone())
        .list_by_owner(&username)
        .await
    {
        Ok(zones) => zones.into_iter().map(ZoneResponse::from).collect(),
        Err(e) => return error_response(&AppError::Database(e.to_string())),
    };

    (StatusCode::OK, Json(ProfileResponse::new(user, Some(zones)))).into_response()
}

async fn update_budget(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<UpdateBudgetRequest>,
) -> Response {
    let monthly_kilolitres = input::decimal_or(request.monthly_kilolitres.as_ref(), Decimal::ZERO);
    let budget = match BudgetAllocator::manual(monthly_kilolitres, days_in_month(today())) {
        Ok(budget) => budget,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    let repo = ProfileRepository::new((*state.db).clone());
    match repo.update_budget(&username, budget).await {
        Ok(user) => {
            info!(
                username = %user.username,
                monthly_litres = %user.monthly_budget_litres,
                "Budget updated"
            );
            (StatusCode::OK, Json(ProfileResponse::new(user, None))).into_response()
        }
        Err(e) => error_response(&from_profile_error(&e)),
    }
}

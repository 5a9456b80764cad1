//! Zone management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use watersaver_core::zones::{MAX_NAME_LEN, RawZoneDraft, WaterSource, Zone, ZoneDraft};
use watersaver_db::ZoneRepository;
use watersaver_shared::AppError;
use watersaver_shared::types::ZoneId;

use crate::AppState;
use crate::error::{error_response, from_zone_error};

/// Creates the zone routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profiles/{username}/zones",
            get(list_zones).post(create_zone),
        )
        .route(
            "/profiles/{username}/zones/{zone_id}",
            delete(delete_zone),
        )
}

/// Zone response.
#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    /// Zone ID.
    pub id: ZoneId,
    /// Name.
    pub name: String,
    /// Area in m².
    pub area: Decimal,
    /// Sprinkler heads.
    pub sprinkler_count: i32,
    /// Flow rate in L/min.
    pub flow_rate: Decimal,
    /// Water source.
    pub source: WaterSource,
    /// Custom pressure in bar, if set.
    pub custom_pressure: Option<Decimal>,
    /// Custom pressure, or the source's typical pressure.
    pub effective_pressure: Decimal,
}

impl From<Zone> for ZoneResponse {
    fn from(zone: Zone) -> Self {
        let effective_pressure = zone.effective_pressure();
        Self {
            id: zone.id,
            name: zone.name,
            area: zone.area,
            sprinkler_count: zone.sprinkler_count,
            flow_rate: zone.flow_rate,
            source: zone.source,
            custom_pressure: zone.custom_pressure,
            effective_pressure,
        }
    }
}

async fn list_zones(State(state): State<AppState>, Path(username): Path<String>) -> Response {
    let repo = ZoneRepository::new((*state.db).clone());
    match repo.list_by_owner(&username).await {
        Ok(zones) => {
            let zones: Vec<ZoneResponse> = zones.into_iter().map(ZoneResponse::from).collect();
            (StatusCode::OK, Json(json!({ "zones": zones }))).into_response()
        }
        Err(e) => error_response(&AppError::Database(e.to_string())),
    }
}

async fn create_zone(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(raw): Json<RawZoneDraft>,
) -> Response {
    let Some(draft) = ZoneDraft::parse(&raw) else {
        return error_response(&AppError::Validation("Zone name is required".to_string()));
    };
    if !draft.name_fits() {
        return error_response(&AppError::Validation(format!(
            "Zone name must be at most {MAX_NAME_LEN} characters"
        )));
    }

    let repo = ZoneRepository::new((*state.db).clone());
    match repo.add(&username, &draft).await {
        Ok(zone) => (StatusCode::CREATED, Json(ZoneResponse::from(zone))).into_response(),
        Err(e) => error_response(&from_zone_error(&e)),
    }
}

async fn delete_zone(
    State(state): State<AppState>,
    Path((username, zone_id)): Path<(String, String)>,
) -> Response {
    let Ok(zone_id) = zone_id.parse::<ZoneId>() else {
        return error_response(&AppError::NotFound(format!("Zone not found: {zone_id}")));
    };

    let repo = ZoneRepository::new((*state.db).clone());
    match repo.delete(&username, zone_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&from_zone_error(&e)),
    }
}

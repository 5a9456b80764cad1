//! Restriction table listing for the setup town picker.

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use watersaver_core::restriction::RestrictionLevel;

use crate::AppState;

/// One selectable town.
#[derive(Debug, Serialize)]
pub struct TownResponse {
    /// Canonical town name.
    pub town: String,
    /// Restriction level in force.
    pub restriction_level: RestrictionLevel,
    /// Daily allowance in litres per m².
    pub rate: Decimal,
}

/// Towns list response.
#[derive(Debug, Serialize)]
pub struct TownsResponse {
    /// Level 2 towns first, then Level 3.
    pub towns: Vec<TownResponse>,
}

async fn list_towns(State(state): State<AppState>) -> Json<TownsResponse> {
    let table = &state.restrictions;
    let towns = table
        .towns()
        .iter()
        .map(|(town, level)| TownResponse {
            town: town.clone(),
            restriction_level: *level,
            rate: table.rate(*level),
        })
        .collect();

    Json(TownsResponse { towns })
}

/// Creates town routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/towns", get(list_towns))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{body_json, get, send};

    #[tokio::test]
    async fn test_list_towns() {
        let response = send(get("/api/v1/towns")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let towns = body["towns"].as_array().unwrap();
        assert!(!towns.is_empty());
        assert!(towns.iter().any(|t| t["town"] == "RIVERSDALE" && t["restriction_level"] == "Level 2"));
        assert!(towns.iter().any(|t| t["town"] == "WITSAND" && t["rate"] == "3"));
    }
}

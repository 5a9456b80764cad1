//! Usage logging route.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use watersaver_core::input::LooseValue;
use watersaver_core::usage::NewUsageEvent;
use watersaver_db::UsageRepository;
use watersaver_shared::types::ZoneId;

use super::today;
use crate::AppState;
use crate::error::{error_response, from_usage_error};

/// Creates the usage routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/profiles/{username}/usage", post(log_usage))
}

/// Minutes irrigated per zone today, keyed by zone ID.
#[derive(Debug, Default, Deserialize)]
pub struct LogUsageRequest {
    /// Zone ID to duration in minutes.
    #[serde(default)]
    pub durations: BTreeMap<String, LooseValue>,
}

/// Usage logging response.
#[derive(Debug, Serialize)]
pub struct LogUsageResponse {
    /// Number of events stored.
    pub logged: usize,
    /// The stored events.
    pub events: Vec<NewUsageEvent>,
}

/// Keeps entries whose key is a well-formed zone ID.
pub fn parse_durations(raw: BTreeMap<String, LooseValue>) -> BTreeMap<ZoneId, LooseValue> {
    raw.into_iter()
        .filter_map(|(key, value)| key.trim().parse::<ZoneId>().ok().map(|id| (id, value)))
        .collect()
}

async fn log_usage(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<LogUsageRequest>,
) -> Response {
    let submitted = request.durations.len();
    let durations = parse_durations(request.durations);
    if durations.len() < submitted {
        debug!(
            username = %username,
            skipped = submitted - durations.len(),
            "Ignoring durations with malformed zone IDs"
        );
    }

    let repo = UsageRepository::new((*state.db).clone());
    match repo.log_usage(&username, &durations, today()).await {
        Ok(events) => (
            StatusCode::CREATED,
            Json(LogUsageResponse {
                logged: events.len(),
                events,
            }),
        )
            .into_response(),
        Err(e) => error_response(&from_usage_error(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::routes::test_support::{json_request, send};

    #[test]
    fn test_parse_durations_skips_malformed_ids() {
        let id = ZoneId::new();
        let mut raw = BTreeMap::new();
        raw.insert(id.to_string(), LooseValue::from("15"));
        raw.insert("zone-1".to_string(), LooseValue::from("30"));
        raw.insert(String::new(), LooseValue::from("5"));

        let parsed = parse_durations(raw);

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(&id), Some(&LooseValue::from("15")));
    }

    #[tokio::test]
    async fn test_log_usage_store_failure_is_server_error() {
        let body = json!({"durations": {"not-a-zone": "10"}});
        let response = send(json_request("POST", "/api/v1/profiles/ana/usage", &body)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

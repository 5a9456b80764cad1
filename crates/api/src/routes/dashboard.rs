//! Dashboard route.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use watersaver_core::aggregation::Dashboard;
use watersaver_core::tips::{Tip, random_tip};
use watersaver_db::DashboardRepository;

use super::today;
use crate::AppState;
use crate::error::{error_response, from_dashboard_error};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/profiles/{username}/dashboard", get(get_dashboard))
}

/// Dashboard response: the aggregate plus a tip of the day.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Usage aggregate.
    #[serde(flatten)]
    pub dashboard: Dashboard,
    /// A random water-saving tip.
    pub tip: Tip,
}

async fn get_dashboard(State(state): State<AppState>, Path(username): Path<String>) -> Response {
    let repo = DashboardRepository::new((*state.db).clone());
    match repo.load(&username, today()).await {
        Ok(dashboard) => (
            StatusCode::OK,
            Json(DashboardResponse {
                dashboard,
                tip: random_tip(),
            }),
        )
            .into_response(),
        Err(e) => error_response(&from_dashboard_error(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use watersaver_core::aggregation::{AggregationEngine, DashboardInput, ProfileSnapshot};
    use watersaver_core::period::MonthPeriod;
    use watersaver_core::restriction::RestrictionLevel;
    use watersaver_core::zones::ZoneUsage;

    use crate::routes::test_support::{get, send};

    #[test]
    fn test_dashboard_response_shape() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let dashboard = AggregationEngine::assemble(DashboardInput {
            profile: ProfileSnapshot {
                username: "ana".to_string(),
                town: "RIVERSDALE".to_string(),
                restriction_level: RestrictionLevel::Level2,
                daily_budget: dec!(1000),
                monthly_budget: dec!(31000),
            },
            period: MonthPeriod::containing(today),
            today_by_zone: vec![ZoneUsage::new("Lawn", dec!(30), dec!(300))],
            week_total: dec!(300),
            month_total: dec!(300),
            month_to_date_total: dec!(300),
            daily_totals: Vec::new(),
        });

        let value = serde_json::to_value(DashboardResponse {
            dashboard,
            tip: random_tip(),
        })
        .unwrap();

        assert_eq!(value["restriction_level"], "Level 2");
        assert_eq!(value["weekly"]["status"], "Safe");
        assert_eq!(value["weekly"]["percent_used"], "4.3");
        assert_eq!(value["zones"][0]["percent_of_budget"], "4.3");
        assert_eq!(value["daily_cumulative_chart"]["labels"].as_array().unwrap().len(), 31);
        assert!(value["tip"]["text"].is_string());
        assert_eq!(value["monthly_stats"]["days_under"], 0);
        assert_ne!(value["monthly_stats"]["cumulative"], Decimal::ZERO.to_string());
    }

    #[tokio::test]
    async fn test_dashboard_store_failure_is_server_error() {
        let response = send(get("/api/v1/profiles/ana/dashboard")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

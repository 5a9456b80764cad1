//! API route definitions.

use axum::Router;
use chrono::NaiveDate;

use crate::AppState;

pub mod dashboard;
pub mod health;
pub mod profiles;
pub mod tips;
pub mod towns;
pub mod usage;
pub mod zones;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(towns::routes())
        .merge(tips::routes())
        .merge(profiles::routes())
        .merge(zones::routes())
        .merge(usage::routes())
        .merge(dashboard::routes())
}

/// The server's local calendar date.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{Router, body::Body, http::Request, response::Response};
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;
    use watersaver_core::restriction::RestrictionTable;

    use crate::{AppState, create_router};

    /// Router backed by a disconnected database; any query fails.
    pub fn offline_router() -> Router {
        create_router(AppState {
            db: Arc::new(DatabaseConnection::default()),
            restrictions: Arc::new(RestrictionTable::default()),
        })
    }

    pub async fn send(request: Request<Body>) -> Response {
        offline_router().oneshot(request).await.unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}

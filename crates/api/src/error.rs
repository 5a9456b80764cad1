//! Mapping of domain and repository errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};
use watersaver_core::profile::ProfileError as SetupError;
use watersaver_db::{DashboardError, ProfileError, UsageError, ZoneError};
use watersaver_shared::AppError;

/// Where clients without a profile are sent.
pub const SETUP_PATH: &str = "/api/v1/profiles";

/// Renders an `AppError` as `{"error": CODE, "message": text}`.
///
/// Server errors are logged and their details withheld from the body. A
/// missing profile carries a `redirect` hint to the setup endpoint.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = if err.is_server_error() {
        error!(error = %err, code = err.error_code(), "Request failed");
        "An error occurred".to_string()
    } else {
        warn!(error = %err, code = err.error_code(), "Request rejected");
        err.to_string()
    };

    let mut body = json!({
        "error": err.error_code(),
        "message": message,
    });
    if matches!(err, AppError::ProfileRequired(_)) {
        body["redirect"] = json!(SETUP_PATH);
    }

    (status, Json(body)).into_response()
}

/// Maps setup validation failures.
pub fn from_setup_error(e: &SetupError) -> AppError {
    AppError::Validation(e.to_string())
}

/// Maps profile repository failures.
pub fn from_profile_error(e: &ProfileError) -> AppError {
    match e {
        ProfileError::AlreadyExists(_) => AppError::Conflict(e.to_string()),
        ProfileError::NotFound(username) => AppError::ProfileRequired(username.clone()),
        ProfileError::Database(db) => AppError::Database(db.to_string()),
    }
}

/// Maps zone repository failures.
pub fn from_zone_error(e: &ZoneError) -> AppError {
    match e {
        ZoneError::ProfileNotFound(username) => AppError::ProfileRequired(username.clone()),
        ZoneError::NotFound(_) => AppError::NotFound(e.to_string()),
        ZoneError::Database(db) => AppError::Database(db.to_string()),
    }
}

/// Maps usage repository failures.
pub fn from_usage_error(e: &UsageError) -> AppError {
    match e {
        UsageError::ProfileNotFound(username) => AppError::ProfileRequired(username.clone()),
        UsageError::InvalidMonth { .. } => AppError::Validation(e.to_string()),
        UsageError::Database(db) => AppError::Database(db.to_string()),
    }
}

/// Maps dashboard failures.
pub fn from_dashboard_error(e: &DashboardError) -> AppError {
    match e {
        DashboardError::ProfileNotFound(username) => AppError::ProfileRequired(username.clone()),
        DashboardError::Usage(usage) => from_usage_error(usage),
        DashboardError::Database(db) => AppError::Database(db.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use sea_orm::DbErr;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_profile_required_has_redirect() {
        let response = error_response(&AppError::ProfileRequired("ana".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "PROFILE_REQUIRED");
        assert_eq!(body["redirect"], SETUP_PATH);
    }

    #[tokio::test]
    async fn test_server_error_hides_details() {
        let response = error_response(&AppError::Database("connection refused".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert_eq!(body["message"], "An error occurred");
        assert!(body.get("redirect").is_none());
    }

    #[test]
    fn test_repository_error_mapping() {
        assert!(matches!(
            from_profile_error(&ProfileError::AlreadyExists("ana".to_string())),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            from_dashboard_error(&DashboardError::ProfileNotFound("ana".to_string())),
            AppError::ProfileRequired(_)
        ));
        assert!(matches!(
            from_zone_error(&ZoneError::Database(DbErr::Custom("boom".to_string()))),
            AppError::Database(_)
        ));
        assert!(matches!(
            from_setup_error(&SetupError::EmptyUsername),
            AppError::Validation(_)
        ));
    }
}

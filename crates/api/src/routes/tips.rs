//! Water-saving tip endpoint.

use axum::{Json, Router, routing::get};
use watersaver_core::tips::{Tip, random_tip};

use crate::AppState;

async fn get_random_tip() -> Json<Tip> {
    Json(random_tip())
}

/// Creates tip routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tips/random", get(get_random_tip))
}

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod render;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-report", post(handlers::generate_report))
        .route("/download/:filename", get(handlers::download_report))
        .route("/reports", get(handlers::list_reports))
}

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{extract::AuthUser, repo::User},
    error::ApiError,
    reports::{
        dto::{GenerateRequest, GenerateResponse, ReportListItem},
        render,
        repo::Report,
    },
    state::AppState,
};

/// Generate a report for the authenticated user: acquire body text (external
/// provider or fallback), render the artifact, record it in the ledger.
#[instrument(skip(state, payload))]
pub async fn generate_report(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let topic = payload.topic.trim();
    if topic.is_empty() {
        return Err(ApiError::BadRequest("Topic must not be empty".into()));
    }

    let user = User::find_by_id(&state.db, user_id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "find_by_id failed");
            ApiError::Internal
        })?
        .ok_or(ApiError::Unauthenticated)?;

    // Never fails: degrades to the local template on any provider problem.
    let body = state.provider.generate(topic).await;

    let filename = render::render_to_store(state.store.as_ref(), topic, &body, &user.username)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, topic, "artifact write failed");
            ApiError::Generation
        })?;

    let file_path = format!("{}/{}", state.config.reports_dir, filename);
    Report::create(&state.db, user.id, topic, &filename, &file_path)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "report ledger insert failed");
            ApiError::Generation
        })?;

    info!(user_id = %user.id, filename = %filename, "report generated");
    Ok(Json(GenerateResponse {
        message: "Report generated successfully",
        filename: filename.clone(),
        download_url: format!("/download/{filename}"),
    }))
}

/// Serve a previously generated artifact. Any valid token grants access;
/// absence in the content store is the only rejection beyond auth.
#[instrument(skip(state))]
pub async fn download_report(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        warn!(user_id = %user_id, filename = %filename, "rejected artifact path");
        return Err(ApiError::NotFound("Report"));
    }

    let bytes = state
        .store
        .get(&filename)
        .await
        .map_err(|e| {
            error!(error = %e, filename = %filename, "artifact read failed");
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound("Report"))?;

    info!(user_id = %user_id, filename = %filename, "artifact downloaded");
    Ok((
        [
            (header::CONTENT_TYPE, render::ARTIFACT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

/// List the caller's report ledger, newest first.
#[instrument(skip(state))]
pub async fn list_reports(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ReportListItem>>, ApiError> {
    let reports = Report::list_by_user(&state.db, user_id).await.map_err(|e| {
        error!(error = %e, user_id = %user_id, "list_by_user failed");
        ApiError::Internal
    })?;

    let items = reports
        .into_iter()
        .map(|r| ReportListItem {
            id: r.id,
            topic: r.topic,
            download_url: format!("/download/{}", r.filename),
            filename: r.filename,
            created_at: r.created_at,
        })
        .collect();
    Ok(Json(items))
}

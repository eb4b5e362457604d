use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use shared_types::{
    Ack, CreateProjectRequest, FrameId, ProjectId, SaveFrameRequest, SaveFrameResponse,
    UpdateChatRequest,
};
use tracing::info;

use crate::error::ApiError;
use crate::generation;
use crate::middleware::{CurrentUser, MaybeUser};
use crate::AppState;

/// Saved pages embed the whole document, so allow bodies well past axum's 2 MB default.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ai-model", post(generation::generate))
        .route("/api/frames", get(get_frame).put(save_frame))
        .route("/api/projects", post(create_project))
        .route("/api/get-all-projects", get(list_projects))
        .route("/api/chats", put(update_chat))
        .route("/api/users", post(ensure_user))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameParams {
    frame_id: String,
    project_id: String,
}

/// GET /api/frames?frameId=..&projectId=..
async fn get_frame(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FrameParams>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .store
        .get_frame(&FrameId(params.frame_id), &ProjectId(params.project_id))
        .await?;
    Ok(Json(detail))
}

/// PUT /api/frames: overwrite the stored page of a frame
async fn save_frame(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveFrameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.save_frame(&request).await?;
    info!(
        frame_id = %request.frame_id,
        project_id = %request.project_id,
        bytes = request.design_code.len(),
        "frame saved"
    );
    Ok(Json(SaveFrameResponse {
        success: true,
        frame_id: request.frame_id,
    }))
}

/// POST /api/projects
async fn create_project(
    State(state): State<Arc<AppState>>,
    MaybeUser(user): MaybeUser,
    Json(request): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.project_id.as_str().trim().is_empty() || request.frame_id.as_str().trim().is_empty() {
        return Err(ApiError::BadRequest(
            "projectId and frameId are required".to_string(),
        ));
    }

    let summary = state
        .store
        .create_project(&request, user.as_ref().map(|u| u.email.as_str()))
        .await?;
    info!(project_id = %summary.project_id, frame_id = %summary.frame_id, "project created");
    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/get-all-projects
async fn list_projects(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.list_projects().await?))
}

/// PUT /api/chats: replace the conversation stored for a frame
async fn update_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .store
        .update_chat(&request.frame_id, &request.messages)
        .await?;
    Ok(Json(Ack { success: true }))
}

/// POST /api/users: record the signed-in user and return their details
async fn ensure_user(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .store
        .upsert_user(&user.email, user.name.as_deref())
        .await?;
    Ok(Json(detail))
}

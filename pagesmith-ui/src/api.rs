use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    Ack, CreateProjectRequest, ErrorBody, FrameDetail, FrameId, GenerationRequest, ProjectId,
    ProjectSummary, SaveFrameRequest, SaveFrameResponse, UpdateChatRequest, UserDetail,
};
use std::sync::OnceLock;

use crate::interop::read_stream;
use crate::stream::Utf8Accumulator;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    resolve_api_base(&hostname)
}

fn resolve_api_base(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Turn a non-2xx response into a readable message, preferring the server's
/// `{ "error": ... }` body.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => format!("HTTP {status}: {}", body.error),
        Err(_) => format!("HTTP error: {status}"),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

// ============================================================================
// Generation
// ============================================================================

/// Stream a generation, calling `on_text` with every decoded piece of text.
pub async fn stream_generation(
    request: &GenerationRequest,
    mut on_text: impl FnMut(&str),
) -> Result<(), String> {
    let url = format!("{}/api/ai-model", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .body()
        .ok_or_else(|| "Response has no body".to_string())?;

    let mut decoder = Utf8Accumulator::new();
    read_stream(body, |chunk| {
        let text = decoder.push(chunk);
        if !text.is_empty() {
            on_text(&text);
        }
    })
    .await?;

    let rest = decoder.finish();
    if !rest.is_empty() {
        on_text(&rest);
    }
    Ok(())
}

// ============================================================================
// Frames & Projects
// ============================================================================

pub async fn save_frame(request: &SaveFrameRequest) -> Result<SaveFrameResponse, String> {
    let url = format!("{}/api/frames", api_base());

    let response = Request::put(&url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    let data: SaveFrameResponse = parse_json(response).await?;
    if !data.success {
        return Err("API returned success=false".to_string());
    }
    Ok(data)
}

pub async fn fetch_frame(project_id: &ProjectId, frame_id: &FrameId) -> Result<FrameDetail, String> {
    let url = format!("{}/api/frames", api_base());

    let response = Request::get(&url)
        .query([
            ("frameId", frame_id.as_str()),
            ("projectId", project_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    parse_json(response).await
}

pub async fn fetch_projects() -> Result<Vec<ProjectSummary>, String> {
    let url = format!("{}/api/get-all-projects", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    parse_json(response).await
}

pub async fn create_project(request: &CreateProjectRequest) -> Result<ProjectSummary, String> {
    let url = format!("{}/api/projects", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    parse_json(response).await
}

pub async fn update_chat(request: &UpdateChatRequest) -> Result<(), String> {
    let url = format!("{}/api/chats", api_base());

    let response = Request::put(&url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    let ack: Ack = parse_json(response).await?;
    if !ack.success {
        return Err("API returned success=false".to_string());
    }
    Ok(())
}

// ============================================================================
// Identity
// ============================================================================

/// Register the signed-in user. `Ok(None)` means nobody is signed in.
pub async fn ensure_user() -> Result<Option<UserDetail>, String> {
    let url = format!("{}/api/users", api_base());

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if response.status() == 401 {
        return Ok(None);
    }
    parse_json(response).await.map(Some)
}

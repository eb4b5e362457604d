//! HTTP API integration tests

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::Json;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use pagesmith_server::config::GenerationConfig;
use pagesmith_server::state::GenerationState;
use pagesmith_server::store::ProjectStore;
use pagesmith_server::{api, db, AppState};
use shared_types::{CreateProjectRequest, FrameId, Message, ProjectId};

async fn setup_test_app(generation: GenerationConfig) -> (axum::Router, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = temp_dir.path().join("pagesmith.db");
    let pool = db::connect(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open database");

    let state = Arc::new(AppState {
        store: ProjectStore::new(pool),
        generation: GenerationState::new(generation).expect("failed to build client"),
    });

    (api::router().with_state(state), temp_dir)
}

async fn json_response(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&body).expect("invalid json");
    (status, value)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create_project(app: &axum::Router, project_id: &str, frame_id: &str, prompt: &str) {
    let req = json_request(
        "POST",
        "/api/projects",
        json!({
            "projectId": project_id,
            "frameId": frame_id,
            "messages": [{ "role": "user", "content": prompt }]
        }),
    );
    let (status, body) = json_response(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
}

#[tokio::test]
async fn test_create_project_then_fetch_frame() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;
    create_project(&app, "p1", "f1", "a bakery landing page").await;

    let req = Request::builder()
        .uri("/api/frames?frameId=f1&projectId=p1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = json_response(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["frameId"], "f1");
    assert_eq!(body["projectId"], "p1");
    assert!(body["designCode"].is_null());
    assert_eq!(body["chatMessages"][0]["content"], "a bakery landing page");
}

#[tokio::test]
async fn test_save_frame_overwrites_design_code() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;
    create_project(&app, "p1", "f1", "portfolio").await;

    for code in ["<html><body>v1</body></html>", "<html><body>v2</body></html>"] {
        let req = json_request(
            "PUT",
            "/api/frames",
            json!({ "designCode": code, "frameId": "f1", "projectId": "p1" }),
        );
        let (status, body) = json_response(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["frameId"], "f1");
    }

    let req = Request::builder()
        .uri("/api/frames?frameId=f1&projectId=p1")
        .body(Body::empty())
        .unwrap();
    let (_, body) = json_response(&app, req).await;
    assert_eq!(body["designCode"], "<html><body>v2</body></html>");
}

#[tokio::test]
async fn test_save_unknown_frame_is_not_found() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;

    let req = json_request(
        "PUT",
        "/api/frames",
        json!({ "designCode": "<html></html>", "frameId": "missing", "projectId": "p1" }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "frame not found");
}

#[tokio::test]
async fn test_get_frame_requires_matching_project() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;
    create_project(&app, "p1", "f1", "blog").await;

    let req = Request::builder()
        .uri("/api/frames?frameId=f1&projectId=other")
        .body(Body::empty())
        .unwrap();
    let (status, _) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_project_rejects_blank_ids() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;

    let req = json_request(
        "POST",
        "/api/projects",
        json!({ "projectId": " ", "frameId": "f1", "messages": [] }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("projectId"));
}

#[tokio::test]
async fn test_list_projects_newest_first_with_preview() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;
    create_project(&app, "older", "f-older", "first idea").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_project(&app, "newer", "f-newer", "second idea").await;

    let req = Request::builder()
        .uri("/api/get-all-projects")
        .body(Body::empty())
        .unwrap();
    let (status, body) = json_response(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let projects = body.as_array().expect("array");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["projectId"], "newer");
    assert_eq!(projects[0]["frameId"], "f-newer");
    assert_eq!(projects[0]["firstMessage"], "second idea");
    assert_eq!(projects[1]["projectId"], "older");
}

#[tokio::test]
async fn test_list_projects_pairs_each_project_with_earliest_frame() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = temp_dir.path().join("pagesmith.db");
    let pool = db::connect(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open database");
    let store = ProjectStore::new(pool.clone());

    for (project, frame) in [("alpha", "f-alpha"), ("beta", "f-beta")] {
        store
            .create_project(
                &CreateProjectRequest {
                    project_id: ProjectId(project.to_string()),
                    frame_id: FrameId(frame.to_string()),
                    messages: vec![Message::user(format!("{project} idea"))],
                },
                None,
            )
            .await
            .expect("create project");
    }

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    for (project, frame) in [("alpha", "f-alpha-2"), ("alpha", "f-alpha-3"), ("beta", "f-beta-2")] {
        let now = chrono::Utc::now();
        sqlx::query(
            "INSERT INTO frames (frame_id, project_id, design_code, created_at, updated_at)
             VALUES (?, ?, NULL, ?, ?)",
        )
        .bind(frame)
        .bind(project)
        .bind(now)
        .bind(now)
        .execute(&pool)
        .await
        .expect("insert frame");
    }

    let projects = store.list_projects().await.expect("list projects");
    assert_eq!(projects.len(), 2);
    for summary in &projects {
        let expected = format!("f-{}", summary.project_id);
        assert_eq!(summary.frame_id.as_str(), expected);
    }
}

#[tokio::test]
async fn test_update_chat_replaces_messages() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;
    create_project(&app, "p1", "f1", "hello").await;

    let req = json_request(
        "PUT",
        "/api/chats",
        json!({
            "frameId": "f1",
            "messages": [
                { "role": "user", "content": "hello" },
                { "role": "assistant", "content": "Your code is ready!" }
            ]
        }),
    );
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let req = Request::builder()
        .uri("/api/frames?frameId=f1&projectId=p1")
        .body(Body::empty())
        .unwrap();
    let (_, body) = json_response(&app, req).await;
    assert_eq!(body["chatMessages"].as_array().unwrap().len(), 2);
    assert_eq!(body["chatMessages"][1]["role"], "assistant");
}

#[tokio::test]
async fn test_update_chat_unknown_frame() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;

    let req = json_request("PUT", "/api/chats", json!({ "frameId": "nope", "messages": [] }));
    let (status, _) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_users_requires_identity_header() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "not signed in");
}

#[tokio::test]
async fn test_users_upsert_keeps_first_seen() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;

    let request = |name: &str| {
        Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("x-user-email", "ada@example.com")
            .header("x-user-name", name)
            .body(Body::empty())
            .unwrap()
    };

    let (status, first) = json_response(&app, request("Ada")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["email"], "ada@example.com");
    assert_eq!(first["name"], "Ada");

    let (_, second) = json_response(&app, request("Ada L.")).await;
    assert_eq!(second["name"], "Ada L.");
    assert_eq!(second["createdAt"], first["createdAt"]);
}

#[tokio::test]
async fn test_generation_without_api_key_is_unavailable() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;

    let req = json_request("POST", "/api/ai-model", json!({ "userInput": "a cafe site" }));
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "generation backend not configured");
}

#[tokio::test]
async fn test_generation_rejects_empty_request() {
    let config = GenerationConfig {
        api_key: Some("test-key".to_string()),
        ..GenerationConfig::default()
    };
    let (app, _dir) = setup_test_app(config).await;

    let req = json_request("POST", "/api/ai-model", json!({ "userInput": "  " }));
    let (status, _) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

type Captured = Arc<Mutex<Option<(Option<String>, Value)>>>;

/// Local stand-in for the chat-completions upstream.
async fn spawn_mock_upstream(captured: Captured) -> String {
    let app = axum::Router::new().route(
        "/v1/chat/completions",
        post(
            move |headers: axum::http::HeaderMap, Json(body): Json<Value>| {
                let captured = captured.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(ToString::to_string);
                    *captured.lock().unwrap() = Some((auth, body));

                    let delta = |text: &str| {
                        format!(
                            "data: {}\n\n",
                            json!({ "choices": [{ "delta": { "content": text } }] })
                        )
                    };
                    format!(
                        ": OPENROUTER PROCESSING\n\n{}{}data: [DONE]\n\n",
                        delta("```html\n<section>"),
                        delta("Hi</section>\n```")
                    )
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock upstream");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/chat/completions")
}

#[tokio::test]
async fn test_generation_relays_upstream_text() {
    let captured: Captured = Arc::new(Mutex::new(None));
    let upstream_url = spawn_mock_upstream(captured.clone()).await;
    let config = GenerationConfig {
        upstream_url,
        api_key: Some("test-key".to_string()),
        model: "test/model".to_string(),
        ..GenerationConfig::default()
    };
    let (app, _dir) = setup_test_app(config).await;

    let req = json_request(
        "POST",
        "/api/ai-model",
        json!({
            "userInput": "make it blue",
            "existingCode": "<div>old</div>",
            "replaceMode": false
        }),
    );
    let response = app.clone().oneshot(req).await.expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "```html\n<section>Hi</section>\n```"
    );

    let (auth, sent) = captured.lock().unwrap().clone().expect("upstream not called");
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(sent["model"], "test/model");
    assert_eq!(sent["stream"], true);
    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["content"], "make it blue");
    assert_eq!(messages[2]["role"], "assistant");
    assert_eq!(messages[2]["content"], "```html\n<div>old</div>\n```");
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = setup_test_app(GenerationConfig::default()).await;
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use pomodrive_core::{App, Database};
use pomodrive_server::{create_router, ServerState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn setup() -> (Router, Arc<ServerState>) {
    let app = App::open(Database::open_memory().unwrap()).unwrap();
    let state = Arc::new(ServerState::new(app));
    (create_router(Arc::clone(&state)), state)
}

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_status_shape_on_fresh_server() {
    let (router, _) = setup();
    let (status, body) = call(&router, Method::GET, "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "phase": "work", "secondsLeft": 1500, "isRunning": false, "cycle": 0 })
    );
}

#[tokio::test]
async fn test_start_and_pause() {
    let (router, state) = setup();

    let (status, body) = call(&router, Method::POST, "/api/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "running": true }));
    assert!(!state.read(|app| app.state().is_continuous).unwrap());

    let (_, body) = call(&router, Method::GET, "/api/status", None).await;
    assert_eq!(body["isRunning"], json!(true));

    let (status, body) = call(&router, Method::POST, "/api/pause", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "running": false }));

    // Pausing an idle timer is still a success.
    let (status, body) = call(&router, Method::POST, "/api/pause", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["running"], json!(false));
}

#[tokio::test]
async fn test_start_continuous_body() {
    let (router, state) = setup();
    let (status, _) = call(&router, Method::POST, "/api/start", Some(json!({ "continuous": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state.read(|app| app.state().is_continuous).unwrap());
}

#[tokio::test]
async fn test_start_rejects_malformed_body() {
    let (router, state) = setup();
    let (status, body) = call(&router, Method::POST, "/api/start", Some(json!({ "continuous": "yes" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
    assert!(!state.read(|app| app.state().is_running).unwrap());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/start")
        .header("content-type", "application/json")
        .body(Body::from("{continuous"))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!state.read(|app| app.state().is_running).unwrap());
}

#[tokio::test]
async fn test_start_with_empty_json_object_is_single_shot() {
    let (router, state) = setup();
    let (status, _) = call(&router, Method::POST, "/api/start", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    let s = state.read(|app| *app.state()).unwrap();
    assert!(s.is_running);
    assert!(!s.is_continuous);
}

#[tokio::test]
async fn test_pulse_counts_down() {
    let (router, state) = setup();
    call(&router, Method::POST, "/api/start", None).await;
    for _ in 0..3 {
        assert!(state.tick().unwrap().is_none());
    }
    let (_, body) = call(&router, Method::GET, "/api/status", None).await;
    assert_eq!(body["secondsLeft"], json!(1497));
}

#[tokio::test]
async fn test_updates_channel_sees_changes() {
    let (router, state) = setup();
    let mut rx = state.subscribe();
    call(&router, Method::POST, "/api/start", None).await;
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().is_running);
}

#[tokio::test]
async fn test_phase_and_reset() {
    let (router, _) = setup();
    let (status, body) = call(&router, Method::POST, "/api/phase", Some(json!({ "phase": "longBreak" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"], json!("longBreak"));
    assert_eq!(body["secondsLeft"], json!(900));

    let (_, body) = call(&router, Method::POST, "/api/reset", None).await;
    assert_eq!(body["phase"], json!("longBreak"));
    assert_eq!(body["secondsLeft"], json!(900));
    assert_eq!(body["isRunning"], json!(false));
}

#[tokio::test]
async fn test_durations_validation() {
    let (router, _) = setup();
    let (status, body) = call(
        &router,
        Method::PUT,
        "/api/durations",
        Some(json!({ "workDuration": 0, "shortBreakDuration": 300, "longBreakDuration": 900 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
    assert!(body["error"].is_string());

    let (status, body) = call(
        &router,
        Method::PUT,
        "/api/durations",
        Some(json!({ "workDuration": 600, "shortBreakDuration": 60, "longBreakDuration": 120 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["durations"]["workDuration"], json!(600));
}

#[tokio::test]
async fn test_task_lifecycle() {
    let (router, _) = setup();
    let (status, task) = call(&router, Method::POST, "/api/tasks", Some(json!({ "title": "Write report", "estPomos": 3 }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["estPomos"], json!(3));
    let id = task["id"].as_str().unwrap().to_string();

    let (_, list) = call(&router, Method::GET, "/api/tasks", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, toggled) = call(&router, Method::POST, &format!("/api/tasks/{id}/toggle"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["done"], json!(true));

    let (status, _) = call(&router, Method::DELETE, &format!("/api/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&router, Method::DELETE, &format!("/api/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], json!(false));
}

#[tokio::test]
async fn test_blank_task_title_is_rejected() {
    let (router, _) = setup();
    let (status, _) = call(&router, Method::POST, "/api/tasks", Some(json!({ "title": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sound_toggle_and_health() {
    let (router, _) = setup();
    let (_, body) = call(&router, Method::POST, "/api/sound/toggle", None).await;
    assert_eq!(body, json!({ "on": false }));

    let (status, body) = call(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

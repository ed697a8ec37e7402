#![allow(dead_code)]

use std::sync::Arc;

use aura_core::personality::PersonalityPolicy;
use aura_llm::mock::ScriptedCompletion;
use aura_llm::{ChatCompletion, LlmConfig};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use aura_api::config::ServerConfig;
use aura_api::router::build_app_router;
use aura_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and no provider key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        chat_history_turns: 20,
        llm: LlmConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            model: "test-model".to_string(),
            max_tokens: 256,
            timeout_secs: 5,
        },
    }
}

/// Build the full application router around the given pool, answering
/// chat requests from `llm`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with_llm(pool: PgPool, llm: Arc<ScriptedCompletion>) -> Router {
    build_test_app_with_config(pool, test_config(), llm)
}

/// Build the router from an explicit config and any completion backend.
pub fn build_test_app_with_config(
    pool: PgPool,
    config: ServerConfig,
    llm: Arc<dyn ChatCompletion>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        llm,
        personality_policy: Arc::new(PersonalityPolicy::default()),
    };
    build_app_router(state, &config)
}

/// Build the router with a completion stub that always gives its fallback reply.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_llm(pool, Arc::new(ScriptedCompletion::default()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API and return its id.
pub async fn create_user(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({ "name": name, "goal": "Reclaim my focus" }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Post a check-in for `user_id` and return the response body.
pub async fn check_in(pool: &PgPool, user_id: i64, stayed: bool, mood: i32) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/checkins",
        serde_json::json!({
            "user_id": user_id,
            "stayed_on_track": stayed,
            "mood": mood,
            "had_urges": false,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

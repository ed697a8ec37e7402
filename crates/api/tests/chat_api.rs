//! HTTP-level tests for the conversation endpoints.
//!
//! The completion provider is replaced by a [`ScriptedCompletion`], so
//! these tests exercise prompt assembly, personality handling and
//! persistence without network access.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aura_llm::mock::ScriptedCompletion;
use aura_llm::{ChatCompletion, ConversationTurn, LlmError, TurnRole};
use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with_config, build_test_app_with_llm, create_user,
    get, post_json, test_config,
};
use serde_json::json;
use sqlx::PgPool;

async fn history(pool: &PgPool, user_id: i64, session_id: &str) -> Vec<serde_json::Value> {
    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/users/{user_id}/chat-history/{session_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].as_array().unwrap().clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_keyword_selects_casey_and_reply_is_tagged(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    let llm = Arc::new(ScriptedCompletion::default().with_reply("[Casey] Let's build a plan."));
    let app = build_test_app_with_llm(pool.clone(), Arc::clone(&llm));

    let response = post_json(
        app,
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "I need a plan for evenings" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["ai_message"], "[Casey] Let's build a plan.");
    assert_eq!(data["personality_used"], "casey");
    assert_eq!(data["personalities"], json!(["casey"]));

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].system_prompt.contains("the Strategist personality"));
    let last = calls[0].conversation.last().unwrap();
    assert_eq!(last.role, TurnRole::User);
    assert!(last.content.starts_with("User Context:\nName: Jordan\n"));
    assert!(last.content.ends_with("User Message: I need a plan for evenings"));

    let session_id = data["session_id"].as_str().unwrap();
    let stored = history(&pool, user_id, session_id).await;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["role"], "user");
    assert_eq!(stored[0]["content"], "I need a plan for evenings");
    assert_eq!(stored[1]["role"], "ai");
    assert_eq!(stored[1]["personality"], "casey");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_personality_overrides_keywords(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    let llm = Arc::new(ScriptedCompletion::new("You've got this."));

    let response = post_json(
        build_test_app_with_llm(pool, Arc::clone(&llm)),
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "What's the plan?", "personality": "Leo" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["personality_used"], "leo");
    assert!(llm.calls()[0].system_prompt.contains("the Motivator personality"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_personality_is_rejected_before_provider_call(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    let llm = Arc::new(ScriptedCompletion::default());

    let response = post_json(
        build_test_app_with_llm(pool, Arc::clone(&llm)),
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "hello", "personality": "sam" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(llm.calls().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_message_is_rejected(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    let response = post_json(
        build_test_app(pool),
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_provider_failure_stores_nothing(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    let session_id = uuid::Uuid::new_v4().to_string();
    let llm = Arc::new(ScriptedCompletion::default().with_failure());

    let response = post_json(
        build_test_app_with_llm(pool.clone(), llm),
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "hello", "session_id": session_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_ERROR");

    assert!(history(&pool, user_id, &session_id).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_history_is_sent_to_provider(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    let llm = Arc::new(
        ScriptedCompletion::default()
            .with_reply("First answer")
            .with_reply("Second answer"),
    );

    let first = post_json(
        build_test_app_with_llm(pool.clone(), Arc::clone(&llm)),
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "Hi" }),
    )
    .await;
    let session_id = body_json(first).await["data"]["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let second = post_json(
        build_test_app_with_llm(pool.clone(), Arc::clone(&llm)),
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "Still here", "session_id": session_id }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);

    let calls = llm.calls();
    assert_eq!(calls[1].conversation.len(), 3);
    assert_eq!(calls[1].conversation[0].content, "Hi");
    assert_eq!(calls[1].conversation[1].role, TurnRole::Assistant);
    assert_eq!(calls[1].conversation[1].content, "First answer");

    let stored = history(&pool, user_id, &session_id).await;
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[3]["content"], "Second answer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sos_forces_alex_and_prefixes_message(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    let llm = Arc::new(ScriptedCompletion::new("I'm right here. Let's breathe together."));

    let response = post_json(
        build_test_app_with_llm(pool.clone(), Arc::clone(&llm)),
        "/api/v1/sos",
        json!({
            "user_id": user_id,
            "message": "I need a plan right now",
            "personality": "leo",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["personality_used"], "alex");
    assert!(llm.calls()[0].system_prompt.contains("the Empathetic Coach personality"));

    let stored = history(&pool, user_id, data["session_id"].as_str().unwrap()).await;
    assert_eq!(
        stored[0]["content"],
        "[SOS - URGENT SUPPORT NEEDED] I need a plan right now"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_chat_for_unknown_user_is_404(pool: PgPool) {
    let llm = Arc::new(ScriptedCompletion::default());
    let response = post_json(
        build_test_app_with_llm(pool, Arc::clone(&llm)),
        "/api/v1/chat",
        json!({ "user_id": 5150, "message": "hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(llm.calls().is_empty());
}

/// Stalls for the provider timeout, then fails the way a timed-out call does.
struct StalledProvider {
    stall: Duration,
}

#[async_trait]
impl ChatCompletion for StalledProvider {
    async fn complete(
        &self,
        _system_prompt: &str,
        _conversation: &[ConversationTurn],
    ) -> Result<String, LlmError> {
        tokio::time::sleep(self.stall).await;
        Err(LlmError::Api {
            status: 504,
            body: "provider timed out".to_string(),
        })
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stalled_provider_reports_upstream_error_not_timeout(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;

    // Request timeout configured no longer than the provider timeout.
    let mut config = test_config();
    config.request_timeout_secs = 1;
    config.llm.timeout_secs = 1;
    let llm = Arc::new(StalledProvider {
        stall: Duration::from_secs(2),
    });

    let response = post_json(
        build_test_app_with_config(pool, config, llm),
        "/api/v1/chat",
        json!({ "user_id": user_id, "message": "hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert!(body["error"].is_string());
}

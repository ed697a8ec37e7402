//! HTTP-level tests for check-ins and relapses.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, check_in, create_user, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_check_in_returns_outcome(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;

    let json = check_in(&pool, user_id, true, 4).await;
    let data = &json["data"];

    assert_eq!(data["check_in"]["mood"], 4);
    assert_eq!(data["user"]["current_streak"], 1);
    assert_eq!(data["user"]["best_streak"], 1);
    assert_eq!(data["new_achievements"], json!(["first_step"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mood_out_of_range_is_rejected(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;

    for mood in [0, 6] {
        let response = post_json(
            build_test_app(pool.clone()),
            "/api/v1/checkins",
            json!({
                "user_id": user_id,
                "stayed_on_track": true,
                "mood": mood,
                "had_urges": false,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/users/{user_id}/checkins"),
    )
    .await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_in_for_unknown_user_is_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/checkins",
        json!({
            "user_id": 4242,
            "stayed_on_track": true,
            "mood": 3,
            "had_urges": false,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_trigger_is_stored_as_none(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;

    let response = post_json(
        build_test_app(pool),
        "/api/v1/checkins",
        json!({
            "user_id": user_id,
            "stayed_on_track": true,
            "mood": 3,
            "had_urges": true,
            "urge_triggers": "   ",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["data"]["check_in"]["urge_triggers"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seventh_day_unlocks_week_warrior(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    for _ in 0..6 {
        check_in(&pool, user_id, true, 3).await;
    }

    let json = check_in(&pool, user_id, true, 3).await;
    assert_eq!(json["data"]["user"]["current_streak"], 7);
    assert_eq!(json["data"]["new_achievements"], json!(["week_warrior"]));

    let json = check_in(&pool, user_id, true, 3).await;
    assert_eq!(json["data"]["new_achievements"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_check_ins_are_capped_and_newest_first(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    for i in 0..32 {
        check_in(&pool, user_id, true, (i % 5) + 1).await;
    }

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/users/{user_id}/checkins"),
    )
    .await;
    let json = body_json(response).await;
    let list = json["data"].as_array().unwrap();
    assert_eq!(list.len(), 30);

    let ids: Vec<i64> = list.iter().map(|c| c["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_relapse_keeps_best_streak(pool: PgPool) {
    let user_id = create_user(&pool, "Jordan").await;
    for _ in 0..3 {
        check_in(&pool, user_id, true, 4).await;
    }

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/relapses",
        json!({
            "user_id": user_id,
            "trigger_analysis": "Stayed up too late",
            "emotional_state": "stressed",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["current_streak"], 0);
    assert_eq!(json["data"]["user"]["best_streak"], 3);
    assert_eq!(json["data"]["user"]["total_days_clean"], 3);
    assert_eq!(json["data"]["relapse"]["emotional_state"], "stressed");
    assert!(json["data"]["relapse"]["time_of_day"].is_null());

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/users/{user_id}/relapses"),
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_relapse_for_unknown_user_is_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/relapses",
        json!({ "user_id": 777 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

use sqlx::PgPool;

/// Connect, migrate, verify every table exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    aura_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "check_ins",
        "relapses",
        "chat_messages",
        "weekly_reports",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Mood outside 1-5 is rejected by the table itself.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mood_check_constraint(pool: PgPool) {
    let (user_id,): (i64,) =
        sqlx::query_as("INSERT INTO users (name, goal) VALUES ('A', 'B') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = sqlx::query(
        "INSERT INTO check_ins (user_id, date, stayed_on_track, mood, had_urges)
         VALUES ($1, CURRENT_DATE, true, 6, false)",
    )
    .bind(user_id)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "mood 6 should violate the check constraint");
}

/// `current_streak <= best_streak` is enforced at the row level.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_streak_within_best_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO users (name, goal, current_streak, best_streak) VALUES ('A', 'B', 5, 2)",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err());
}

//! Handlers for weekly progress reports.

use aura_core::checkin::CheckInSummary;
use aura_core::types::DbId;
use aura_core::weekly_report::{self, WeeklyReportOutcome, REPORT_WINDOW_DAYS};
use aura_db::models::weekly_report::WeeklyReport;
use aura_db::repositories::{CheckInRepo, WeeklyReportRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::users::ensure_user_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a report request. An empty window is not an error.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeeklyReportResponse {
    InsufficientData { message: &'static str },
    Ready { report: WeeklyReport },
}

/// POST /api/v1/users/{user_id}/weekly-reports
///
/// Summarise the last seven days. A non-empty window is stored as a
/// snapshot and returned with 201; an empty one returns 200 with
/// `insufficient_data` and stores nothing.
pub async fn generate_report(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;

    let week_end = Utc::now();
    let week_start = week_end - Duration::days(REPORT_WINDOW_DAYS);

    let rows = CheckInRepo::list_between(&state.pool, user_id, week_start, week_end).await?;
    let check_ins: Vec<CheckInSummary> = rows.iter().map(CheckInSummary::from).collect();

    let response = match weekly_report::generate(&check_ins, week_start, week_end) {
        WeeklyReportOutcome::InsufficientData { message } => (
            StatusCode::OK,
            WeeklyReportResponse::InsufficientData { message },
        ),
        WeeklyReportOutcome::Ready(summary) => {
            let report = WeeklyReportRepo::create(&state.pool, user_id, &summary).await?;
            tracing::info!(
                user_id,
                report_id = report.id,
                checkin_count = report.checkin_count,
                "Weekly report generated",
            );
            (StatusCode::CREATED, WeeklyReportResponse::Ready { report })
        }
    };

    let (status, data) = response;
    Ok((status, Json(DataResponse { data })))
}

/// GET /api/v1/users/{user_id}/weekly-reports
pub async fn list_reports(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let reports = WeeklyReportRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: reports }))
}

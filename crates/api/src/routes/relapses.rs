use axum::routing::post;
use axum::Router;

use crate::handlers::relapses;
use crate::state::AppState;

/// Routes mounted at `/relapses`.
///
/// ```text
/// POST   /    -> create_relapse
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(relapses::create_relapse))
}

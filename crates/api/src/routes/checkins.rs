use axum::routing::post;
use axum::Router;

use crate::handlers::checkins;
use crate::state::AppState;

/// Routes mounted at `/checkins`.
///
/// ```text
/// POST   /    -> create_check_in
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(checkins::create_check_in))
}

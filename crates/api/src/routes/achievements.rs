use axum::routing::get;
use axum::Router;

use crate::handlers::achievements;
use crate::state::AppState;

/// Routes mounted at `/achievements`.
///
/// ```text
/// GET    /    -> list_catalog
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(achievements::list_catalog))
}

pub mod attendance;

use axum::Router;
use axum::routing::post;

use crate::state::SharedState;

pub fn submission_routes() -> Router<SharedState> {
    Router::new().route("/submit", post(attendance::submit))
}

pub mod apply;
pub mod cors;

use axum::routing::any;
use axum::Router;

use crate::state::SharedState;

pub fn apply_routes() -> Router<SharedState> {
    Router::new().route("/", any(apply::apply))
}

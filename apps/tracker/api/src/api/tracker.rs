use axum::Router;
use domain_tracker::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.tracker.clone())
}

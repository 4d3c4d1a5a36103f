use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits/:index/toggle", post(handlers::toggle_habit_form))
        .route("/reset", post(handlers::reset_data_form))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/workout", get(handlers::get_workout))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/habits/toggle", post(handlers::toggle_habit))
        .route("/api/session/start", post(handlers::start_session))
        .route("/api/session/cancel", post(handlers::cancel_session))
        .route("/api/session/finish", post(handlers::finish_session))
        .route("/api/reset", post(handlers::reset_data))
        .with_state(state)
}

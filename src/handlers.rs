use crate::errors::AppError;
use crate::models::{
    AppData, DashboardResponse, FinishResponse, ProfileResponse, SessionState, SessionView,
    StartSessionRequest, ToggleRequest, WorkoutResponse, WorkoutSplit,
};
use crate::reset::{self, run_daily_reset};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use tracing::info;

/// The day check runs on every page load as well as at startup. It is
/// idempotent within a day.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut data = state.data.lock().await;
    if run_daily_reset(reset::today(), &mut data) {
        info!(streak = data.streak, "daily checklist rolled over");
        persist_data(&state.data_path, &data).await?;
    }
    Ok(Html(render_index(&data)))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(dashboard_snapshot(&data)))
}

pub async fn get_workout(State(state): State<AppState>) -> Result<Json<WorkoutResponse>, AppError> {
    let session = state.session.lock().await;
    let data = state.data.lock().await;
    Ok(Json(workout_snapshot(*session, &data)))
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(profile_snapshot(&data)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let response = apply_toggle(&state, payload.index).await?;
    Ok(Json(response))
}

pub async fn toggle_habit_form(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    apply_toggle(&state, index).await?;
    Ok(Redirect::to("/"))
}

pub async fn start_session(
    State(state): State<AppState>,
    Json(payload): Json<StartSessionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let split = WorkoutSplit::parse(&payload.split)
        .ok_or_else(|| AppError::bad_request("split must be 'A' or 'B'"))?;

    // Starting over an active session re-picks the split, like clicking
    // the other workout button mid-choice.
    let mut session = state.session.lock().await;
    *session = SessionState::Active(split);
    Ok(Json(SessionView::from_state(*session)))
}

pub async fn cancel_session(
    State(state): State<AppState>,
) -> Result<Json<WorkoutResponse>, AppError> {
    let mut session = state.session.lock().await;
    if *session == SessionState::Idle {
        return Err(AppError::conflict("no active session to cancel"));
    }
    *session = SessionState::Idle;

    let data = state.data.lock().await;
    Ok(Json(workout_snapshot(*session, &data)))
}

pub async fn finish_session(
    State(state): State<AppState>,
) -> Result<Json<FinishResponse>, AppError> {
    let mut session = state.session.lock().await;
    let split = match *session {
        SessionState::Active(split) => split,
        SessionState::Idle => return Err(AppError::conflict("no active session to finish")),
    };

    let mut data = state.data.lock().await;
    let entry = data.log_workout(split, reset::display_date(reset::today()), reset::now_millis());
    persist_data(&state.data_path, &data).await?;
    *session = SessionState::Idle;

    info!(name = %entry.name, "workout logged");
    Ok(Json(FinishResponse {
        message: "Good work! Recovery starts now. Go eat.".to_string(),
        entry,
    }))
}

pub async fn reset_data(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let response = apply_reset(&state).await?;
    Ok(Json(response))
}

pub async fn reset_data_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_reset(&state).await?;
    Ok(Redirect::to("/"))
}

async fn apply_toggle(state: &AppState, index: usize) -> Result<DashboardResponse, AppError> {
    let mut data = state.data.lock().await;
    if data.daily_habits.toggle(index).is_none() {
        return Err(AppError::bad_request(format!("no habit at index {index}")));
    }

    persist_data(&state.data_path, &data).await?;
    Ok(dashboard_snapshot(&data))
}

/// Equivalent to a first run: defaults, today's rollover, fresh file.
async fn apply_reset(state: &AppState) -> Result<DashboardResponse, AppError> {
    let mut session = state.session.lock().await;
    let mut data = state.data.lock().await;

    *session = SessionState::Idle;
    *data = AppData::default();
    run_daily_reset(reset::today(), &mut data);
    persist_data(&state.data_path, &data).await?;

    info!("application data reset to defaults");
    Ok(dashboard_snapshot(&data))
}

fn dashboard_snapshot(data: &AppData) -> DashboardResponse {
    let done = data.daily_habits.done_count();
    let total = data.daily_habits.items.len();
    let percent = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    };

    DashboardResponse {
        date: data.daily_habits.date.clone(),
        streak: data.streak,
        done_count: done,
        total_count: total,
        percent,
        items: data.daily_habits.items.clone(),
    }
}

fn workout_snapshot(session: SessionState, data: &AppData) -> WorkoutResponse {
    WorkoutResponse {
        session: SessionView::from_state(session),
        recent: data.history.iter().take(3).cloned().collect(),
    }
}

fn profile_snapshot(data: &AppData) -> ProfileResponse {
    ProfileResponse {
        name: data.profile.name.clone(),
        weight: data.profile.weight,
        target_calories: data.profile.target_calories,
        streak: data.streak,
        workouts_logged: data.history.len(),
    }
}

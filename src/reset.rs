use crate::models::AppData;
use chrono::{Duration, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar-day identifier, `YYYY-MM-DD`.
pub fn day_key(date: NaiveDate) -> String {
    date.to_string()
}

/// Display form used in the workout history.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Rolls the checklist over to `today` and updates the login streak.
/// Returns true when state changed and needs persisting.
///
/// The streak is judged against `lastLogin` before it is overwritten:
/// logged in yesterday extends the run, any gap collapses to zero, and a
/// same-day re-run leaves it alone.
pub fn run_daily_reset(today: NaiveDate, data: &mut AppData) -> bool {
    let today_key = day_key(today);
    if data.daily_habits.date == today_key {
        return false;
    }

    for item in &mut data.daily_habits.items {
        item.done = false;
    }
    data.daily_habits.date = today_key.clone();

    let yesterday_key = day_key(today - Duration::days(1));
    match data.last_login.as_deref() {
        Some(last) if last == yesterday_key => data.streak += 1,
        Some(last) if last == today_key => {}
        _ => data.streak = 0,
    }
    data.last_login = Some(today_key);

    true
}

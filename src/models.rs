use serde::{Deserialize, Serialize};

/// User profile. Stored with the rest of the blob; the current UI never
/// edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub weight: f64,
    pub target_calories: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Hard Gainer".to_string(),
            weight: 70.0,
            target_calories: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitItem {
    pub id: String,
    pub text: String,
    pub done: bool,
}

/// The fixed daily checklist. `date` is the day key of the last rollover;
/// only the `done` flags vary between resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHabits {
    pub date: String,
    pub items: Vec<HabitItem>,
}

impl Default for DailyHabits {
    fn default() -> Self {
        let items = [
            ("cal", "Hit Calorie Goal (3000+)"),
            ("prot", "160g Protein"),
            ("cre", "Creatine (5g)"),
            ("skin", "Face Wash & Moisturize"),
            ("hair", "Minoxidil / Hair Care"),
            ("sleep", "8 Hours Sleep"),
        ]
        .into_iter()
        .map(|(id, text)| HabitItem {
            id: id.to_string(),
            text: text.to_string(),
            done: false,
        })
        .collect();

        // An empty day key makes the first daily reset stamp today.
        Self {
            date: String::new(),
            items,
        }
    }
}

impl DailyHabits {
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Flips the completion flag at `index`. Returns the new value, or
    /// `None` when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.done = !item.done;
        Some(item.done)
    }
}

/// One completed workout session. `date` is a display string, `timestamp`
/// epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub name: String,
    pub timestamp: i64,
}

/// The whole persisted blob. Serialized with camelCase keys (`lastLogin`,
/// `dailyHabits`, `targetCalories`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub profile: Profile,
    pub streak: u32,
    pub last_login: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub daily_habits: DailyHabits,
}

impl AppData {
    /// Records a finished session at the front of the history (newest
    /// first, insertion order, never re-sorted).
    pub fn log_workout(&mut self, split: WorkoutSplit, date: String, timestamp: i64) -> HistoryEntry {
        let entry = HistoryEntry {
            date,
            name: format!("Workout {}", split.letter()),
            timestamp,
        };
        self.history.insert(0, entry.clone());
        entry
    }
}

/// The two fixed session templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutSplit {
    A,
    B,
}

impl WorkoutSplit {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    pub fn focus(self) -> &'static str {
        match self {
            Self::A => "Upper / Push",
            Self::B => "Lower / Pull",
        }
    }

    /// One set row per exercise; no dynamic set addition.
    pub fn exercises(self) -> &'static [&'static str] {
        match self {
            Self::A => &["Push Ups (Weighted)", "Overhead Press", "Dips", "Lateral Raises"],
            Self::B => &["Squats / Lunges", "Pull Ups / Rows", "Deadlifts", "Bicep Curls"],
        }
    }
}

/// The workout flow, held in memory only. A session that was never
/// finished does not survive a restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Active(WorkoutSplit),
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub split: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: String,
    pub streak: u32,
    pub done_count: usize,
    pub total_count: usize,
    pub percent: f64,
    pub items: Vec<HabitItem>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SessionView {
    Idle,
    Active {
        split: &'static str,
        title: String,
        focus: &'static str,
        exercises: Vec<&'static str>,
    },
}

impl SessionView {
    pub fn from_state(session: SessionState) -> Self {
        match session {
            SessionState::Idle => Self::Idle,
            SessionState::Active(split) => Self::Active {
                split: split.letter(),
                title: format!("Workout {}", split.letter()),
                focus: split.focus(),
                exercises: split.exercises().to_vec(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub session: SessionView,
    pub recent: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub name: String,
    pub weight: f64,
    pub target_calories: u32,
    pub streak: u32,
    pub workouts_logged: usize,
}

#[derive(Debug, Serialize)]
pub struct FinishResponse {
    pub message: String,
    pub entry: HistoryEntry,
}

use crate::models::{AppData, SessionState};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handles: the persisted blob and the transient workout session.
/// Handlers that need both lock the session first.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub session: Arc<Mutex<SessionState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            session: Arc::new(Mutex::new(SessionState::Idle)),
        }
    }
}

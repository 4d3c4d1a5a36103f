use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HabitItem {
    id: String,
    text: String,
    done: bool,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    date: String,
    streak: u32,
    done_count: usize,
    total_count: usize,
    percent: f64,
    items: Vec<HabitItem>,
}

#[derive(Debug, Deserialize)]
struct SessionView {
    state: String,
    title: Option<String>,
    exercises: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct HistoryEntry {
    date: String,
    name: String,
    timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct WorkoutResponse {
    session: SessionView,
    recent: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    name: String,
    streak: u32,
    workouts_logged: usize,
}

#[derive(Debug, Deserialize)]
struct FinishResponse {
    message: String,
    entry: HistoryEntry,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("gainer_stack_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/dashboard")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_gainer_stack"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_dashboard(client: &Client, base_url: &str) -> DashboardResponse {
    client
        .get(format!("{base_url}/api/dashboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn get_profile(client: &Client, base_url: &str) -> ProfileResponse {
    client
        .get(format!("{base_url}/api/profile"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_dashboard_serves_the_fixed_checklist() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let dashboard = get_dashboard(&client, &server.base_url).await;

    assert_eq!(dashboard.total_count, 6);
    assert_eq!(dashboard.items.len(), 6);
    assert!(!dashboard.date.is_empty());
    assert!((0.0..=100.0).contains(&dashboard.percent));

    let ids: Vec<&str> = dashboard.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["cal", "prot", "cre", "skin", "hair", "sleep"]);
    assert!(dashboard.items.iter().all(|item| !item.text.is_empty()));
}

#[tokio::test]
async fn http_toggle_twice_restores_the_item() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_dashboard(&client, &server.base_url).await;
    let original = before.items[2].done;

    let flipped: DashboardResponse = client
        .post(format!("{}/api/habits/toggle", server.base_url))
        .json(&serde_json::json!({ "index": 2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(flipped.items[2].done, !original);

    let restored: DashboardResponse = client
        .post(format!("{}/api/habits/toggle", server.base_url))
        .json(&serde_json::json!({ "index": 2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(restored.items[2].done, original);
    assert_eq!(restored.done_count, before.done_count);
}

#[tokio::test]
async fn http_toggle_out_of_range_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits/toggle", server.base_url))
        .json(&serde_json::json!({ "index": 99 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_finish_without_session_conflicts() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/session/finish", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn http_start_then_finish_logs_the_workout() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_profile(&client, &server.base_url).await;

    let session: SessionView = client
        .post(format!("{}/api/session/start", server.base_url))
        .json(&serde_json::json!({ "split": "A" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session.state, "active");
    assert_eq!(session.title.as_deref(), Some("Workout A"));
    assert_eq!(session.exercises.map(|list| list.len()), Some(4));

    let finished: FinishResponse = client
        .post(format!("{}/api/session/finish", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(finished.entry.name, "Workout A");
    assert!(!finished.message.is_empty());
    assert!(finished.entry.timestamp > 0);
    assert!(!finished.entry.date.is_empty());

    let after = get_profile(&client, &server.base_url).await;
    assert_eq!(after.workouts_logged, before.workouts_logged + 1);

    let workout: WorkoutResponse = client
        .get(format!("{}/api/workout", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(workout.session.state, "idle");
    assert_eq!(workout.recent[0].name, "Workout A");
}

#[tokio::test]
async fn http_cancel_discards_the_session() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_profile(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/session/start", server.base_url))
        .json(&serde_json::json!({ "split": "B" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let cancelled: WorkoutResponse = client
        .post(format!("{}/api/session/cancel", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cancelled.session.state, "idle");

    let after = get_profile(&client, &server.base_url).await;
    assert_eq!(after.workouts_logged, before.workouts_logged);
}

#[tokio::test]
async fn http_unknown_split_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/session/start", server.base_url))
        .json(&serde_json::json!({ "split": "C" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_reset_restores_defaults() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // Dirty the state first: one toggle and one logged workout.
    client
        .post(format!("{}/api/habits/toggle", server.base_url))
        .json(&serde_json::json!({ "index": 0 }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}/api/session/start", server.base_url))
        .json(&serde_json::json!({ "split": "B" }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}/api/session/finish", server.base_url))
        .send()
        .await
        .unwrap();

    let dashboard: DashboardResponse = client
        .post(format!("{}/api/reset", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(dashboard.streak, 0);
    assert_eq!(dashboard.done_count, 0);
    assert!(dashboard.items.iter().all(|item| !item.done));
    assert!(!dashboard.date.is_empty());

    let profile = get_profile(&client, &server.base_url).await;
    assert_eq!(profile.workouts_logged, 0);
    assert_eq!(profile.streak, 0);
    assert_eq!(profile.name, "Hard Gainer");
}

#[tokio::test]
async fn http_form_toggle_redirects_to_the_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_dashboard(&client, &server.base_url).await;
    let original = before.items[0].done;

    // reqwest follows the redirect back to the page shell.
    let response = client
        .post(format!("{}/habits/0/toggle", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("GainerStack"));

    let after = get_dashboard(&client, &server.base_url).await;
    assert_eq!(after.items[0].done, !original);

    // Restore for the other tests.
    client
        .post(format!("{}/habits/0/toggle", server.base_url))
        .send()
        .await
        .unwrap();
}

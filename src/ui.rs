use crate::models::AppData;

pub fn render_index(data: &AppData) -> String {
    let done = data.daily_habits.done_count();
    let total = data.daily_habits.items.len();
    let percent = if total == 0 { 0 } else { done * 100 / total };
    INDEX_HTML
        .replace("{{DATE}}", &data.daily_habits.date)
        .replace("{{STREAK}}", &data.streak.to_string())
        .replace("{{DONE}}", &done.to_string())
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{PCT}}", &percent.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>GainerStack</title>
  <style>
    :root {
      --bg: #101014;
      --surface: #1b1c22;
      --card-border: rgba(255, 255, 255, 0.06);
      --primary: #4ade80;
      --accent: #fb923c;
      --danger: #f87171;
      --text: #e7e7ea;
      --text-dim: #9b9ba6;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, rgba(74, 222, 128, 0.08), transparent 55%), var(--bg);
      color: var(--text);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: flex;
      justify-content: center;
      padding: 28px 16px 56px;
    }

    .shell {
      width: min(520px, 100%);
      display: grid;
      gap: 18px;
      animation: rise 500ms ease;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: 1.7rem;
      letter-spacing: 0.01em;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--text-dim);
      font-size: 0.9rem;
    }

    .streak-pill {
      background: var(--surface);
      border: 1px solid var(--card-border);
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      white-space: nowrap;
      color: var(--accent);
    }

    .nav {
      display: flex;
      gap: 8px;
    }

    .nav-btn {
      flex: 1;
      background: var(--surface);
      border: 1px solid var(--card-border);
      border-radius: 12px;
      padding: 12px 0;
      color: var(--text-dim);
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: color 150ms ease, border-color 150ms ease;
    }

    .nav-btn.active {
      color: var(--primary);
      border-color: var(--primary);
    }

    .card {
      background: var(--surface);
      border: 1px solid var(--card-border);
      border-radius: 16px;
      padding: 18px 20px;
    }

    .card h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .card.tip {
      border-left: 4px solid var(--accent);
    }

    .dim {
      color: var(--text-dim);
      font-size: 0.9rem;
    }

    .highlight {
      color: var(--primary);
    }

    .progress-bar {
      height: 12px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.08);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--primary);
      transition: width 250ms ease;
    }

    .progress-note {
      margin: 6px 0 0;
      text-align: right;
      font-size: 0.8rem;
      color: var(--text-dim);
    }

    .habit-item {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 12px 8px;
      border-bottom: 1px solid var(--card-border);
      cursor: pointer;
      user-select: none;
    }

    .habit-item:last-child {
      border-bottom: none;
    }

    .habit-item.done span {
      color: var(--text-dim);
      text-decoration: line-through;
    }

    .habit-checkbox {
      width: 22px;
      height: 22px;
      border: 2px solid var(--text-dim);
      border-radius: 6px;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      font-size: 0.85rem;
      color: var(--bg);
      flex-shrink: 0;
    }

    .habit-item.done .habit-checkbox {
      background: var(--primary);
      border-color: var(--primary);
    }

    button.btn-primary,
    button.btn-outline,
    button.btn-ghost,
    button.btn-danger {
      appearance: none;
      width: 100%;
      border: none;
      border-radius: 12px;
      padding: 14px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--primary);
      color: var(--bg);
    }

    .btn-primary + .btn-outline {
      margin-top: 10px;
    }

    .btn-outline {
      background: transparent;
      border: 1px solid var(--primary);
      color: var(--primary);
    }

    .btn-ghost {
      background: transparent;
      color: var(--accent);
      margin-top: 10px;
    }

    .btn-danger {
      background: transparent;
      border: 1px solid var(--danger);
      color: var(--danger);
    }

    .exercise-card h3 {
      margin: 0 0 10px;
      font-size: 1rem;
    }

    .set-row {
      display: flex;
      gap: 10px;
      align-items: center;
    }

    .set-input {
      width: 90px;
      background: rgba(255, 255, 255, 0.06);
      border: 1px solid var(--card-border);
      border-radius: 8px;
      padding: 10px;
      color: var(--text);
      font-size: 0.95rem;
    }

    .log-row {
      padding: 10px 0;
      border-bottom: 1px solid var(--card-border);
      font-size: 0.85rem;
    }

    .log-row:last-child {
      border-bottom: none;
    }

    .log-date {
      color: var(--primary);
    }

    .status {
      font-size: 0.95rem;
      color: var(--text-dim);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--primary);
    }

    .hint {
      margin: 0;
      color: var(--text-dim);
      font-size: 0.8rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(14px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 480px) {
      header {
        flex-direction: column;
        align-items: flex-start;
      }
    }
  </style>
</head>
<body>
  <main class="shell">
    <header>
      <div>
        <h1>GainerStack</h1>
        <p class="subtitle">Eat big, lift heavy, tick the boxes.</p>
      </div>
      <div class="streak-pill">&#128293; <span id="streak-count">{{STREAK}}</span> day streak</div>
    </header>

    <nav class="nav">
      <button class="nav-btn active" id="nav-dash" data-view="dashboard" type="button">Dashboard</button>
      <button class="nav-btn" id="nav-work" data-view="workout" type="button">Workout</button>
      <button class="nav-btn" id="nav-prof" data-view="profile" type="button">Profile</button>
    </nav>

    <div id="app">
      <section class="card">
        <h2>Daily Progress</h2>
        <div class="progress-bar"><div class="progress-fill" style="width: {{PCT}}%"></div></div>
        <p class="progress-note">{{DONE}}/{{TOTAL}} Completed &middot; {{DATE}}</p>
      </section>
    </div>

    <div class="status" id="status"></div>
    <p class="hint">Data lives in a local file on this machine. The checklist resets each calendar day (server time).</p>
  </main>

  <script>
    const appEl = document.getElementById('app');
    const statusEl = document.getElementById('status');
    const streakEl = document.getElementById('streak-count');
    const navButtons = Array.from(document.querySelectorAll('.nav-btn'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showError = (err) => setStatus(err.message, 'error');

    const getJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const postJson = async (url, body) => {
      const options = { method: 'POST' };
      if (body !== undefined) {
        options.headers = { 'content-type': 'application/json' };
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderDashboard = (snapshot) => {
      streakEl.textContent = snapshot.streak;
      const itemsHtml = snapshot.items
        .map((item, index) => `
          <div class='habit-item ${item.done ? 'done' : ''}' data-index='${index}'>
            <div class='habit-checkbox'>${item.done ? '&#10003;' : ''}</div>
            <span>${item.text}</span>
          </div>`)
        .join('');

      appEl.innerHTML = `
        <section class='card'>
          <h2>Daily Progress</h2>
          <div class='progress-bar'><div class='progress-fill' style='width: ${snapshot.percent}%'></div></div>
          <p class='progress-note'>${snapshot.done_count}/${snapshot.total_count} Completed</p>
        </section>
        <section class='card'>
          <h2>Essentials Checklist</h2>
          <div id='habit-list'>${itemsHtml}</div>
        </section>
        <section class='card tip'>
          <h2>Gainer Tip</h2>
          <p class='dim'>Liquid calories are your friend. Make a shake if you're under your goal.</p>
        </section>`;

      Array.from(appEl.querySelectorAll('.habit-item')).forEach((row) => {
        row.addEventListener('click', () => {
          toggleHabit(Number(row.dataset.index)).catch(showError);
        });
      });
    };

    const renderWorkout = (snapshot) => {
      if (snapshot.session.state === 'active') {
        renderSession(snapshot.session);
        return;
      }

      const logsHtml = snapshot.recent
        .map((log) => `<div class='log-row'><span class='log-date'>${log.date}</span>: ${log.name}</div>`)
        .join('') || `<p class='dim'>No workouts logged yet.</p>`;

      appEl.innerHTML = `
        <section class='card'>
          <h2>Start Session</h2>
          <p class='dim'>Focus on Progressive Overload. Beat last week's numbers.</p>
          <button class='btn-primary' id='start-a' type='button'>Workout A: Upper / Push</button>
          <button class='btn-outline' id='start-b' type='button'>Workout B: Lower / Pull</button>
        </section>
        <section class='card'>
          <h2>Recent Logs</h2>
          ${logsHtml}
        </section>`;

      document.getElementById('start-a').addEventListener('click', () => {
        startSession('A').catch(showError);
      });
      document.getElementById('start-b').addEventListener('click', () => {
        startSession('B').catch(showError);
      });
    };

    const renderSession = (session) => {
      const cards = session.exercises
        .map((name) => `
          <div class='card exercise-card'>
            <h3>${name}</h3>
            <div class='set-row'>
              <input type='number' placeholder='kg' class='set-input'>
              <span>x</span>
              <input type='number' placeholder='reps' class='set-input'>
              <span class='dim'>Set 1</span>
            </div>
          </div>`)
        .join('');

      appEl.innerHTML = `
        <section class='card'>
          <h2>${session.title}</h2>
          <p class='dim'>${session.focus}</p>
        </section>
        ${cards}
        <button class='btn-primary' id='finish-btn' type='button'>Finish Workout</button>
        <button class='btn-ghost' id='cancel-btn' type='button'>Cancel</button>`;

      document.getElementById('finish-btn').addEventListener('click', () => {
        finishWorkout().catch(showError);
      });
      document.getElementById('cancel-btn').addEventListener('click', () => {
        cancelSession().catch(showError);
      });
    };

    const renderProfile = (snapshot) => {
      streakEl.textContent = snapshot.streak;
      appEl.innerHTML = `
        <section class='card'>
          <h2>Stats</h2>
          <p>Current Streak: <strong class='highlight'>${snapshot.streak} Days</strong></p>
          <p>Workouts Logged: <strong>${snapshot.workouts_logged}</strong></p>
        </section>
        <section class='card'>
          <h2>Settings</h2>
          <button class='btn-danger' id='reset-btn' type='button'>Reset Data</button>
        </section>`;

      document.getElementById('reset-btn').addEventListener('click', () => {
        if (window.confirm('Reset all data?')) {
          resetData().catch(showError);
        }
      });
    };

    const loadDashboard = async () => {
      renderDashboard(await getJson('/api/dashboard'));
    };

    const loadWorkout = async () => {
      renderWorkout(await getJson('/api/workout'));
    };

    const loadProfile = async () => {
      renderProfile(await getJson('/api/profile'));
    };

    const toggleHabit = async (index) => {
      renderDashboard(await postJson('/api/habits/toggle', { index }));
    };

    const startSession = async (split) => {
      renderSession(await postJson('/api/session/start', { split }));
    };

    const cancelSession = async () => {
      renderWorkout(await postJson('/api/session/cancel'));
    };

    const finishWorkout = async () => {
      const result = await postJson('/api/session/finish');
      setStatus(result.message, 'ok');
      router('dashboard');
    };

    const resetData = async () => {
      await postJson('/api/reset');
      setStatus('All data cleared', 'ok');
      router('dashboard');
    };

    // Unknown view names fall through untouched.
    const router = (viewName) => {
      if (viewName !== 'dashboard' && viewName !== 'workout' && viewName !== 'profile') {
        return;
      }

      navButtons.forEach((button) => {
        button.classList.toggle('active', button.dataset.view === viewName);
      });

      if (viewName === 'dashboard') {
        loadDashboard().catch(showError);
      } else if (viewName === 'workout') {
        loadWorkout().catch(showError);
      } else {
        loadProfile().catch(showError);
      }
    };

    navButtons.forEach((button) => {
      button.addEventListener('click', () => router(button.dataset.view));
    });

    router('dashboard');
  </script>
</body>
</html>
"#;

use crate::models::DiaryStats;

pub fn render_index(total: usize, stats: &DiaryStats) -> String {
    let ratio = stats
        .good_ratio
        .map(|value| format!("{value:.1}%"))
        .unwrap_or_else(|| "--".to_string());
    INDEX_HTML
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{GOOD}}", &stats.good_count.to_string())
        .replace("{{BAD}}", &stats.bad_count.to_string())
        .replace("{{RATIO}}", &ratio)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Diary</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f0ea;
      --bg-2: #cfe3d4;
      --ink: #26302b;
      --accent: #3e8e5a;
      --accent-2: #58423b;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(56, 74, 62, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e7efe2 60%, #f4f1e8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5d665f;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(56, 74, 62, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #86907f;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.ratio {
      color: var(--accent);
    }

    .editor {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(56, 74, 62, 0.08);
      display: grid;
      gap: 14px;
    }

    .editor h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .editor label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: #5d665f;
    }

    input[type="text"],
    textarea,
    select {
      font: inherit;
      color: var(--ink);
      border: 1px solid rgba(56, 74, 62, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      background: #fdfdfb;
    }

    textarea {
      min-height: 84px;
      resize: vertical;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-save {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(62, 142, 90, 0.3);
      justify-self: start;
    }

    .entry-list {
      display: grid;
      gap: 14px;
    }

    .entry {
      background: white;
      border-radius: 18px;
      padding: 16px 18px;
      border: 1px solid rgba(56, 74, 62, 0.08);
      display: grid;
      gap: 10px;
    }

    .entry-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
    }

    .entry-author {
      font-weight: 600;
      overflow-wrap: anywhere;
    }

    .entry-date {
      color: #86907f;
      font-size: 0.85rem;
      margin-left: auto;
    }

    .mood {
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 0.8rem;
      font-weight: 600;
      color: white;
      background: var(--danger);
    }

    .mood.good {
      background: var(--accent);
    }

    .entry-content {
      margin: 0;
      white-space: pre-wrap;
      overflow-wrap: anywhere;
    }

    .entry-actions {
      display: flex;
      gap: 10px;
    }

    .entry-actions button {
      padding: 8px 14px;
      font-size: 0.85rem;
      background: rgba(56, 74, 62, 0.08);
      color: var(--accent-2);
    }

    .entry-actions button.delete {
      background: rgba(198, 59, 43, 0.12);
      color: var(--danger);
    }

    .entry-actions button.save {
      background: var(--accent);
      color: white;
    }

    .empty {
      text-align: center;
      color: #86907f;
      padding: 24px 0;
    }

    .status {
      font-size: 0.95rem;
      color: #5d665f;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Diary</h1>
      <p class="subtitle">Write down the day, score the mood, watch the ratio.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Entries</span>
        <span id="total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Good days</span>
        <span id="good" class="value">{{GOOD}}</span>
      </div>
      <div class="stat">
        <span class="label">Bad days</span>
        <span id="bad" class="value">{{BAD}}</span>
      </div>
      <div class="stat">
        <span class="label">Good ratio</span>
        <span id="ratio" class="value ratio">{{RATIO}}</span>
      </div>
    </section>

    <section class="editor">
      <h2>Today's entry</h2>
      <form id="entry-form">
        <label>Author
          <input type="text" id="author" name="author" autocomplete="off" required />
        </label>
        <label>What happened
          <textarea id="content" name="content" required></textarea>
        </label>
        <label>Mood score
          <select id="emotion" name="emotion">
            <option value="1">1 - rough</option>
            <option value="2">2 - meh</option>
            <option value="3" selected>3 - fine</option>
            <option value="4">4 - good</option>
            <option value="5">5 - great</option>
          </select>
        </label>
        <button class="btn-save" type="submit">Save entry</button>
      </form>
    </section>

    <section>
      <div id="entries" class="entry-list"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Entries live in memory only and reset when the server restarts. The diary seeds itself from a sample feed on startup when it can reach it.</p>
  </main>

  <script>
    const totalEl = document.getElementById('total');
    const goodEl = document.getElementById('good');
    const badEl = document.getElementById('bad');
    const ratioEl = document.getElementById('ratio');
    const entriesEl = document.getElementById('entries');
    const statusEl = document.getElementById('status');
    const form = document.getElementById('entry-form');
    const authorEl = document.getElementById('author');
    const contentEl = document.getElementById('content');
    const emotionEl = document.getElementById('emotion');

    let editingId = null;
    let entriesCache = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatRatio = (value) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      return `${(Math.round(value * 10) / 10).toFixed(1)}%`;
    };

    const renderStats = (stats) => {
      goodEl.textContent = stats.good_count;
      badEl.textContent = stats.bad_count;
      ratioEl.textContent = formatRatio(stats.good_ratio);
    };

    const entryCard = (entry) => {
      const card = document.createElement('article');
      card.className = 'entry';

      const head = document.createElement('div');
      head.className = 'entry-head';

      const author = document.createElement('span');
      author.className = 'entry-author';
      author.textContent = entry.author;

      const mood = document.createElement('span');
      mood.className = entry.emotion >= 3 ? 'mood good' : 'mood';
      mood.textContent = `mood ${entry.emotion}/5`;

      const date = document.createElement('span');
      date.className = 'entry-date';
      date.textContent = new Date(entry.create_date).toLocaleString();

      head.append(author, mood, date);
      card.append(head);

      const actions = document.createElement('div');
      actions.className = 'entry-actions';

      if (editingId === entry.id) {
        const editor = document.createElement('textarea');
        editor.value = entry.content;
        card.append(editor);

        const save = document.createElement('button');
        save.type = 'button';
        save.className = 'save';
        save.textContent = 'Save';
        save.addEventListener('click', () => {
          saveEdit(entry.id, editor.value).catch((err) => setStatus(err.message, 'error'));
        });

        const cancel = document.createElement('button');
        cancel.type = 'button';
        cancel.textContent = 'Cancel';
        cancel.addEventListener('click', () => {
          editingId = null;
          renderEntries(entriesCache);
        });

        actions.append(save, cancel);
      } else {
        const content = document.createElement('p');
        content.className = 'entry-content';
        content.textContent = entry.content;
        card.append(content);

        const edit = document.createElement('button');
        edit.type = 'button';
        edit.textContent = 'Edit';
        edit.addEventListener('click', () => {
          editingId = entry.id;
          renderEntries(entriesCache);
        });

        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'delete';
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => {
          removeEntry(entry.id).catch((err) => setStatus(err.message, 'error'));
        });

        actions.append(edit, remove);
      }

      card.append(actions);
      return card;
    };

    const renderEntries = (entries) => {
      entriesCache = entries;
      entriesEl.replaceChildren();
      if (!entries.length) {
        const empty = document.createElement('div');
        empty.className = 'empty';
        empty.textContent = 'No entries yet. Write the first one above.';
        entriesEl.append(empty);
        return;
      }
      entries.forEach((entry) => entriesEl.append(entryCard(entry)));
    };

    const applyEntries = (payload) => {
      totalEl.textContent = payload.total;
      renderEntries(payload.entries);
    };

    const loadEntries = async () => {
      const res = await fetch('/api/entries');
      if (!res.ok) {
        throw new Error('Unable to load entries');
      }
      applyEntries(await res.json());
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      renderStats(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadEntries(), loadStats()]);
    };

    const mutate = async (url, options) => {
      setStatus('Saving...', 'info');
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      applyEntries(await res.json());
      loadStats().catch((err) => setStatus(err.message, 'error'));
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const saveEdit = async (id, content) => {
      editingId = null;
      await mutate(`/api/entries/${id}`, {
        method: 'PATCH',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ content })
      });
    };

    const removeEntry = async (id) => {
      await mutate(`/api/entries/${id}`, { method: 'DELETE' });
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      mutate('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          author: authorEl.value,
          content: contentEl.value,
          emotion: Number(emotionEl.value)
        })
      })
        .then(() => {
          contentEl.value = '';
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

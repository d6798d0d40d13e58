//! The web UI, embedded directly in the binary for easy deployment.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>staffq</title>
<style>
:root {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f1f5f9;
    --text-secondary: #94a3b8;
    --accent: #3b82f6;
    --accent-hover: #2563eb;
    --border: #475569;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
    line-height: 1.6;
}

.container {
    max-width: 720px;
    margin: 0 auto;
    padding: 40px 20px;
}

h1 {
    color: var(--accent);
    margin-bottom: 8px;
}

.hint {
    color: var(--text-secondary);
    margin-bottom: 24px;
}

form {
    display: flex;
    gap: 10px;
    margin-bottom: 24px;
}

input {
    flex: 1;
    padding: 12px;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--bg-secondary);
    color: var(--text-primary);
    font-size: 1rem;
}

button {
    padding: 12px 24px;
    border: none;
    border-radius: 6px;
    background: var(--accent);
    color: var(--text-primary);
    font-size: 1rem;
    cursor: pointer;
}

button:hover {
    background: var(--accent-hover);
}

#answer {
    background: var(--bg-secondary);
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 16px;
    min-height: 56px;
    white-space: pre-wrap;
}

#answer ul {
    margin-left: 20px;
}
</style>
</head>
<body>
<div class="container">
    <h1>staffq</h1>
    <p class="hint">Ask about employees, managers, hire dates, or salary expense.
    For example: &quot;Which employees work in Sales?&quot;</p>
    <form id="query-form">
        <input id="query" autocomplete="off" placeholder="Type a question...">
        <button type="submit">Ask</button>
    </form>
    <div id="answer"></div>
</div>
<script>
const form = document.getElementById('query-form');
const input = document.getElementById('query');
const answer = document.getElementById('answer');

form.addEventListener('submit', async (event) => {
    event.preventDefault();
    const query = input.value.trim();
    if (!query) {
        return;
    }
    answer.textContent = '...';
    try {
        const res = await fetch('/query', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ query }),
        });
        const data = await res.json();
        render(data.response);
    } catch (err) {
        answer.textContent = 'Request failed: ' + err;
    }
});

function render(response) {
    answer.textContent = '';
    if (Array.isArray(response)) {
        const list = document.createElement('ul');
        for (const name of response) {
            const item = document.createElement('li');
            item.textContent = name;
            list.appendChild(item);
        }
        answer.appendChild(list);
    } else {
        answer.textContent = response;
    }
}
</script>
</body>
</html>
"#;

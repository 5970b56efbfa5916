//! Status page served at `/`.
//!
//! Polls `/state` once a second and mirrors the shell's root attributes onto
//! its own `<html>` element, so the page follows the terminal's palette.

pub const STATUS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="midnight" data-mode="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CampusConnect</title>
    <style>
        :root { --accent: #6366f1; --bg: #0f172a; --fg: #e2e8f0; --muted: #64748b; }
        [data-theme="emerald"] { --accent: #10b981; }
        [data-theme="rose"] { --accent: #f43f5e; }
        [data-theme="amber"] { --accent: #f59e0b; }
        [data-mode="light"] { --bg: #f8fafc; --fg: #0f172a; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: var(--bg);
            color: var(--fg);
            margin: 0;
            padding: 3rem;
        }
        h1 span { color: var(--accent); }
        dt { color: var(--muted); font-size: 0.75rem; text-transform: uppercase; margin-top: 1rem; }
        dd { margin: 0; font-size: 1.25rem; }
        footer { margin-top: 4rem; color: var(--muted); font-size: 0.75rem; }
    </style>
</head>
<body>
    <h1><span>Campus</span>Connect</h1>
    <dl>
        <dt>View</dt><dd id="view">-</dd>
        <dt>Theme</dt><dd id="theme">-</dd>
        <dt>Mode</dt><dd id="mode">-</dd>
        <dt>Prefetched questions</dt><dd id="prefetched">-</dd>
        <dt>Updated</dt><dd id="captured_at">-</dd>
    </dl>
    <footer>Master your placement journey with AI-driven insights.<br>(c) 2025 Campus Connect Suite</footer>
    <script>
        async function refresh() {
            try {
                const res = await fetch('/state');
                const state = await res.json();
                for (const key of ['view', 'theme', 'mode', 'prefetched', 'captured_at']) {
                    document.getElementById(key).textContent = state[key];
                }
                for (const [name, value] of Object.entries(state.attributes)) {
                    document.documentElement.setAttribute(name, value);
                }
            } catch (e) {
                console.warn('state poll failed', e);
            }
        }
        refresh();
        setInterval(refresh, 1000);
    </script>
</body>
</html>
"#;

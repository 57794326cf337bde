//! Dashboard page.
//!
//! The page is rendered once at startup: target count and interval never
//! change during a run. Live data comes from `/api/status`, polled every two
//! seconds by the embedded script, which writes cells as text only.

use std::time::Duration;

/// How often the page re-fetches `/api/status`.
pub const REFRESH_MS: u64 = 2000;

pub fn render_page(target_count: usize, interval: Duration) -> String {
    let interval_secs = interval.as_millis() as f64 / 1000.0;

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Status Monitor</title>
    <style>
      body {{ font-family: sans-serif; margin: 2rem; }}
      table {{ border-collapse: collapse; width: 100%; }}
      th, td {{ border: 1px solid #ddd; padding: 0.5rem; }}
      tr:nth-child(even) {{ background: #f8f8f8; }}
      .up {{ color: green; font-weight: bold; }}
      .down {{ color: red; font-weight: bold; }}
    </style>
  </head>
  <body>
    <h1>Status Monitor</h1>
    <p>Monitoring {target_count} URL(s) every {interval_secs}s.</p>
    <table>
      <thead>
        <tr>
          <th>URL</th>
          <th>Status</th>
          <th>HTTP</th>
          <th>Response Time (ms)</th>
          <th>Last Checked</th>
        </tr>
      </thead>
      <tbody id="tbody"></tbody>
    </table>
    <script>
      function cell(tr, text, cls) {{
        const td = document.createElement('td');
        td.textContent = text;
        if (cls) td.className = cls;
        tr.appendChild(td);
      }}
      async function load() {{
        try {{
          const res = await fetch('/api/status');
          const data = await res.json();
          const tbody = document.getElementById('tbody');
          tbody.replaceChildren();
          for (const s of data) {{
            const tr = document.createElement('tr');
            cell(tr, s.url);
            cell(tr, s.up ? 'UP' : 'DOWN', s.up ? 'up' : 'down');
            cell(tr, s.status ?? '-');
            cell(tr, s.responseTime ?? '-');
            cell(tr, new Date(s.lastChecked).toLocaleTimeString());
            tbody.appendChild(tr);
          }}
        }} catch (e) {{
          console.error('status refresh failed', e);
        }}
      }}
      setInterval(load, {REFRESH_MS});
      load();
    </script>
  </body>
</html>"#
    )
}

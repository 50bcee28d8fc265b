use axum::response::Html;

// ---------------------------------------------------------------------------
// Embedded UI — one static page, no build step.
// ---------------------------------------------------------------------------

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>failprobe</title>
<style>
  body{font-family:sans-serif;margin:24px;background:#1e1e2e;color:#f8f8f2}
  h1{font-size:18px}
  #actions button{display:block;margin:6px 0;padding:8px 14px;background:#6366f1;
    color:#fff;border:none;border-radius:8px;cursor:pointer;font-size:14px}
  #actions button:hover{background:#4f46e5}
  #clear{background:#44475a !important}
  #log{margin-top:16px;background:#282a36;border:1px solid #44475a;border-radius:8px;
    padding:12px;height:420px;overflow-y:auto;font-family:monospace;font-size:13px;
    white-space:pre}
  .ts{color:#6272a4}
</style>
</head>
<body>
<h1>failprobe — HTTP failure scenarios</h1>
<div id="actions"></div>
<button id="clear">Clear log</button>
<div id="log"></div>
<script>
(function () {
  var logEl = document.getElementById('log');

  function refresh() {
    fetch('/api/log')
      .then(function (r) { return r.json(); })
      .then(function (data) {
        logEl.innerHTML = data.lines
          .map(function (l) {
            var ts = l.timestamp
              ? '<span class="ts">[' + l.timestamp.substring(11, 23) + ']</span> '
              : '';
            return ts + l.text
              .replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;');
          })
          .join('\n');
        logEl.scrollTop = logEl.scrollHeight;
      });
  }

  fetch('/api/actions')
    .then(function (r) { return r.json(); })
    .then(function (actions) {
      var holder = document.getElementById('actions');
      actions.forEach(function (a) {
        var btn = document.createElement('button');
        btn.textContent = a.label;
        btn.addEventListener('click', function () {
          fetch('/api/actions/' + encodeURIComponent(a.label) + '/run', { method: 'POST' });
        });
        holder.appendChild(btn);
      });
    });

  document.getElementById('clear').addEventListener('click', function () {
    fetch('/api/log/clear', { method: 'POST' });
  });

  new EventSource('/api/events').addEventListener('update', refresh);
  refresh();
})();
</script>
</body>
</html>
"#;

/// Fallback handler: every non-API path gets the demo page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

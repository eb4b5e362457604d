// Application CSS. Colors come from the tokens below; `data-theme` on the
// root element picks the palette.
pub const APP_STYLES: &str = r#"
:root,
:root[data-theme="light"] {
    --bg: #ffffff;
    --bg-muted: #f4f4f5;
    --card: #ffffff;
    --text: #09090b;
    --text-muted: #71717a;
    --border: #e4e4e7;
    --primary: #18181b;
    --primary-text: #fafafa;
    --secondary: #f4f4f5;
    --ring: #a1a1aa;
    --success: #16a34a;
    --danger: #dc2626;
    --shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

:root[data-theme="dark"] {
    --bg: #09090b;
    --bg-muted: #18181b;
    --card: #111113;
    --text: #fafafa;
    --text-muted: #a1a1aa;
    --border: #27272a;
    --primary: #fafafa;
    --primary-text: #18181b;
    --secondary: #27272a;
    --ring: #52525b;
    --success: #22c55e;
    --danger: #ef4444;
    --shadow: 0 1px 3px rgba(0, 0, 0, 0.5);
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
}

.app { min-height: 100vh; }
.muted { color: var(--text-muted); }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.4rem;
    padding: 0.5rem 0.9rem;
    border-radius: 0.5rem;
    border: 1px solid transparent;
    font-size: 0.9rem;
    font-weight: 500;
    cursor: pointer;
    text-decoration: none;
    color: var(--text);
    background: transparent;
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--primary); color: var(--primary-text); }
.btn-secondary { background: var(--secondary); }
.btn-ghost:hover { background: var(--bg-muted); }
.btn-outline { border-color: var(--border); }
.btn-outline:hover { background: var(--bg-muted); }
.btn-block { width: 100%; }

/* Headers */
.site-header,
.playground-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem;
    box-shadow: var(--shadow);
}
.header-left,
.header-actions,
.mode-toggle { display: flex; align-items: center; gap: 0.5rem; }
.header-left { gap: 1rem; }
.brand { display: flex; align-items: center; gap: 0.5rem; }
.brand-mark { font-size: 1.5rem; }
.brand-name { margin: 0; font-size: 1.25rem; font-weight: 700; }
.brand-link { color: inherit; text-decoration: none; }

/* Hero */
.hero {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 80vh;
    padding: 1rem;
}
.hero-title { margin: 0; font-size: 3.5rem; font-weight: 700; text-align: center; }
.hero-subtitle { margin-top: 0.5rem; font-size: 1.25rem; color: var(--text-muted); }
.hero-input {
    width: 100%;
    max-width: 42rem;
    margin-top: 1.25rem;
    padding: 1.25rem;
    border: 1px solid var(--border);
    border-radius: 1rem;
}
.hero-textarea {
    width: 100%;
    height: 6rem;
    border: none;
    outline: none;
    resize: none;
    background: transparent;
    color: var(--text);
    font: inherit;
}
.hero-input-actions { display: flex; justify-content: flex-end; }
.suggestions { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1rem; }
.suggestion-icon { font-size: 1rem; }

/* Workspace */
.workspace { display: flex; min-height: 100vh; }
.workspace-main { flex: 1; display: flex; flex-direction: column; }
.workspace-toolbar { display: flex; justify-content: flex-end; padding: 0.75rem; }
.sidebar {
    width: 16rem;
    padding: 1rem;
    border-right: 1px solid var(--border);
    background: var(--bg-muted);
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}
.sidebar-header { display: flex; flex-direction: column; gap: 1.25rem; }
.sidebar-label { margin: 0 0 0.5rem; font-size: 0.75rem; color: var(--text-muted); text-transform: uppercase; }
.project-link {
    display: block;
    margin: 0.25rem 0;
    padding: 0.5rem;
    border-radius: 0.5rem;
    color: inherit;
    text-decoration: none;
}
.project-link:hover { background: var(--secondary); }
.line-clamp { display: block; overflow: hidden; white-space: nowrap; text-overflow: ellipsis; }
.skeleton {
    height: 2.5rem;
    margin-top: 0.5rem;
    border-radius: 0.5rem;
    background: var(--secondary);
    animation: pulse 1.5s ease-in-out infinite;
}

/* Playground */
.playground { display: flex; flex-direction: column; min-height: 100vh; }
.playground-body { display: flex; gap: 0.5rem; padding: 0.5rem; }
.playground-missing,
.not-found {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    min-height: 60vh;
}

/* Chat */
.chat-section {
    width: 24rem;
    height: 90vh;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--card);
    box-shadow: var(--shadow);
}
.chat-messages { flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; }
.chat-empty { text-align: center; }
.chat-row { display: flex; justify-content: flex-start; }
.chat-row-user { justify-content: flex-end; }
.chat-bubble {
    max-width: 80%;
    padding: 0.5rem;
    border-radius: 0.5rem;
    white-space: pre-wrap;
    background: var(--card);
}
.chat-bubble-user { background: var(--bg-muted); color: var(--text-muted); box-shadow: var(--shadow); }
.chat-thinking { display: flex; align-items: center; justify-content: center; gap: 0.5rem; padding: 1rem; }
.chat-input { display: flex; align-items: center; gap: 0.5rem; padding: 0.75rem; border-top: 1px solid var(--border); }
.chat-textarea {
    flex: 1;
    resize: none;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    font: inherit;
}
.chat-textarea:focus { outline: 2px solid var(--ring); }

/* Design */
.design-section { display: flex; gap: 0.5rem; flex: 1; }
.preview-column { flex: 1; display: flex; flex-direction: column; align-items: center; padding: 1.25rem; }
.preview-frame {
    width: 100%;
    height: 35.5rem;
    border: 2px solid var(--border);
    border-radius: 0.75rem;
    background: #ffffff;
}
.preview-frame-mobile { width: 40%; }
.page-tools { display: flex; justify-content: space-between; align-items: center; width: 100%; margin-top: 0.75rem; }
.segmented { display: flex; gap: 0.25rem; }

/* Settings */
.settings-column:empty { display: none; }
.settings-panel {
    width: 18rem;
    margin-top: 1.25rem;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.9rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--card);
    box-shadow: var(--shadow);
}
.settings-title { display: flex; align-items: center; justify-content: space-between; }
.settings-title h3 { margin: 0; font-size: 1rem; }
.tag-badge { font-family: ui-monospace, monospace; font-size: 0.75rem; color: var(--text-muted); }
.field { display: flex; flex-direction: column; gap: 0.35rem; font-size: 0.85rem; }
.field-row { display: flex; gap: 0.75rem; }
.field-row .field { flex: 1; }
.field input,
.field select {
    padding: 0.4rem 0.5rem;
    border-radius: 0.4rem;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    font: inherit;
}
.field input[type="color"] { padding: 0; height: 2.25rem; width: 100%; }
.image-preview { width: 100%; max-height: 8rem; object-fit: cover; border-radius: 0.5rem; }

/* Code dialog */
.modal-backdrop {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.5);
    z-index: 40;
}
.modal {
    width: min(56rem, 92vw);
    max-height: 85vh;
    display: flex;
    flex-direction: column;
    border-radius: 0.75rem;
    background: var(--card);
    box-shadow: var(--shadow);
}
.modal-header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1rem; border-bottom: 1px solid var(--border); }
.modal-header h3 { margin: 0; }
.modal-actions { display: flex; gap: 0.5rem; }
.code-view {
    margin: 0;
    padding: 1rem;
    overflow: auto;
    font-size: 0.8rem;
    font-family: ui-monospace, monospace;
    white-space: pre-wrap;
}

/* Toasts */
.toast-host {
    position: fixed;
    right: 1rem;
    bottom: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    z-index: 50;
}
.toast {
    min-width: 16rem;
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid var(--border);
    background: var(--card);
    box-shadow: var(--shadow);
}
.toast-success { border-left: 4px solid var(--success); }
.toast-error { border-left: 4px solid var(--danger); }

/* Animations */
.spinner {
    display: inline-block;
    width: 1rem;
    height: 1rem;
    border: 2px solid var(--ring);
    border-top-color: transparent;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }
@keyframes pulse { 50% { opacity: 0.5; } }
"#;

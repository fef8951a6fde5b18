//! The `controller` channel between JavaScript and Rust.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the UI calls `window.controller.postMessage(body)`. The
//!   shim wraps `body` in an `{id, body}` envelope and sends it through
//!   `window.ipc.postMessage`, which triggers the web view's IPC handler.
//! - **Rust -> JS**: replies and pushes are rendered into scripts and run
//!   with `evaluate_script`. A reply settles the promise for its `id`.

use serde_json::Value;
use userscripts_bridge::{Outbound, PushMessage, Reply};

/// Injected into every page before any UI script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.controller) {
        return;
    }
    var pending = {};
    var nextId = 1;
    window.controller = {
        postMessage: function(body) {
            var id = nextId++;
            return new Promise(function(resolve, reject) {
                pending[id] = { resolve: resolve, reject: reject };
                window.ipc.postMessage(JSON.stringify({ id: id, body: body }));
            });
        },
        _resolve: function(id, result, error) {
            var entry = pending[id];
            if (!entry) {
                return;
            }
            delete pending[id];
            if (error !== null && error !== undefined) {
                entry.reject(new Error(error));
            } else {
                entry.resolve(result);
            }
        }
    };
})();
"#;

/// Render any outbound message as a script.
pub fn js_outbound(message: &Outbound) -> String {
    match message {
        Outbound::Reply { id, reply } => js_reply(*id, reply),
        Outbound::Push(push) => js_push(push),
    }
}

/// Settle the pending `controller.postMessage` promise for `id`.
pub fn js_reply(id: u64, reply: &Reply) -> String {
    let result = reply
        .result
        .as_ref()
        .map(json_literal)
        .unwrap_or_else(|| "null".to_string());
    let error = reply
        .error
        .as_deref()
        .map(string_literal)
        .unwrap_or_else(|| "null".to_string());
    format!("window.controller._resolve({id}, {result}, {error});")
}

/// Invoke the UI's push entry point. A page without `webapp` ignores it.
pub fn js_push(push: &PushMessage) -> String {
    match push {
        PushMessage::DirectoryChanged(description) => format!(
            "if (typeof webapp !== \"undefined\" && webapp.updateDirectory) {{ webapp.updateDirectory({}); }}",
            string_literal(description)
        ),
    }
}

fn json_literal(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// A JSON string literal is also a valid JS string literal.
fn string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

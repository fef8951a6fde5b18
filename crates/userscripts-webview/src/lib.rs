//! WebView hosting for the userscripts UI.
//!
//! Wraps the `wry` crate to provide:
//! - The `userscripts://` custom protocol serving the bundled UI
//! - The `window.controller` request/reply shim over wry's one-way IPC
//! - Navigation policy: in-app links stay, outside links open externally
//! - Event collection for the main event loop

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use manager::{start_url, WebViewConfig, WebViewHandle, WebViewManager, SCHEME};
pub use navigation::NavigationDecision;

//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the web view, the tokio runtime and the
//! message bridge, and shuttles messages between them.

mod core;
mod event_handler;
mod init;
mod ipc_dispatch;
mod polling;
mod services;
mod shutdown;

pub use core::ShellApp;

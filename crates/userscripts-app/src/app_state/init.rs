//! Window creation and web view setup.

use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use userscripts_common::AppError;
use userscripts_config::Rgba;
use userscripts_webview::{start_url, WebViewConfig};

use super::core::ShellApp;

/// Smallest window the UI lays out in.
const MIN_WINDOW_SIZE: LogicalSize<f64> = LogicalSize::new(320.0, 240.0);

impl ShellApp {
    /// Create the window and its web view.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let cfg = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(cfg.title.clone())
            .with_transparent(cfg.transparent)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_inner_size(LogicalSize::new(cfg.width as f64, cfg.height as f64));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if let Err(e) = self.initialize_webview(&window) {
            tracing::error!("{e}");
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created and web view attached");
        true
    }

    fn initialize_webview(&mut self, window: &Window) -> Result<(), AppError> {
        if !self.assets_dir.is_dir() {
            tracing::warn!(
                path = %self.assets_dir.display(),
                "Assets directory not found; the web view will have no content"
            );
        }

        let background = Rgba::from_hex(&self.config.window.background).map(Rgba::to_tuple);
        let config = WebViewConfig {
            url: start_url(),
            transparent: self.config.window.transparent,
            devtools: self.config.webview.devtools,
            user_agent: self.config.webview.user_agent().map(String::from),
            background,
        };

        let handle = self
            .webviews
            .create(window, full_bounds(window.inner_size()), config)
            .map_err(|e| AppError::WebView(format!("failed to create web view: {e}")))?;
        tracing::info!(
            url = %handle.current_url(),
            assets = %self.assets_dir.display(),
            "Web view created"
        );
        self.webview = Some(handle);
        Ok(())
    }

    /// Keep the web view covering the whole window.
    pub(super) fn sync_webview_bounds(&self, size: PhysicalSize<u32>) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.set_bounds(full_bounds(size)) {
                tracing::warn!(error = %e, "Failed to resize web view");
            }
        }
    }
}

/// A wry rect covering a window of `size`.
pub(super) fn full_bounds(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}

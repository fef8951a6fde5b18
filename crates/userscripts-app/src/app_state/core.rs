//! ShellApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Runtime;
use winit::window::Window;

use userscripts_config::ShellConfig;
use userscripts_webview::{ContentProvider, WebViewHandle, WebViewManager};

use crate::cli::Args;

use super::services::Services;

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,
    /// Root of the bundled UI served under `userscripts://`.
    pub(super) assets_dir: PathBuf,

    // Async work: bridge commands, picker, external opening
    pub(super) runtime: Option<Runtime>,
    pub(super) services: Services,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: WebViewManager,
    pub(super) webview: Option<WebViewHandle>,

    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(config: ShellConfig, args: &Args, runtime: Runtime) -> Self {
        let assets_dir = args.assets.clone().unwrap_or_else(|| {
            config
                .assets
                .resolve_dir(&std::env::current_dir().unwrap_or_default())
        });
        let services = Services::build(&config, &assets_dir, args.ephemeral);

        let mut webviews = WebViewManager::new();
        webviews.set_content_provider(ContentProvider::new(&assets_dir));

        Self {
            config,
            assets_dir,
            runtime: Some(runtime),
            services,
            window: None,
            webviews,
            webview: None,
            last_poll: Instant::now(),
        }
    }
}

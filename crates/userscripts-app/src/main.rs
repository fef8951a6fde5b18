mod app_state;
mod cli;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use userscripts_common::AppError;
use userscripts_config::ShellConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "userscripts=info";

fn main() {
    let args = cli::parse();

    // Config is read before logging so its level can apply; failures are
    // reported once the subscriber is up.
    let loaded = match &args.config {
        Some(path) => userscripts_config::load_config_from(path),
        None => userscripts_config::load_config(),
    };

    let log_directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.directive()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_logging(&log_directive);

    tracing::info!("Userscripts v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ShellConfig::default()
    });
    tracing::debug!(config = %userscripts_config::config_to_json(&config), "effective config");

    if let Err(e) = userscripts_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    if let Err(e) = run(config, &args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

/// Start the runtime and the event loop, and block until the window closes.
fn run(config: ShellConfig, args: &cli::Args) -> userscripts_common::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("userscripts-worker")
        .build()?;

    let event_loop = EventLoop::new()
        .map_err(|e| AppError::Other(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::ShellApp::new(config, args, runtime);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| AppError::Other(format!("event loop error: {e}")))
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

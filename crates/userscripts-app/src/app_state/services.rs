//! Wiring of the message bridge to its platform collaborators.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use userscripts_bridge::{
    outbound_channel, BridgeDeps, DescriptorFile, ExternalOpener, IdentitySource, LocationStore,
    MemoryStore, MessageBridge, OutboundReceiver, PreferencesFile, StaticIdentity,
};
use userscripts_config::ShellConfig;
use userscripts_platform::{FolderDialog, SystemOpener};

/// Everything the event loop needs to talk to the bridge.
pub(in crate::app_state) struct Services {
    pub bridge: Arc<MessageBridge>,
    /// Also used for links the navigation policy sends out of the app.
    pub opener: Arc<dyn ExternalOpener>,
    /// Replies and pushes waiting for the web view.
    pub outbound: OutboundReceiver,
}

impl Services {
    pub fn build(config: &ShellConfig, assets_dir: &Path, ephemeral: bool) -> Self {
        let (sink, outbound) = outbound_channel();
        let opener: Arc<dyn ExternalOpener> = Arc::new(SystemOpener);
        let deps = BridgeDeps {
            store: location_store(config, ephemeral),
            picker: Arc::new(FolderDialog::new(config.storage.picker_title.clone())),
            opener: Arc::clone(&opener),
            identity: identity_source(config, assets_dir),
            sink: Arc::new(sink),
        };
        let bridge = MessageBridge::new(deps, picker_dir(config))
            .with_home(userscripts_platform::home_dir());
        info!(picker_dir = %bridge.picker_dir().display(), "message bridge ready");

        Self {
            bridge: Arc::new(bridge),
            opener,
            outbound,
        }
    }
}

fn location_store(config: &ShellConfig, ephemeral: bool) -> Arc<dyn LocationStore> {
    if ephemeral {
        info!("ephemeral session, scripts directory will not be saved");
        return Arc::new(MemoryStore::new());
    }

    let path = match config.storage.preferences_file() {
        Some(path) => Ok(path),
        None => userscripts_platform::preferences_file(),
    };
    match path {
        Ok(path) => {
            info!(path = %path.display(), "using preferences file");
            Arc::new(PreferencesFile::new(path))
        }
        Err(e) => {
            warn!(error = %e, "no preferences location, scripts directory will not be saved");
            Arc::new(MemoryStore::new())
        }
    }
}

/// The packaged descriptor when it exists, else compile-time values.
fn identity_source(config: &ShellConfig, assets_dir: &Path) -> Arc<dyn IdentitySource> {
    let descriptor = assets_dir.join(&config.assets.descriptor);
    if descriptor.is_file() {
        info!(path = %descriptor.display(), "reading app identity from descriptor");
        return Arc::new(DescriptorFile::new(descriptor));
    }
    Arc::new(StaticIdentity::new(
        Some(env!("CARGO_PKG_VERSION")),
        option_env!("USERSCRIPTS_BUILD_NUMBER"),
    ))
}

/// Where the folder picker opens.
fn picker_dir(config: &ShellConfig) -> PathBuf {
    let preferred = config
        .storage
        .default_directory()
        .or_else(|| userscripts_platform::default_scripts_dir().ok())
        .or_else(userscripts_platform::home_dir)
        .unwrap_or_default();
    nearest_existing(&preferred)
}

/// The dialog cannot start in a folder that does not exist yet.
fn nearest_existing(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|p| p.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use userscripts_bridge::StorageLocation;

    fn config_in(dir: &Path) -> ShellConfig {
        let mut config = ShellConfig::default();
        config.storage.preferences_file = dir.join("prefs.json").display().to_string();
        config.storage.default_directory = dir.display().to_string();
        config
    }

    #[test]
    fn ephemeral_store_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let store = location_store(&config, true);

        let loc = StorageLocation::from_directory(tmp.path()).unwrap();
        store.set(loc.clone()).unwrap();
        assert_eq!(store.get(), Some(loc));
        assert!(!tmp.path().join("prefs.json").exists());
    }

    #[test]
    fn configured_preferences_file_is_used() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let store = location_store(&config, false);

        store
            .set(StorageLocation::from_directory(tmp.path()).unwrap())
            .unwrap();
        assert!(tmp.path().join("prefs.json").is_file());
    }

    #[test]
    fn descriptor_file_wins_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ShellConfig::default();
        fs::write(
            tmp.path().join("app.json"),
            r#"{"version": "4.5.0", "build": "71"}"#,
        )
        .unwrap();

        let identity = identity_source(&config, tmp.path()).identity();
        assert_eq!(identity.version, "4.5.0");
        assert_eq!(identity.build, "71");
    }

    #[test]
    fn compile_time_identity_without_descriptor() {
        let tmp = tempfile::tempdir().unwrap();
        let identity = identity_source(&ShellConfig::default(), tmp.path()).identity();
        assert_eq!(identity.version, env!("CARGO_PKG_VERSION"));
        assert!(!identity.build.is_empty());
    }

    #[test]
    fn picker_starts_in_configured_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(picker_dir(&config_in(tmp.path())), tmp.path());
    }

    #[test]
    fn missing_picker_directory_falls_back_to_ancestor() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("not").join("yet");
        assert_eq!(nearest_existing(&missing), tmp.path());
    }
}

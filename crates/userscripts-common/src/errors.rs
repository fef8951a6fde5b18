use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("open error: {0}")]
    OpenError(String),
}

/// Failures of the persisted preferences backing the storage location.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preferences io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preferences file {0} is not a JSON object")]
    Corrupt(PathBuf),

    #[error("preferences encode error: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 10 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: window.width = 10 is out of range"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::PathError("could not determine config directory".into());
        assert_eq!(
            err.to_string(),
            "path error: could not determine config directory"
        );

        let err = PlatformError::OpenError("no handler for file://".into());
        assert_eq!(err.to_string(), "open error: no handler for file://");
    }

    #[test]
    fn store_error_display_names_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/preferences.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/preferences.json"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn app_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(_)));
        assert!(app_err.to_string().contains("bad toml"));
    }

    #[test]
    fn store_error_corrupt_names_path() {
        let err = StoreError::Corrupt(PathBuf::from("/tmp/preferences.json"));
        assert_eq!(
            err.to_string(),
            "preferences file /tmp/preferences.json is not a JSON object"
        );
    }

    #[test]
    fn app_error_from_store() {
        let store_err = StoreError::Encode("key must be a string".into());
        let app_err: AppError = store_err.into();
        assert!(matches!(app_err, AppError::Store(_)));
        assert_eq!(
            app_err.to_string(),
            "preferences encode error: key must be a string"
        );
    }

    #[test]
    fn app_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file missing"));
    }

    #[test]
    fn app_error_other_variants() {
        let err = AppError::WebView("custom protocol already registered".into());
        assert_eq!(
            err.to_string(),
            "webview error: custom protocol already registered"
        );

        let err = AppError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}

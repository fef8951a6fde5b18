pub mod errors;

pub use errors::{AppError, ConfigError, PlatformError, StoreError};

pub type Result<T> = std::result::Result<T, AppError>;

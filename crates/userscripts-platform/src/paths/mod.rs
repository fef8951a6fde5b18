mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, data_dir, default_scripts_dir, home_dir, preferences_file};

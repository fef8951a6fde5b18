pub mod dialog;
pub mod open;
pub mod paths;

pub use dialog::FolderDialog;
pub use open::SystemOpener;
pub use paths::{
    config_dir, data_dir, default_scripts_dir, ensure_dirs, home_dir, preferences_file,
};

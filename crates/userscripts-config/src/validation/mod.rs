//! Configuration validation.
//!
//! Every check pushes onto a shared error list; the result is a single
//! `ConfigError` naming all problems at once.

mod helpers;

#[cfg(test)]
mod tests;

use crate::colors;
use crate::schema::ShellConfig;
use userscripts_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_assets(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);

    if !colors::is_valid_hex(&config.window.background) {
        errors.push(format!(
            "window.background = {:?} is not a hex color",
            config.window.background
        ));
    }
}

fn validate_assets(errors: &mut Vec<String>, config: &ShellConfig) {
    let descriptor = std::path::Path::new(&config.assets.descriptor);
    if descriptor.is_absolute() {
        errors.push(format!(
            "assets.descriptor = {:?} must be relative to assets.dir",
            config.assets.descriptor
        ));
    }
}

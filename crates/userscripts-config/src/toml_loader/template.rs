//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Userscripts Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Userscripts"
# width = 1024            # 320-7680
# height = 768            # 240-4320
# background = "#2f3337"
# transparent = false

[webview]
# devtools = false        # always on in debug builds
# user_agent = ""

[assets]
# dir = ""                # empty = ./assets
# descriptor = "app.json" # version/build metadata, relative to dir

[storage]
# preferences_file = ""   # empty = platform config dir
# default_directory = ""  # empty = Documents/Userscripts
# picker_title = "Select Userscripts Directory"

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}

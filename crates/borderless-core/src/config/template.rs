/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `borderless init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Borderless configuration
# Location: ~/.config/borderless/config.toml

[resize]
# Width in pixels of the invisible resize margin on each window edge.
width = 6
# Widen the margins by the shadow blur radius.
include_shadow = false

[shadow]
# Blur radius in pixels. Also used as the transparent border around the
# window on hosts that draw the shadow themselves. The Windows host uses
# the system shadow, which sits outside the window and ignores this.
blur_radius = 10

[drag]
# Fade the window while dragging it (needs a layered window).
transparency = true
# Opacity multiplier while dragging (0.1 to 1.0).
opacity_factor = 0.5

[window]
# Smallest size the window can be resized to.
min_width = 200
min_height = 100

[logging]
# Enable file logging to ~/.config/borderless/logs/borderless.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

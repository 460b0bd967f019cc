//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Casement Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[canvas]
# viewport_width = 1280     # 320-7680, used until the host reports a size
# viewport_height = 800     # 240-4320
# sidebar_width = 240       # 0-600
# header_height = 64        # 0-200
# outer_padding = 0         # 0-40
# gutter = 10               # 0-40

[windows]
# max_visible = 4           # 1-4
# default_min_width = 320   # 50-2000
# default_min_height = 200  # 50-2000
# cascade_offset = 32       # 0-200
# cascade_width_ratio = 0.6 # 0.2-1.0
# cascade_height_ratio = 0.6

[chrome]
# title_bar_height = 36     # 20-80
# resize_handle = 6         # 2-20
# control_button_width = 40 # 16-80

[logging]
# level = "INFO"            # TRACE, DEBUG, INFO, WARN, ERROR
"##
    .to_string()
}

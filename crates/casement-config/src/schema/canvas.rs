//! Canvas geometry: the viewport and the chrome carved out of it.

use serde::{Deserialize, Serialize};

/// Canvas configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Initial viewport width in pixels until the host reports one (valid range: 320-7680).
    pub viewport_width: u32,
    /// Initial viewport height in pixels (valid range: 240-4320).
    pub viewport_height: u32,
    /// Fixed side navigation width excluded from the canvas (valid range: 0-600).
    pub sidebar_width: u32,
    /// Fixed top bar height excluded from the canvas (valid range: 0-200).
    pub header_height: u32,
    /// Padding around the tiled area (valid range: 0-40).
    pub outer_padding: u32,
    /// Gap between tiled windows (valid range: 0-40).
    pub gutter: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 800,
            sidebar_width: 240,
            header_height: 64,
            outer_padding: 0,
            gutter: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_config_defaults() {
        let config = CanvasConfig::default();
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.viewport_height, 800);
        assert_eq!(config.sidebar_width, 240);
        assert_eq!(config.header_height, 64);
        assert_eq!(config.outer_padding, 0);
        assert_eq!(config.gutter, 10);
    }

    #[test]
    fn canvas_config_partial_toml() {
        let config: CanvasConfig = toml::from_str("gutter = 6\nsidebar_width = 0").unwrap();
        assert_eq!(config.gutter, 6);
        assert_eq!(config.sidebar_width, 0);
        assert_eq!(config.header_height, 64);
    }
}

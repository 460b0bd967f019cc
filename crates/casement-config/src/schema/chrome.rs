//! Window chrome hit-zone sizes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Title bar height in pixels (valid range: 20-80).
    pub title_bar_height: u32,
    /// Thickness of the edge/corner resize zones (valid range: 2-20).
    pub resize_handle: u32,
    /// Width of each title bar control button (valid range: 16-80).
    pub control_button_width: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            title_bar_height: 36,
            resize_handle: 6,
            control_button_width: 40,
        }
    }
}

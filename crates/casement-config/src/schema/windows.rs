//! Window defaults: visible cap, minimum size, and cascade layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Maximum simultaneously visible windows (valid range: 1-4).
    pub max_visible: u32,
    /// Minimum width for windows opened without one (valid range: 50-2000).
    pub default_min_width: u32,
    /// Minimum height for windows opened without one (valid range: 50-2000).
    pub default_min_height: u32,
    /// Diagonal step between cascaded windows (valid range: 0-200).
    pub cascade_offset: u32,
    /// Cascaded width as a fraction of the canvas (valid range: 0.2-1.0).
    pub cascade_width_ratio: f64,
    /// Cascaded height as a fraction of the canvas (valid range: 0.2-1.0).
    pub cascade_height_ratio: f64,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            max_visible: 4,
            default_min_width: 320,
            default_min_height: 200,
            cascade_offset: 32,
            cascade_width_ratio: 0.6,
            cascade_height_ratio: 0.6,
        }
    }
}

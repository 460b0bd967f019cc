//! Layout engine types and configuration.

use casement_common::{Rect, Size};

/// Geometry configuration for the window canvas: the chrome carved out of
/// the viewport, the gutter between tiles, and the cascade step.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between tiled windows.
    pub gutter: u32,
    /// Width of the fixed side navigation excluded from the canvas.
    pub sidebar_width: u32,
    /// Height of the fixed top bar excluded from the canvas.
    pub header_height: u32,
    /// Padding in pixels around the tiled area, inside the container.
    pub outer_padding: u32,
    /// Diagonal step in pixels between cascaded windows.
    pub cascade_offset: u32,
    /// Cascaded window width as a fraction of the canvas width.
    pub cascade_width_ratio: f64,
    /// Cascaded window height as a fraction of the canvas height.
    pub cascade_height_ratio: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gutter: 10,
            sidebar_width: 240,
            header_height: 64,
            outer_padding: 0,
            cascade_offset: 32,
            cascade_width_ratio: 0.6,
            cascade_height_ratio: 0.6,
        }
    }
}

impl LayoutEngine {
    /// Size of the scrollable container that hosts the windows: the
    /// viewport minus the side and top chrome.
    pub fn container_size(&self, viewport: Size) -> Size {
        Size::new(
            (viewport.width - self.sidebar_width as f64).max(0.0),
            (viewport.height - self.header_height as f64).max(0.0),
        )
    }

    /// The tiling canvas in container coordinates.
    pub fn canvas(&self, viewport: Size) -> Rect {
        let container = self.container_size(viewport);
        let pad = self.outer_padding as f64;
        Rect {
            x: pad,
            y: pad,
            width: (container.width - 2.0 * pad).max(0.0),
            height: (container.height - 2.0 * pad).max(0.0),
        }
    }
}

//! Cascade arrangement: equal-sized windows stepped along the diagonal.

use casement_common::Rect;

use super::LayoutEngine;

impl LayoutEngine {
    /// Lay out `count` windows on a diagonal, each offset by
    /// `cascade_offset` from the previous one. When the next step would
    /// push a window past the canvas edge the diagonal wraps back to the
    /// canvas origin.
    pub fn cascade(&self, count: usize, canvas: Rect) -> Vec<Rect> {
        let width = canvas.width * self.cascade_width_ratio;
        let height = canvas.height * self.cascade_height_ratio;
        let step = self.cascade_offset as f64;

        let slots = if step > 0.0 {
            let free_x = ((canvas.width - width) / step).floor();
            let free_y = ((canvas.height - height) / step).floor();
            (free_x.min(free_y).max(0.0) as usize) + 1
        } else {
            1
        };

        (0..count)
            .map(|i| {
                let offset = (i % slots) as f64 * step;
                Rect {
                    x: canvas.x + offset,
                    y: canvas.y + offset,
                    width,
                    height,
                }
            })
            .collect()
    }
}

//! Tile partitioning for 1–4 visible windows.

use casement_common::Rect;

use super::LayoutEngine;

impl LayoutEngine {
    /// Partition `canvas` into `count` cells in reading order.
    ///
    /// The cells are disjoint and, together with the gutters between them,
    /// cover the canvas exactly. Counts above four fall back to a uniform
    /// grid so a misconfigured cap still produces a sane layout.
    pub fn tile(&self, count: usize, canvas: Rect) -> Vec<Rect> {
        match count {
            0 => Vec::new(),
            1 => vec![canvas],
            2 => {
                let (left, right) = self.split_columns(canvas);
                vec![left, right]
            }
            3 => {
                let (top, bottom) = self.split_rows(canvas);
                let (bottom_left, bottom_right) = self.split_columns(bottom);
                vec![top, bottom_left, bottom_right]
            }
            4 => {
                let (top, bottom) = self.split_rows(canvas);
                let (top_left, top_right) = self.split_columns(top);
                let (bottom_left, bottom_right) = self.split_columns(bottom);
                vec![top_left, top_right, bottom_left, bottom_right]
            }
            n => self.grid(n, canvas),
        }
    }

    /// Two equal columns separated by one gutter.
    fn split_columns(&self, bounds: Rect) -> (Rect, Rect) {
        let gap = self.gutter as f64;
        let available = (bounds.width - gap).max(0.0);
        let w1 = available / 2.0;
        let w2 = available - w1;
        (
            Rect {
                x: bounds.x,
                y: bounds.y,
                width: w1,
                height: bounds.height,
            },
            Rect {
                x: bounds.x + w1 + gap,
                y: bounds.y,
                width: w2,
                height: bounds.height,
            },
        )
    }

    /// Two equal rows separated by one gutter.
    fn split_rows(&self, bounds: Rect) -> (Rect, Rect) {
        let gap = self.gutter as f64;
        let available = (bounds.height - gap).max(0.0);
        let h1 = available / 2.0;
        let h2 = available - h1;
        (
            Rect {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: h1,
            },
            Rect {
                x: bounds.x,
                y: bounds.y + h1 + gap,
                width: bounds.width,
                height: h2,
            },
        )
    }

    fn grid(&self, count: usize, canvas: Rect) -> Vec<Rect> {
        let gap = self.gutter as f64;
        let cols = (count as f64).sqrt().ceil() as usize;
        let rows = count.div_ceil(cols);
        let cell_w = ((canvas.width - gap * (cols - 1) as f64) / cols as f64).max(0.0);
        let cell_h = ((canvas.height - gap * (rows - 1) as f64) / rows as f64).max(0.0);
        (0..count)
            .map(|i| {
                let (row, col) = (i / cols, i % cols);
                Rect {
                    x: canvas.x + col as f64 * (cell_w + gap),
                    y: canvas.y + row as f64 * (cell_h + gap),
                    width: cell_w,
                    height: cell_h,
                }
            })
            .collect()
    }
}

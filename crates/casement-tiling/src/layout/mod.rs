mod calculation;
mod cascade;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use casement_common::{Rect, Size};

    fn engine(gutter: u32) -> LayoutEngine {
        LayoutEngine {
            gutter,
            ..LayoutEngine::default()
        }
    }

    fn canvas() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 600.0)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    fn assert_exact_partition(engine: &LayoutEngine, count: usize) {
        let cells = engine.tile(count, canvas());
        assert_eq!(cells.len(), count);

        for (i, a) in cells.iter().enumerate() {
            assert!(a.x >= 0.0 && a.y >= 0.0, "cell {i} starts outside canvas");
            assert!(a.right() <= 1000.0 + 0.01, "cell {i} overflows right");
            assert!(a.bottom() <= 600.0 + 0.01, "cell {i} overflows bottom");
            for b in cells.iter().skip(i + 1) {
                assert!(!a.intersects(b), "cells overlap: {a:?} {b:?}");
            }
        }

        let g = engine.gutter as f64;
        let (w, h) = (1000.0, 600.0);
        let gutter_area = match count {
            1 => 0.0,
            2 => g * h,
            3 => g * w + g * (h - g) / 2.0,
            4 => g * w + g * h - g * g,
            _ => unreachable!(),
        };
        let cell_area: f64 = cells.iter().map(Rect::area).sum();
        assert!(approx(cell_area + gutter_area, w * h));
    }

    #[test]
    fn zero_windows_no_cells() {
        assert!(engine(10).tile(0, canvas()).is_empty());
    }

    #[test]
    fn single_window_fills_canvas() {
        let cells = engine(10).tile(1, canvas());
        assert_eq!(cells, vec![canvas()]);
    }

    #[test]
    fn two_windows_split_into_columns() {
        let cells = engine(10).tile(2, canvas());
        assert!(approx(cells[0].width, 495.0));
        assert!(approx(cells[1].width, 495.0));
        assert!(approx(cells[1].x, 505.0));
        assert!(approx(cells[0].height, 600.0));
        assert!(approx(cells[1].height, 600.0));
    }

    #[test]
    fn three_windows_top_row_and_two_columns() {
        let cells = engine(10).tile(3, canvas());
        assert!(approx(cells[0].width, 1000.0));
        assert!(approx(cells[0].height, 295.0));
        assert!(approx(cells[1].y, 305.0));
        assert!(approx(cells[2].y, 305.0));
        assert!(approx(cells[1].width, 495.0));
        assert!(approx(cells[2].x, 505.0));
    }

    #[test]
    fn four_windows_grid() {
        let cells = engine(10).tile(4, canvas());
        let origins: Vec<(f64, f64)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            origins,
            vec![(0.0, 0.0), (505.0, 0.0), (0.0, 305.0), (505.0, 305.0)]
        );
        assert!(cells.iter().all(|c| approx(c.width, 495.0) && approx(c.height, 295.0)));
    }

    #[test]
    fn partitions_are_exact_for_every_count() {
        for gutter in [0, 10, 17] {
            let engine = engine(gutter);
            for count in 1..=4 {
                assert_exact_partition(&engine, count);
            }
        }
    }

    #[test]
    fn partition_respects_canvas_offset() {
        let engine = engine(8);
        let offset = Rect::new(20.0, 30.0, 500.0, 400.0);
        let cells = engine.tile(4, offset);
        assert!(approx(cells[0].x, 20.0));
        assert!(approx(cells[0].y, 30.0));
        assert!(approx(cells[3].right(), 520.0));
        assert!(approx(cells[3].bottom(), 430.0));
    }

    #[test]
    fn oversized_count_falls_back_to_grid() {
        let cells = engine(0).tile(6, canvas());
        assert_eq!(cells.len(), 6);
        for (i, a) in cells.iter().enumerate() {
            for b in cells.iter().skip(i + 1) {
                assert!(!a.intersects(b));
            }
        }
    }

    #[test]
    fn canvas_excludes_chrome_and_padding() {
        let engine = LayoutEngine {
            sidebar_width: 200,
            header_height: 50,
            outer_padding: 10,
            ..LayoutEngine::default()
        };
        let viewport = Size::new(1200.0, 850.0);
        assert_eq!(engine.container_size(viewport), Size::new(1000.0, 800.0));
        assert_eq!(engine.canvas(viewport), Rect::new(10.0, 10.0, 980.0, 780.0));
    }

    #[test]
    fn tiny_viewport_collapses_to_empty_canvas() {
        let engine = LayoutEngine::default();
        let canvas = engine.canvas(Size::new(100.0, 40.0));
        assert_eq!(canvas.width, 0.0);
        assert_eq!(canvas.height, 0.0);
    }

    #[test]
    fn cascade_steps_diagonally() {
        let engine = LayoutEngine {
            cascade_offset: 30,
            cascade_width_ratio: 0.5,
            cascade_height_ratio: 0.5,
            ..LayoutEngine::default()
        };
        let cells = engine.cascade(3, canvas());
        assert_eq!(cells[0], Rect::new(0.0, 0.0, 500.0, 300.0));
        assert_eq!(cells[1], Rect::new(30.0, 30.0, 500.0, 300.0));
        assert_eq!(cells[2], Rect::new(60.0, 60.0, 500.0, 300.0));
    }

    #[test]
    fn cascade_wraps_before_leaving_canvas() {
        let engine = LayoutEngine {
            cascade_offset: 100,
            cascade_width_ratio: 0.5,
            cascade_height_ratio: 0.5,
            ..LayoutEngine::default()
        };
        // Height slack is 300px: offsets 0, 100, 200, 300 fit, the fifth wraps.
        let cells = engine.cascade(5, canvas());
        assert_eq!(cells[3].y, 300.0);
        assert_eq!(cells[4].y, 0.0);
        assert!(cells.iter().all(|c| c.bottom() <= 600.0));
    }
}

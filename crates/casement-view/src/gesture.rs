//! Gesture state and the geometry each pointer move produces.

use casement_common::{Point, Size};

use crate::region::ResizeDirection;

/// Per-window gesture state. A gesture runs from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Moving the window by its title bar.
    Dragging {
        /// Pointer position minus window position at pointer-down.
        offset: Point,
    },
    /// Resizing from one of the eight handles.
    Resizing {
        direction: ResizeDirection,
        start_pointer: Point,
        start_position: Point,
        start_size: Size,
    },
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureState::Idle)
    }
}

/// Window position for a drag, clamped per axis to `[0, container - size]`.
pub fn drag_position(pointer: Point, offset: Point, size: Size, container: Size) -> Point {
    let candidate = pointer - offset;
    Point::new(
        clamp_axis(candidate.x, container.width - size.width),
        clamp_axis(candidate.y, container.height - size.height),
    )
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Position and size for a resize from `direction`.
///
/// Only the edges named by `direction` move; the opposite edges stay
/// anchored. Each axis is kept inside the container and then floored at
/// `min_size`, so the floor wins when the two conflict.
pub fn resize_geometry(
    direction: ResizeDirection,
    start_pointer: Point,
    start_position: Point,
    start_size: Size,
    min_size: Size,
    container: Size,
    pointer: Point,
) -> (Point, Size) {
    let delta = pointer - start_pointer;
    let mut position = start_position;
    let mut size = start_size;

    if direction.east() {
        let max = container.width - start_position.x;
        size.width = (start_size.width + delta.x).min(max).max(min_size.width);
    } else if direction.west() {
        let right = start_position.x + start_size.width;
        size.width = (start_size.width - delta.x).min(right).max(min_size.width);
        position.x = right - size.width;
    }

    if direction.south() {
        let max = container.height - start_position.y;
        size.height = (start_size.height + delta.y).min(max).max(min_size.height);
    } else if direction.north() {
        let bottom = start_position.y + start_size.height;
        size.height = (start_size.height - delta.y).min(bottom).max(min_size.height);
        position.y = bottom - size.height;
    }

    (position, size)
}

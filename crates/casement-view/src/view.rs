//! One window's chrome and its pointer gesture machine.

use std::rc::Rc;

use casement_common::{Point, Rect, Size, WindowId};
use casement_tiling::WindowEntry;
use tracing::{debug, trace};

use crate::actions::WindowActions;
use crate::capture::{PointerCapture, PointerSource};
use crate::gesture::{self, GestureState};
use crate::region::{ChromeMetrics, ControlButton, WindowRegion};

/// The slice of registry state a view needs for one pointer event.
///
/// Built fresh from the current snapshot on every event so the view never
/// holds stale geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    /// Where the window is drawn, in container coordinates.
    pub rect: Rect,
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
    pub is_maximized: bool,
    /// Bounds that drags and resizes are clamped to.
    pub container: Size,
}

impl ViewFrame {
    pub fn from_entry<C>(entry: &WindowEntry<C>, canvas: Rect, container: Size) -> Self {
        Self {
            rect: entry.display_rect(canvas),
            position: entry.position,
            size: entry.size,
            min_size: entry.min_size,
            is_maximized: entry.is_maximized,
            container,
        }
    }
}

/// Chrome controller for a single window.
///
/// Global pointer listeners are held only while a drag or resize is in
/// progress and are released on pointer-up or when the view is dropped.
pub struct WindowView {
    id: WindowId,
    metrics: ChromeMetrics,
    pointer: Rc<dyn PointerSource>,
    gesture: GestureState,
    capture: Option<PointerCapture>,
}

impl WindowView {
    pub fn new(id: WindowId, metrics: ChromeMetrics, pointer: Rc<dyn PointerSource>) -> Self {
        Self {
            id,
            metrics,
            pointer,
            gesture: GestureState::Idle,
            capture: None,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Handle a pointer-down at `pointer` (container coordinates).
    ///
    /// Any press inside the window focuses it. Title bar and handle presses
    /// start a gesture unless the window is maximized; control buttons run
    /// their operation.
    pub fn pointer_down<A>(&mut self, frame: &ViewFrame, pointer: Point, actions: &mut A) -> WindowRegion
    where
        A: WindowActions + ?Sized,
    {
        // A pointer-up we never saw leaves a stale gesture behind.
        self.end_gesture();

        let local = pointer - frame.rect.origin();
        let region = self.metrics.hit_test(frame.rect.size(), local);
        trace!(window = %self.id, ?region, "pointer down");

        match region {
            WindowRegion::Outside => {}
            WindowRegion::Control(button) => self.press_control(button, actions),
            WindowRegion::TitleBar => {
                actions.on_focus(self.id);
                if !frame.is_maximized {
                    self.gesture = GestureState::Dragging {
                        offset: pointer - frame.position,
                    };
                    self.begin_capture();
                }
            }
            WindowRegion::Resize(direction) => {
                actions.on_focus(self.id);
                if !frame.is_maximized {
                    self.gesture = GestureState::Resizing {
                        direction,
                        start_pointer: pointer,
                        start_position: frame.position,
                        start_size: frame.size,
                    };
                    self.begin_capture();
                }
            }
            WindowRegion::Content => actions.on_focus(self.id),
        }
        region
    }

    /// Handle a global pointer-move during a gesture.
    pub fn pointer_move<A>(&mut self, frame: &ViewFrame, pointer: Point, actions: &mut A)
    where
        A: WindowActions + ?Sized,
    {
        if frame.is_maximized {
            return;
        }
        match self.gesture {
            GestureState::Idle => {}
            GestureState::Dragging { offset } => {
                let position =
                    gesture::drag_position(pointer, offset, frame.size, frame.container);
                actions.on_position_change(self.id, position);
            }
            GestureState::Resizing {
                direction,
                start_pointer,
                start_position,
                start_size,
            } => {
                let (position, size) = gesture::resize_geometry(
                    direction,
                    start_pointer,
                    start_position,
                    start_size,
                    frame.min_size,
                    frame.container,
                    pointer,
                );
                if direction.west() || direction.north() {
                    actions.on_position_change(self.id, position);
                }
                actions.on_size_change(self.id, size);
            }
        }
    }

    /// Handle a global pointer-up: the gesture ends and listeners detach.
    pub fn pointer_up(&mut self) {
        self.end_gesture();
    }

    /// Run a title bar control. The window is focused before the operation.
    pub fn press_control<A>(&mut self, button: ControlButton, actions: &mut A)
    where
        A: WindowActions + ?Sized,
    {
        debug!(window = %self.id, ?button, "control pressed");
        actions.on_focus(self.id);
        match button {
            ControlButton::Minimize => actions.on_minimize(self.id),
            ControlButton::Maximize => actions.on_maximize(self.id),
            ControlButton::Close => actions.on_close(self.id),
        }
    }

    fn begin_capture(&mut self) {
        self.capture = Some(PointerCapture::attach(self.pointer.clone(), self.id));
    }

    fn end_gesture(&mut self) {
        if self.gesture.is_active() {
            trace!(window = %self.id, "gesture ended");
        }
        self.gesture = GestureState::Idle;
        self.capture = None;
    }
}

impl std::fmt::Debug for WindowView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowView")
            .field("id", &self.id)
            .field("gesture", &self.gesture)
            .field("capture", &self.capture)
            .finish()
    }
}

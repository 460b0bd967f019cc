//! Callbacks a window view drives. The registry is the usual target.

use casement_common::{Point, Size, WindowId};
use casement_tiling::WindowRegistry;

/// The operations a window's chrome can request.
pub trait WindowActions {
    fn on_focus(&mut self, id: WindowId);
    fn on_close(&mut self, id: WindowId);
    fn on_minimize(&mut self, id: WindowId);
    fn on_maximize(&mut self, id: WindowId);
    fn on_position_change(&mut self, id: WindowId, position: Point);
    fn on_size_change(&mut self, id: WindowId, size: Size);
}

impl<C: Clone> WindowActions for WindowRegistry<C> {
    fn on_focus(&mut self, id: WindowId) {
        self.focus_window(id);
    }

    fn on_close(&mut self, id: WindowId) {
        self.close_window(id);
    }

    fn on_minimize(&mut self, id: WindowId) {
        self.minimize_window(id);
    }

    fn on_maximize(&mut self, id: WindowId) {
        self.maximize_window(id);
    }

    fn on_position_change(&mut self, id: WindowId, position: Point) {
        self.update_position(id, position);
    }

    fn on_size_change(&mut self, id: WindowId, size: Size) {
        self.update_size(id, size);
    }
}

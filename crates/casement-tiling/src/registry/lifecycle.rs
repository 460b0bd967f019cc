//! Close, minimize, maximize, and the direct geometry setters.

use std::sync::Arc;

use casement_common::{Point, Size, WindowId};
use tracing::debug;

use crate::events::RegistryEvent;

use super::WindowRegistry;

impl<C: Clone> WindowRegistry<C> {
    /// Remove a window and retile the rest. No-op for unknown ids.
    pub fn close_window(&mut self, id: WindowId) {
        if self.index_of(id).is_none() {
            return;
        }
        let mut next = self.working_copy();
        next.retain(|w| w.id != id);
        debug!(%id, "window closed");
        self.events.push(RegistryEvent::Closed(id));
        self.retile_and_commit(next);
    }

    /// Toggle the minimized flag and retile.
    ///
    /// Restoring a window brings it to the front and may evict the oldest
    /// visible window to stay under the cap.
    pub fn minimize_window(&mut self, id: WindowId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let mut next = self.working_copy();

        if next[index].is_minimized {
            self.evict_for_room(&mut next);
            let z = self.raise_z();
            if let Some(entry) = next.iter_mut().find(|w| w.id == id) {
                entry.is_minimized = false;
                entry.z_index = z;
            }
            self.events.push(RegistryEvent::Restored(id));
        } else {
            next[index].is_minimized = true;
            self.events.push(RegistryEvent::Minimized(id));
        }
        debug!(%id, "window minimize toggled");
        self.retile_and_commit(next);
    }

    /// Toggle the maximized flag on one window.
    ///
    /// This is a per-window override drawn over the tiled layout, so the
    /// other windows keep their tiles. Both directions raise the window:
    /// the counter sits above every tiled window.
    pub fn maximize_window(&mut self, id: WindowId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let z = self.raise_z();
        let entry = &mut Arc::make_mut(&mut self.windows)[index];
        entry.is_maximized = !entry.is_maximized;
        entry.z_index = z;
        let event = if entry.is_maximized {
            RegistryEvent::Maximized(id)
        } else {
            RegistryEvent::Unmaximized(id)
        };
        debug!(%id, maximized = entry.is_maximized, "window maximize toggled");
        self.events.push(event);
    }

    /// Set a window's position. The caller clamps against the container;
    /// this runs on every pointer move during a drag.
    pub fn update_position(&mut self, id: WindowId, position: Point) {
        if let Some(index) = self.index_of(id) {
            Arc::make_mut(&mut self.windows)[index].position = position;
        }
    }

    /// Set a window's size, floored at its minimum size.
    pub fn update_size(&mut self, id: WindowId, size: Size) {
        if let Some(index) = self.index_of(id) {
            let entry = &mut Arc::make_mut(&mut self.windows)[index];
            entry.size = size.max(entry.min_size);
        }
    }

    /// Remove every window in one update.
    pub fn close_all_windows(&mut self) {
        if self.windows.is_empty() {
            return;
        }
        for entry in self.windows.iter() {
            self.events.push(RegistryEvent::Closed(entry.id));
        }
        debug!(count = self.windows.len(), "all windows closed");
        self.windows = Arc::new(Vec::new());
    }

    /// Minimize every visible window in one update.
    pub fn minimize_all_windows(&mut self) {
        let mut next = self.working_copy();
        for entry in next.iter_mut().filter(|w| !w.is_minimized) {
            entry.is_minimized = true;
            self.events.push(RegistryEvent::Minimized(entry.id));
        }
        self.windows = Arc::new(next);
    }
}

//! Tiling, cascade arrangement, and viewport changes.

use std::sync::Arc;

use casement_common::{Rect, Size};
use tracing::debug;

use crate::commands::ArrangeMode;
use crate::events::RegistryEvent;
use crate::layout::LayoutEngine;

use super::entry::WindowEntry;
use super::WindowRegistry;

impl<C: Clone> WindowRegistry<C> {
    /// Re-run the tiler (`Tile`) or stack every window on a diagonal
    /// (`Cascade`). Cascading clears `is_maximized` on every entry and
    /// restacks them so the last window in creation order ends up on top.
    pub fn arrange_windows(&mut self, mode: ArrangeMode) {
        let mut next = self.working_copy();
        match mode {
            ArrangeMode::Tile => {
                self.retile(&mut next);
            }
            ArrangeMode::Cascade => {
                let cells = self.layout_engine.cascade(next.len(), self.canvas());
                for (entry, cell) in next.iter_mut().zip(cells) {
                    entry.is_maximized = false;
                    entry.position = cell.origin();
                    entry.size = cell.size().max(entry.min_size);
                    self.z_counter += 1;
                    entry.z_index = self.z_counter;
                }
            }
        }
        debug!(?mode, count = next.len(), "windows arranged");
        self.events.push(RegistryEvent::Arranged(mode));
        self.windows = Arc::new(next);
    }

    /// Record a new viewport size and retile the visible windows into the
    /// resulting canvas.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        let next = self.working_copy();
        self.retile_and_commit(next);
    }

    /// Clone the current list to build the next one from.
    pub(super) fn working_copy(&self) -> Vec<WindowEntry<C>> {
        self.windows.as_ref().clone()
    }

    /// Retile `next` and publish it as the new window list.
    pub(super) fn retile_and_commit(&mut self, mut next: Vec<WindowEntry<C>>) {
        self.retile(&mut next);
        self.windows = Arc::new(next);
    }

    fn retile(&mut self, next: &mut [WindowEntry<C>]) {
        let visible = apply_tiling(&self.layout_engine, self.canvas(), next);
        if visible > 0 {
            self.events.push(RegistryEvent::Retiled { visible });
        }
    }
}

/// Assign tiles to the visible entries in creation order. Minimized
/// entries keep their stored geometry. Returns the number of tiled entries.
fn apply_tiling<C>(engine: &LayoutEngine, canvas: Rect, entries: &mut [WindowEntry<C>]) -> usize {
    let mut visible: Vec<&mut WindowEntry<C>> =
        entries.iter_mut().filter(|w| w.is_visible()).collect();
    visible.sort_by_key(|w| w.seq);

    let count = visible.len();
    let cells = engine.tile(count, canvas);
    for (entry, cell) in visible.into_iter().zip(cells) {
        entry.is_maximized = count == 1;
        entry.position = cell.origin();
        entry.size = cell.size().max(entry.min_size);
    }
    count
}

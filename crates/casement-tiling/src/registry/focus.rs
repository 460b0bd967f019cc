//! Z-order handling for WindowRegistry.

use std::sync::Arc;

use casement_common::WindowId;
use tracing::trace;

use crate::events::RegistryEvent;

use super::WindowRegistry;

impl<C: Clone> WindowRegistry<C> {
    /// Bring a window to the front. No-op for unknown ids.
    pub fn focus_window(&mut self, id: WindowId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let z = self.raise_z();
        Arc::make_mut(&mut self.windows)[index].z_index = z;
        trace!(%id, z, "window focused");
        self.events.push(RegistryEvent::Focused(id));
    }

    /// Hand out the next z-index.
    ///
    /// The counter never decreases and always holds the highest value ever
    /// assigned, so the result is strictly above every entry's z-index.
    pub(super) fn raise_z(&mut self) -> u32 {
        self.z_counter += 1;
        self.z_counter
    }

    pub(super) fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }
}

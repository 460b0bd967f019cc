//! Opening windows: deduplication, restore, creation, and eviction.

use casement_common::WindowId;
use tracing::debug;

use crate::events::RegistryEvent;

use super::entry::{OpenWindow, WindowEntry};
use super::WindowRegistry;

impl<C: Clone> WindowRegistry<C> {
    /// Open a window for `config.content_key`, or bring back the one that
    /// already exists for it.
    ///
    /// A visible match is focused and returned unchanged. A minimized match
    /// is restored (maximized only if it ends up the sole visible window).
    /// Otherwise a new entry is created, evicting the oldest visible window
    /// first when the visible cap is already reached.
    pub fn open_window(&mut self, config: OpenWindow<C>) -> WindowId {
        if let Some(id) = self.visible_id_for_key(&config.content_key) {
            self.focus_window(id);
            return id;
        }

        let mut next = self.working_copy();

        let minimized = next
            .iter()
            .find(|w| w.is_minimized && w.content_key == config.content_key)
            .map(|w| w.id);
        if let Some(id) = minimized {
            self.evict_for_room(&mut next);
            let sole_visible = next.iter().all(|w| w.is_minimized);
            let z = self.raise_z();
            if let Some(entry) = next.iter_mut().find(|w| w.id == id) {
                entry.is_minimized = false;
                if sole_visible {
                    entry.is_maximized = true;
                }
                entry.z_index = z;
            }
            debug!(%id, key = %config.content_key, "window restored");
            self.events.push(RegistryEvent::Restored(id));
            self.retile_and_commit(next);
            return id;
        }

        self.evict_for_room(&mut next);

        let id = WindowId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        let z_index = self.raise_z();
        let canvas = self.canvas();
        let min_size = config.min_size.unwrap_or(self.default_min_size);

        next.push(WindowEntry {
            id,
            title: config.title,
            content_key: config.content_key,
            content: config.content,
            props: config
                .props
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            is_minimized: false,
            is_maximized: true,
            z_index,
            position: canvas.origin(),
            size: canvas.size().max(min_size),
            min_size,
            seq,
        });

        debug!(%id, z_index, "window opened");
        self.events.push(RegistryEvent::Opened(id));
        self.retile_and_commit(next);
        id
    }

    /// Whether any entry, visible or minimized, exists for `content_key`.
    pub fn window_exists(&self, content_key: &str) -> bool {
        self.windows.iter().any(|w| w.content_key == content_key)
    }

    /// Focus the entry for `content_key` without creating one.
    /// Returns `false` when no entry has that key.
    pub fn focus_window_by_content_key(&mut self, content_key: &str) -> bool {
        let found = self
            .windows
            .iter()
            .find(|w| w.content_key == content_key)
            .map(|w| w.id);
        match found {
            Some(id) => {
                self.focus_window(id);
                true
            }
            None => false,
        }
    }

    fn visible_id_for_key(&self, content_key: &str) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.is_visible() && w.content_key == content_key)
            .map(|w| w.id)
    }

    /// Close the oldest visible entries until one more window fits under
    /// the cap. Minimized entries are never candidates.
    pub(super) fn evict_for_room(&mut self, next: &mut Vec<WindowEntry<C>>) {
        self.evict_down_to(next, self.max_visible - 1);
    }

    /// Close the oldest visible entries until at most `limit` remain.
    pub(super) fn evict_down_to(&mut self, next: &mut Vec<WindowEntry<C>>, limit: usize) {
        while next.iter().filter(|w| w.is_visible()).count() > limit {
            let oldest = next
                .iter()
                .filter(|w| w.is_visible())
                .min_by_key(|w| w.seq)
                .map(|w| w.id);
            let Some(id) = oldest else { break };
            next.retain(|w| w.id != id);
            debug!(%id, "window evicted, visible cap reached");
            self.events.push(RegistryEvent::Evicted(id));
        }
    }
}

//! Core types and constructors for WindowRegistry.

use std::sync::Arc;

use casement_common::{Rect, Size, WindowId};

use crate::events::{EventQueue, RegistryEvent};
use crate::layout::LayoutEngine;

use super::entry::WindowEntry;

/// Hard upper bound on simultaneously visible windows.
pub const MAX_VISIBLE_WINDOWS: usize = 4;

/// Floor applied to windows opened without an explicit minimum size.
pub const DEFAULT_MIN_SIZE: Size = Size::new(320.0, 200.0);

/// Viewport assumed until the host reports its real size.
pub const DEFAULT_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Owns every window entry plus the bookkeeping behind them: id
/// allocation, the z-order counter, and the canvas geometry used for tiling.
///
/// The window list is published as an `Arc` snapshot. Structural updates
/// build the next list off to the side and swap it in whole, so a snapshot
/// taken by a renderer is never half retiled.
pub struct WindowRegistry<C = ()> {
    /// Entries in creation order.
    pub(super) windows: Arc<Vec<WindowEntry<C>>>,
    pub(super) layout_engine: LayoutEngine,
    pub(super) viewport: Size,
    pub(super) max_visible: usize,
    pub(super) default_min_size: Size,
    /// Next id to hand out; ids are never reused.
    pub(super) next_id: u32,
    /// Highest z-index ever assigned.
    pub(super) z_counter: u32,
    pub(super) next_seq: u64,
    pub(super) events: EventQueue,
}

impl<C: Clone> WindowRegistry<C> {
    pub fn new() -> Self {
        Self {
            windows: Arc::new(Vec::new()),
            layout_engine: LayoutEngine::default(),
            viewport: DEFAULT_VIEWPORT,
            max_visible: MAX_VISIBLE_WINDOWS,
            default_min_size: DEFAULT_MIN_SIZE,
            next_id: 1,
            z_counter: 0,
            next_seq: 0,
            events: EventQueue::default(),
        }
    }

    /// Create with a custom layout engine.
    pub fn with_layout(layout_engine: LayoutEngine) -> Self {
        let mut registry = Self::new();
        registry.layout_engine = layout_engine;
        registry
    }

    /// Set the visible-window cap, clamped to `1..=4`. Lowering it below
    /// the current visible count evicts the oldest visible windows and
    /// retiles the rest.
    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.max_visible = max_visible.clamp(1, MAX_VISIBLE_WINDOWS);
        if self.visible_count() > self.max_visible {
            let mut next = self.working_copy();
            self.evict_down_to(&mut next, self.max_visible);
            self.retile_and_commit(next);
        }
    }

    pub fn set_default_min_size(&mut self, min_size: Size) {
        self.default_min_size = min_size;
    }

    // -- Accessors --

    /// Snapshot of all entries in creation order.
    pub fn windows(&self) -> Arc<Vec<WindowEntry<C>>> {
        Arc::clone(&self.windows)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowEntry<C>> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &WindowEntry<C>> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.layout_engine
    }

    /// Size of the container windows are dragged within.
    pub fn container_size(&self) -> Size {
        self.layout_engine.container_size(self.viewport)
    }

    /// The rectangle tiled windows are laid out in.
    pub fn canvas(&self) -> Rect {
        self.layout_engine.canvas(self.viewport)
    }

    /// Window ids from back to front.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut entries: Vec<(u32, WindowId)> =
            self.windows.iter().map(|w| (w.z_index, w.id)).collect();
        entries.sort_unstable();
        entries.into_iter().map(|(_, id)| id).collect()
    }

    /// The entry holding the highest z-index, if any.
    pub fn topmost(&self) -> Option<WindowId> {
        self.windows.iter().max_by_key(|w| w.z_index).map(|w| w.id)
    }

    /// Take all events recorded since the last drain, oldest first. At
    /// most [`crate::events::MAX_PENDING_EVENTS`] are kept between drains.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        self.events.drain()
    }

    /// Number of events waiting to be drained.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl<C: Clone> Default for WindowRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

//! The in-process host: one registry plus one view per window.

use std::collections::BTreeMap;
use std::rc::Rc;

use casement_common::{Point, Rect, Size, WindowId};
use casement_config::CasementConfig;
use casement_tiling::{LayoutEngine, RegistryEvent, WindowEntry, WindowRegistry};
use casement_view::{ChromeMetrics, ListenerSet, ViewFrame, WindowView};
use serde::Serialize;
use tracing::debug;

use crate::script::{PointerStep, Step};

/// Everything a renderer needs after a step.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub viewport: Size,
    pub canvas: Rect,
    pub windows: Vec<WindowEntry<()>>,
    /// Ids from back to front.
    pub stacking: Vec<WindowId>,
    pub events: Vec<RegistryEvent>,
}

pub struct Host {
    registry: WindowRegistry<()>,
    metrics: ChromeMetrics,
    listeners: Rc<ListenerSet>,
    views: BTreeMap<WindowId, WindowView>,
}

impl Host {
    pub fn from_config(config: &CasementConfig) -> Self {
        let layout = LayoutEngine {
            gutter: config.canvas.gutter,
            sidebar_width: config.canvas.sidebar_width,
            header_height: config.canvas.header_height,
            outer_padding: config.canvas.outer_padding,
            cascade_offset: config.windows.cascade_offset,
            cascade_width_ratio: config.windows.cascade_width_ratio,
            cascade_height_ratio: config.windows.cascade_height_ratio,
        };
        let mut registry = WindowRegistry::with_layout(layout);
        registry.set_max_visible(config.windows.max_visible as usize);
        registry.set_default_min_size(Size::new(
            config.windows.default_min_width as f64,
            config.windows.default_min_height as f64,
        ));
        registry.set_viewport(Size::new(
            config.canvas.viewport_width as f64,
            config.canvas.viewport_height as f64,
        ));
        // Configuring the registry is not part of any script's history.
        registry.drain_events();

        let metrics = ChromeMetrics {
            title_bar_height: config.chrome.title_bar_height as f64,
            resize_handle: config.chrome.resize_handle as f64,
            control_button_width: config.chrome.control_button_width as f64,
        };

        Self {
            registry,
            metrics,
            listeners: Rc::new(ListenerSet::new()),
            views: BTreeMap::new(),
        }
    }

    pub fn registry(&self) -> &WindowRegistry<()> {
        &self.registry
    }

    /// Number of windows currently holding a global pointer capture.
    pub fn active_listeners(&self) -> usize {
        self.listeners.active()
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.registry.set_viewport(viewport);
        self.registry.drain_events();
    }

    /// Apply one script step. Returns the id a registry command resolved to.
    pub fn apply(&mut self, step: Step) -> Option<WindowId> {
        let result = match step {
            Step::Window(cmd) => self.registry.execute(cmd),
            Step::Pointer(pointer) => {
                self.pointer(pointer);
                None
            }
        };
        self.sync_views();
        result
    }

    /// Capture the current state and drain pending events.
    pub fn snapshot(&mut self) -> Snapshot {
        Snapshot {
            viewport: self.registry.viewport(),
            canvas: self.registry.canvas(),
            windows: self.registry.windows().to_vec(),
            stacking: self.registry.stacking_order(),
            events: self.registry.drain_events(),
        }
    }

    fn pointer(&mut self, step: PointerStep) {
        match step {
            PointerStep::PointerDown { id, x, y } => {
                let Some(frame) = self.frame(id) else {
                    debug!(%id, "pointer down on unknown or hidden window");
                    return;
                };
                if let Some(view) = self.views.get_mut(&id) {
                    view.pointer_down(&frame, Point::new(x, y), &mut self.registry);
                }
            }
            PointerStep::PointerMove { x, y } => {
                for id in self.listeners.targets() {
                    let Some(frame) = self.frame(id) else {
                        continue;
                    };
                    if let Some(view) = self.views.get_mut(&id) {
                        view.pointer_move(&frame, Point::new(x, y), &mut self.registry);
                    }
                }
            }
            PointerStep::PointerUp => {
                for id in self.listeners.targets() {
                    if let Some(view) = self.views.get_mut(&id) {
                        view.pointer_up();
                    }
                }
            }
        }
    }

    /// Geometry for a window that can take pointer input. Minimized
    /// windows are hidden and get none.
    fn frame(&self, id: WindowId) -> Option<ViewFrame> {
        let entry = self.registry.get(id).filter(|w| w.is_visible())?;
        Some(ViewFrame::from_entry(
            entry,
            self.registry.canvas(),
            self.registry.container_size(),
        ))
    }

    /// Mount a view for every new window, drop views of removed ones, and
    /// end any gesture on a window that was minimized under it.
    fn sync_views(&mut self) {
        let registry = &self.registry;
        self.views.retain(|id, _| registry.get(*id).is_some());
        for (id, view) in self.views.iter_mut() {
            let hidden = registry.get(*id).is_some_and(|w| w.is_minimized);
            if hidden && view.is_capturing() {
                debug!(%id, "window hidden mid-gesture, releasing pointer");
                view.pointer_up();
            }
        }
        for entry in self.registry.windows().iter() {
            if !self.views.contains_key(&entry.id) {
                let view = WindowView::new(entry.id, self.metrics, self.listeners.clone());
                self.views.insert(entry.id, view);
            }
        }
    }
}

//! Window entries and the request used to open them.

use casement_common::{Point, Rect, Size, WindowId};
use serde::Serialize;

/// One addressable window managed by the registry.
///
/// `content` is whatever the host renders inside the chrome; it is never
/// inspected by the registry and is skipped when the entry is serialized.
#[derive(Debug, Clone, Serialize)]
pub struct WindowEntry<C> {
    pub id: WindowId,
    pub title: String,
    /// Logical identity used to deduplicate open requests.
    pub content_key: String,
    #[serde(skip)]
    pub content: C,
    pub props: serde_json::Value,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
    /// Creation order; eviction removes the lowest visible value first.
    #[serde(skip)]
    pub(crate) seq: u64,
}

impl<C> WindowEntry<C> {
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    /// Stored geometry as a rect.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Geometry to draw: the whole canvas while maximized, otherwise the
    /// stored position and size.
    pub fn display_rect(&self, canvas: Rect) -> Rect {
        if self.is_maximized {
            canvas
        } else {
            self.rect()
        }
    }
}

/// Parameters for [`super::WindowRegistry::open_window`].
#[derive(Debug, Clone)]
pub struct OpenWindow<C> {
    pub title: String,
    pub content_key: String,
    pub content: C,
    pub props: Option<serde_json::Value>,
    pub min_size: Option<Size>,
}

impl<C> OpenWindow<C> {
    pub fn new(title: impl Into<String>, content_key: impl Into<String>, content: C) -> Self {
        Self {
            title: title.into(),
            content_key: content_key.into(),
            content,
            props: None,
            min_size: None,
        }
    }

    pub fn with_props(mut self, props: serde_json::Value) -> Self {
        self.props = Some(props);
        self
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = Some(min_size);
        self
    }
}

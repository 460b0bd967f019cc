use casement_common::{Size, WindowId};
use serde::{Deserialize, Serialize};

/// Layout strategy for [`crate::WindowRegistry::arrange_windows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrangeMode {
    Tile,
    Cascade,
}

/// A registry operation in data form, as read from host command scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum WindowCommand {
    Open {
        title: String,
        content_key: String,
        #[serde(default)]
        props: Option<serde_json::Value>,
        #[serde(default)]
        min_size: Option<Size>,
    },
    Close {
        id: WindowId,
    },
    Minimize {
        id: WindowId,
    },
    Maximize {
        id: WindowId,
    },
    Focus {
        id: WindowId,
    },
    FocusKey {
        content_key: String,
    },
    Move {
        id: WindowId,
        x: f64,
        y: f64,
    },
    Resize {
        id: WindowId,
        width: f64,
        height: f64,
    },
    Arrange {
        mode: ArrangeMode,
    },
    Viewport {
        width: f64,
        height: f64,
    },
    CloseAll,
    MinimizeAll,
}

//! Chrome regions and window-local hit testing.

use std::fmt;
use std::str::FromStr;

use casement_common::{Point, Size};
use serde::{Deserialize, Serialize};

/// One of the eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }

    fn from_edges(north: bool, south: bool, east: bool, west: bool) -> Option<Self> {
        match (north, south, east, west) {
            (true, _, true, _) => Some(Self::NE),
            (true, _, _, true) => Some(Self::NW),
            (_, true, true, _) => Some(Self::SE),
            (_, true, _, true) => Some(Self::SW),
            (true, _, _, _) => Some(Self::N),
            (_, true, _, _) => Some(Self::S),
            (_, _, true, _) => Some(Self::E),
            (_, _, _, true) => Some(Self::W),
            _ => None,
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Self::N),
            "s" => Ok(Self::S),
            "e" => Ok(Self::E),
            "w" => Ok(Self::W),
            "ne" => Ok(Self::NE),
            "nw" => Ok(Self::NW),
            "se" => Ok(Self::SE),
            "sw" => Ok(Self::SW),
            other => Err(format!("unknown resize direction: {other}")),
        }
    }
}

/// Title bar buttons, right to left: close, maximize, minimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlButton {
    Minimize,
    Maximize,
    Close,
}

/// What a window-local point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRegion {
    TitleBar,
    Control(ControlButton),
    Resize(ResizeDirection),
    Content,
    Outside,
}

/// Pixel sizes of the chrome hit zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeMetrics {
    pub title_bar_height: f64,
    /// Thickness of the edge and corner resize zones.
    pub resize_handle: f64,
    pub control_button_width: f64,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: 36.0,
            resize_handle: 6.0,
            control_button_width: 40.0,
        }
    }
}

impl ChromeMetrics {
    /// Classify `local` (relative to the window's top-left) for a window of
    /// `size`. Resize zones win over the title bar along the edges.
    pub fn hit_test(&self, size: Size, local: Point) -> WindowRegion {
        if local.x < 0.0 || local.y < 0.0 || local.x >= size.width || local.y >= size.height {
            return WindowRegion::Outside;
        }

        let h = self.resize_handle;
        if let Some(direction) = ResizeDirection::from_edges(
            local.y < h,
            local.y >= size.height - h,
            local.x >= size.width - h,
            local.x < h,
        ) {
            return WindowRegion::Resize(direction);
        }

        if local.y < self.title_bar_height {
            if self.control_button_width > 0.0 {
                let slot = ((size.width - local.x) / self.control_button_width).floor();
                match slot as u32 {
                    0 => return WindowRegion::Control(ControlButton::Close),
                    1 => return WindowRegion::Control(ControlButton::Maximize),
                    2 => return WindowRegion::Control(ControlButton::Minimize),
                    _ => {}
                }
            }
            return WindowRegion::TitleBar;
        }

        WindowRegion::Content
    }
}

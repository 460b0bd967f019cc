//! Configuration schema types for Casement.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod canvas;
mod chrome;
mod system;
mod windows;

pub use canvas::*;
pub use chrome::*;
pub use system::*;
pub use windows::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CasementConfig {
    pub canvas: CanvasConfig,
    pub windows: WindowsConfig,
    pub chrome: ChromeConfig,
    pub logging: LoggingConfig,
}

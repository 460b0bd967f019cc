pub mod errors;
pub mod types;

pub use errors::{CasementError, ConfigError};
pub use types::{Point, Rect, Size, WindowId};

pub type Result<T> = std::result::Result<T, CasementError>;

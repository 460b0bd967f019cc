//! The WindowRegistry owns window entries, focus order, and tiling.

mod arrange;
mod dispatch;
mod entry;
mod focus;
mod lifecycle;
mod open;
mod types;

pub use entry::{OpenWindow, WindowEntry};
pub use types::*;

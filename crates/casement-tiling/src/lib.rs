pub mod commands;
pub mod events;
pub mod layout;
pub mod registry;

pub use commands::{ArrangeMode, WindowCommand};
pub use events::{EventQueue, RegistryEvent, MAX_PENDING_EVENTS};
pub use layout::LayoutEngine;
pub use registry::{OpenWindow, WindowEntry, WindowRegistry, MAX_VISIBLE_WINDOWS};

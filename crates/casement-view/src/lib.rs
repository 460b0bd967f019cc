//! Window chrome: hit testing, the drag/resize gesture machine, and the
//! scoped pointer capture that keeps global listeners alive only for the
//! length of one gesture.

pub mod actions;
pub mod capture;
pub mod gesture;
pub mod region;
pub mod view;

pub use actions::WindowActions;
pub use capture::{ListenerSet, ListenerToken, PointerCapture, PointerSource};
pub use gesture::GestureState;
pub use region::{ChromeMetrics, ControlButton, ResizeDirection, WindowRegion};
pub use view::{ViewFrame, WindowView};

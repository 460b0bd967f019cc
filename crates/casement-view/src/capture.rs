//! Scoped global pointer subscriptions.
//!
//! While a window is being dragged or resized it needs pointer-move and
//! pointer-up events from the whole page, not just from its own chrome.
//! A [`PointerCapture`] holds that subscription and releases it exactly
//! once when dropped, whether the gesture ended normally or the view was
//! torn down mid-gesture.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use casement_common::WindowId;
use tracing::trace;

/// Handle for one attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerToken(pub u64);

/// The host's global pointer event stream.
pub trait PointerSource {
    /// Start routing global pointer-move/up events to `window`.
    fn attach(&self, window: WindowId) -> ListenerToken;
    /// Stop routing events for `token`.
    fn detach(&self, token: ListenerToken);
}

/// RAII guard over one attached listener.
pub struct PointerCapture {
    source: Rc<dyn PointerSource>,
    token: ListenerToken,
}

impl PointerCapture {
    pub fn attach(source: Rc<dyn PointerSource>, window: WindowId) -> Self {
        let token = source.attach(window);
        trace!(%window, token = token.0, "pointer listener attached");
        Self { source, token }
    }

    pub fn token(&self) -> ListenerToken {
        self.token
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.source.detach(self.token);
        trace!(token = self.token.0, "pointer listener detached");
    }
}

impl std::fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerCapture")
            .field("token", &self.token)
            .finish()
    }
}

/// In-process [`PointerSource`] that records which windows currently want
/// global pointer events. Hosts route each page-level pointer event to
/// [`ListenerSet::targets`].
#[derive(Debug, Default)]
pub struct ListenerSet {
    listeners: RefCell<BTreeMap<ListenerToken, WindowId>>,
    next_token: Cell<u64>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached listeners.
    pub fn active(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_listening(&self, window: WindowId) -> bool {
        self.listeners.borrow().values().any(|w| *w == window)
    }

    /// Windows that should receive the next global pointer event, in
    /// attach order.
    pub fn targets(&self) -> Vec<WindowId> {
        self.listeners.borrow().values().copied().collect()
    }
}

impl PointerSource for ListenerSet {
    fn attach(&self, window: WindowId) -> ListenerToken {
        let token = ListenerToken(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.listeners.borrow_mut().insert(token, window);
        token
    }

    fn detach(&self, token: ListenerToken) {
        self.listeners.borrow_mut().remove(&token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_detaches_on_drop() {
        let set = Rc::new(ListenerSet::new());
        {
            let _capture = PointerCapture::attach(set.clone(), WindowId(1));
            assert_eq!(set.active(), 1);
            assert!(set.is_listening(WindowId(1)));
        }
        assert_eq!(set.active(), 0);
        assert!(!set.is_listening(WindowId(1)));
    }

    #[test]
    fn tokens_are_unique() {
        let set = Rc::new(ListenerSet::new());
        let a = PointerCapture::attach(set.clone(), WindowId(1));
        let b = PointerCapture::attach(set.clone(), WindowId(2));
        assert_ne!(a.token(), b.token());
        assert_eq!(set.targets(), vec![WindowId(1), WindowId(2)]);
        drop(a);
        assert_eq!(set.targets(), vec![WindowId(2)]);
    }

    #[test]
    fn repeated_gestures_do_not_accumulate() {
        let set = Rc::new(ListenerSet::new());
        for _ in 0..100 {
            let capture = PointerCapture::attach(set.clone(), WindowId(3));
            drop(capture);
        }
        assert_eq!(set.active(), 0);
    }
}

use std::collections::VecDeque;

use casement_common::WindowId;
use serde::{Deserialize, Serialize};

use crate::commands::ArrangeMode;

/// A state transition recorded by the registry. Hosts drain these after
/// each update to drive side effects (sounds, analytics, focus rings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RegistryEvent {
    Opened(WindowId),
    Restored(WindowId),
    Focused(WindowId),
    Minimized(WindowId),
    Maximized(WindowId),
    Unmaximized(WindowId),
    Closed(WindowId),
    /// Closed to make room for a new window under the visible cap.
    Evicted(WindowId),
    Retiled { visible: usize },
    Arranged(ArrangeMode),
}

/// Most events held between drains. Older events are dropped first.
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Bounded FIFO of undrained events.
///
/// Hosts that never drain (a view wired straight to the registry, say)
/// keep only the newest [`MAX_PENDING_EVENTS`].
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<RegistryEvent>,
    dropped: u64,
}

impl EventQueue {
    pub fn push(&mut self, event: RegistryEvent) {
        if self.pending.len() == MAX_PENDING_EVENTS {
            self.pending.pop_front();
            self.dropped += 1;
        }
        self.pending.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<RegistryEvent> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Events discarded for lack of room since the queue was created.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization_is_tagged() {
        let json = serde_json::to_string(&RegistryEvent::Evicted(WindowId(3))).unwrap();
        assert_eq!(json, r#"{"type":"Evicted","data":3}"#);

        let json = serde_json::to_string(&RegistryEvent::Retiled { visible: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"Retiled","data":{"visible":2}}"#);
    }

    #[test]
    fn event_deserialization() {
        let event: RegistryEvent =
            serde_json::from_str(r#"{"type":"Arranged","data":"cascade"}"#).unwrap();
        assert_eq!(event, RegistryEvent::Arranged(ArrangeMode::Cascade));
    }

    #[test]
    fn queue_keeps_newest_when_full() {
        let mut queue = EventQueue::default();
        for n in 0..(MAX_PENDING_EVENTS as u32 + 10) {
            queue.push(RegistryEvent::Focused(WindowId(n)));
        }
        assert_eq!(queue.len(), MAX_PENDING_EVENTS);
        assert_eq!(queue.dropped(), 10);

        let events = queue.drain();
        assert_eq!(events[0], RegistryEvent::Focused(WindowId(10)));
        assert_eq!(
            events.last(),
            Some(&RegistryEvent::Focused(WindowId(MAX_PENDING_EVENTS as u32 + 9)))
        );
        assert!(queue.is_empty());
    }
}

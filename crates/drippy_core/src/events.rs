//! Title-screen change notifications
//!
//! Synchronous in-process publish/subscribe. Publishing invokes every live
//! subscriber immediately, in registration order, on the caller's thread —
//! no queueing and no cross-thread dispatch. Subscribers must not block.

use crate::settings::SettingsSnapshot;

/// A committed change, carrying the value before and after.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleEvent {
    /// Periodic title-screen tick (previous and current tick count).
    Tick { previous: u64, current: u64 },
    /// Settings were persisted and the authoritative snapshot replaced.
    SettingsApplied {
        previous: SettingsSnapshot,
        current: SettingsSnapshot,
    },
}

/// Subscription handle, used to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn FnMut(&TitleEvent)>,
}

/// Owned by a single controller; no internal locking.
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback for every published event.
    pub fn subscribe(&mut self, callback: impl FnMut(&TitleEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        tracing::debug!(subscription = id.0, "listener registered");
        id
    }

    /// Remove a subscription. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        let removed = self.subscribers.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "listener removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `event` to every subscriber, in registration order.
    pub fn publish(&mut self, event: &TitleEvent) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |_| seen.borrow_mut().push(tag));
        }

        bus.publish(&TitleEvent::Tick {
            previous: 0,
            current: 1,
        });
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribed_callback_is_never_invoked() {
        let calls = Rc::new(RefCell::new(0u32));
        let mut bus = EventBus::new();

        let counter = Rc::clone(&calls);
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id)); // second removal is a no-op

        bus.publish(&TitleEvent::Tick {
            previous: 3,
            current: 4,
        });
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn event_carries_old_and_new_pair() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let sink = Rc::clone(&seen);
        bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let previous = SettingsSnapshot::default();
        let current = SettingsSnapshot::new(2, 1, false, 0.8, 0.8, 0.8);
        bus.publish(&TitleEvent::SettingsApplied { previous, current });

        assert_eq!(
            *seen.borrow(),
            vec![TitleEvent::SettingsApplied { previous, current }]
        );
    }
}

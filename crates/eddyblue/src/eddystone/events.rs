//! Outbound notifications
//!
//! Observers are told about every accepted write and every freeze/unfreeze.
//! Delivery is synchronous and happens after the state change; observers
//! cannot veto anything.

use super::attribute::AttributeName;
use crate::codec::AttributeValue;

/// Notification delivered to observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// An attribute was written
    Changed {
        attribute: AttributeName,
        previous: AttributeValue,
        current: AttributeValue,
    },
    /// Advertising was frozen (`true`) or resumed (`false`)
    Disabled { frozen: bool },
}

/// Observer callback
pub type NotificationCallback = Box<dyn FnMut(&Notification) + Send + 'static>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

/// Registered observers, notified in subscription order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, NotificationCallback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: NotificationCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub(crate) fn emit(&mut self, notification: Notification) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(&notification);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

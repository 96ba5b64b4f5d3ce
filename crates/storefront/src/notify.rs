//! Notification events and the delivery seam.
//!
//! The engine signals named outcomes; how they reach the user (toast,
//! terminal line, log) is the delivery mechanism's concern. Front-ends
//! plug in through the [`Notifier`] trait.

use std::cell::RefCell;
use std::rc::Rc;

/// A named outcome with a human-readable title/description pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    ProductAdded,
    ProductDeleted,
    CartEmpty,
    FormIncomplete,
    OrderSubmitted,
}

impl Notification {
    /// Short headline.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ProductAdded => "Product added",
            Self::ProductDeleted => "Product deleted",
            Self::CartEmpty => "Empty cart",
            Self::FormIncomplete => "Incomplete information",
            Self::OrderSubmitted => "Order sent",
        }
    }

    /// One-sentence detail.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ProductAdded => "The product has been added to the store.",
            Self::ProductDeleted => "The product has been removed from the store.",
            Self::CartEmpty => "Add products to the cart before checking out.",
            Self::FormIncomplete => "Please fill in all required fields.",
            Self::OrderSubmitted => "The order has been handed to your email client.",
        }
    }
}

/// Delivery seam for notifications.
pub trait Notifier {
    /// Deliver one notification.
    fn notify(&mut self, event: Notification);
}

/// Default delivery: emit notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, event: Notification) {
        tracing::info!(title = event.title(), description = event.description(), "notification");
    }
}

/// Records every delivered notification; used by tests to assert on the
/// signals a flow produced.
///
/// Clones share the same buffer, so a handle kept outside the shop can
/// observe what the shop-owned copy received. `Rc` suffices - the whole
/// engine is single-threaded.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// A fresh recorder with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<Notification> {
        self.events.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, event: Notification) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_and_descriptions_are_nonempty() {
        let all = [
            Notification::ProductAdded,
            Notification::ProductDeleted,
            Notification::CartEmpty,
            Notification::FormIncomplete,
            Notification::OrderSubmitted,
        ];
        for event in all {
            assert!(!event.title().is_empty());
            assert!(!event.description().is_empty());
        }
    }

    #[test]
    fn test_recording_notifier_shares_buffer_across_clones() {
        let recorder = RecordingNotifier::new();
        let mut handle = recorder.clone();
        handle.notify(Notification::ProductAdded);
        handle.notify(Notification::OrderSubmitted);

        assert_eq!(
            recorder.events(),
            vec![Notification::ProductAdded, Notification::OrderSubmitted]
        );
    }
}

// src/core/channel.rs
//! Replay-latest publish/subscribe.
//!
//! A [`Channel`] always holds a current value. New subscribers see that
//! value on their first poll, then every value published after it. Only the
//! latest value is kept, so a subscriber that polls rarely skips the
//! intermediate ones and never holds up the publisher.

use tokio::sync::watch;

#[derive(Debug)]
pub struct Channel<T> {
    sender: watch::Sender<T>,
}

impl<T> Channel<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Replaces the current value and notifies every subscriber.
    ///
    /// Succeeds even when nobody is subscribed.
    pub fn publish(&self, value: T) {
        self.sender.send_replace(value);
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription<T> {
        let mut receiver = self.sender.subscribe();
        receiver.mark_changed();
        Subscription { receiver }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone> Channel<T> {
    #[must_use]
    pub fn current(&self) -> T {
        self.sender.borrow().clone()
    }
}

/// Read-only view onto a [`Channel`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: watch::Receiver<T>,
}

impl<T> Subscription<T> {
    /// Whether a value arrived that this subscriber has not taken yet.
    #[must_use]
    pub fn has_update(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }
}

impl<T: Clone> Subscription<T> {
    /// Takes the newest unseen value, or `None` when nothing changed.
    pub fn poll(&mut self) -> Option<T> {
        if !self.has_update() {
            return None;
        }
        Some(self.receiver.borrow_and_update().clone())
    }

    /// The channel's current value, seen or not.
    #[must_use]
    pub fn latest(&self) -> T {
        self.receiver.borrow().clone()
    }
}

//! Replay-latest broadcast channel.
//!
//! The services publish their last-fetched page through a [`Feed`]; pages
//! subscribe and re-render on every value. There is exactly one writer
//! (the owning service) and any number of readers, and a new subscriber
//! immediately receives the latest published value, so late-mounting
//! components never render an empty table while data exists.

use std::sync::{Arc, Mutex};

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

struct FeedInner<T> {
    latest: Option<T>,
    subscribers: Vec<UnboundedSender<T>>,
}

/// Single-writer, replay-latest broadcast of `T`.
///
/// Cloning the feed shares the underlying channel; clones are how the
/// writer and its readers hold the same feed from different components.
pub struct Feed<T> {
    inner: Arc<Mutex<FeedInner<T>>>,
}

impl<T> std::fmt::Debug for Feed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feed").finish_non_exhaustive()
    }
}

impl<T> Clone for Feed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Feed<T> {
    /// An empty feed with no published value yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FeedInner {
                latest: None,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Publish a value to every live subscriber and remember it for
    /// subscribers yet to come. Closed subscribers are pruned here.
    pub fn publish(&self, value: T) {
        if let Ok(mut inner) = self.inner.lock() {
            inner
                .subscribers
                .retain(|sender| sender.unbounded_send(value.clone()).is_ok());
            inner.latest = Some(value);
        }
    }

    /// The most recently published value, if any.
    #[must_use]
    pub fn latest(&self) -> Option<T> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.latest.clone())
    }

    /// Subscribe to the feed. The latest value, when one exists, is
    /// delivered immediately; every later publish follows in order.
    pub fn subscribe(&self) -> UnboundedReceiver<T> {
        let (sender, receiver) = unbounded();
        if let Ok(mut inner) = self.inner.lock() {
            if let Some(latest) = &inner.latest {
                // A full channel cannot happen on a fresh unbounded pair.
                let _ = sender.unbounded_send(latest.clone());
            }
            inner.subscribers.push(sender);
        }
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_tracks_the_last_publish() {
        let feed = Feed::new();
        assert_eq!(feed.latest(), None);
        feed.publish(1);
        feed.publish(2);
        assert_eq!(feed.latest(), Some(2));
    }

    #[test]
    fn new_subscriber_replays_the_latest_value() {
        let feed = Feed::new();
        feed.publish("first".to_string());
        feed.publish("second".to_string());

        let mut receiver = feed.subscribe();
        let replayed = receiver.try_next().unwrap();
        assert_eq!(replayed.as_deref(), Some("second"));
    }

    #[test]
    fn subscriber_before_any_publish_gets_nothing_until_one_happens() {
        let feed = Feed::new();
        let mut receiver = feed.subscribe();
        assert!(receiver.try_next().is_err());

        feed.publish(42);
        assert_eq!(receiver.try_next().unwrap(), Some(42));
    }

    #[test]
    fn every_live_subscriber_sees_every_publish() {
        let feed = Feed::new();
        let mut first = feed.subscribe();
        let mut second = feed.subscribe();

        feed.publish(1);
        feed.publish(2);

        assert_eq!(first.try_next().unwrap(), Some(1));
        assert_eq!(first.try_next().unwrap(), Some(2));
        assert_eq!(second.try_next().unwrap(), Some(1));
        assert_eq!(second.try_next().unwrap(), Some(2));
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let feed = Feed::new();
        let receiver = feed.subscribe();
        drop(receiver);

        feed.publish(1);
        let mut survivor = feed.subscribe();
        assert_eq!(survivor.try_next().unwrap(), Some(1));
    }

    #[test]
    fn clones_share_the_channel() {
        let feed = Feed::new();
        let writer = feed.clone();
        let mut receiver = feed.subscribe();

        writer.publish(7);
        assert_eq!(receiver.try_next().unwrap(), Some(7));
        assert_eq!(feed.latest(), Some(7));
    }
}

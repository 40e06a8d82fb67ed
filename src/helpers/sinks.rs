//! Channel sinks for [`Sequence`].
//!
//! - [`Sequence::to_channel`] - every element already buffered, channel already closed.
//! - [`Sequence::to_channel_with_buffer`] - a background producer streams elements through
//!   a bounded buffer and closes the channel when done.
//!
//! Map sinks (`to_map_with_key`, `to_map_with_key_value`) live next to `group_by`.

use crate::Sequence;
use crossbeam_channel::{Receiver, bounded};

impl<T: Clone> Sequence<T> {
    /// A receiver holding every element in order, with no live sender.
    ///
    /// Iterating the receiver ends after the last element.
    #[must_use]
    pub fn to_channel(&self) -> Receiver<T> {
        let (tx, rx) = bounded(self.items.len());
        for t in &self.items {
            // capacity == len and rx is alive, so this never blocks or fails
            let _ = tx.send(t.clone());
        }
        rx
    }
}

impl<T: Clone + Send + 'static> Sequence<T> {
    /// A receiver fed by a background producer through a buffer of `buffer` slots.
    ///
    /// The producer owns a copy of the elements and closes the channel after the last
    /// one. Dropping the receiver early stops the producer at its next send.
    #[must_use]
    pub fn to_channel_with_buffer(&self, buffer: usize) -> Receiver<T> {
        let (tx, rx) = bounded(buffer);
        let items = self.items.clone();
        std::thread::spawn(move || {
            let total = items.len();
            for (sent, t) in items.into_iter().enumerate() {
                if tx.send(t).is_err() {
                    tracing::debug!(sent, total, "receiver dropped; producer stopping early");
                    return;
                }
            }
            tracing::trace!(total, "producer finished; closing channel");
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use crate::Sequence;

    #[test]
    fn to_channel_is_closed_and_ordered() {
        let s: Sequence<i32> = (0..10).collect();
        let got: Vec<i32> = s.to_channel().iter().collect();
        assert_eq!(got, s.to_vec());
    }

    #[test]
    fn to_channel_with_small_buffer() {
        let s: Sequence<i32> = (0..10).collect();
        let got: Vec<i32> = s.to_channel_with_buffer(2).iter().collect();
        assert_eq!(got, s.to_vec());
    }

    #[test]
    fn early_drop_does_not_hang() {
        let s: Sequence<i32> = (0..1000).collect();
        let rx = s.to_channel_with_buffer(1);
        assert_eq!(rx.recv().ok(), Some(0));
        drop(rx);
    }
}

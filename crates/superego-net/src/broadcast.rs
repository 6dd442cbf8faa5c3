//! Fan-out to every socket that sent SUBSCRIBE. Each listener is a channel
//! into that socket's write task rather than the socket itself, so a full
//! or closed listener never blocks the others.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

/// Cheaply cloneable: every clone shares the same listener set, so the
/// game's observer closure and the event router can each hold one.
#[derive(Default, Clone)]
pub struct Broadcast {
    listeners: Arc<Mutex<Vec<mpsc::UnboundedSender<String>>>>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, sender: mpsc::UnboundedSender<String>) {
        self.listeners.lock().expect("lock poisoned").push(sender);
    }

    /// Best-effort fan-out: a send failure only drops that one listener,
    /// it never stops delivery to the rest.
    pub fn broadcast(&self, message: String) {
        let mut listeners = self.listeners.lock().expect("lock poisoned");
        listeners.retain(|tx| tx.send(message.clone()).is_ok());
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.listeners.lock().expect("lock poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_listeners_are_dropped_without_stopping_delivery_to_the_rest() {
        let broadcast = Broadcast::new();
        let (tx_alive, mut rx_alive) = mpsc::unbounded_channel();
        let (tx_dead, rx_dead) = mpsc::unbounded_channel();
        broadcast.add_listener(tx_alive);
        broadcast.add_listener(tx_dead);
        drop(rx_dead);

        broadcast.broadcast("hello".to_string());

        assert_eq!(broadcast.listener_count(), 1);
        assert_eq!(rx_alive.try_recv().unwrap(), "hello");
    }
}

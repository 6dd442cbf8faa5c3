use tokio::sync::mpsc;

use crate::broadcast::Broadcast;

/// `params: []`. Registers the calling socket's outbound channel as a
/// broadcast listener; never fails.
pub async fn handle(broadcast: &Broadcast, listener: mpsc::UnboundedSender<String>) {
    broadcast.add_listener(listener);
}

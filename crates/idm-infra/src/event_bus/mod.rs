//! In-process console event bus.

use tokio::sync::broadcast;
use tracing::{debug, trace};

use idm_core::ports::EventBusPort;
use idm_core::ConsoleEvent;

const DEFAULT_CAPACITY: usize = 64;

/// Broadcast-channel event bus: every subscriber sees every event published
/// after it subscribed.
#[derive(Debug, Clone)]
pub struct BroadcastEventBus {
    sender: broadcast::Sender<ConsoleEvent>,
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BroadcastEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventBusPort for BroadcastEventBus {
    fn publish(&self, event: ConsoleEvent) {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => trace!(event = name, receivers, "console event published"),
            // No subscribers is fine for fire-and-forget.
            Err(_) => debug!(event = name, "console event dropped, no subscribers"),
        }
    }
}

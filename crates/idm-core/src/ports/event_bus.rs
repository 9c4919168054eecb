use crate::event::ConsoleEvent;

/// Fire-and-forget publication of console events.
pub trait EventBusPort: Send + Sync {
    fn publish(&self, event: ConsoleEvent);
}


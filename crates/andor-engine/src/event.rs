//! Engine notifications
//!
//! Handlers fire synchronously, in the order the engine emits events.

use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UrlChanged(String),
    TitleChanged(String),
}

pub type EventHandler = Arc<dyn Fn(&EngineEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Subscription bookkeeping shared by engine implementations
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<(SubscriptionId, EventHandler)>,
    next_id: u64,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: EventHandler) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers.push((id, handler));
        id
    }

    /// Returns false if the subscription was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub fn emit(&self, event: &EngineEvent) {
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

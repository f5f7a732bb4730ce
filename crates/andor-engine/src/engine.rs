//! The engine trait consumed by tabs

use crate::capability::CapabilitySet;
use crate::event::{EventHandler, SubscriptionId};

/// One embedded web view.
///
/// Navigation methods default to no-ops. An engine only overrides the ones
/// it lists in `capabilities()`, and callers check that set first.
pub trait WebEngine: Send {
    fn capabilities(&self) -> CapabilitySet;

    fn url(&self) -> String;

    fn title(&self) -> String;

    fn set_url(&mut self, _url: &str) {}

    fn back(&mut self) {}

    fn forward(&mut self) {}

    fn reload(&mut self) {}

    fn subscribe(&mut self, handler: EventHandler) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Creates a fresh engine for every new tab
pub trait EngineFactory: Send + Sync {
    fn create(&self) -> Box<dyn WebEngine>;
}

impl<F> EngineFactory for F
where
    F: Fn() -> Box<dyn WebEngine> + Send + Sync,
{
    fn create(&self) -> Box<dyn WebEngine> {
        self()
    }
}

//! Test fixtures

use parking_lot::Mutex;
use std::sync::Arc;

use andor_engine::{
    CapabilitySet, EngineEvent, EventHandler, HandlerRegistry, SubscriptionId, WebEngine,
};
use andor_tabs::{NoopObserver, TabRegistry};

use crate::notice::{Notice, Notifier};

/// Engine serving a few known pages with real titles
pub struct FixtureEngine {
    url: String,
    title: String,
    handlers: HandlerRegistry,
}

impl FixtureEngine {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            title: String::new(),
            handlers: HandlerRegistry::new(),
        }
    }
}

impl WebEngine for FixtureEngine {
    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::all()
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
        self.title = match url {
            "https://example.com" => "Example",
            "https://rust-lang.org" => "Rust",
            _ => "Untitled",
        }
        .to_string();

        self.handlers.emit(&EngineEvent::UrlChanged(self.url.clone()));
        self.handlers
            .emit(&EngineEvent::TitleChanged(self.title.clone()));
    }

    fn subscribe(&mut self, handler: EventHandler) -> SubscriptionId {
        self.handlers.subscribe(handler)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.handlers.unsubscribe(id);
    }
}

pub fn fixture_factory() -> Box<dyn andor_engine::EngineFactory> {
    Box::new(|| Box::new(FixtureEngine::new()) as Box<dyn WebEngine>)
}

pub fn titled_tabs() -> TabRegistry {
    TabRegistry::new(fixture_factory(), Arc::new(NoopObserver))
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

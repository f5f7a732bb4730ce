//! In-memory engine
//!
//! Keeps a back/forward stack and reports every URL change the way a real
//! web view would: `UrlChanged` followed by `TitleChanged`. There is no page
//! content, so the title is the URL's host.

use url::Url;

use crate::capability::{Capability, CapabilitySet};
use crate::engine::{EngineFactory, WebEngine};
use crate::event::{EngineEvent, EventHandler, HandlerRegistry, SubscriptionId};

pub struct HeadlessEngine {
    capabilities: CapabilitySet,
    url: String,
    title: String,
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
    reload_count: u32,
    handlers: HandlerRegistry,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::with_capabilities(CapabilitySet::all())
    }

    pub fn with_capabilities(capabilities: CapabilitySet) -> Self {
        Self {
            capabilities,
            url: String::new(),
            title: String::new(),
            back_stack: Vec::new(),
            forward_stack: Vec::new(),
            reload_count: 0,
            handlers: HandlerRegistry::new(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    pub fn reload_count(&self) -> u32 {
        self.reload_count
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Report a title change, as a page setting `document.title` would
    pub fn report_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.handlers
            .emit(&EngineEvent::TitleChanged(self.title.clone()));
    }

    fn commit(&mut self, url: String) {
        self.url = url;
        self.handlers.emit(&EngineEvent::UrlChanged(self.url.clone()));
        let title = title_for(&self.url);
        self.report_title(title);
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WebEngine for HeadlessEngine {
    fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_url(&mut self, url: &str) {
        if !self.capabilities.contains(Capability::SetUrl) {
            return;
        }

        if !self.url.is_empty() {
            self.back_stack.push(std::mem::take(&mut self.url));
        }
        self.forward_stack.clear();

        tracing::trace!(url = %url, "Headless load");
        self.commit(url.to_string());
    }

    fn back(&mut self) {
        if !self.capabilities.contains(Capability::Back) {
            return;
        }

        if let Some(previous) = self.back_stack.pop() {
            self.forward_stack.push(std::mem::take(&mut self.url));
            self.commit(previous);
        }
    }

    fn forward(&mut self) {
        if !self.capabilities.contains(Capability::Forward) {
            return;
        }

        if let Some(next) = self.forward_stack.pop() {
            self.back_stack.push(std::mem::take(&mut self.url));
            self.commit(next);
        }
    }

    fn reload(&mut self) {
        if self.capabilities.contains(Capability::Reload) {
            self.reload_count += 1;
        }
    }

    fn subscribe(&mut self, handler: EventHandler) -> SubscriptionId {
        self.handlers.subscribe(handler)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.handlers.unsubscribe(id);
    }
}

fn title_for(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// Hands out `HeadlessEngine`s with a fixed capability set
#[derive(Debug, Clone, Copy)]
pub struct HeadlessEngineFactory {
    capabilities: CapabilitySet,
}

impl HeadlessEngineFactory {
    pub fn new() -> Self {
        Self::with_capabilities(CapabilitySet::all())
    }

    pub fn with_capabilities(capabilities: CapabilitySet) -> Self {
        Self { capabilities }
    }
}

impl Default for HeadlessEngineFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineFactory for HeadlessEngineFactory {
    fn create(&self) -> Box<dyn WebEngine> {
        Box::new(HeadlessEngine::with_capabilities(self.capabilities))
    }
}

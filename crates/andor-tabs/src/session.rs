//! Browser session (one per tab)

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use andor_engine::{Capability, CapabilitySet, EngineEvent, SubscriptionId, WebEngine};

use crate::error::TabError;
use crate::observer::TabObserver;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The part of a session the engine updates from its callbacks
#[derive(Debug, Clone, Default)]
struct PageState {
    url: String,
    title: String,
    /// Text shown on the tab
    label: String,
}

pub struct BrowserSession {
    id: SessionId,
    page: Arc<RwLock<PageState>>,
    engine: Box<dyn WebEngine>,
    subscription: Option<SubscriptionId>,
    created_at: DateTime<Utc>,
    last_accessed_at: DateTime<Utc>,
}

impl BrowserSession {
    pub fn new(engine: Box<dyn WebEngine>, url: &str, label: &str) -> Self {
        let now = Utc::now();

        Self {
            id: SessionId::new(),
            page: Arc::new(RwLock::new(PageState {
                url: url.to_string(),
                title: String::new(),
                label: label.to_string(),
            })),
            engine,
            subscription: None,
            created_at: now,
            last_accessed_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn url(&self) -> String {
        self.page.read().url.clone()
    }

    pub fn title(&self) -> String {
        self.page.read().title.clone()
    }

    pub fn label(&self) -> String {
        self.page.read().label.clone()
    }

    /// Title, or the URL while the page has none
    pub fn display_title(&self) -> String {
        let page = self.page.read();
        if page.title.is_empty() {
            page.url.clone()
        } else {
            page.title.clone()
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_accessed_at(&self) -> DateTime<Utc> {
        self.last_accessed_at
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.engine.capabilities()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    /// Load `url` in this tab's engine
    pub fn navigate(&mut self, url: &str) -> Result<()> {
        self.require(Capability::SetUrl)?;
        if url.is_empty() {
            return Err(TabError::InvalidUrl("URL cannot be empty".to_string()));
        }

        {
            let mut page = self.page.write();
            page.url = url.to_string();
            page.title = String::new(); // Reset title until page loads
        }

        tracing::debug!(tab_id = %self.id, url = %url, "Navigating tab");
        self.engine.set_url(url);
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<()> {
        self.require(Capability::Back)?;
        self.engine.back();
        Ok(())
    }

    pub fn go_forward(&mut self) -> Result<()> {
        self.require(Capability::Forward)?;
        self.engine.forward();
        Ok(())
    }

    pub fn reload(&mut self) -> Result<()> {
        self.require(Capability::Reload)?;
        self.engine.reload();
        Ok(())
    }

    /// Subscribe to the engine so URL/title changes flow into this session
    /// and out to the observer. Replaces any earlier subscription.
    pub(crate) fn attach(&mut self, observer: Arc<dyn TabObserver>) {
        self.detach();

        let id = self.id;
        let page = Arc::clone(&self.page);
        let handler = Arc::new(move |event: &EngineEvent| match event {
            EngineEvent::UrlChanged(url) => {
                page.write().url = url.clone();
                observer.url_changed(id, url);
            }
            EngineEvent::TitleChanged(title) => {
                {
                    let mut page = page.write();
                    page.title = title.clone();
                    page.label = title.clone();
                }
                observer.label_changed(id, title);
            }
        });

        self.subscription = Some(self.engine.subscribe(handler));
    }

    pub(crate) fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.engine.unsubscribe(subscription);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub(crate) fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }

    fn require(&self, capability: Capability) -> Result<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(TabError::UnsupportedCapability(capability))
        }
    }
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("id", &self.id)
            .field("page", &*self.page.read())
            .field("capabilities", &self.capabilities())
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}

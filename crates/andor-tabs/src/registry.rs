//! Tab Registry
//!
//! Ordered open tabs plus the active index.
//! - the active index is `None` only when there are no tabs
//! - the last tab can never be closed

use std::sync::Arc;

use andor_engine::EngineFactory;

use crate::error::TabError;
use crate::observer::TabObserver;
use crate::session::{BrowserSession, SessionId};

pub const DEFAULT_TAB_LABEL: &str = "New Tab";

pub struct TabRegistry {
    sessions: Vec<BrowserSession>,
    active: Option<usize>,
    engines: Box<dyn EngineFactory>,
    observer: Arc<dyn TabObserver>,
}

impl TabRegistry {
    pub fn new(engines: Box<dyn EngineFactory>, observer: Arc<dyn TabObserver>) -> Self {
        Self {
            sessions: Vec::new(),
            active: None,
            engines,
            observer,
        }
    }

    /// Open a tab labelled "New Tab"
    pub fn create_tab_default(&mut self, url: &str) -> SessionId {
        self.create_tab(url, DEFAULT_TAB_LABEL)
    }

    /// Open a tab on `url`, append it and make it active
    pub fn create_tab(&mut self, url: &str, label: &str) -> SessionId {
        let mut session = BrowserSession::new(self.engines.create(), url, label);
        session.attach(Arc::clone(&self.observer));

        match session.navigate(url) {
            Ok(()) => {}
            Err(TabError::UnsupportedCapability(capability)) => {
                tracing::debug!(
                    tab_id = %session.id(),
                    capability = %capability,
                    "Engine cannot load URLs, tab left blank"
                );
            }
            Err(e) => {
                tracing::warn!(tab_id = %session.id(), error = %e, "Initial load skipped");
            }
        }

        let id = session.id();
        self.sessions.push(session);
        self.set_active(self.sessions.len() - 1);

        tracing::info!(tab_id = %id, url = %url, tab_count = self.sessions.len(), "Created new tab");

        id
    }

    /// Close the tab at `index`. Returns false when nothing was closed:
    /// the index is out of range or it is the last remaining tab.
    pub fn close_tab(&mut self, index: usize) -> bool {
        if self.sessions.len() <= 1 || index >= self.sessions.len() {
            tracing::debug!(index, tab_count = self.sessions.len(), "Close ignored");
            return false;
        }

        let mut session = self.sessions.remove(index);
        session.detach();

        tracing::info!(tab_id = %session.id(), index, "Closed tab");

        let Some(active) = self.active else {
            return true;
        };

        if index < active {
            // Same tab, one slot to the left; nothing visible changed
            self.active = Some(active - 1);
        } else if index == active {
            let next = active.min(self.sessions.len() - 1);
            self.active = None;
            self.set_active(next);
        }

        true
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_session(&self) -> Option<&BrowserSession> {
        self.active.and_then(|index| self.sessions.get(index))
    }

    pub fn active_session_mut(&mut self) -> Option<&mut BrowserSession> {
        self.active.and_then(|index| self.sessions.get_mut(index))
    }

    /// Make the tab at `index` active. Out of range is ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        let Some(session) = self.sessions.get_mut(index) else {
            return false;
        };

        session.touch();
        self.active = Some(index);

        tracing::debug!(tab_id = %session.id(), index, "Activated tab");
        self.observer.active_changed(session);

        true
    }

    pub fn get(&self, index: usize) -> Option<&BrowserSession> {
        self.sessions.get(index)
    }

    pub fn index_of(&self, id: SessionId) -> Option<usize> {
        self.sessions.iter().position(|session| session.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrowserSession> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

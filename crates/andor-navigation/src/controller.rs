//! Navigation controller
//!
//! Stateless apart from the home URL. Every operation goes to the active tab;
//! operations the tab's engine does not support are skipped quietly.

use andor_engine::Capability;
use andor_tabs::{BrowserSession, TabError, TabRegistry};

use crate::error::NavigationError;
use crate::input::normalize_input;
use crate::Result;

pub const DEFAULT_HOMEPAGE: &str = "https://google.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Performed,
    /// The active tab's engine lacks the capability; nothing happened
    Unsupported(Capability),
    /// No tabs are open; nothing happened
    NoActiveTab,
    /// The tab refused the request, e.g. an empty home URL
    Rejected,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    home_url: String,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::with_home(DEFAULT_HOMEPAGE.to_string())
    }

    pub fn with_home(home_url: String) -> Self {
        Self { home_url }
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    pub fn go_back(&self, tabs: &mut TabRegistry) -> NavOutcome {
        apply(tabs, BrowserSession::go_back)
    }

    pub fn go_forward(&self, tabs: &mut TabRegistry) -> NavOutcome {
        apply(tabs, BrowserSession::go_forward)
    }

    pub fn reload(&self, tabs: &mut TabRegistry) -> NavOutcome {
        apply(tabs, BrowserSession::reload)
    }

    pub fn go_home(&self, tabs: &mut TabRegistry) -> NavOutcome {
        apply(tabs, |session| session.navigate(&self.home_url))
    }

    /// Navigate the active tab to whatever was typed in the address bar.
    ///
    /// Unlike the toolbar buttons, a missing tab is an error here: the user
    /// typed an address and should be told why nothing loaded.
    pub fn navigate_to(&self, tabs: &mut TabRegistry, raw_input: &str) -> Result<NavOutcome> {
        if tabs.active_session().is_none() {
            tracing::warn!(input = %raw_input, "Navigation requested with no open tab");
            return Err(NavigationError::NoActiveTab);
        }

        let url = normalize_input(raw_input)?;

        match apply(tabs, |session| session.navigate(&url)) {
            NavOutcome::NoActiveTab => Err(NavigationError::NoActiveTab),
            outcome => Ok(outcome),
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

fn apply<F>(tabs: &mut TabRegistry, operation: F) -> NavOutcome
where
    F: FnOnce(&mut BrowserSession) -> andor_tabs::Result<()>,
{
    let Some(session) = tabs.active_session_mut() else {
        return NavOutcome::NoActiveTab;
    };

    match operation(&mut *session) {
        Ok(()) => NavOutcome::Performed,
        Err(TabError::UnsupportedCapability(capability)) => {
            tracing::debug!(
                tab_id = %session.id(),
                capability = %capability,
                "Skipping unsupported navigation"
            );
            NavOutcome::Unsupported(capability)
        }
        Err(e) => {
            tracing::warn!(tab_id = %session.id(), error = %e, "Navigation rejected");
            NavOutcome::Rejected
        }
    }
}

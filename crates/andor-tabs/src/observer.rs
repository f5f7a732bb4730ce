//! UI hooks
//!
//! The window owns the URL bar and the tab strip. The registry tells it what
//! changed and leaves presentation to it.

use crate::session::{BrowserSession, SessionId};

pub trait TabObserver: Send + Sync {
    /// A different tab became active; refresh the URL bar
    fn active_changed(&self, _session: &BrowserSession) {}

    /// The engine of `id` reported a new URL
    fn url_changed(&self, _id: SessionId, _url: &str) {}

    /// The tab label of `id` should now read `label`
    fn label_changed(&self, _id: SessionId, _label: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TabObserver for NoopObserver {}

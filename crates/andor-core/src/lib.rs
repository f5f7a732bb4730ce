//! Andor Core
//!
//! Wires the browser's UI intents to the tab registry, navigation
//! controller, bookmark store and download bridge.

mod bookmarks;
mod browser;
mod config;
mod error;
mod notice;

#[cfg(test)]
mod testing;

pub use bookmarks::{Bookmark, BookmarkStore, BOOKMARKS_FILE};
pub use browser::Browser;
pub use config::Config;
pub use error::{BookmarkError, CoreError};
pub use notice::{Notice, NoticeLevel, Notifier};

// Re-export core components
pub use andor_download::{Download, DownloadBridge, DownloadRequest, DownloadState, SavePathPrompt};
pub use andor_engine::{
    Capability, CapabilitySet, EngineEvent, EngineFactory, HeadlessEngine, HeadlessEngineFactory,
    WebEngine,
};
pub use andor_navigation::{NavOutcome, NavigationController, NavigationError, DEFAULT_HOMEPAGE};
pub use andor_tabs::{BrowserSession, SessionId, TabError, TabObserver, TabRegistry};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. Logs go to stderr so they stay out of the shell's output.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

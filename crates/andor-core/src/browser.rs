//! Main browser state container
//!
//! Every toolbar button, shortcut and menu entry of the window lands on one
//! method here. Failures the user should see are sent to the `Notifier`;
//! none of them leave the browser unusable.

use std::sync::Arc;

use andor_download::{Download, DownloadBridge, DownloadRequest, SavePathPrompt};
use andor_engine::EngineFactory;
use andor_navigation::{NavOutcome, NavigationController, NavigationError};
use andor_tabs::{SessionId, TabObserver, TabRegistry};

use crate::bookmarks::{Bookmark, BookmarkStore};
use crate::config::Config;
use crate::error::CoreError;
use crate::notice::{Notice, Notifier};
use crate::Result;

pub struct Browser {
    config: Config,
    tabs: TabRegistry,
    navigation: NavigationController,
    bookmarks: BookmarkStore,
    downloads: DownloadBridge,
    notifier: Arc<dyn Notifier>,
}

impl Browser {
    pub fn new(
        config: Config,
        engines: Box<dyn EngineFactory>,
        observer: Arc<dyn TabObserver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            tabs: TabRegistry::new(engines, observer),
            navigation: NavigationController::with_home(config.homepage.clone()),
            bookmarks: BookmarkStore::new(config.bookmarks_path.clone()),
            downloads: DownloadBridge::new(config.download_dir.clone()),
            notifier,
            config,
        }
    }

    /// Open the startup tab on the homepage
    pub fn initialize(&mut self) -> SessionId {
        let homepage = self.config.homepage.clone();
        let id = self.tabs.create_tab_default(&homepage);

        tracing::info!(homepage = %homepage, "Browser initialized");

        id
    }

    // === Tab operations ===

    pub fn new_tab(&mut self) -> SessionId {
        let url = self.config.new_tab_url.clone();
        self.tabs.create_tab_default(&url)
    }

    pub fn open_tab(&mut self, url: &str, label: &str) -> SessionId {
        self.tabs.create_tab(url, label)
    }

    pub fn close_tab(&mut self, index: usize) -> bool {
        self.tabs.close_tab(index)
    }

    pub fn close_active_tab(&mut self) -> bool {
        match self.tabs.active_index() {
            Some(index) => self.tabs.close_tab(index),
            None => false,
        }
    }

    pub fn switch_tab(&mut self, index: usize) -> bool {
        self.tabs.set_active(index)
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    // === Navigation operations ===

    pub fn back(&mut self) -> NavOutcome {
        self.navigation.go_back(&mut self.tabs)
    }

    pub fn forward(&mut self) -> NavOutcome {
        self.navigation.go_forward(&mut self.tabs)
    }

    pub fn reload(&mut self) -> NavOutcome {
        self.navigation.reload(&mut self.tabs)
    }

    pub fn home(&mut self) -> NavOutcome {
        self.navigation.go_home(&mut self.tabs)
    }

    /// Address bar submission
    pub fn navigate(&mut self, input: &str) -> Result<NavOutcome> {
        match self.navigation.navigate_to(&mut self.tabs, input) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                let notice = match &e {
                    NavigationError::NoActiveTab => Notice::warning("No Tab", e.to_string()),
                    NavigationError::InvalidUrl(_) => {
                        Notice::warning("Invalid Address", e.to_string())
                    }
                };
                self.notifier.notify(notice);
                Err(e.into())
            }
        }
    }

    // === Bookmark operations ===

    /// Bookmark the active tab and write the file
    pub fn add_bookmark(&mut self) -> Result<Bookmark> {
        let Some(session) = self.tabs.active_session() else {
            self.notifier.notify(Notice::warning(
                "No Tab",
                "There is no active tab to bookmark.",
            ));
            return Err(CoreError::NoActiveTab);
        };

        match self.bookmarks.add(session) {
            Ok(bookmark) => {
                self.notifier.notify(Notice::info(
                    "Bookmark Added",
                    format!("Saved: {}", bookmark.title),
                ));
                Ok(bookmark)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save bookmark");
                self.notifier
                    .notify(Notice::warning("Bookmark Not Saved", e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Bookmarks for the menu. An unreadable file is reported and shown
    /// as an empty list; the file itself is left alone.
    pub fn bookmarks(&mut self) -> Vec<Bookmark> {
        match self.bookmarks.list() {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load bookmarks");
                self.notifier
                    .notify(Notice::warning("Bookmarks Unavailable", e.to_string()));
                Vec::new()
            }
        }
    }

    /// Open entry `index` of the last listed bookmarks in a new tab
    pub fn open_bookmark(&mut self, index: usize) -> Option<SessionId> {
        let bookmark = self.bookmarks.cached().get(index)?.clone();
        Some(self.tabs.create_tab(&bookmark.url, &bookmark.title))
    }

    // === Download operations ===

    pub fn handle_download(
        &self,
        request: &mut dyn DownloadRequest,
        prompt: &dyn SavePathPrompt,
    ) -> Download {
        self.downloads.on_download_requested(request, prompt)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::testing::{fixture_factory, RecordingNotifier};
    use andor_download::DownloadState;
    use andor_engine::{CapabilitySet, HeadlessEngineFactory};
    use andor_tabs::NoopObserver;
    use std::path::{Path, PathBuf};

    struct Harness {
        browser: Browser,
        notifier: Arc<RecordingNotifier>,
        _dir: tempfile::TempDir,
    }

    fn harness_with(engines: Box<dyn EngineFactory>) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(dir.path().join("bookmarks.json"));
        config.download_dir = PathBuf::from("/downloads");

        let notifier = Arc::new(RecordingNotifier::default());
        let browser = Browser::new(
            config,
            engines,
            Arc::new(NoopObserver),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );

        Harness {
            browser,
            notifier,
            _dir: dir,
        }
    }

    fn harness() -> Harness {
        harness_with(fixture_factory())
    }

    fn active_url(browser: &Browser) -> String {
        browser.tabs().active_session().unwrap().url()
    }

    #[test]
    fn test_startup_tab() {
        let mut h = harness();
        h.browser.initialize();

        assert_eq!(h.browser.tabs().len(), 1);
        assert_eq!(active_url(&h.browser), "https://google.com");
    }

    #[test]
    fn test_last_tab_cannot_be_closed() {
        let mut h = harness();
        h.browser.initialize();

        assert!(!h.browser.close_active_tab());
        assert_eq!(h.browser.tabs().len(), 1);

        h.browser.new_tab();
        assert!(h.browser.close_active_tab());
        assert_eq!(h.browser.tabs().len(), 1);
    }

    #[test]
    fn test_navigate_and_home() {
        let mut h = harness();
        h.browser.initialize();

        h.browser.navigate("example.com").unwrap();
        assert_eq!(active_url(&h.browser), "https://example.com");
        assert_eq!(h.browser.tabs().active_session().unwrap().label(), "Example");

        assert_eq!(h.browser.home(), NavOutcome::Performed);
        assert_eq!(active_url(&h.browser), "https://google.com");
        assert!(h.notifier.take().is_empty());
    }

    #[test]
    fn test_navigate_without_tab_warns() {
        let mut h = harness();

        let result = h.browser.navigate("example.com");
        assert!(matches!(
            result,
            Err(CoreError::Navigation(NavigationError::NoActiveTab))
        ));

        let notices = h.notifier.take();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(notices[0].title, "No Tab");
        assert_eq!(notices[0].message, "There is no active tab to navigate to.");

        // An empty address with no tab is still a missing tab
        assert!(matches!(
            h.browser.navigate(""),
            Err(CoreError::Navigation(NavigationError::NoActiveTab))
        ));
        assert_eq!(h.notifier.take()[0].title, "No Tab");
    }

    #[test]
    fn test_buttons_without_tab_are_silent() {
        let mut h = harness();

        assert_eq!(h.browser.back(), NavOutcome::NoActiveTab);
        assert_eq!(h.browser.forward(), NavOutcome::NoActiveTab);
        assert_eq!(h.browser.reload(), NavOutcome::NoActiveTab);
        assert_eq!(h.browser.home(), NavOutcome::NoActiveTab);
        assert!(h.notifier.take().is_empty());
    }

    #[test]
    fn test_unsupported_buttons_are_silent() {
        let mut h = harness_with(Box::new(HeadlessEngineFactory::with_capabilities(
            CapabilitySet::empty(),
        )));
        h.browser.initialize();

        assert!(matches!(h.browser.forward(), NavOutcome::Unsupported(_)));
        assert!(matches!(h.browser.reload(), NavOutcome::Unsupported(_)));
        assert!(h.browser.navigate("example.com").is_ok());
        assert!(h.notifier.take().is_empty());
    }

    #[test]
    fn test_bookmark_scenario() {
        let mut h = harness();
        h.browser.initialize();
        assert!(h.browser.bookmarks().is_empty());

        h.browser.navigate("https://example.com").unwrap();
        let a = h.browser.add_bookmark().unwrap();
        assert_eq!(h.browser.bookmarks(), vec![a.clone()]);

        h.browser.navigate("rust-lang.org").unwrap();
        let b = h.browser.add_bookmark().unwrap();
        assert_eq!(h.browser.bookmarks(), vec![a.clone(), b.clone()]);

        assert_eq!(a, Bookmark::new("Example", "https://example.com"));
        assert_eq!(b, Bookmark::new("Rust", "https://rust-lang.org"));

        let notices = h.notifier.take();
        assert_eq!(
            notices,
            vec![
                Notice::info("Bookmark Added", "Saved: Example"),
                Notice::info("Bookmark Added", "Saved: Rust"),
            ]
        );
    }

    #[test]
    fn test_add_bookmark_without_tab() {
        let mut h = harness();

        assert!(matches!(
            h.browser.add_bookmark(),
            Err(CoreError::NoActiveTab)
        ));
        assert_eq!(
            h.notifier.take(),
            vec![Notice::warning(
                "No Tab",
                "There is no active tab to bookmark."
            )]
        );
    }

    #[test]
    fn test_malformed_bookmarks_are_reported() {
        let mut h = harness();
        h.browser.initialize();
        let path = h.browser.config().bookmarks_path.clone();
        std::fs::write(&path, "{ broken").unwrap();

        assert!(h.browser.bookmarks().is_empty());
        assert!(matches!(
            h.browser.add_bookmark(),
            Err(CoreError::Bookmark(_))
        ));

        let notices = h.notifier.take();
        assert_eq!(notices.len(), 2);
        assert!(notices
            .iter()
            .all(|notice| notice.level == NoticeLevel::Warning));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[test]
    fn test_open_bookmark_uses_its_title() {
        let mut h = harness();
        h.browser.initialize();
        h.browser.navigate("example.com").unwrap();
        h.browser.add_bookmark().unwrap();
        h.browser.navigate("rust-lang.org").unwrap();
        h.browser.add_bookmark().unwrap();

        let listed = h.browser.bookmarks();
        assert_eq!(listed.len(), 2);

        let id = h.browser.open_bookmark(0).unwrap();
        let index = h.browser.tabs().index_of(id).unwrap();
        let session = h.browser.tabs().get(index).unwrap();
        assert_eq!(session.url(), "https://example.com");
        assert_eq!(h.browser.tabs().active_index(), Some(index));

        assert!(h.browser.open_bookmark(5).is_none());
    }

    #[test]
    fn test_open_bookmark_after_file_breaks() {
        let mut h = harness();
        h.browser.initialize();
        h.browser.navigate("example.com").unwrap();
        h.browser.add_bookmark().unwrap();
        assert_eq!(h.browser.bookmarks().len(), 1);

        let path = h.browser.config().bookmarks_path.clone();
        std::fs::write(&path, "{ broken").unwrap();

        // The menu shows nothing, so there is nothing to open either
        assert!(h.browser.bookmarks().is_empty());
        assert!(h.browser.open_bookmark(0).is_none());
        assert_eq!(h.browser.tabs().len(), 1);
    }

    #[test]
    fn test_switch_tab() {
        let mut h = harness();
        h.browser.initialize();
        h.browser.open_tab("https://example.com", "Example");

        assert!(h.browser.switch_tab(0));
        assert_eq!(active_url(&h.browser), "https://google.com");
        assert!(!h.browser.switch_tab(9));
        assert_eq!(h.browser.tabs().active_index(), Some(0));
    }

    struct Request {
        accepted: bool,
        cancelled: bool,
        path: Option<PathBuf>,
    }

    impl DownloadRequest for Request {
        fn url(&self) -> String {
            "https://example.com/file.bin".to_string()
        }

        fn suggested_file_name(&self) -> String {
            "file.bin".to_string()
        }

        fn set_path(&mut self, path: &Path) {
            self.path = Some(path.to_path_buf());
        }

        fn accept(&mut self) {
            self.accepted = true;
        }

        fn cancel(&mut self) {
            self.cancelled = true;
        }
    }

    #[test]
    fn test_handle_download() {
        let h = harness();
        let mut request = Request {
            accepted: false,
            cancelled: false,
            path: None,
        };

        let download = h.browser.handle_download(&mut request, &|suggested: &Path| {
            assert_eq!(suggested, Path::new("/downloads/file.bin"));
            Some(PathBuf::from("/tmp/file.bin"))
        });

        assert_eq!(download.state, DownloadState::Downloading);
        assert_eq!(request.path, Some(PathBuf::from("/tmp/file.bin")));
        assert!(request.accepted && !request.cancelled);
    }
}

//! Terminal stand-ins for the window's widgets

use parking_lot::Mutex;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use url::Url;

use andor_core::{
    BrowserSession, DownloadRequest, Notice, NoticeLevel, Notifier, SavePathPrompt, SessionId,
    TabObserver,
};

/// Prints the URL bar whenever it would change
#[derive(Default)]
pub struct TerminalObserver {
    active: Mutex<Option<SessionId>>,
}

impl TabObserver for TerminalObserver {
    fn active_changed(&self, session: &BrowserSession) {
        *self.active.lock() = Some(session.id());
        println!("[{}] {}", session.label(), session.url());
    }

    fn url_changed(&self, id: SessionId, url: &str) {
        if *self.active.lock() == Some(id) {
            println!("  -> {url}");
        }
    }

    fn label_changed(&self, id: SessionId, label: &str) {
        tracing::debug!(tab_id = %id, label = %label, "Tab label changed");
    }
}

/// Message boxes become prefixed lines
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{}: {}", notice.title, notice.message),
            NoticeLevel::Warning => println!("! {}: {}", notice.title, notice.message),
        }
    }
}

/// "Save File" dialog on stdin: enter a path, `.` for the suggestion,
/// or nothing to cancel
pub struct StdinPrompt;

impl SavePathPrompt for StdinPrompt {
    fn choose_save_path(&self, suggested: &Path) -> Option<PathBuf> {
        print!("Save file [{}] (. to accept, empty to cancel): ", suggested.display());
        io::stdout().flush().ok()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line).ok()?;

        match line.trim() {
            "" => None,
            "." => Some(suggested.to_path_buf()),
            path => Some(PathBuf::from(path)),
        }
    }
}

/// A download request as the engine would hand it over
pub struct ShellDownload {
    url: String,
    path: Option<PathBuf>,
}

impl ShellDownload {
    pub fn new(url: String) -> Self {
        Self { url, path: None }
    }
}

impl DownloadRequest for ShellDownload {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn suggested_file_name(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|url| {
                url.path_segments()
                    .and_then(|mut segments| segments.next_back().map(str::to_string))
            })
            .unwrap_or_default()
    }

    fn set_path(&mut self, path: &Path) {
        self.path = Some(path.to_path_buf());
    }

    fn accept(&mut self) {
        if let Some(path) = &self.path {
            println!("Downloading {} to {}", self.url, path.display());
        }
    }

    fn cancel(&mut self) {
        println!("Download of {} cancelled", self.url);
    }
}

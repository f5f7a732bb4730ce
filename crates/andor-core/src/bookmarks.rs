//! Bookmark store
//!
//! Bookmarks are a JSON array of `{"title", "url"}` objects in a single file.
//! The file is always rewritten whole: load, change, save.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use andor_tabs::BrowserSession;

use crate::error::BookmarkError;

pub const BOOKMARKS_FILE: &str = "bookmarks.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Bookmark whatever the tab is showing right now
    pub fn from_session(session: &BrowserSession) -> Self {
        Self::new(session.title(), session.url())
    }
}

pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bookmarks: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What the last successful load or save saw
    pub fn cached(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Read the file. A missing file is an empty list; a malformed or
    /// unreadable one is an error and empties the cached list.
    pub fn load(&mut self) -> Result<Vec<Bookmark>, BookmarkError> {
        let bookmarks = match read_bookmarks(&self.path) {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                self.bookmarks.clear();
                return Err(e);
            }
        };

        tracing::debug!(path = %self.path.display(), count = bookmarks.len(), "Loaded bookmarks");

        self.bookmarks = bookmarks.clone();
        Ok(bookmarks)
    }

    /// Replace the file with `bookmarks`, pretty-printed.
    ///
    /// The data goes to a temp file beside the target which is then renamed
    /// over it, so a failed write leaves the old file intact.
    pub fn save(&mut self, bookmarks: Vec<Bookmark>) -> Result<(), BookmarkError> {
        let data = serde_json::to_vec_pretty(&bookmarks)
            .map_err(|e| io_error(&self.path, e.into()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| io_error(&self.path, e))?;
        file.write_all(&data)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| io_error(&self.path, e))?;
        file.persist(&self.path)
            .map_err(|e| io_error(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), count = bookmarks.len(), "Saved bookmarks");

        self.bookmarks = bookmarks;
        Ok(())
    }

    /// Append one bookmark: load, push, save
    pub fn append(&mut self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        let mut bookmarks = self.load()?;
        bookmarks.push(bookmark.clone());
        self.save(bookmarks)?;

        tracing::info!(title = %bookmark.title, url = %bookmark.url, "Added bookmark");

        Ok(bookmark)
    }

    /// Bookmark the session's current page
    pub fn add(&mut self, session: &BrowserSession) -> Result<Bookmark, BookmarkError> {
        self.append(Bookmark::from_session(session))
    }

    /// All bookmarks, freshly read from disk
    pub fn list(&mut self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.load()
    }
}

fn read_bookmarks(path: &Path) -> Result<Vec<Bookmark>, BookmarkError> {
    match fs::read(path) {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| BookmarkError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(io_error(path, e)),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> BookmarkError {
    BookmarkError::Io {
        path: path.to_path_buf(),
        source,
    }
}

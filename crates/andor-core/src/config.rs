//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use andor_navigation::DEFAULT_HOMEPAGE;

use crate::bookmarks::BOOKMARKS_FILE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Loaded by the startup tab and the home button
    pub homepage: String,
    /// Loaded by new tabs
    pub new_tab_url: String,
    /// JSON file holding the bookmarks
    pub bookmarks_path: PathBuf,
    /// Directory the save dialog starts in
    pub download_dir: PathBuf,
}

impl Config {
    pub fn new(bookmarks_path: PathBuf) -> Self {
        Self {
            homepage: DEFAULT_HOMEPAGE.to_string(),
            new_tab_url: DEFAULT_HOMEPAGE.to_string(),
            bookmarks_path,
            download_dir: default_download_dir(),
        }
    }
}

impl Default for Config {
    /// Bookmarks live next to the working directory, as `bookmarks.json`
    fn default() -> Self {
        Self::new(PathBuf::from(BOOKMARKS_FILE))
    }
}

/// The user's download folder (XDG user dirs on Linux), else the working
/// directory
fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

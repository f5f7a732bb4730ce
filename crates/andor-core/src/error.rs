//! Core error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("Bookmarks file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot access bookmarks file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] andor_navigation::NavigationError),

    #[error("Bookmark error: {0}")]
    Bookmark(#[from] BookmarkError),

    #[error("There is no active tab")]
    NoActiveTab,
}

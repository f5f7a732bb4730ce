//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("There is no active tab to navigate to.")]
    NoActiveTab,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

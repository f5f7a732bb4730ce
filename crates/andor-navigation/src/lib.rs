//! Andor Navigation
//!
//! Toolbar intents (back, forward, reload, home) and address bar
//! submissions, applied to whichever tab is active.

mod controller;
mod error;
mod input;

pub use controller::{NavOutcome, NavigationController, DEFAULT_HOMEPAGE};
pub use error::NavigationError;
pub use input::normalize_input;

pub type Result<T> = std::result::Result<T, NavigationError>;

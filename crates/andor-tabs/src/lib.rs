//! Andor Tab Management
//!
//! One `BrowserSession` per open tab, each wrapping its own engine.
//! The `TabRegistry` keeps them in display order and tracks the active one.

mod error;
mod observer;
mod registry;
mod session;

pub use error::TabError;
pub use observer::{NoopObserver, TabObserver};
pub use registry::{TabRegistry, DEFAULT_TAB_LABEL};
pub use session::{BrowserSession, SessionId};

pub type Result<T> = std::result::Result<T, TabError>;

//! Andor Engine Interface
//!
//! The embedded web engine does the rendering, networking and history.
//! This crate is the seam the rest of the browser talks to:
//! - `WebEngine` - one engine instance per tab
//! - `Capability` - the navigation operations an engine may support
//! - `EngineEvent` - URL/title change notifications
//!
//! `HeadlessEngine` is an in-memory implementation with a back/forward stack.

mod capability;
mod engine;
mod event;
mod headless;

pub use capability::{Capability, CapabilitySet};
pub use engine::{EngineFactory, WebEngine};
pub use event::{EngineEvent, EventHandler, HandlerRegistry, SubscriptionId};
pub use headless::{HeadlessEngine, HeadlessEngineFactory};

//! Tab error types

use andor_engine::Capability;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Unsupported capability: {0}")]
    UnsupportedCapability(Capability),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

//! Andor Download Bridge
//!
//! The engine does the transfer. This crate only decides where the file goes:
//! ask the user for a save location, then accept with that path or cancel.
//! A request is never left pending.

mod bridge;
mod download;

pub use bridge::{DownloadBridge, DownloadRequest, SavePathPrompt};
pub use download::{Download, DownloadState};

//! User-visible notices
//!
//! The GUI showed these as message boxes. Anything that implements
//! `Notifier` can display them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

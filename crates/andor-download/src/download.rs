//! Download record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadState {
    /// Waiting for the user to pick a location
    Pending,
    /// Accepted; the engine is transferring
    Downloading,
    /// Rejected by the user
    Cancelled,
}

impl DownloadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::Pending => "pending",
            DownloadState::Downloading => "downloading",
            DownloadState::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for DownloadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub id: String,
    pub url: String,
    /// Sanitized name suggested by the engine
    pub file_name: String,
    /// Where the user chose to save, once accepted
    pub file_path: Option<String>,
    pub state: DownloadState,
    pub created_at: DateTime<Utc>,
}

impl Download {
    pub fn new(url: String, file_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url,
            file_name,
            file_path: None,
            state: DownloadState::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.state == DownloadState::Downloading
    }
}

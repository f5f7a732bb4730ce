//! Download bridge

use std::path::{Path, PathBuf};

use crate::download::{Download, DownloadState};

/// A download the engine has announced and is holding until told what to do
pub trait DownloadRequest {
    fn url(&self) -> String;

    fn suggested_file_name(&self) -> String;

    fn set_path(&mut self, path: &Path);

    fn accept(&mut self);

    /// Releases the pending download. The engine does not infer this from
    /// inaction.
    fn cancel(&mut self);
}

/// The "Save File" dialog. `None` means the user dismissed it.
pub trait SavePathPrompt {
    fn choose_save_path(&self, suggested: &Path) -> Option<PathBuf>;
}

impl<F> SavePathPrompt for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn choose_save_path(&self, suggested: &Path) -> Option<PathBuf> {
        self(suggested)
    }
}

#[derive(Debug, Clone)]
pub struct DownloadBridge {
    /// Directory the suggested path points into
    download_dir: PathBuf,
}

impl DownloadBridge {
    pub fn new(download_dir: PathBuf) -> Self {
        Self { download_dir }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Ask where to save, then accept with that path or cancel
    pub fn on_download_requested(
        &self,
        request: &mut dyn DownloadRequest,
        prompt: &dyn SavePathPrompt,
    ) -> Download {
        let file_name = sanitize_file_name(&request.suggested_file_name());
        let mut download = Download::new(request.url(), file_name);
        let suggested = self.download_dir.join(&download.file_name);

        tracing::info!(
            download_id = %download.id,
            url = %download.url,
            suggested = %suggested.display(),
            "Download requested"
        );

        match prompt
            .choose_save_path(&suggested)
            .filter(|path| !path.as_os_str().is_empty())
        {
            Some(path) => {
                request.set_path(&path);
                request.accept();

                download.file_path = Some(path.to_string_lossy().to_string());
                download.state = DownloadState::Downloading;

                tracing::info!(download_id = %download.id, path = %path.display(), "Started download");
            }
            None => {
                request.cancel();
                download.state = DownloadState::Cancelled;

                tracing::info!(download_id = %download.id, "Cancelled download");
            }
        }

        download
    }
}

fn sanitize_file_name(file_name: &str) -> String {
    let name = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("download")
        .trim();

    if name.is_empty() {
        "download".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Debug, Default)]
    struct FakeRequest {
        suggested: String,
        path: Option<PathBuf>,
        accepted: bool,
        cancelled: bool,
    }

    impl FakeRequest {
        fn named(suggested: &str) -> Self {
            Self {
                suggested: suggested.to_string(),
                ..Self::default()
            }
        }
    }

    impl DownloadRequest for FakeRequest {
        fn url(&self) -> String {
            format!("https://example.com/{}", self.suggested)
        }

        fn suggested_file_name(&self) -> String {
            self.suggested.clone()
        }

        fn set_path(&mut self, path: &Path) {
            self.path = Some(path.to_path_buf());
        }

        fn accept(&mut self) {
            self.accepted = true;
        }

        fn cancel(&mut self) {
            self.cancelled = true;
        }
    }

    fn bridge() -> DownloadBridge {
        DownloadBridge::new(PathBuf::from("/downloads"))
    }

    #[test]
    fn test_chosen_path_accepts() {
        let mut request = FakeRequest::named("file.bin");
        let prompt = |_: &Path| Some(PathBuf::from("/tmp/file.bin"));

        let download = bridge().on_download_requested(&mut request, &prompt);

        assert_eq!(request.path, Some(PathBuf::from("/tmp/file.bin")));
        assert!(request.accepted);
        assert!(!request.cancelled);
        assert_eq!(download.state, DownloadState::Downloading);
        assert_eq!(download.file_path.as_deref(), Some("/tmp/file.bin"));
    }

    #[test]
    fn test_dismissed_prompt_cancels() {
        let mut request = FakeRequest::named("file.bin");
        let prompt = |_: &Path| -> Option<PathBuf> { None };

        let download = bridge().on_download_requested(&mut request, &prompt);

        assert!(request.cancelled);
        assert!(!request.accepted);
        assert!(request.path.is_none());
        assert_eq!(download.state, DownloadState::Cancelled);
    }

    #[test]
    fn test_empty_path_cancels() {
        let mut request = FakeRequest::named("file.bin");
        let prompt = |_: &Path| Some(PathBuf::new());

        let download = bridge().on_download_requested(&mut request, &prompt);

        assert!(request.cancelled);
        assert_eq!(download.state, DownloadState::Cancelled);
    }

    #[test]
    fn test_prompt_sees_sanitized_suggestion() {
        let seen = Mutex::new(None);
        let mut request = FakeRequest::named("../../etc/report.pdf");
        let prompt = |suggested: &Path| -> Option<PathBuf> {
            *seen.lock() = Some(suggested.to_path_buf());
            None
        };

        let download = bridge().on_download_requested(&mut request, &prompt);

        assert_eq!(download.file_name, "report.pdf");
        assert_eq!(*seen.lock(), Some(PathBuf::from("/downloads/report.pdf")));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("a/b/c.txt"), "c.txt");
        assert_eq!(sanitize_file_name(""), "download");
        assert_eq!(sanitize_file_name(".."), "download");
    }
}

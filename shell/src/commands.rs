//! Shell command parsing
//!
//! One command per line. Each maps to a toolbar button, shortcut or menu
//! entry of the window.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    NewTab,
    /// Close the given tab, or the active one
    Close(Option<usize>),
    Switch(usize),
    Tabs,
    Back,
    Forward,
    Reload,
    Home,
    Go(String),
    Bookmark,
    Bookmarks,
    OpenBookmark(usize),
    Download(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  new              open a new tab
  close [n]        close tab n (default: the active tab)
  tab <n>          switch to tab n
  tabs             list open tabs
  back | forward | reload | home
  go <address>     load an address in the active tab
  bookmark         bookmark the active tab
  bookmarks        list bookmarks
  open <n>         open bookmark n in a new tab
  download <url>   simulate a download of <url>
  help | quit";

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next().map(str::trim).filter(|s| !s.is_empty());

        let command = match (name.as_str(), arg) {
            ("new" | "t", None) => ShellCommand::NewTab,
            ("close" | "w", None) => ShellCommand::Close(None),
            ("close" | "w", Some(n)) => ShellCommand::Close(Some(index(n)?)),
            ("tab", Some(n)) => ShellCommand::Switch(index(n)?),
            ("tabs", None) => ShellCommand::Tabs,
            ("back", None) => ShellCommand::Back,
            ("forward", None) => ShellCommand::Forward,
            ("reload", None) => ShellCommand::Reload,
            ("home", None) => ShellCommand::Home,
            ("go", Some(address)) => ShellCommand::Go(address.to_string()),
            ("bookmark", None) => ShellCommand::Bookmark,
            ("bookmarks", None) => ShellCommand::Bookmarks,
            ("open", Some(n)) => ShellCommand::OpenBookmark(index(n)?),
            ("download", Some(url)) => ShellCommand::Download(url.to_string()),
            ("help" | "?", None) => ShellCommand::Help,
            ("quit" | "exit", None) => ShellCommand::Quit,
            _ => return Err(format!("Unknown command: {line} (try `help`)")),
        };

        Ok(Some(command))
    }
}

fn index(arg: &str) -> Result<usize, String> {
    arg.parse()
        .map_err(|_| format!("Expected a number, got `{arg}`"))
}

//! Andor Browser - terminal shell
//!
//! Drives the browser core from stdin, with the headless engine standing in
//! for the web view.

mod commands;
mod terminal;

use std::io::{self, Write};
use std::sync::Arc;

use andor_core::{Browser, Config, HeadlessEngineFactory, NavOutcome};

use commands::{ShellCommand, HELP};
use terminal::{ShellDownload, StdinPrompt, TerminalNotifier, TerminalObserver};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    andor_core::init_logging();

    let mut browser = Browser::new(
        Config::default(),
        Box::new(HeadlessEngineFactory::new()),
        Arc::new(TerminalObserver::default()),
        Arc::new(TerminalNotifier),
    );
    browser.initialize();

    tracing::info!(
        bookmarks = %browser.config().bookmarks_path.display(),
        "Andor started"
    );
    println!("Andor. Type `help` for commands.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        run(&mut browser, command);
    }

    tracing::info!("Andor stopped");
    Ok(())
}

fn run(browser: &mut Browser, command: ShellCommand) {
    match command {
        ShellCommand::NewTab => {
            browser.new_tab();
        }
        ShellCommand::Close(index) => {
            let closed = match index {
                Some(index) => browser.close_tab(index),
                None => browser.close_active_tab(),
            };
            if !closed {
                println!("Nothing closed");
            }
        }
        ShellCommand::Switch(index) => {
            if !browser.switch_tab(index) {
                println!("No tab {index}");
            }
        }
        ShellCommand::Tabs => print_tabs(browser),
        ShellCommand::Back => report(browser.back()),
        ShellCommand::Forward => report(browser.forward()),
        ShellCommand::Reload => report(browser.reload()),
        ShellCommand::Home => report(browser.home()),
        ShellCommand::Go(address) => {
            // Failures were already shown as notices
            if let Ok(outcome) = browser.navigate(&address) {
                report(outcome);
            }
        }
        ShellCommand::Bookmark => {
            let _ = browser.add_bookmark();
        }
        ShellCommand::Bookmarks => {
            let bookmarks = browser.bookmarks();
            if bookmarks.is_empty() {
                println!("No bookmarks");
            }
            for (i, bookmark) in bookmarks.iter().enumerate() {
                println!("{i:>3}  {}  {}", bookmark.title, bookmark.url);
            }
        }
        ShellCommand::OpenBookmark(index) => {
            if browser.open_bookmark(index).is_none() {
                println!("No bookmark {index} (list them with `bookmarks`)");
            }
        }
        ShellCommand::Download(url) => {
            let mut request = ShellDownload::new(url);
            let download = browser.handle_download(&mut request, &StdinPrompt);
            tracing::debug!(download_id = %download.id, state = %download.state, "Download handled");
        }
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => {}
    }
}

fn print_tabs(browser: &Browser) {
    let active = browser.tabs().active_index();
    for (i, session) in browser.tabs().iter().enumerate() {
        let marker = if Some(i) == active { '*' } else { ' ' };
        println!("{marker}{i:>2}  {}  {}", session.label(), session.url());
    }
}

fn report(outcome: NavOutcome) {
    match outcome {
        NavOutcome::Performed => {}
        NavOutcome::Unsupported(capability) => {
            tracing::debug!(capability = %capability, "Not supported by this tab");
        }
        NavOutcome::NoActiveTab => println!("No open tab"),
        NavOutcome::Rejected => println!("The tab rejected the request"),
    }
}

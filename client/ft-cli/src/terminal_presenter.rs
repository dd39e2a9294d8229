use ft_auth::{ConnectivityStatus, Presenter};

use log::debug;

/// Prints flow feedback: errors to stderr, everything else to stdout.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }
}

/// Line printed for a connectivity change.
pub fn connectivity_line(status: ConnectivityStatus) -> String {
    match status.banner_text() {
        Some(banner) => banner.to_string(),
        None => format!("Connectivity: {status}"),
    }
}

impl Presenter for TerminalPresenter {
    fn show_loading(&self, text: &str) {
        println!("{text}");
    }

    fn hide_loading(&self) {}

    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn dismiss_error(&self, message: &str) {
        debug!("Dismissed error: {message}");
    }

    fn show_success(&self, message: &str) {
        println!("{message}");
    }

    fn show_connectivity(&self, status: ConnectivityStatus) {
        println!("{}", connectivity_line(status));
    }
}

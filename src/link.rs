//! Opens repository URLs in the platform browser.
//!
//! Failure here is diagnostic-only: there is nothing useful to show the
//! user in the TUI if their desktop has no handler for https URLs.

use log::{info, warn};

/// Hands `url` to the platform's default handler. Logs and returns on
/// failure; never surfaces an error to the UI.
pub fn open_in_browser(url: &str) {
    info!("Opening {url} in browser");
    if let Err(e) = open::that(url) {
        warn!("Failed to open {url}: {e}");
    }
}

//! Local dev/status server.
//!
//! With `--serve`, the shell publishes a [`ShellSnapshot`] after every
//! redraw. The server exposes it as JSON at `/state` and as a self-refreshing
//! page at `/`, and can open that page in the default browser.

mod html;
mod server;
mod snapshot;

pub use server::{router, start_dev_server_on, DevServer, SharedSnapshot};
pub use snapshot::ShellSnapshot;

/// Open `url` in the default browser.
///
/// Failure is logged and otherwise ignored; the TUI works without it.
pub fn open_in_browser(url: &str) {
    match webbrowser::open(url) {
        Ok(()) => tracing::info!(url, "opened dev server in browser"),
        Err(e) => tracing::warn!(url, error = %e, "could not open browser"),
    }
}

use crate::connectivity::connectivity_status::ConnectivityStatus;

/// Where flow results become visible to the user.
///
/// Calls are fire-and-forget; a presenter never fails a flow.
pub trait Presenter: Send + Sync {
    /// Show the loading overlay with `text`.
    fn show_loading(&self, text: &str);

    fn hide_loading(&self);

    /// Transient inline error.
    fn show_error(&self, message: &str);

    /// Remove `message` if it is still showing.
    fn dismiss_error(&self, message: &str);

    /// Persistent until the next navigation.
    fn show_success(&self, message: &str);

    fn show_connectivity(&self, status: ConnectivityStatus);
}

use crate::presentation::presenter::Presenter;

use std::sync::Arc;

/// Shows the loading overlay while alive and hides it on drop, so every
/// exit path of a pending call removes it.
pub struct LoadingGuard {
    presenter: Arc<dyn Presenter>,
}

impl LoadingGuard {
    pub fn show(presenter: Arc<dyn Presenter>, text: &str) -> Self {
        presenter.show_loading(text);
        Self { presenter }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.presenter.hide_loading();
    }
}

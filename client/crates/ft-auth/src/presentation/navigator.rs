use crate::session::surface::Surface;

/// Performs full-page navigations.
pub trait Navigator: Send + Sync {
    fn navigate(&self, surface: Surface);
}

pub(crate) mod auth_controller;
pub(crate) mod loading_guard;
pub(crate) mod navigator;
pub(crate) mod presenter;
pub(crate) mod route_guard;

pub use auth_controller::AuthController;
pub use loading_guard::LoadingGuard;
pub use navigator::Navigator;
pub use presenter::Presenter;
pub use route_guard::RouteGuard;

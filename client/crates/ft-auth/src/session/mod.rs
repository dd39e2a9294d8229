pub(crate) mod navigation;
pub(crate) mod resolution;
pub(crate) mod session_context;
pub(crate) mod session_resolver;
pub(crate) mod session_state;
pub(crate) mod surface;

pub use navigation::Navigation;
pub use resolution::Resolution;
pub use session_context::SessionContext;
pub use session_resolver::SessionResolver;
pub use session_state::SessionState;
pub use surface::Surface;

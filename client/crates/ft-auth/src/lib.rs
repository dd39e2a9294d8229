//! ft-auth
//!
//! Dual-mode authentication for the FinTrack client: a remote auth service
//! first, a local credential table when the service is unreachable, and the
//! session resolution that keeps page navigation consistent with both.

pub(crate) mod connectivity;
pub(crate) mod error;
pub(crate) mod flows;
pub mod messages;
pub(crate) mod presentation;
pub(crate) mod remote;
pub(crate) mod session;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use connectivity::{ConnectivityMonitor, ConnectivityStatus, MonitorHandle};
pub use error::{AuthError, Result as AuthResult};
pub use flows::{
    AuthMode, Authenticator, LoginForm, LoginOutcome, RegistrationForm, RegistrationOutcome,
    ValidationError, allows_local_registration,
};
pub use presentation::{AuthController, LoadingGuard, Navigator, Presenter, RouteGuard};
pub use remote::{
    AuthApi, HttpAuthApi, LoginResponse, Reachability, RemoteError, RemoteResult, RemoteUser,
};
pub use session::{Navigation, Resolution, SessionContext, SessionResolver, SessionState, Surface};
pub use store::{
    CredentialRecord, CredentialStore, CurrentUser, FileStore, KeyValueStore, MemoryStore,
    SessionFlags, StoreError, StoreResult,
};

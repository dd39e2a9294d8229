pub(crate) mod auth_api;
pub(crate) mod error;
pub(crate) mod http_auth_api;
pub(crate) mod login_response;
pub(crate) mod reachability;
pub(crate) mod remote_user;

pub use auth_api::AuthApi;
pub use error::{RemoteError, Result as RemoteResult};
pub use http_auth_api::HttpAuthApi;
pub use login_response::LoginResponse;
pub use reachability::Reachability;
pub use remote_user::RemoteUser;

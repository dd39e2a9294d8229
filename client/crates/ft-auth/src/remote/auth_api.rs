use crate::remote::{
    error::Result as RemoteResult, login_response::LoginResponse, reachability::Reachability,
};

use async_trait::async_trait;

/// Contract of the remote auth service.
///
/// Implementations have no side effects on local state; callers persist
/// whatever they need from the results.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /login`
    async fn login(&self, email: &str, password: &str) -> RemoteResult<LoginResponse>;

    /// `POST /register`
    async fn register(&self, full_name: &str, email: &str, password: &str) -> RemoteResult<()>;

    /// `GET /profile` with the token as bearer credential. Any failure,
    /// expired token and outage alike, is an error.
    async fn verify_profile(&self, token: &str) -> RemoteResult<()>;

    /// `GET /`. Any response at all counts as reachable.
    async fn probe(&self) -> Reachability;
}

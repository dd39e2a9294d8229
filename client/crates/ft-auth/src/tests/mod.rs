mod registration;

use crate::connectivity::ConnectivityStatus;
use crate::presentation::{Navigator, Presenter};
use crate::remote::{AuthApi, LoginResponse, Reachability, RemoteError, RemoteResult, RemoteUser};
use crate::session::Surface;
use crate::store::{
    CredentialRecord, CredentialStore, CurrentUser, KeyValueStore, MemoryStore, StoreError,
    StoreResult,
};

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

pub(crate) const REMOTE_TOKEN: &str = "remote-token";

/// Canned answer for one fake endpoint.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Ok,
    Unreachable,
    Rejected(u16, Option<&'static str>),
}

impl Reply {
    fn into_result(self) -> RemoteResult<()> {
        match self {
            Self::Ok => Ok(()),
            Self::Unreachable => Err(RemoteError::unreachable("connection refused")),
            Self::Rejected(status, message) => {
                Err(RemoteError::rejected(status, message.map(str::to_string)))
            }
        }
    }
}

/// Scripted `AuthApi` that records every call it receives.
pub(crate) struct FakeAuthApi {
    login: Reply,
    register: Reply,
    profile: Reply,
    reachable: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl FakeAuthApi {
    /// Every endpoint unreachable.
    pub(crate) fn offline() -> Self {
        Self {
            login: Reply::Unreachable,
            register: Reply::Unreachable,
            profile: Reply::Unreachable,
            reachable: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every endpoint succeeds.
    pub(crate) fn online() -> Self {
        Self {
            login: Reply::Ok,
            register: Reply::Ok,
            profile: Reply::Ok,
            reachable: AtomicBool::new(true),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_login(mut self, reply: Reply) -> Self {
        self.login = reply;
        self
    }

    pub(crate) fn with_register(mut self, reply: Reply) -> Self {
        self.register = reply;
        self
    }

    pub(crate) fn with_profile(mut self, reply: Reply) -> Self {
        self.profile = reply;
        self
    }

    pub(crate) fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, email: &str, _password: &str) -> RemoteResult<LoginResponse> {
        self.record("login");
        self.login.clone().into_result()?;
        Ok(LoginResponse {
            token: REMOTE_TOKEN.to_string(),
            user: RemoteUser {
                name: "Remote User".to_string(),
                email: email.to_string(),
            },
        })
    }

    async fn register(&self, _full_name: &str, _email: &str, _password: &str) -> RemoteResult<()> {
        self.record("register");
        self.register.clone().into_result()
    }

    async fn verify_profile(&self, _token: &str) -> RemoteResult<()> {
        self.record("profile");
        self.profile.clone().into_result()
    }

    async fn probe(&self) -> Reachability {
        self.record("probe");
        if self.reachable.load(Ordering::SeqCst) {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shown {
    Loading(String),
    LoadingHidden,
    Error(String),
    ErrorDismissed(String),
    Success(String),
    Connectivity(ConnectivityStatus),
}

#[derive(Default)]
pub(crate) struct RecordingPresenter {
    events: Mutex<Vec<Shown>>,
}

impl RecordingPresenter {
    pub(crate) fn events(&self) -> Vec<Shown> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Shown) {
        self.events.lock().unwrap().push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn show_loading(&self, text: &str) {
        self.push(Shown::Loading(text.to_string()));
    }

    fn hide_loading(&self) {
        self.push(Shown::LoadingHidden);
    }

    fn show_error(&self, message: &str) {
        self.push(Shown::Error(message.to_string()));
    }

    fn dismiss_error(&self, message: &str) {
        self.push(Shown::ErrorDismissed(message.to_string()));
    }

    fn show_success(&self, message: &str) {
        self.push(Shown::Success(message.to_string()));
    }

    fn show_connectivity(&self, status: ConnectivityStatus) {
        self.push(Shown::Connectivity(status));
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    visits: Mutex<Vec<Surface>>,
}

impl RecordingNavigator {
    pub(crate) fn visits(&self) -> Vec<Surface> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, surface: Surface) {
        self.visits.lock().unwrap().push(surface);
    }
}

pub(crate) fn memory_store() -> CredentialStore {
    CredentialStore::new(Arc::new(MemoryStore::new()))
}

pub(crate) fn local_record(email: &str, password: &str) -> CredentialRecord {
    CredentialRecord {
        full_name: "Local User".to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub(crate) fn signed_in_user() -> CurrentUser {
    CurrentUser {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
    }
}

/// Memory-backed store whose deletes always fail, as on a read-only disk.
#[derive(Default)]
pub(crate) struct RemoveFailsStore {
    inner: MemoryStore,
}

impl KeyValueStore for RemoveFailsStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::file_write(
            PathBuf::from("session.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only file system"),
        ))
    }
}

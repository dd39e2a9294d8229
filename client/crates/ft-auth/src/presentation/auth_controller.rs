use crate::error::Result as AuthResult;
use crate::flows::{
    authenticator::Authenticator, login_form::LoginForm, login_outcome::LoginOutcome,
    registration_form::RegistrationForm,
};
use crate::messages::{CREATING_ACCOUNT, LOGGING_IN};
use crate::presentation::{
    loading_guard::LoadingGuard, navigator::Navigator, presenter::Presenter,
};
use crate::session::{session_context::SessionContext, surface::Surface};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;

/// Glue between form submissions and what the user sees.
///
/// Validation errors surface immediately without a loading overlay. Remote
/// calls run under a `LoadingGuard`.
pub struct AuthController {
    authenticator: Authenticator,
    presenter: Arc<dyn Presenter>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    error_dismiss: Duration,
}

impl AuthController {
    pub fn new(
        authenticator: Authenticator,
        presenter: Arc<dyn Presenter>,
        navigator: Arc<dyn Navigator>,
        redirect_delay: Duration,
        error_dismiss: Duration,
    ) -> Self {
        Self {
            authenticator,
            presenter,
            navigator,
            redirect_delay,
            error_dismiss,
        }
    }

    /// Login submission. Success navigates to the app surface right away.
    pub async fn submit_login(&self, form: &LoginForm) -> AuthResult<LoginOutcome> {
        if let Err(e) = form.validate() {
            self.show_transient_error(e.message());
            return Err(e.into());
        }

        let loading = LoadingGuard::show(Arc::clone(&self.presenter), LOGGING_IN);
        let result = self.authenticator.login(form).await;
        drop(loading);

        match result {
            Ok(outcome) => {
                self.navigator.navigate(outcome.destination());
                Ok(outcome)
            }
            Err(e) => {
                self.show_transient_error(&e.user_message());
                Err(e)
            }
        }
    }

    /// Registration submission. Success shows the notice and schedules the
    /// navigation to the login page; the returned handle completes once it
    /// has happened.
    pub async fn submit_registration(&self, form: &RegistrationForm) -> AuthResult<JoinHandle<()>> {
        if let Err(e) = form.validate() {
            self.show_transient_error(e.message());
            return Err(e.into());
        }

        let loading = LoadingGuard::show(Arc::clone(&self.presenter), CREATING_ACCOUNT);
        let result = self.authenticator.register(form).await;
        drop(loading);

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.show_transient_error(&e.user_message());
                return Err(e);
            }
        };

        self.presenter.show_success(outcome.notice());
        debug!(
            "Registration complete ({:?}), navigating in {:?}",
            outcome.mode, self.redirect_delay
        );

        let navigator = Arc::clone(&self.navigator);
        let delay = self.redirect_delay;
        let destination = outcome.destination();
        Ok(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(destination);
        }))
    }

    /// Clears the session and returns to the auth surface, even when
    /// clearing fails.
    pub fn logout(&self, context: &mut SessionContext) -> AuthResult<()> {
        let result = context.clear_on_logout();
        if let Err(e) = &result {
            warn!("Failed to clear session on logout: {e}");
        }

        self.navigator.navigate(Surface::Auth);
        result
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    fn show_transient_error(&self, message: &str) {
        self.presenter.show_error(message);

        let presenter = Arc::clone(&self.presenter);
        let delay = self.error_dismiss;
        let message = message.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            presenter.dismiss_error(&message);
        });
    }
}

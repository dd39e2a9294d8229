use crate::error::{AuthError, Result as AuthResult};
use crate::flows::{
    auth_mode::AuthMode, fallback_classifier::allows_local_registration, login_form::LoginForm,
    login_outcome::LoginOutcome, registration_form::RegistrationForm,
    registration_outcome::RegistrationOutcome,
};
use crate::remote::auth_api::AuthApi;
use crate::store::{
    credential_record::CredentialRecord, credential_store::CredentialStore,
    current_user::CurrentUser,
};

use std::sync::Arc;

use ft_config::FallbackPolicy;
use log::{info, warn};

/// Runs the login and registration flows: remote service first, local
/// credential table when the service cannot help.
pub struct Authenticator {
    store: CredentialStore,
    api: Arc<dyn AuthApi>,
    policy: FallbackPolicy,
}

impl Authenticator {
    pub fn new(store: CredentialStore, api: Arc<dyn AuthApi>, policy: FallbackPolicy) -> Self {
        Self { store, api, policy }
    }

    /// Remote login, falling back to the local table on ANY remote failure.
    ///
    /// Remote success stores the token and signs in. Local success signs in
    /// without a token. When neither works the remote error is kept so its
    /// message can be shown.
    pub async fn login(&self, form: &LoginForm) -> AuthResult<LoginOutcome> {
        form.validate()?;

        match self.api.login(&form.email, &form.password).await {
            Ok(response) => {
                let user = CurrentUser::from(response.user);
                self.store.set_token(&response.token)?;
                self.store.sign_in(&user, form.remember_me)?;

                info!("Signed in {} with the remote service", user.email);
                Ok(LoginOutcome {
                    mode: AuthMode::Remote,
                    user,
                })
            }
            Err(remote_error) => {
                warn!("Remote login failed, trying local credentials: {remote_error}");

                let Some(record) = self.store.find_user(&form.email, &form.password)? else {
                    return Err(AuthError::local_fallback_exhausted(remote_error));
                };

                let user = CurrentUser::from(record);
                self.store.sign_in(&user, form.remember_me)?;

                info!("Signed in {} with local credentials", user.email);
                Ok(LoginOutcome {
                    mode: AuthMode::Local,
                    user,
                })
            }
        }
    }

    /// Remote registration, falling back to a local account only when the
    /// failure classifies as an outage under the configured policy.
    ///
    /// Neither path signs the user in.
    pub async fn register(&self, form: &RegistrationForm) -> AuthResult<RegistrationOutcome> {
        form.validate()?;

        let remote_error = match self
            .api
            .register(&form.full_name, &form.email, &form.password)
            .await
        {
            Ok(()) => {
                info!("Registered {} with the remote service", form.email);
                return Ok(RegistrationOutcome {
                    mode: AuthMode::Remote,
                });
            }
            Err(e) => e,
        };

        if !allows_local_registration(&remote_error, self.policy) {
            warn!("Remote registration rejected: {remote_error}");
            return Err(AuthError::registration_rejected(remote_error));
        }

        warn!("Remote registration unavailable, registering locally: {remote_error}");

        let record = CredentialRecord {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        };

        if !self.store.add_user(record)? {
            return Err(AuthError::already_registered(&form.email));
        }

        info!("Registered {} locally", form.email);
        Ok(RegistrationOutcome {
            mode: AuthMode::Local,
        })
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}

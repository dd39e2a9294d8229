pub(crate) mod auth_mode;
pub(crate) mod authenticator;
pub(crate) mod fallback_classifier;
pub(crate) mod login_form;
pub(crate) mod login_outcome;
pub(crate) mod registration_form;
pub(crate) mod registration_outcome;
pub(crate) mod validation_error;

pub use auth_mode::AuthMode;
pub use authenticator::Authenticator;
pub use fallback_classifier::allows_local_registration;
pub use login_form::LoginForm;
pub use login_outcome::LoginOutcome;
pub use registration_form::RegistrationForm;
pub use registration_outcome::RegistrationOutcome;
pub use validation_error::ValidationError;

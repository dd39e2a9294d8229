//! Texts shown to the user.

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const AGREE_TO_TERMS: &str = "Please agree to the Terms & Conditions";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const ALREADY_REGISTERED_LOCAL: &str = "Email already registered (local)";
pub const STORAGE_UNAVAILABLE: &str = "Unable to access saved session data";

/// Same text for remote and local registration.
pub const ACCOUNT_CREATED: &str = "Account created successfully!";

pub const LOGGING_IN: &str = "Logging in...";
pub const CREATING_ACCOUNT: &str = "Creating your account...";

pub const ONLINE_BANNER: &str = "Connected to server — Online mode";

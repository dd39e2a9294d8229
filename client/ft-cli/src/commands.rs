use ft_auth::Surface;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, remotely when the service answers, locally otherwise
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Keep me signed in
        #[arg(long)]
        remember_me: bool,
    },

    /// Create an account
    Register {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        /// Accept the Terms & Conditions
        #[arg(long)]
        agree_terms: bool,
    },

    /// Sign out and return to the login page
    Logout,

    /// Load a page and apply the route guard (auth, app, or a page path)
    Open { surface: Surface },

    /// Show the resolved session state
    Status,

    /// Probe the service and report connectivity changes
    Watch {
        /// Stop after this many probes (runs until Ctrl-C otherwise)
        #[arg(long)]
        count: Option<u64>,
    },
}

use std::fmt;
use std::str::FromStr;

const AUTH_PAGES: [&str; 2] = ["login.html", "signup.html"];

/// The two logical pages a navigation can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Login and signup pages.
    Auth,
    /// Everything behind the login.
    App,
}

impl Surface {
    /// Classifies a page path: anything naming the login or signup page is
    /// the auth surface.
    pub fn from_path(path: &str) -> Self {
        if AUTH_PAGES.iter().any(|page| path.contains(page)) {
            Self::Auth
        } else {
            Self::App
        }
    }

    /// Page a full navigation to this surface loads.
    pub fn entry_page(&self) -> &'static str {
        match self {
            Self::Auth => "login.html",
            Self::App => "index.html",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => write!(f, "auth"),
            Self::App => write!(f, "app"),
        }
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auth" | "login" | "signup" => Ok(Self::Auth),
            "app" => Ok(Self::App),
            other if other.ends_with(".html") => Ok(Self::from_path(other)),
            other => Err(format!("unknown surface '{other}'")),
        }
    }
}

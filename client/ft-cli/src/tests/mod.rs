mod cli;
mod dispatch;

use crate::App;

use ft_config::Config;

use std::env;
use std::net::TcpListener;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// App over a temp config dir whose service URL points at a closed port.
pub(crate) fn offline_app() -> (App, TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("FT_CONFIG_DIR", temp.path().to_str().unwrap());

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut config = Config::load().unwrap();
    config.api.base_url = format!("http://127.0.0.1:{port}/api");
    config.session.register_redirect_delay_ms = 0;
    config.validate().unwrap();

    (App::new(config).unwrap(), temp, guard)
}

use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, FallbackPolicy};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq("http://localhost:3000/api"));
    assert_that!(config.connectivity.probe_interval_secs, eq(10));
    assert_that!(config.session.register_redirect_delay_ms, eq(1500));
    assert_that!(config.ui.error_dismiss_ms, eq(3000));
    assert_eq!(config.session.fallback_policy, FallbackPolicy::NetworkOnly);
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested");
    let _dir = EnvGuard::set("FT_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://finance.example.com/api"
            timeout_secs = 30

            [session]
            register_redirect_delay_ms = 500
            fallback_policy = "legacy_heuristic"

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://finance.example.com/api")
    );
    assert_that!(config.api.timeout_secs, eq(30));
    assert_that!(config.session.register_redirect_delay_ms, eq(500));
    assert_eq!(
        config.session.fallback_policy,
        FallbackPolicy::LegacyHeuristic
    );
    assert_eq!(*config.logging.level, LevelFilter::Debug);
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[connectivity]\nprobe_interval_secs = 30",
    )
    .unwrap();
    let _probe = EnvGuard::set("FT_PROBE_INTERVAL_SECS", "5");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.connectivity.probe_interval_secs, eq(5));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("FT_API_BASE_URL", "http://127.0.0.1:9000");
    let _file = EnvGuard::set("FT_STORAGE_FILE", "other.json");
    let _colored = EnvGuard::set("FT_LOG_COLORED", "false");
    let _log_file = EnvGuard::set("FT_LOG_FILE", "fintrack.log");
    let _policy = EnvGuard::set("FT_FALLBACK_POLICY", "legacy-heuristic");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://127.0.0.1:9000"));
    assert_that!(config.storage.file.as_str(), eq("other.json"));
    assert_that!(config.logging.colored, eq(false));
    assert_eq!(config.logging.file.as_deref(), Some("fintrack.log"));
    assert_eq!(
        config.session.fallback_policy,
        FallbackPolicy::LegacyHeuristic
    );
}

#[test]
#[serial]
fn given_config_dir_when_storage_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let path = config.storage_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("session.json"));
}

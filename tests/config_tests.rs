use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;
use std::time::Duration;
use vmfind::config::{self, Settings};

// Tests in this file mutate process-wide environment variables.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn clear_env() {
    for var in [
        config::API_BASE_URL_VAR,
        config::LEGACY_API_BASE_URL_VAR,
        config::REQUEST_TIMEOUT_VAR,
        config::SNAPSHOT_PATH_VAR,
        config::PAGE_SIZE_VAR,
    ] {
        env::remove_var(var);
    }
}

#[test]
fn test_sanitize_base_url_removes_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://pricing.example.com/api///"),
        Some("https://pricing.example.com/api".to_string())
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://pricing.example.com/api/  "),
        Some("https://pricing.example.com/api".to_string())
    );
}

#[test]
fn test_sanitize_base_url_empty_disables_remote() {
    assert_eq!(config::sanitize_base_url(""), None);
    assert_eq!(config::sanitize_base_url("   "), None);
    assert_eq!(config::sanitize_base_url("/"), None);
}

#[test]
fn test_defaults_without_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let settings = Settings::from_env();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base_url, None);
    assert_eq!(settings.request_timeout, Duration::from_millis(6000));
    assert_eq!(settings.page_size, 25);
}

#[test]
fn test_primary_variable_wins_over_legacy() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var(config::LEGACY_API_BASE_URL_VAR, "http://legacy.example.com");
    assert_eq!(config::get_api_base_url(), Some("http://legacy.example.com".to_string()));

    env::set_var(config::API_BASE_URL_VAR, "http://primary.example.com/");
    assert_eq!(config::get_api_base_url(), Some("http://primary.example.com".to_string()));
    clear_env();
}

#[test]
fn test_invalid_numbers_fall_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var(config::REQUEST_TIMEOUT_VAR, "soon");
    env::set_var(config::PAGE_SIZE_VAR, "lots");
    assert_eq!(config::get_request_timeout(), Duration::from_millis(6000));
    assert_eq!(config::get_page_size(), 25);

    env::set_var(config::REQUEST_TIMEOUT_VAR, "0");
    assert_eq!(config::get_request_timeout(), Duration::from_millis(6000));
    clear_env();
}

#[test]
fn test_overrides_are_read_and_clamped() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var(config::REQUEST_TIMEOUT_VAR, "1500");
    env::set_var(config::PAGE_SIZE_VAR, "250");
    env::set_var(config::SNAPSHOT_PATH_VAR, " /tmp/prices.csv ");

    let settings = Settings::from_env();
    assert_eq!(settings.request_timeout, Duration::from_millis(1500));
    assert_eq!(settings.page_size, 100);
    assert_eq!(settings.snapshot_path.as_deref(), Some(std::path::Path::new("/tmp/prices.csv")));
    clear_env();
}

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 6000;

pub const API_BASE_URL_VAR: &str = "VMFIND_API_BASE_URL";
pub const LEGACY_API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "VMFIND_REQUEST_TIMEOUT_MS";
pub const SNAPSHOT_PATH_VAR: &str = "VMFIND_SNAPSHOT_PATH";
pub const PAGE_SIZE_VAR: &str = "VMFIND_PAGE_SIZE";

/// Everything the catalog service needs from the environment, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `None` keeps the session in pure local mode.
    pub api_base_url: Option<String>,
    pub request_timeout: Duration,
    pub snapshot_path: Option<PathBuf>,
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base_url: None,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            snapshot_path: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            api_base_url: get_api_base_url(),
            request_timeout: get_request_timeout(),
            snapshot_path: get_snapshot_path(),
            page_size: get_page_size(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> Option<String> {
    let raw = env::var(API_BASE_URL_VAR)
        .or_else(|_| env::var(LEGACY_API_BASE_URL_VAR))
        .unwrap_or_default();
    sanitize_base_url(&raw)
}

pub fn get_request_timeout() -> Duration {
    let ms = env::var(REQUEST_TIMEOUT_VAR)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
    Duration::from_millis(ms)
}

pub fn get_snapshot_path() -> Option<PathBuf> {
    env::var(SNAPSHOT_PATH_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn get_page_size() -> usize {
    env::var(PAGE_SIZE_VAR)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .map(clamp_page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// The remote service rejects limits outside 1..=100.
pub fn clamp_page_size(size: usize) -> usize {
    size.clamp(1, MAX_PAGE_SIZE)
}

/// Trims whitespace and trailing slashes; an empty value means remote mode is off.
pub fn sanitize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

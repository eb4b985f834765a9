//! Configuration management for the Webex Portal.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every setting has a default so the server can start
//! with an empty environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::utils;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_WEBEX_API_URL: &str = "https://webexapis.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from `.env` files.
///
/// Looks in the working directory first and then in the platform-specific local
/// data directory under `webex-portal/.env`:
/// - Linux: `~/.local/share/webex-portal/.env`
/// - macOS: `~/Library/Application Support/webex-portal/.env`
/// - Windows: `%LOCALAPPDATA%/webex-portal/.env`
///
/// dotenv never overrides variables that are already set, so the real environment
/// always wins. Missing files are not an error.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| e.to_string())?;
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("webex-portal/.env");
    path
}

/// Returns the address the web front-end binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Webex REST API base URL (`WEBEX_API_URL`) without a trailing slash.
///
/// ```
/// let api_url = webex_apiurl(); // e.g., "https://webexapis.com/v1"
/// ```
pub fn webex_apiurl() -> String {
    let url = env::var("WEBEX_API_URL").unwrap_or_else(|_| DEFAULT_WEBEX_API_URL.to_string());
    normalize_api_url(&url)
}

pub fn normalize_api_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Returns the timeout applied to every outbound Webex call (`WEBEX_TIMEOUT_SECS`).
pub fn webex_timeout() -> Duration {
    parse_timeout(env::var("WEBEX_TIMEOUT_SECS").ok().as_deref())
}

/// Values that are not a positive integer fall back to the default.
pub fn parse_timeout(value: Option<&str>) -> Duration {
    let secs = value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the key used to sign flash cookies (`FLASH_SECRET`).
///
/// Call this once at startup; every call without the variable yields a
/// different secret.
///
/// # Security Note
///
/// With a generated secret, notices pending in a browser do not survive a
/// restart. Set the variable when running more than one instance.
pub fn flash_secret() -> String {
    secret_or_generated(env::var("FLASH_SECRET").ok())
}

/// A missing, empty or whitespace-only secret is replaced by a random one.
pub fn secret_or_generated(secret: Option<String>) -> String {
    match secret {
        Some(secret) if !secret.trim().is_empty() => secret,
        _ => utils::generate_secret(),
    }
}

/// Snapshot of the configuration, taken once at process start and shared
/// read-only by every request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_addr: String,
    pub webex_api_url: String,
    pub webex_timeout: Duration,
    pub flash_secret: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            server_addr: server_addr(),
            webex_api_url: webex_apiurl(),
            webex_timeout: webex_timeout(),
            flash_secret: flash_secret(),
        }
    }
}

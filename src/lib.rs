//! Webex Portal Library
//!
//! This library backs a small web front-end for the Webex REST API. A user pastes
//! an access token, sees their profile, lists their rooms, creates rooms and posts
//! messages. Every page action is a single pass-through call to Webex; nothing is
//! stored on the server between requests.
//!
//! # Modules
//!
//! - `api` - Route handlers for the web front-end
//! - `config` - Configuration management and environment variables
//! - `flash` - Signed one-shot notices carried across redirects
//! - `server` - Router construction and the HTTP listener
//! - `types` - Webex payloads and inbound form data
//! - `utils` - Small helpers for secrets, escaping and URLs
//! - `views` - HTML page rendering
//! - `webex` - Webex REST API client
//!
//! # Example
//!
//! ```
//! use webex_portal::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> webex_portal::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(config::Settings::from_env(), false).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod flash;
pub mod server;
pub mod types;
pub mod utils;
pub mod views;
pub mod webex;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the startup plumbing (configuration loading, server bootstrap) where
/// errors are reported to the operator rather than to a browser.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for startup failures the server cannot recover from, such as an
/// unparseable listen address. Request handlers never call it.
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, most notably a Webex call that did not come
/// back with `200 OK`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

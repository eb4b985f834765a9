//! # Webex Integration Module
//!
//! Thin client for the handful of Webex REST API endpoints the portal uses. Each
//! call forwards the caller's bearer token untouched and reduces the response to
//! "HTTP 200 or not".
//!
//! ## Architecture
//!
//! ```text
//! Route handlers (api)
//!          ↓
//! WebexApi trait  ── collapses failures to None / false, logs the reason
//!          ↓
//! people / rooms / messages  ── one request each, Result<T, WebexError>
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Webex REST API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /people/me` - Profile of the token owner
//! - `GET /rooms` - Rooms the token owner belongs to
//! - `POST /rooms` - Create a room
//! - `POST /messages` - Post a text message into a room
//!
//! ## Error Handling
//!
//! There is no retry and no distinction between status classes. Anything other
//! than `200 OK`, a transport error or an undecodable body counts as failure.

pub mod messages;
pub mod people;
pub mod rooms;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{
    config::Settings,
    types::{Person, Room},
    warning,
};

#[derive(Debug, thiserror::Error)]
pub enum WebexError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("response without {0}")]
    Incomplete(&'static str),
}

/// Checks the one status code the portal accepts.
pub(crate) fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response, WebexError> {
    match response.status() {
        StatusCode::OK => Ok(response),
        status => Err(WebexError::Status(status)),
    }
}

/// The four operations the route handlers need.
///
/// Reads return `None` and writes return `false` on any failure.
#[async_trait]
pub trait WebexApi: Send + Sync {
    async fn get_user_info(&self, token: &str) -> Option<Person>;
    async fn get_rooms(&self, token: &str) -> Option<Vec<Room>>;
    async fn create_room(&self, token: &str, title: &str) -> bool;
    async fn send_message(&self, token: &str, room_id: &str, text: &str) -> bool;
}

/// reqwest-backed [`WebexApi`] sharing one connection pool across requests.
#[derive(Debug, Clone)]
pub struct WebexClient {
    client: Client,
    base_url: String,
}

impl WebexClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WebexError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an already configured reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        WebexClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, WebexError> {
        Self::new(settings.webex_api_url.clone(), settings.webex_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WebexApi for WebexClient {
    async fn get_user_info(&self, token: &str) -> Option<Person> {
        match people::get_me(&self.client, &self.base_url, token).await {
            Ok(person) => Some(person),
            Err(e) => {
                warning!("Fetching profile failed: {}", e);
                None
            }
        }
    }

    async fn get_rooms(&self, token: &str) -> Option<Vec<Room>> {
        match rooms::list(&self.client, &self.base_url, token).await {
            Ok(rooms) => Some(rooms),
            Err(e) => {
                warning!("Listing rooms failed: {}", e);
                None
            }
        }
    }

    async fn create_room(&self, token: &str, title: &str) -> bool {
        match rooms::create(&self.client, &self.base_url, token, title).await {
            Ok(()) => true,
            Err(e) => {
                warning!("Creating room failed: {}", e);
                false
            }
        }
    }

    async fn send_message(&self, token: &str, room_id: &str, text: &str) -> bool {
        match messages::send(&self.client, &self.base_url, token, room_id, text).await {
            Ok(()) => true,
            Err(e) => {
                warning!("Sending message to room {} failed: {}", room_id, e);
                false
            }
        }
    }
}

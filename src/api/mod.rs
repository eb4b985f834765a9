//! # API Module
//!
//! HTTP route handlers for the Webex Portal web front-end. Each handler maps one
//! form submission or path parameter to at most one Webex call and then renders a
//! page or redirects.
//!
//! ## Endpoints
//!
//! - [`index`] / [`submit_token`] - `GET|POST /`, token entry and profile view
//! - [`rooms`] / [`post_message`] - `GET|POST /rooms/{access_token}`, room list and message posting
//! - [`create_room`] - `POST /create_room/{access_token}`
//! - [`test_connection`] - `GET /test_connection/{access_token}`
//! - [`health`] - `GET /health`
//!
//! ## Security Considerations
//!
//! The access token travels in the URL path for the per-token routes, the same
//! way the links on the rendered pages carry it. It is never written to the
//! console log by these handlers.

mod connection;
mod health;
mod index;
mod rooms;

use std::sync::Arc;

pub use connection::{CONNECTION_FAILED, CONNECTION_OK, test_connection};
pub use health::health;
pub use index::{INVALID_TOKEN, index, submit_token};
pub use rooms::{
    MESSAGE_FAILED, ROOM_CREATED, ROOM_FAILED, ROOMS_FAILED, create_room, message_sent,
    post_message, rooms,
};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::webex::WebexApi;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub webex: Arc<dyn WebexApi>,
    pub flash_key: Key,
}

impl AppState {
    pub fn new(webex: Arc<dyn WebexApi>, flash_key: Key) -> Self {
        AppState { webex, flash_key }
    }
}

// Lets handlers extract a `SignedCookieJar` for flash notices.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.flash_key.clone()
    }
}
